//! Inspector for a single bound value

use super::TypeInspector;
use crate::binding::{Binding, ScopeId};
use crate::config::InspectorStyle;
use crate::controls::{Control, Inspectable};

/// Draws a binding with a [`Control`] picked for its value type
pub struct ValueInspector<V, C> {
    binding: Binding<V>,
    control: C,
}

impl<V: Inspectable> ValueInspector<V, V::Control> {
    /// Inspect `binding` with the default control for `V`
    pub fn new(binding: Binding<V>) -> Self {
        Self::with_control(binding, V::Control::default())
    }
}

impl<V: Clone + 'static, C: Control<V>> ValueInspector<V, C> {
    /// Inspect `binding` with an explicit control
    pub fn with_control(binding: Binding<V>, control: C) -> Self {
        tracing::debug!(
            "inspector: {} uses {}",
            binding.name(),
            std::any::type_name::<C>()
        );
        Self { binding, control }
    }

    /// The inspected binding
    pub fn binding(&self) -> &Binding<V> {
        &self.binding
    }
}

impl<V: Clone + 'static, C: Control<V>> TypeInspector for ValueInspector<V, C> {
    fn name(&self) -> &str {
        self.binding.name()
    }

    fn scope_id(&self) -> ScopeId {
        self.binding.scope_id()
    }

    fn is_read_only(&self) -> bool {
        self.binding.is_read_only()
    }

    fn tooltip(&self) -> Option<&str> {
        self.binding.tooltip()
    }

    fn render_mutable(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response {
        let mut value = self.binding.get();
        let response = self
            .control
            .show(ui, self.binding.name(), &mut value, style);

        if response.changed() {
            tracing::trace!("inspector: {} edited", self.binding.name());
            self.binding.set(value);
        }
        response
    }

    fn render_read_only(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response {
        // Edits land on a throwaway snapshot
        let mut snapshot = self.binding.get();
        let name = self.binding.name();
        let control = &mut self.control;
        ui.add_enabled_ui(false, |ui| control.show(ui, name, &mut snapshot, style))
            .inner
    }
}
