//! Method button

use super::TypeInspector;
use crate::binding::{MethodBinding, ScopeId};
use crate::config::InspectorStyle;

/// Button that invokes a bound method when clicked
pub struct MethodInspector<T> {
    binding: MethodBinding<T>,
}

impl<T> MethodInspector<T> {
    pub fn new(binding: MethodBinding<T>) -> Self {
        Self { binding }
    }

    /// The inspected method binding
    pub fn binding(&self) -> &MethodBinding<T> {
        &self.binding
    }
}

impl<T> TypeInspector for MethodInspector<T> {
    fn name(&self) -> &str {
        self.binding.name()
    }

    fn scope_id(&self) -> ScopeId {
        self.binding.scope_id()
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn tooltip(&self) -> Option<&str> {
        self.binding.tooltip()
    }

    fn render_mutable(&mut self, ui: &mut egui::Ui, _style: &InspectorStyle) -> egui::Response {
        let response = ui.button(format!("▶ {}", self.binding.name()));
        if response.clicked() {
            self.binding.invoke();
        }
        response
    }

    fn render_read_only(&mut self, ui: &mut egui::Ui, _style: &InspectorStyle) -> egui::Response {
        ui.add_enabled(
            false,
            egui::Button::new(format!("▶ {}", self.binding.name())),
        )
    }
}
