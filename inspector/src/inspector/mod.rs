//! Type inspectors
//!
//! A [`TypeInspector`] renders one binding per frame. [`TypeInspector::render`]
//! owns the shared discipline (id scope, dimming, tooltip); implementations
//! only decide how to draw the editable and read-only variants.

mod method;
mod structure;
mod value;

pub use method::MethodInspector;
pub use structure::StructInspector;
pub use value::ValueInspector;

use crate::binding::ScopeId;
use crate::config::InspectorStyle;

/// Renders a bound member
pub trait TypeInspector {
    /// Display name of the inspected member
    fn name(&self) -> &str;

    /// Unique id scope for this inspector's widgets
    fn scope_id(&self) -> ScopeId;

    /// Whether edits are disallowed
    fn is_read_only(&self) -> bool;

    /// Tooltip text, if any
    fn tooltip(&self) -> Option<&str>;

    /// Draw the interactive control, committing user edits
    fn render_mutable(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response;

    /// Draw the control without allowing edits
    ///
    /// Must never write through the binding.
    fn render_read_only(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response;

    /// Draw the inspector for this frame
    ///
    /// Widgets are wrapped in the inspector's id scope so bindings with equal
    /// names don't share widget state. Read-only inspectors are drawn with
    /// reduced opacity through [`TypeInspector::render_read_only`]; others
    /// through [`TypeInspector::render_mutable`]. The tooltip is shown while
    /// the control is hovered.
    fn render(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response {
        let read_only = self.is_read_only();
        let response = ui
            .push_id(self.scope_id().egui_id(), |ui| {
                if read_only {
                    ui.scope(|ui| {
                        ui.multiply_opacity(style.read_only_opacity);
                        self.render_read_only(ui, style)
                    })
                    .inner
                } else {
                    self.render_mutable(ui, style)
                }
            })
            .inner;

        handle_tooltip(response, self.tooltip())
    }
}

/// Show `tooltip` while `response` is hovered
pub(crate) fn handle_tooltip(response: egui::Response, tooltip: Option<&str>) -> egui::Response {
    match tooltip {
        Some(text) if !text.is_empty() => response
            .on_hover_text(text)
            .on_disabled_hover_text(text),
        _ => response,
    }
}
