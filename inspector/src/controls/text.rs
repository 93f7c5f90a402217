//! Boolean and text controls

use super::Control;
use crate::config::InspectorStyle;

/// Checkbox for `bool`
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckboxControl;

impl Control<bool> for CheckboxControl {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut bool,
        _style: &InspectorStyle,
    ) -> egui::Response {
        ui.checkbox(value, label)
    }
}

/// Single-line text edit for `String`
#[derive(Debug, Default, Clone, Copy)]
pub struct TextControl;

impl Control<String> for TextControl {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut String,
        _style: &InspectorStyle,
    ) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.text_edit_singleline(value)
        })
        .inner
    }
}
