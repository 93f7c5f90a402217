//! Color control

use egui::Color32;
use egui::color_picker::{Alpha, color_edit_button_srgba};

use super::Control;
use crate::config::InspectorStyle;

/// Color picker button for `Color32`
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorControl;

impl Control<Color32> for ColorControl {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut Color32,
        _style: &InspectorStyle,
    ) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label(label);
            color_edit_button_srgba(ui, value, Alpha::OnlyBlend)
        })
        .inner
    }
}
