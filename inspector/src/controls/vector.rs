//! Vector controls

use glam::{Vec2, Vec3};

use super::Control;
use crate::config::InspectorStyle;

/// Two drag values for `Vec2`
#[derive(Debug, Default, Clone, Copy)]
pub struct Vec2Control;

impl Control<Vec2> for Vec2Control {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut Vec2,
        style: &InspectorStyle,
    ) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label(label);
            let x = ui.add(drag(&mut value.x, "x:", style));
            let y = ui.add(drag(&mut value.y, "y:", style));
            x | y
        })
        .inner
    }
}

/// Three drag values for `Vec3`
#[derive(Debug, Default, Clone, Copy)]
pub struct Vec3Control;

impl Control<Vec3> for Vec3Control {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut Vec3,
        style: &InspectorStyle,
    ) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label(label);
            let x = ui.add(drag(&mut value.x, "x:", style));
            let y = ui.add(drag(&mut value.y, "y:", style));
            let z = ui.add(drag(&mut value.z, "z:", style));
            x | y | z
        })
        .inner
    }
}

fn drag<'a>(component: &'a mut f32, prefix: &str, style: &InspectorStyle) -> egui::DragValue<'a> {
    egui::DragValue::new(component)
        .speed(style.drag_speed)
        .max_decimals(style.float_decimals)
        .prefix(prefix)
}
