//! Numeric controls

use std::marker::PhantomData;

use egui::emath::Numeric;

use super::Control;
use crate::config::InspectorStyle;
use crate::types::Constraints;

/// Drag value for any primitive number, or a slider when constrained
pub struct NumericControl<N> {
    constraints: Option<Constraints>,
    speed: Option<f64>,
    _number: PhantomData<fn() -> N>,
}

impl<N> Default for NumericControl<N> {
    fn default() -> Self {
        Self {
            constraints: None,
            speed: None,
            _number: PhantomData,
        }
    }
}

impl<N> NumericControl<N> {
    /// Unconstrained drag value
    pub fn new() -> Self {
        Self::default()
    }

    /// Slider limited to `min..=max`
    pub fn ranged(min: f64, max: f64) -> Self {
        Self {
            constraints: Some(Constraints::new(min, max)),
            ..Self::default()
        }
    }

    /// Override the drag speed from the style
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Range constraints, if any
    pub fn constraints(&self) -> Option<Constraints> {
        self.constraints
    }
}

impl<N: Numeric> Control<N> for NumericControl<N> {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut N,
        style: &InspectorStyle,
    ) -> egui::Response {
        match self.constraints {
            // Range -> slider
            Some(c) => {
                let before = *value;
                let mut response = ui.add(
                    egui::Slider::new(value, N::from_f64(c.min)..=N::from_f64(c.max)).text(label),
                );

                // The slider clamps out-of-range values silently
                *value = N::from_f64(c.clamp(value.to_f64()));
                if *value != before {
                    response.mark_changed();
                }
                response
            }
            // No range -> drag value
            None => {
                let speed = self
                    .speed
                    .unwrap_or(if N::INTEGRAL { 1.0 } else { style.drag_speed });
                ui.horizontal(|ui| {
                    ui.label(label);
                    let mut drag = egui::DragValue::new(value).speed(speed);
                    if !N::INTEGRAL {
                        drag = drag.max_decimals(style.float_decimals);
                    }
                    ui.add(drag)
                })
                .inner
            }
        }
    }
}
