//! Enum controls

use std::marker::PhantomData;

use super::Control;
use crate::config::InspectorStyle;

/// A fieldless enum that can be picked from a fixed list of variants
pub trait InspectEnum: Copy + PartialEq + 'static {
    /// All variants in display order
    fn variants() -> &'static [Self];

    /// Label shown for this variant
    fn label(&self) -> &'static str;
}

/// Combo box listing every variant of `E`
pub struct EnumControl<E> {
    _variant: PhantomData<fn() -> E>,
}

impl<E> Default for EnumControl<E> {
    fn default() -> Self {
        Self {
            _variant: PhantomData,
        }
    }
}

impl<E: InspectEnum> Control<E> for EnumControl<E> {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut E,
        _style: &InspectorStyle,
    ) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label(label);
            let mut changed = false;
            let mut response = egui::ComboBox::from_id_salt(label)
                .selected_text(value.label())
                .show_ui(ui, |ui| {
                    for &variant in E::variants() {
                        changed |= ui.selectable_value(value, variant, variant.label()).changed();
                    }
                })
                .response;
            if changed {
                response.mark_changed();
            }
            response
        })
        .inner
    }
}
