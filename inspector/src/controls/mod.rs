//! Value controls
//!
//! A [`Control`] draws one value and reports edits through the returned
//! response. [`Inspectable`] picks the default control from a value's static
//! type, so the control kind is fixed when the inspector is built.

mod color;
mod enums;
mod numeric;
mod text;
mod vector;

pub use color::ColorControl;
pub use enums::{EnumControl, InspectEnum};
pub use numeric::NumericControl;
pub use text::{CheckboxControl, TextControl};
pub use vector::{Vec2Control, Vec3Control};

use crate::config::InspectorStyle;

/// Draws an editable widget for a `V`
pub trait Control<V> {
    /// Draw `value` labelled `label`, editing it in place
    ///
    /// The returned response must report `changed()` when the user edited
    /// the value this frame.
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        value: &mut V,
        style: &InspectorStyle,
    ) -> egui::Response;
}

/// A value type with a default control
pub trait Inspectable: Clone + 'static {
    /// Control used when none is given explicitly
    type Control: Control<Self> + Default + 'static;
}

macro_rules! impl_inspectable {
    ($control:ident<_> => $($ty:ty),+ $(,)?) => {
        $(
            impl Inspectable for $ty {
                type Control = $control<$ty>;
            }
        )+
    };
    ($control:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl Inspectable for $ty {
                type Control = $control;
            }
        )+
    };
}

impl_inspectable!(NumericControl<_> => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_inspectable!(NumericControl<_> => f32, f64);
impl_inspectable!(CheckboxControl => bool);
impl_inspectable!(TextControl => String);
impl_inspectable!(Vec2Control => glam::Vec2);
impl_inspectable!(Vec3Control => glam::Vec3);
impl_inspectable!(ColorControl => egui::Color32);

/// Make an [`InspectEnum`] type inspectable with a combo box
///
/// ```rust,ignore
/// inspectable_enum!(Difficulty);
/// ```
#[macro_export]
macro_rules! inspectable_enum {
    ($ty:ty) => {
        impl $crate::Inspectable for $ty {
            type Control = $crate::controls::EnumControl<$ty>;
        }
    };
}

#[cfg(test)]
pub(crate) mod test_utils {
    /// Run one headless egui frame
    pub fn run_frame(mut add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }
}
