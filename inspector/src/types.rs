//! Inspector type definitions
//!
//! Core types shared by bindings and controls.

use std::any::TypeId;
use std::fmt;

/// Static type descriptor for a bound value
///
/// Captured once when a binding is created; controls are picked from the
/// same static type so the two always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    type_id: TypeId,
    type_name: &'static str,
}

impl ValueType {
    /// Describe the static type `V`
    pub fn of<V: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<V>(),
            type_name: std::any::type_name::<V>(),
        }
    }

    /// Full type path (e.g. `glam::f32::vec2::Vec2`)
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Last path segment of the type name, generics stripped
    pub fn short_name(&self) -> &'static str {
        let base = self
            .type_name
            .split_once('<')
            .map_or(self.type_name, |(head, _)| head);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Check whether this descriptor was built from `V`
    pub fn is<V: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<V>()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Range constraints for numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: f64,
    pub max: f64,
}

impl Constraints {
    /// Create new constraints with min and max values
    ///
    /// Swapped bounds are reordered.
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(!min.is_nan() && !max.is_nan(), "NaN range bound");
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamp a value to these constraints
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}
