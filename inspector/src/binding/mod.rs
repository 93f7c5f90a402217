//! Value bindings
//!
//! A [`Binding`] couples a member descriptor with the target that owns it and
//! exposes `get`/`set` for the inspector. Bindings are built once when an
//! inspector is attached; afterwards only the target's state changes.

mod accessor;
mod method;
mod scope;
mod tests;

pub use accessor::Accessor;
pub use method::MethodBinding;
pub use scope::ScopeId;

use std::cell::RefCell;
use std::rc::Rc;

use accessor::{NestedAccessor, TargetAccessor};

use super::descriptor::{Field, Member, Property};
use super::types::ValueType;

/// Shared, single-threaded handle to an inspected object
pub type Target<T> = Rc<RefCell<T>>;

/// A named, typed value bound to a getter and an optional setter
pub struct Binding<V> {
    /// Display name of the bound member
    name: String,
    /// Static type of the value
    value_type: ValueType,
    /// Tooltip shown when the control is hovered
    tooltip: Option<String>,
    /// Unique id scope for this binding's widgets
    scope_id: ScopeId,
    /// Reads and writes the underlying member
    accessor: Rc<dyn Accessor<V>>,
}

/// Clones are handles to the same binding and share its [`ScopeId`].
/// Use [`Binding::rebind`] for a copy that is rendered alongside the original.
impl<V> Clone for Binding<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value_type: self.value_type,
            tooltip: self.tooltip.clone(),
            scope_id: self.scope_id,
            accessor: Rc::clone(&self.accessor),
        }
    }
}

impl<V> std::fmt::Debug for Binding<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .field("read_only", &self.is_read_only())
            .field("tooltip", &self.tooltip)
            .field("scope_id", &self.scope_id)
            .finish()
    }
}

impl<V: Clone + 'static> Binding<V> {
    /// Bind a field of `target`
    ///
    /// Read-only iff the field has no writer.
    pub fn for_field<T: 'static>(target: &Target<T>, field: Field<T, V>) -> Self {
        Self::for_member(target, field)
    }

    /// Bind a property of `target`
    ///
    /// Read-only iff the property has no setter.
    pub fn for_property<T: 'static>(target: &Target<T>, property: Property<T, V>) -> Self {
        Self::for_member(target, property)
    }

    /// Bind a member of a value-typed container reached through `parent`
    ///
    /// Reads project the member out of the parent's current value. Writes
    /// take a snapshot of the parent value, update the member on it and write
    /// the whole snapshot back through the parent binding. Read-only if the
    /// member is not writable or the parent is read-only.
    pub fn for_struct_member<P, M>(parent: &Binding<P>, member: M) -> Self
    where
        P: Clone + 'static,
        M: Member<P, Value = V> + 'static,
    {
        let name = member.name().to_string();
        let tooltip = member.tooltip().map(str::to_string);
        let read_only = !member.is_writable() || parent.is_read_only();
        let accessor = NestedAccessor::new(Rc::clone(&parent.accessor), member, read_only);

        tracing::debug!(
            "inspector: bound struct member {}.{} (read_only: {})",
            parent.name,
            name,
            read_only
        );

        Self::from_accessor(name, tooltip, Rc::new(accessor))
    }

    fn for_member<T: 'static, M>(target: &Target<T>, member: M) -> Self
    where
        M: Member<T, Value = V> + 'static,
    {
        let name = member.name().to_string();
        let tooltip = member.tooltip().map(str::to_string);
        let accessor = TargetAccessor::new(Rc::clone(target), member);

        tracing::debug!(
            "inspector: bound {} ({}, read_only: {})",
            name,
            std::any::type_name::<V>(),
            accessor.is_read_only()
        );

        Self::from_accessor(name, tooltip, Rc::new(accessor))
    }
}

impl<V: 'static> Binding<V> {
    /// Bind a custom accessor
    pub fn from_accessor(
        name: impl Into<String>,
        tooltip: Option<String>,
        accessor: Rc<dyn Accessor<V>>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type: ValueType::of::<V>(),
            tooltip,
            scope_id: ScopeId::next(),
            accessor,
        }
    }
}

impl<V> Binding<V> {
    /// Copy of this binding with its own widget id scope
    ///
    /// Reads and writes the same member as `self`.
    pub fn rebind(&self) -> Self {
        Self {
            scope_id: ScopeId::next(),
            ..self.clone()
        }
    }

    /// Override the tooltip taken from the descriptor
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Display name of the bound member
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Static type of the bound value
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Tooltip text, if any
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Unique id scope for this binding's widgets
    pub fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    /// Whether the binding has no setter
    pub fn is_read_only(&self) -> bool {
        self.accessor.is_read_only()
    }

    /// Read the current value
    pub fn get(&self) -> V {
        self.accessor.get()
    }

    /// Write a new value
    ///
    /// # Panics
    ///
    /// Panics if the binding is read-only. Callers go through
    /// [`Binding::setter`] when writability is not known statically.
    pub fn set(&self, value: V) {
        assert!(
            !self.is_read_only(),
            "attempted to set read-only binding `{}`",
            self.name
        );
        self.accessor.set(value);
    }

    /// Setter handle, `None` for read-only bindings
    pub fn setter(&self) -> Option<Setter<'_, V>> {
        if self.is_read_only() {
            None
        } else {
            Some(Setter { binding: self })
        }
    }
}

/// Write access to a binding known to be writable
pub struct Setter<'a, V> {
    binding: &'a Binding<V>,
}

impl<V> Setter<'_, V> {
    /// Write a new value through the binding
    pub fn set(&self, value: V) {
        self.binding.accessor.set(value);
    }
}
