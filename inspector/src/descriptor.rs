//! Member descriptors
//!
//! Describe how to reach a named member of some type `T` without runtime
//! reflection. Descriptors are plain `Copy` values holding function pointers;
//! bindings pair them with a target.

/// A readable (and possibly writable) member of `T`
///
/// Implemented by [`Field`] and [`Property`] so nested struct bindings can
/// project either kind out of a container snapshot.
pub trait Member<T> {
    /// Type of the member's value
    type Value;

    /// Display name of the member
    fn name(&self) -> &str;

    /// Read the member's current value from `target`
    fn read(&self, target: &T) -> Self::Value;

    /// Write `value` into `target`
    ///
    /// # Panics
    ///
    /// Panics if the member is not writable.
    fn write(&self, target: &mut T, value: Self::Value);

    /// Whether [`Member::write`] may be called
    fn is_writable(&self) -> bool;

    /// Optional tooltip shown when the control is hovered
    fn tooltip(&self) -> Option<&str>;
}

/// A struct field accessed by reference
///
/// A field without a writer is treated as immutable after construction and
/// binds read-only.
pub struct Field<T, V> {
    name: &'static str,
    read: fn(&T) -> &V,
    write: Option<fn(&mut T) -> &mut V>,
    tooltip: Option<&'static str>,
}

// Manual impls: derive would require `T: Clone` / `V: Clone`
impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> std::fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("writable", &self.write.is_some())
            .field("tooltip", &self.tooltip)
            .finish()
    }
}

impl<T, V> Field<T, V> {
    /// Describe a mutable field
    pub fn new(name: &'static str, read: fn(&T) -> &V, write: fn(&mut T) -> &mut V) -> Self {
        Self {
            name,
            read,
            write: Some(write),
            tooltip: None,
        }
    }

    /// Describe a field that cannot be written after construction
    pub fn read_only(name: &'static str, read: fn(&T) -> &V) -> Self {
        Self {
            name,
            read,
            write: None,
            tooltip: None,
        }
    }

    /// Attach a tooltip
    pub fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

impl<T, V: Clone> Member<T> for Field<T, V> {
    type Value = V;

    fn name(&self) -> &str {
        self.name
    }

    fn read(&self, target: &T) -> V {
        (self.read)(target).clone()
    }

    fn write(&self, target: &mut T, value: V) {
        match self.write {
            Some(write) => *write(target) = value,
            None => panic!("field `{}` is read-only", self.name),
        }
    }

    fn is_writable(&self) -> bool {
        self.write.is_some()
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip
    }
}

/// A computed member exposed through a getter and an optional setter
///
/// A property without a setter binds read-only.
pub struct Property<T, V> {
    name: &'static str,
    getter: fn(&T) -> V,
    setter: Option<fn(&mut T, V)>,
    tooltip: Option<&'static str>,
}

impl<T, V> Clone for Property<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Property<T, V> {}

impl<T, V> std::fmt::Debug for Property<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("writable", &self.setter.is_some())
            .field("tooltip", &self.tooltip)
            .finish()
    }
}

impl<T, V> Property<T, V> {
    /// Describe a property with both getter and setter
    pub fn new(name: &'static str, getter: fn(&T) -> V, setter: fn(&mut T, V)) -> Self {
        Self {
            name,
            getter,
            setter: Some(setter),
            tooltip: None,
        }
    }

    /// Describe a getter-only property
    pub fn read_only(name: &'static str, getter: fn(&T) -> V) -> Self {
        Self {
            name,
            getter,
            setter: None,
            tooltip: None,
        }
    }

    /// Attach a tooltip
    pub fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

impl<T, V> Member<T> for Property<T, V> {
    type Value = V;

    fn name(&self) -> &str {
        self.name
    }

    fn read(&self, target: &T) -> V {
        (self.getter)(target)
    }

    fn write(&self, target: &mut T, value: V) {
        match self.setter {
            Some(setter) => setter(target, value),
            None => panic!("property `{}` has no setter", self.name),
        }
    }

    fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip
    }
}

/// A method taking `&mut T`, invoked from the inspector as an action
pub struct Method<T> {
    name: &'static str,
    invoke: fn(&mut T),
    tooltip: Option<&'static str>,
}

impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Method<T> {}

impl<T> std::fmt::Debug for Method<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("tooltip", &self.tooltip)
            .finish()
    }
}

impl<T> Method<T> {
    /// Describe a method
    pub fn new(name: &'static str, invoke: fn(&mut T)) -> Self {
        Self {
            name,
            invoke,
            tooltip: None,
        }
    }

    /// Attach a tooltip
    pub fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Display name of the method
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Optional tooltip
    pub fn tooltip(&self) -> Option<&'static str> {
        self.tooltip
    }

    /// Run the method on `target`
    pub fn call(&self, target: &mut T) {
        (self.invoke)(target)
    }
}

/// Build a [`Field`] descriptor from a type and field name
///
/// ```rust,ignore
/// let speed = field!(Player, speed);               // editable
/// let id = field!(Player, id, read_only);          // immutable after construction
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $name:ident) => {
        $crate::Field::new(
            stringify!($name),
            |target: &$ty| &target.$name,
            |target: &mut $ty| &mut target.$name,
        )
    };
    ($ty:ty, $name:ident, read_only) => {
        $crate::Field::read_only(stringify!($name), |target: &$ty| &target.$name)
    };
}
