//! Per-object inspector groups

use std::rc::Rc;

use crate::binding::{Binding, MethodBinding, Target};
use crate::controls::{Control, Inspectable};
use crate::descriptor::{Field, Method, Property};
use crate::inspector::{MethodInspector, StructInspector, TypeInspector, ValueInspector};

/// Ordered inspectors for the members of one target object
///
/// Built once when the object is selected; the panel renders it every frame.
pub struct ObjectInspector<T> {
    /// Section title in the panel
    name: String,
    /// Inspected object
    target: Target<T>,
    /// Member inspectors in display order
    inspectors: Vec<Box<dyn TypeInspector>>,
}

impl<T: 'static> ObjectInspector<T> {
    /// Start inspecting `target` under the section title `name`
    pub fn new(name: impl Into<String>, target: &Target<T>) -> Self {
        Self {
            name: name.into(),
            target: Rc::clone(target),
            inspectors: Vec::new(),
        }
    }

    /// Add a field with the default control for its type
    pub fn field<V: Inspectable>(self, field: Field<T, V>) -> Self {
        let binding = Binding::for_field(&self.target, field);
        self.push(Box::new(ValueInspector::new(binding)))
    }

    /// Add a field drawn with an explicit control
    pub fn field_with<V, C>(self, field: Field<T, V>, control: C) -> Self
    where
        V: Clone + 'static,
        C: Control<V> + 'static,
    {
        let binding = Binding::for_field(&self.target, field);
        self.push(Box::new(ValueInspector::with_control(binding, control)))
    }

    /// Add a property with the default control for its type
    pub fn property<V: Inspectable>(self, property: Property<T, V>) -> Self {
        let binding = Binding::for_property(&self.target, property);
        self.push(Box::new(ValueInspector::new(binding)))
    }

    /// Add a property drawn with an explicit control
    pub fn property_with<V, C>(self, property: Property<T, V>, control: C) -> Self
    where
        V: Clone + 'static,
        C: Control<V> + 'static,
    {
        let binding = Binding::for_property(&self.target, property);
        self.push(Box::new(ValueInspector::with_control(binding, control)))
    }

    /// Add a value-typed struct field, its members configured by `build`
    pub fn structure<P: Clone + 'static>(
        self,
        field: Field<T, P>,
        build: impl FnOnce(StructInspector<P>) -> StructInspector<P>,
    ) -> Self {
        let binding = Binding::for_field(&self.target, field);
        self.push(Box::new(build(StructInspector::new(binding))))
    }

    /// Add a method button
    pub fn method(self, method: Method<T>) -> Self {
        let binding = MethodBinding::new(&self.target, method);
        self.push(Box::new(MethodInspector::new(binding)))
    }

    /// Add an arbitrary inspector
    pub fn push(mut self, inspector: Box<dyn TypeInspector>) -> Self {
        self.inspectors.push(inspector);
        self
    }
}

impl<T> ObjectInspector<T> {
    /// Section title
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of member inspectors
    pub fn len(&self) -> usize {
        self.inspectors.len()
    }

    /// Check if no members were added
    pub fn is_empty(&self) -> bool {
        self.inspectors.is_empty()
    }

    /// Member inspectors in display order
    pub fn inspectors(&self) -> &[Box<dyn TypeInspector>] {
        &self.inspectors
    }

    /// Drop the target handle, keeping the title and inspectors
    pub(super) fn into_parts(self) -> (String, Vec<Box<dyn TypeInspector>>) {
        (self.name, self.inspectors)
    }
}
