//! Method bindings

use std::rc::Rc;

use super::{ScopeId, Target};
use crate::descriptor::Method;

/// A method of a target, recorded for invocation from the inspector
///
/// Has no value and so no getter or setter.
pub struct MethodBinding<T> {
    target: Target<T>,
    method: Method<T>,
    scope_id: ScopeId,
}

impl<T> Clone for MethodBinding<T> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            method: self.method,
            scope_id: self.scope_id,
        }
    }
}

impl<T> MethodBinding<T> {
    /// Bind `method` on `target`
    pub fn new(target: &Target<T>, method: Method<T>) -> Self {
        tracing::debug!("inspector: bound method {}", method.name());
        Self {
            target: Rc::clone(target),
            method,
            scope_id: ScopeId::next(),
        }
    }

    /// Display name of the method
    pub fn name(&self) -> &str {
        self.method.name()
    }

    /// Tooltip text, if any
    pub fn tooltip(&self) -> Option<&str> {
        self.method.tooltip()
    }

    /// Unique id scope for this binding's widgets
    pub fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    /// Run the method on the bound target
    pub fn invoke(&self) {
        tracing::trace!("inspector: invoking {}", self.method.name());
        self.method.call(&mut self.target.borrow_mut());
    }
}
