//! Accessor implementations backing bindings

use std::rc::Rc;

use super::Target;
use crate::descriptor::Member;

/// Reads and writes one bound value
///
/// Implementations capture exactly what they need to reach the member (a
/// target handle or a parent accessor, plus a descriptor) and never change
/// after construction.
pub trait Accessor<V> {
    /// Read the current value
    fn get(&self) -> V;

    /// Write a new value
    ///
    /// Only called on accessors that are not read-only.
    fn set(&self, value: V);

    /// Whether writes are disallowed
    fn is_read_only(&self) -> bool;
}

/// Direct access to a field or property of a shared target
pub(super) struct TargetAccessor<T, M> {
    target: Target<T>,
    member: M,
}

impl<T, M: Member<T>> TargetAccessor<T, M> {
    pub fn new(target: Target<T>, member: M) -> Self {
        Self { target, member }
    }
}

impl<T, M: Member<T>> Accessor<M::Value> for TargetAccessor<T, M> {
    fn get(&self) -> M::Value {
        self.member.read(&self.target.borrow())
    }

    fn set(&self, value: M::Value) {
        self.member.write(&mut self.target.borrow_mut(), value);
    }

    fn is_read_only(&self) -> bool {
        !self.member.is_writable()
    }
}

/// Access to a member of a value-typed container reached through another accessor
///
/// Every write round-trips the whole container: snapshot, mutate, write back.
pub(super) struct NestedAccessor<P, M> {
    parent: Rc<dyn Accessor<P>>,
    member: M,
    read_only: bool,
}

impl<P, M: Member<P>> NestedAccessor<P, M> {
    pub fn new(parent: Rc<dyn Accessor<P>>, member: M, read_only: bool) -> Self {
        Self {
            parent,
            member,
            read_only,
        }
    }
}

impl<P, M: Member<P>> Accessor<M::Value> for NestedAccessor<P, M> {
    fn get(&self) -> M::Value {
        self.member.read(&self.parent.get())
    }

    fn set(&self, value: M::Value) {
        assert!(
            !self.read_only,
            "attempted to write read-only struct member `{}`",
            self.member.name()
        );
        let mut snapshot = self.parent.get();
        self.member.write(&mut snapshot, value);
        self.parent.set(snapshot);
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}
