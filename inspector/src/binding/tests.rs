//! Tests for value bindings

#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::{Binding, MethodBinding, Target};
use crate::descriptor::{Field, Method, Property};
use crate::field;

#[derive(Debug, Clone, PartialEq)]
struct Pos {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone)]
struct Player {
    id: u32,
    health: i32,
    name: String,
    pos: Pos,
    velocity: Vec2,
    respawns: u32,
}

impl Player {
    fn respawn(&mut self) {
        self.health = 100;
        self.respawns += 1;
    }
}

fn player() -> Target<Player> {
    Rc::new(RefCell::new(Player {
        id: 7,
        health: 5,
        name: "abc".to_string(),
        pos: Pos { x: 1.0, y: 2.0 },
        velocity: Vec2::new(0.5, -0.5),
        respawns: 0,
    }))
}

fn name_property() -> Property<Player, String> {
    Property::read_only("display_name", |p| p.name.clone())
}

#[test]
fn test_field_round_trip() {
    let target = player();
    let health = Binding::for_field(&target, field!(Player, health));

    assert!(!health.is_read_only());
    assert_eq!(health.get(), 5);

    health.set(10);
    assert_eq!(health.get(), 10);
    assert_eq!(target.borrow().health, 10);
}

#[test]
fn test_field_sees_external_changes() {
    let target = player();
    let health = Binding::for_field(&target, field!(Player, health));

    target.borrow_mut().health = 77;
    assert_eq!(health.get(), 77);
}

#[test]
fn test_read_only_field() {
    let target = player();
    let id = Binding::for_field(&target, field!(Player, id, read_only));

    assert!(id.is_read_only());
    assert!(id.setter().is_none());
    assert_eq!(id.get(), 7);
}

#[test]
#[should_panic(expected = "read-only binding `id`")]
fn test_set_on_read_only_binding_panics() {
    let target = player();
    let id = Binding::for_field(&target, field!(Player, id, read_only));
    id.set(1);
}

#[test]
fn test_property_without_setter() {
    let target = player();
    let name = Binding::for_property(&target, name_property());

    assert!(name.is_read_only());
    assert!(name.setter().is_none());
    assert_eq!(name.get(), "abc");
}

#[test]
fn test_property_with_setter() {
    let target = player();
    let clamped: Property<Player, i32> =
        Property::new("health", |p| p.health, |p, v| p.health = v.clamp(0, 100));
    let health = Binding::for_property(&target, clamped);

    let setter = health.setter().expect("writable property has a setter");
    setter.set(250);
    assert_eq!(health.get(), 100);
}

#[test]
fn test_struct_member_write_back() {
    let target = player();
    let pos = Binding::for_field(&target, field!(Player, pos));
    let x = Binding::for_struct_member(&pos, field!(Pos, x));

    assert!(!x.is_read_only());
    x.set(3.0);

    assert_eq!(x.get(), 3.0);
    assert_eq!(pos.get(), Pos { x: 3.0, y: 2.0 });
    assert_eq!(target.borrow().pos.x, 3.0);
}

#[test]
fn test_struct_member_through_property() {
    let target = player();
    let velocity: Property<Player, Vec2> =
        Property::new("velocity", |p| p.velocity, |p, v| p.velocity = v);
    let velocity = Binding::for_property(&target, velocity);
    let vx: Property<Vec2, f32> = Property::new("x", |v| v.x, |v, x| v.x = x);
    let vx = Binding::for_struct_member(&velocity, vx);

    vx.set(4.0);
    assert_eq!(target.borrow().velocity, Vec2::new(4.0, -0.5));
}

#[test]
fn test_struct_member_nested_twice() {
    #[derive(Debug, Clone)]
    struct Outer {
        inner: Pos,
    }
    #[derive(Debug, Clone)]
    struct Holder {
        outer: Outer,
    }

    let target = Rc::new(RefCell::new(Holder {
        outer: Outer {
            inner: Pos { x: 0.0, y: 0.0 },
        },
    }));
    let outer = Binding::for_field(&target, field!(Holder, outer));
    let inner = Binding::for_struct_member(&outer, field!(Outer, inner));
    let y = Binding::for_struct_member(&inner, field!(Pos, y));

    y.set(9.0);
    assert_eq!(target.borrow().outer.inner.y, 9.0);
}

#[test]
fn test_struct_member_read_only_flag_is_or() {
    let target = player();

    let writable_parent = Binding::for_field(&target, field!(Player, pos));
    let read_only_parent: Binding<Pos> =
        Binding::for_property(&target, Property::read_only("pos", |p: &Player| p.pos.clone()));

    let writable_member = field!(Pos, x);
    let read_only_member: Field<Pos, f32> = field!(Pos, x, read_only);

    assert!(!Binding::for_struct_member(&writable_parent, writable_member).is_read_only());
    assert!(Binding::for_struct_member(&writable_parent, read_only_member).is_read_only());
    assert!(Binding::for_struct_member(&read_only_parent, writable_member).is_read_only());
    assert!(Binding::for_struct_member(&read_only_parent, read_only_member).is_read_only());
}

#[test]
fn test_struct_member_of_read_only_parent_has_no_setter() {
    let target = player();
    let pos: Binding<Pos> =
        Binding::for_property(&target, Property::read_only("pos", |p: &Player| p.pos.clone()));
    let x = Binding::for_struct_member(&pos, field!(Pos, x));

    assert!(x.setter().is_none());
    assert_eq!(x.get(), 1.0);
}

#[test]
fn test_tooltip_from_descriptor_and_override() {
    let target = player();
    let health = Binding::for_field(
        &target,
        field!(Player, health).with_tooltip("current hit points"),
    );
    assert_eq!(health.tooltip(), Some("current hit points"));

    let health = health.with_tooltip("hp");
    assert_eq!(health.tooltip(), Some("hp"));

    let id = Binding::for_field(&target, field!(Player, id, read_only));
    assert_eq!(id.tooltip(), None);
}

#[test]
fn test_binding_metadata() {
    let target = player();
    let velocity = Binding::for_field(&target, field!(Player, velocity));

    assert_eq!(velocity.name(), "velocity");
    assert!(velocity.value_type().is::<Vec2>());
    assert_eq!(velocity.value_type().short_name(), "Vec2");
}

#[test]
fn test_scope_ids_are_unique() {
    let target = player();
    let a = Binding::for_field(&target, field!(Player, health));
    let b = Binding::for_field(&target, field!(Player, health));
    let m = MethodBinding::new(&target, Method::new("respawn", Player::respawn));

    assert_ne!(a.scope_id(), b.scope_id());
    assert_ne!(a.scope_id(), m.scope_id());
    assert_ne!(b.scope_id(), m.scope_id());

    // Clones keep the same scope id
    assert_eq!(a.clone().scope_id(), a.scope_id());
}

#[test]
fn test_rebind_allocates_new_scope() {
    let target = player();
    let health = Binding::for_field(&target, field!(Player, health));
    let copy = health.rebind();

    assert_ne!(copy.scope_id(), health.scope_id());
    assert_eq!(copy.name(), health.name());

    copy.set(42);
    assert_eq!(health.get(), 42);
    assert_eq!(target.borrow().health, 42);
}

#[test]
fn test_method_binding_invoke() {
    let target = player();
    let respawn = MethodBinding::new(
        &target,
        Method::new("respawn", Player::respawn).with_tooltip("reset health"),
    );

    assert_eq!(respawn.name(), "respawn");
    assert_eq!(respawn.tooltip(), Some("reset health"));

    respawn.invoke();
    respawn.invoke();
    assert_eq!(target.borrow().health, 100);
    assert_eq!(target.borrow().respawns, 2);
}
