//! Nethercore Inspector - bound property inspector widgets
//!
//! Binds named members of game-side objects to egui controls so they can be
//! viewed and tweaked at runtime from a debug overlay.
//!
//! # Overview
//!
//! Members are described up front with plain function pointers instead of
//! runtime reflection:
//!
//! - [`Field`] - direct field access (`field!(Player, speed)`)
//! - [`Property`] - getter with optional setter
//! - [`Method`] - an action invoked from a button
//!
//! A [`Binding`] ties a descriptor to a shared target and exposes `get`/`set`.
//! Bindings can be chained through value-typed containers with
//! [`Binding::for_struct_member`], which snapshots the parent value, edits the
//! member and writes the whole container back.
//!
//! Inspectors ([`ValueInspector`], [`StructInspector`], [`MethodInspector`])
//! render a binding every frame. Read-only bindings are drawn dimmed and
//! disabled; editable ones commit user edits through the binding's setter.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use nethercore_inspector::{field, Binding, ObjectInspector, InspectorPanel};
//!
//! #[derive(Clone)]
//! struct Player { speed: f32, pos: glam::Vec2 }
//!
//! let player = Rc::new(RefCell::new(Player { speed: 5.0, pos: glam::Vec2::ZERO }));
//!
//! let mut panel = InspectorPanel::new();
//! panel.add(
//!     ObjectInspector::new("player", &player)
//!         .field(field!(Player, speed))
//!         .field(field!(Player, pos)),
//! );
//!
//! // every frame
//! panel.render(ctx);
//! ```

pub mod binding;
pub mod config;
pub mod controls;
pub mod descriptor;
pub mod inspector;
pub mod panel;
pub mod types;

// Re-export commonly used types
pub use binding::{Accessor, Binding, MethodBinding, ScopeId, Setter, Target};
pub use config::{ConfigError, InspectorConfig, InspectorStyle, PanelConfig};
pub use controls::{Control, InspectEnum, Inspectable};
pub use descriptor::{Field, Member, Method, Property};
pub use inspector::{MethodInspector, StructInspector, TypeInspector, ValueInspector};
pub use panel::{InspectorPanel, ObjectInspector};
pub use types::{Constraints, ValueType};
