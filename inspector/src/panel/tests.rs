//! Tests for the inspector panel

#![cfg(test)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{InspectorPanel, ObjectInspector};
use crate::binding::ScopeId;
use crate::config::{InspectorConfig, InspectorStyle};
use crate::descriptor::{Method, Property};
use crate::field;
use crate::inspector::TypeInspector;

/// Counts how often the section body is drawn
struct RenderCounter {
    scope_id: ScopeId,
    renders: Rc<Cell<usize>>,
}

impl TypeInspector for RenderCounter {
    fn name(&self) -> &str {
        "counter"
    }

    fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn tooltip(&self) -> Option<&str> {
        None
    }

    fn render_mutable(&mut self, ui: &mut egui::Ui, _style: &InspectorStyle) -> egui::Response {
        self.renders.set(self.renders.get() + 1);
        ui.label("counter")
    }

    fn render_read_only(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response {
        self.render_mutable(ui, style)
    }
}

fn counted_section(name: &str) -> (Rc<Cell<usize>>, ObjectInspector<Ship>) {
    let (_ship, inspector) = ship_inspector(name);
    let renders = Rc::new(Cell::new(0));
    let counter = RenderCounter {
        scope_id: ScopeId::next(),
        renders: Rc::clone(&renders),
    };
    (renders, inspector.push(Box::new(counter)))
}

#[derive(Debug, Clone)]
struct Velocity {
    dx: f32,
    dy: f32,
}

#[derive(Debug, Clone)]
struct Ship {
    id: u32,
    thrust: f32,
    name: String,
    velocity: Velocity,
    shields_up: bool,
}

impl Ship {
    fn stop(&mut self) {
        self.velocity = Velocity { dx: 0.0, dy: 0.0 };
    }
}

fn ship_inspector(name: &str) -> (Rc<RefCell<Ship>>, ObjectInspector<Ship>) {
    let ship = Rc::new(RefCell::new(Ship {
        id: 3,
        thrust: 1.5,
        name: "falcon".to_string(),
        velocity: Velocity { dx: 1.0, dy: 2.0 },
        shields_up: false,
    }));
    let speed: Property<Ship, f32> = Property::read_only("speed", |s| {
        (s.velocity.dx * s.velocity.dx + s.velocity.dy * s.velocity.dy).sqrt()
    });

    let inspector = ObjectInspector::new(name, &ship)
        .field(field!(Ship, id, read_only))
        .field(field!(Ship, thrust))
        .field(field!(Ship, name))
        .field(field!(Ship, shields_up))
        .property(speed)
        .structure(field!(Ship, velocity), |v| {
            v.member(field!(Velocity, dx)).member(field!(Velocity, dy))
        })
        .method(Method::new("stop", Ship::stop));
    (ship, inspector)
}

fn run(panel: &mut InspectorPanel) -> bool {
    run_in(&egui::Context::default(), panel)
}

fn run_in(ctx: &egui::Context, panel: &mut InspectorPanel) -> bool {
    let mut changed = false;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        changed |= panel.render(ctx);
    });
    changed
}

#[test]
fn test_object_inspector_builder() {
    let (_ship, inspector) = ship_inspector("ship");
    assert_eq!(inspector.name(), "ship");
    assert_eq!(inspector.len(), 7);
    assert!(!inspector.is_empty());

    let names: Vec<_> = inspector.inspectors().iter().map(|i| i.name()).collect();
    assert_eq!(
        names,
        ["id", "thrust", "name", "shields_up", "speed", "velocity", "stop"]
    );

    let read_only: Vec<_> = inspector
        .inspectors()
        .iter()
        .map(|i| i.is_read_only())
        .collect();
    assert_eq!(read_only, [true, false, false, false, true, false, false]);
}

#[test]
fn test_panel_hidden_by_default() {
    let (_ship, inspector) = ship_inspector("ship");
    let mut panel = InspectorPanel::new();
    panel.add(inspector);

    assert!(!panel.visible);
    assert!(!run(&mut panel));
}

#[test]
fn test_panel_toggle() {
    let mut panel = InspectorPanel::new();
    panel.toggle();
    assert!(panel.visible);
    panel.toggle();
    assert!(!panel.visible);
    panel.set_visible(true);
    assert!(panel.visible);
}

#[test]
fn test_panel_open_on_start_from_config() {
    let mut config = InspectorConfig::default();
    config.panel.open_on_start = true;
    let panel = InspectorPanel::with_config(config);
    assert!(panel.visible);
    assert!(panel.config().panel.open_on_start);
}

#[test]
fn test_empty_panel_renders_nothing() {
    let mut panel = InspectorPanel::new();
    panel.set_visible(true);
    assert!(panel.is_empty());
    assert!(!run(&mut panel));
}

#[test]
fn test_visible_panel_renders_without_edits() {
    let (ship, inspector) = ship_inspector("ship");
    let mut panel = InspectorPanel::new();
    panel.add(inspector);
    panel.set_visible(true);

    assert!(!run(&mut panel));
    assert_eq!(ship.borrow().thrust, 1.5);
    assert_eq!(ship.borrow().velocity.dx, 1.0);
}

#[test]
fn test_panel_sections() {
    let (_a, first) = ship_inspector("alpha");
    let (_b, second) = ship_inspector("beta");
    let (_c, replacement) = ship_inspector("alpha");

    let mut panel = InspectorPanel::new();
    panel.add(first);
    panel.add(second);
    panel.add(replacement);

    assert_eq!(panel.len(), 2);
    assert_eq!(panel.section_names().collect::<Vec<_>>(), ["alpha", "beta"]);

    assert!(panel.remove("alpha"));
    assert!(!panel.remove("alpha"));
    assert_eq!(panel.section_names().collect::<Vec<_>>(), ["beta"]);

    panel.clear();
    assert!(panel.is_empty());
}

#[test]
fn test_collapsed_section_body_is_not_drawn() {
    let (renders, section) = counted_section("ship");
    let mut panel = InspectorPanel::new();
    panel.add(section);
    panel.set_visible(true);
    panel.set_collapsed("ship", true);
    assert!(panel.is_collapsed("ship"));

    run(&mut panel);
    assert_eq!(renders.get(), 0);
}

#[test]
fn test_collapsing_overrides_stored_header_state() {
    let (renders, section) = counted_section("ship");
    let mut panel = InspectorPanel::new();
    panel.add(section);
    panel.set_visible(true);
    let ctx = egui::Context::default();
    ctx.style_mut(|s| s.animation_time = 0.0);

    // Expanded first, so the header has stored open state
    run_in(&ctx, &mut panel);
    assert!(renders.get() > 0);

    panel.set_collapsed("ship", true);
    let drawn = renders.get();
    run_in(&ctx, &mut panel);
    assert_eq!(renders.get(), drawn);

    panel.set_collapsed("ship", false);
    assert!(!panel.is_collapsed("ship"));
    run_in(&ctx, &mut panel);
    assert!(renders.get() > drawn);
}
