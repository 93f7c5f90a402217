//! Inspector demo
//!
//! Opens a window with a tiny simulated game and an inspector panel bound to
//! its state. Press F3 to toggle the panel.
//!
//! Usage: `inspector-demo [path/to/inspector.toml]`

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use eframe::egui;
use glam::{Vec2, Vec3};
use nethercore_inspector::controls::NumericControl;
use nethercore_inspector::{
    InspectEnum, InspectorConfig, InspectorPanel, Method, ObjectInspector, Property, field,
    inspectable_enum,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Difficulty {
    Easy,
    Normal,
    Brutal,
}

impl InspectEnum for Difficulty {
    fn variants() -> &'static [Self] {
        &[Difficulty::Easy, Difficulty::Normal, Difficulty::Brutal]
    }

    fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Brutal => "Brutal",
        }
    }
}

inspectable_enum!(Difficulty);

#[derive(Debug, Clone)]
struct Body {
    position: Vec2,
    velocity: Vec2,
    mass: f32,
}

#[derive(Debug, Clone)]
struct Player {
    id: u32,
    name: String,
    health: i32,
    speed: f32,
    invincible: bool,
    tint: egui::Color32,
    body: Body,
    difficulty: Difficulty,
}

impl Player {
    fn respawn(&mut self) {
        self.health = 100;
        self.body.position = Vec2::ZERO;
        self.body.velocity = Vec2::ZERO;
    }

    fn step(&mut self, dt: f32) {
        let drag = 1.0 / self.body.mass.max(0.1);
        self.body.velocity *= 1.0 - (drag * dt).min(1.0);
        self.body.position += self.body.velocity * dt;
    }
}

#[derive(Debug, Clone)]
struct Light {
    direction: Vec3,
    intensity: f32,
}

struct DemoApp {
    player: Rc<RefCell<Player>>,
    light: Rc<RefCell<Light>>,
    panel: InspectorPanel,
}

impl DemoApp {
    fn new(config: InspectorConfig) -> Self {
        let player = Rc::new(RefCell::new(Player {
            id: 1,
            name: "pilot".to_string(),
            health: 100,
            speed: 4.0,
            invincible: false,
            tint: egui::Color32::from_rgb(80, 200, 255),
            body: Body {
                position: Vec2::ZERO,
                velocity: Vec2::new(3.0, 1.0),
                mass: 2.0,
            },
            difficulty: Difficulty::Normal,
        }));
        let light = Rc::new(RefCell::new(Light {
            direction: Vec3::new(0.0, -1.0, 0.3),
            intensity: 0.8,
        }));

        let kinetic = Property::read_only("kinetic_energy", |p: &Player| {
            0.5 * p.body.mass * p.body.velocity.length_squared()
        })
        .with_tooltip("Derived from mass and velocity");

        let respawn =
            Method::new("respawn", Player::respawn).with_tooltip("Reset health and position");

        let mut panel = InspectorPanel::with_config(config);
        panel.add(
            ObjectInspector::new("player", &player)
                .field(field!(Player, id, read_only).with_tooltip("Assigned at spawn"))
                .field(field!(Player, name))
                .field_with(field!(Player, health), NumericControl::ranged(0.0, 100.0))
                .field(field!(Player, speed))
                .field(field!(Player, invincible))
                .field(field!(Player, tint))
                .field(field!(Player, difficulty))
                .property(kinetic)
                .structure(field!(Player, body), |body| {
                    body.member(field!(Body, position))
                        .member(field!(Body, velocity))
                        .member_with(field!(Body, mass), NumericControl::ranged(0.1, 10.0))
                })
                .method(respawn),
        );
        panel.add(
            ObjectInspector::new("light", &light)
                .field(field!(Light, direction))
                .field_with(field!(Light, intensity), NumericControl::ranged(0.0, 1.0)),
        );

        Self {
            player,
            light,
            panel,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::F3)) {
            self.panel.toggle();
        }

        let dt = ctx.input(|i| i.stable_dt);
        self.player.borrow_mut().step(dt);

        egui::CentralPanel::default().show(ctx, |ui| {
            let player = self.player.borrow();
            let light = self.light.borrow();
            ui.heading("Inspector demo");
            ui.label("Press F3 to toggle the inspector.");
            ui.separator();
            ui.colored_label(
                player.tint,
                format!(
                    "{} hp:{} pos:({:.1}, {:.1}) {:?}",
                    player.name,
                    player.health,
                    player.body.position.x,
                    player.body.position.y,
                    player.difficulty
                ),
            );
            ui.label(format!("light intensity: {:.2}", light.intensity));
        });

        if self.panel.render(ctx) {
            tracing::debug!("inspector edit applied");
        }

        ctx.request_repaint();
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => InspectorConfig::load(&path)?,
        None => InspectorConfig::default(),
    };
    tracing::info!("Starting inspector demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Nethercore Inspector Demo")
            .with_inner_size([960.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Nethercore Inspector Demo",
        native_options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
