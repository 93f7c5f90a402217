//! Inspector panel UI
//!
//! Provides an egui window hosting one collapsible section per inspected object.

use hashbrown::HashSet;

use crate::config::InspectorConfig;
use crate::inspector::TypeInspector;

mod object;
mod tests;

pub use object::ObjectInspector;

/// One inspected object as shown in the panel
struct Section {
    name: String,
    inspectors: Vec<Box<dyn TypeInspector>>,
}

/// Inspector panel state
pub struct InspectorPanel {
    /// Whether the panel is visible
    pub visible: bool,
    /// Styling and window settings
    config: InspectorConfig,
    /// Sections in display order
    sections: Vec<Section>,
    /// Names of collapsed sections
    collapsed_sections: HashSet<String>,
}

impl Default for InspectorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectorPanel {
    /// Create a new inspector panel with default settings
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    /// Create a panel from a loaded config
    pub fn with_config(config: InspectorConfig) -> Self {
        Self {
            visible: config.panel.open_on_start,
            config,
            sections: Vec::new(),
            collapsed_sections: HashSet::new(),
        }
    }

    /// Toggle panel visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Set panel visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Current settings
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Add an object section, replacing any section with the same name
    pub fn add<T>(&mut self, object: ObjectInspector<T>) {
        let (name, inspectors) = object.into_parts();
        tracing::debug!(
            "inspector: showing {} ({} members)",
            name,
            inspectors.len()
        );

        let section = Section { name, inspectors };
        match self.sections.iter_mut().find(|s| s.name == section.name) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    /// Remove the section called `name`
    ///
    /// Returns true if a section was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.name != name);
        self.collapsed_sections.remove(name);
        self.sections.len() != before
    }

    /// Remove every section
    pub fn clear(&mut self) {
        self.sections.clear();
        self.collapsed_sections.clear();
    }

    /// Collapse or expand the section called `name`
    pub fn set_collapsed(&mut self, name: &str, collapsed: bool) {
        if collapsed {
            self.collapsed_sections.insert(name.to_string());
        } else {
            self.collapsed_sections.remove(name);
        }
    }

    /// Whether the section called `name` is collapsed
    pub fn is_collapsed(&self, name: &str) -> bool {
        self.collapsed_sections.contains(name)
    }

    /// Section names in display order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Get number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the panel has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render the inspector window
    ///
    /// Returns true if any value was changed this frame.
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        if !self.visible || self.sections.is_empty() {
            return false;
        }

        let mut any_changed = false;
        let panel = &self.config.panel;

        egui::Window::new(panel.title.as_str())
            .id(egui::Id::new("inspector_window"))
            .default_pos([10.0, 10.0])
            .default_size([panel.default_width, panel.default_height])
            .resizable(true)
            .collapsible(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        any_changed |= render_sections(
                            ui,
                            &self.config,
                            &mut self.sections,
                            &mut self.collapsed_sections,
                        );
                    });
            });

        any_changed
    }

    /// Render the sections into an existing ui (e.g. a side panel)
    ///
    /// Ignores `visible`. Returns true if any value was changed this frame.
    pub fn render_ui(&mut self, ui: &mut egui::Ui) -> bool {
        render_sections(
            ui,
            &self.config,
            &mut self.sections,
            &mut self.collapsed_sections,
        )
    }
}

/// Render every section, tracking collapse state by name
fn render_sections(
    ui: &mut egui::Ui,
    config: &InspectorConfig,
    sections: &mut [Section],
    collapsed_sections: &mut HashSet<String>,
) -> bool {
    let mut any_changed = false;

    for section in sections.iter_mut() {
        let is_collapsed = collapsed_sections.contains(&section.name);
        let header = egui::CollapsingHeader::new(section.name.as_str())
            .id_salt(("inspector_section", section.name.as_str()))
            .open(Some(!is_collapsed))
            .show(ui, |ui| {
                for inspector in section.inspectors.iter_mut() {
                    any_changed |= inspector.render(ui, &config.style).changed();
                }
            });

        // Track collapse state
        if header.header_response.clicked() {
            if is_collapsed {
                collapsed_sections.remove(&section.name);
            } else {
                collapsed_sections.insert(section.name.clone());
            }
        }
    }

    any_changed
}
