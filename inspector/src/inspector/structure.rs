//! Inspector for value-typed containers

use super::{TypeInspector, ValueInspector};
use crate::binding::{Binding, ScopeId};
use crate::config::InspectorStyle;
use crate::controls::{Control, Inspectable};
use crate::descriptor::Member;

/// Collapsible group of member inspectors for a struct reached through a binding
///
/// Every child binding goes through [`Binding::for_struct_member`], so edits
/// write the whole container back through the parent binding.
pub struct StructInspector<P> {
    binding: Binding<P>,
    children: Vec<Box<dyn TypeInspector>>,
}

impl<P: Clone + 'static> StructInspector<P> {
    /// Inspect the container bound by `binding`
    pub fn new(binding: Binding<P>) -> Self {
        Self {
            binding,
            children: Vec::new(),
        }
    }

    /// Add a member using the default control for its type
    pub fn member<M>(self, member: M) -> Self
    where
        M: Member<P> + 'static,
        M::Value: Inspectable,
    {
        let child = Binding::for_struct_member(&self.binding, member);
        self.push(Box::new(ValueInspector::new(child)))
    }

    /// Add a member drawn with an explicit control
    pub fn member_with<M, C>(self, member: M, control: C) -> Self
    where
        M: Member<P> + 'static,
        M::Value: Clone + 'static,
        C: Control<M::Value> + 'static,
    {
        let child = Binding::for_struct_member(&self.binding, member);
        self.push(Box::new(ValueInspector::with_control(child, control)))
    }

    /// Add a nested struct member, configured by `build`
    pub fn nested<M, Q>(
        self,
        member: M,
        build: impl FnOnce(StructInspector<Q>) -> StructInspector<Q>,
    ) -> Self
    where
        M: Member<P, Value = Q> + 'static,
        Q: Clone + 'static,
    {
        let child = Binding::for_struct_member(&self.binding, member);
        self.push(Box::new(build(StructInspector::new(child))))
    }

    /// Add an arbitrary child inspector
    pub fn push(mut self, child: Box<dyn TypeInspector>) -> Self {
        self.children.push(child);
        self
    }

    /// The container binding
    pub fn binding(&self) -> &Binding<P> {
        &self.binding
    }

    /// Child inspectors in display order
    pub fn children(&self) -> &[Box<dyn TypeInspector>] {
        &self.children
    }

    fn header(&self) -> egui::CollapsingHeader {
        egui::CollapsingHeader::new(self.binding.name())
            .id_salt(self.binding.scope_id().egui_id())
            .default_open(true)
    }
}

/// Render `children` inside a collapsing header, reporting edits on the header response
fn render_children(
    ui: &mut egui::Ui,
    header: egui::CollapsingHeader,
    style: &InspectorStyle,
    enabled: bool,
    children: &mut [Box<dyn TypeInspector>],
) -> egui::Response {
    let body = |ui: &mut egui::Ui| {
        ui.add_enabled_ui(enabled, |ui| {
            let mut changed = false;
            for child in children.iter_mut() {
                changed |= child.render(ui, style).changed();
            }
            changed
        })
        .inner
    };

    let collapsing = if style.indent_nested {
        header.show(ui, body)
    } else {
        header.show_unindented(ui, body)
    };

    let mut response = collapsing.header_response;
    if collapsing.body_returned == Some(true) {
        response.mark_changed();
    }
    response
}

impl<P: Clone + 'static> TypeInspector for StructInspector<P> {
    fn name(&self) -> &str {
        self.binding.name()
    }

    fn scope_id(&self) -> ScopeId {
        self.binding.scope_id()
    }

    fn is_read_only(&self) -> bool {
        self.binding.is_read_only()
    }

    fn tooltip(&self) -> Option<&str> {
        self.binding.tooltip()
    }

    fn render_mutable(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response {
        let header = self.header();
        render_children(ui, header, style, true, &mut self.children)
    }

    fn render_read_only(&mut self, ui: &mut egui::Ui, style: &InspectorStyle) -> egui::Response {
        // The whole group is already dimmed; don't dim each child again
        let undimmed = InspectorStyle {
            read_only_opacity: 1.0,
            ..style.clone()
        };
        let header = self.header();
        render_children(ui, header, &undimmed, false, &mut self.children)
    }
}
