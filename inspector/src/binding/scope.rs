//! Widget id scopes

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique id pushed around a binding's widgets
///
/// Two bindings with the same display name (e.g. `x` on two different
/// vectors) would otherwise share egui widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    /// Allocate the next unused scope id
    pub fn next() -> Self {
        Self(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value
    pub fn get(self) -> u64 {
        self.0
    }

    /// egui id for this scope
    pub fn egui_id(self) -> egui::Id {
        egui::Id::new(("inspector_scope", self.0))
    }
}
