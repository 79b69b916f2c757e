//! Hover tracking: the single "active province" slot.

/// Tracks which province the pointer is currently over.
///
/// A single optional id rather than a per-province flag map: at most one
/// province is hovered at any instant, so one slot is enough and lookups
/// stay O(1).
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovered: Option<String>,
}

impl HoverTracker {
    /// Create an empty tracker (nothing hovered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as the hovered province. Last enter wins.
    ///
    /// Returns true if the state changed (redraw hint).
    pub fn enter(&mut self, id: &str) -> bool {
        if self.hovered.as_deref() == Some(id) {
            return false;
        }
        self.hovered = Some(id.to_string());
        true
    }

    /// Clear the hover slot unconditionally.
    ///
    /// The leaving province is not compared against the tracked one: under a
    /// single-pointer host, the leave for the old province always arrives
    /// before the enter for the next. Returns true if a province was hovered.
    pub fn leave(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    /// The currently hovered province id, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Whether `id` is the currently hovered province.
    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }
}
