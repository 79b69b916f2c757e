//! Pointer interaction: the event codec and the hover slot.
//!
//! Hosts translate their native pointer input into [`PointerEvent`]s and
//! feed them to the map. Events are handled synchronously, in arrival
//! order; there is no queuing or cancellation.

pub mod hover;

pub use hover::HoverTracker;

use serde::{Deserialize, Serialize};

/// A pointer event targeting one rendered province group.
///
/// The tagged JSON form (for example `{"kind":"enter","id":"ankara"}`) is
/// what the preview page sends over its WebSocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer moved onto a province group.
    Enter {
        /// Id of the entered province.
        id: String,
    },
    /// Pointer left a province group.
    Leave {
        /// Id of the left province.
        id: String,
    },
    /// Primary click (or tap) on a province group.
    Click {
        /// Id of the clicked province.
        id: String,
    },
}

impl PointerEvent {
    /// The id of the province this event targets.
    pub fn region_id(&self) -> &str {
        match self {
            PointerEvent::Enter { id } | PointerEvent::Leave { id } | PointerEvent::Click { id } => {
                id
            }
        }
    }
}
