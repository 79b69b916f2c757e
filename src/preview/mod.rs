//! Browser preview for the map component.
//!
//! A small HTTP server hosts a single-file page, the page feeds pointer
//! events back over a WebSocket, and re-rendered frames fan out to every
//! connected client through a broadcast channel. This is the development
//! harness for the interaction contract; library consumers embed the
//! component in their own host instead.

pub mod html;
pub mod server;

pub use server::{start_preview_server, PreviewState};

use serde::Serialize;
use tokio::sync::broadcast;

use crate::data::CityInfo;

/// Capacity of the frame broadcast channel. Slow clients that fall further
/// behind than this miss frames and are warned about it.
const FRAME_CHANNEL_CAPACITY: usize = 64;

/// A frame pushed to preview clients after an event is applied.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewFrame {
    /// Full re-rendering of the scene.
    Scene {
        /// Serialized SVG markup.
        svg: String,
    },
    /// Hover selection changed; `city` is `None` on leave.
    Hover {
        /// Payload of the hovered province.
        city: Option<CityInfo>,
    },
    /// A province was clicked.
    Click {
        /// Payload of the clicked province.
        city: CityInfo,
    },
}

/// Sender half of the frame broadcast channel.
pub type FrameSender = broadcast::Sender<PreviewFrame>;
/// Receiver half of the frame broadcast channel.
pub type FrameReceiver = broadcast::Receiver<PreviewFrame>;

/// Create the broadcast channel used to fan frames out to clients.
pub fn create_frame_channel() -> (FrameSender, FrameReceiver) {
    broadcast::channel(FRAME_CHANNEL_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_serialize_with_kind_tags() {
        let json = serde_json::to_string(&PreviewFrame::Hover { city: None }).unwrap();
        assert_eq!(json, r#"{"kind":"hover","city":null}"#);

        let json = serde_json::to_string(&PreviewFrame::Scene {
            svg: "<svg/>".to_string(),
        })
        .unwrap();
        assert!(json.starts_with(r#"{"kind":"scene""#));
    }

    #[test]
    fn click_frame_carries_the_payload() {
        let frame = PreviewFrame::Click {
            city: CityInfo {
                id: "ankara".to_string(),
                plate_number: 6,
                name: "Ankara".to_string(),
            },
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains(r#""plateNumber":6"#));
        assert!(json.contains(r#""id":"ankara""#));
    }
}
