//! Preview server implementation.
//!
//! HTTP routes serve the page and the current rendering; the WebSocket
//! route receives pointer events and pushes re-rendered frames. The map
//! sits behind a write lock, so events are applied strictly in arrival
//! order.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use super::html::PREVIEW_HTML;
use super::{FrameSender, PreviewFrame};
use crate::data::Region;
use crate::interaction::PointerEvent;
use crate::map::TurkeyMap;

/// Shared state for the preview server.
#[derive(Clone)]
pub struct PreviewState {
    /// The map instance events are applied to.
    pub map: Arc<RwLock<TurkeyMap>>,
    /// Broadcast sender for pushing frames to clients.
    pub frame_tx: FrameSender,
}

/// Start the preview server on the specified address.
///
/// Returns the join handle for the server task and the shared state, so
/// callers (and tests) can apply events or read the map out of band.
pub async fn start_preview_server(
    addr: SocketAddr,
    map: TurkeyMap,
) -> color_eyre::Result<(JoinHandle<()>, PreviewState)> {
    let (frame_tx, _) = super::create_frame_channel();
    let state = PreviewState {
        map: Arc::new(RwLock::new(map)),
        frame_tx,
    };

    // Permissive CORS for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(page_handler))
        .route("/svg", get(svg_handler))
        .route("/ws", get(websocket_handler))
        .layer(cors)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Preview server listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Preview server error: {}", e);
        }
    });

    Ok((handle, state))
}

/// Handler for the preview HTML page.
async fn page_handler() -> impl IntoResponse {
    Html(PREVIEW_HTML)
}

/// Handler for the current rendering of the map.
async fn svg_handler(State(state): State<PreviewState>) -> impl IntoResponse {
    let map = state.map.read().await;
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        map.to_svg(),
    )
}

/// Handler for WebSocket connections.
async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<PreviewState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Handle an individual WebSocket connection.
async fn handle_websocket(socket: WebSocket, state: PreviewState) {
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before handling input so this client sees its own frames
    let mut frame_rx = state.frame_tx.subscribe();

    // Forward broadcast frames to the WebSocket
    let send_task = tokio::spawn(async move {
        loop {
            match frame_rx.recv().await {
                Ok(frame) => match serde_json::to_string(&frame) {
                    Ok(json) => {
                        if sender.send(Message::Text(json)).await.is_err() {
                            // Client disconnected
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to serialize preview frame: {}", e);
                    }
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Preview client lagged, missed {} frames", n);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // Apply incoming pointer events
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<PointerEvent>(&text) {
                Ok(event) => apply_event(&state, &event).await,
                Err(e) => {
                    tracing::warn!("Ignoring malformed pointer event: {}", e);
                }
            },
            Ok(Message::Close(_)) => break,
            Err(_) => break,
            _ => {}
        }
    }

    send_task.abort();
}

/// Apply one pointer event to the shared map and broadcast the results.
async fn apply_event(state: &PreviewState, event: &PointerEvent) {
    let mut map = state.map.write().await;

    // Look the payload up before the event mutates hover state
    let city = map
        .regions()
        .iter()
        .find(|r| r.id == event.region_id())
        .map(Region::info);

    let changed = map.handle_event(event);

    // Unknown ids produce no frame: nothing changed, so clients see nothing
    let frame = match event {
        PointerEvent::Enter { .. } => city.map(|city| PreviewFrame::Hover { city: Some(city) }),
        PointerEvent::Leave { .. } => Some(PreviewFrame::Hover { city: None }),
        PointerEvent::Click { .. } => city.map(|city| PreviewFrame::Click { city }),
    };
    if let Some(frame) = frame {
        // Send errors just mean no client is connected right now
        let _ = state.frame_tx.send(frame);
    }
    if changed {
        let _ = state.frame_tx.send(PreviewFrame::Scene { svg: map.to_svg() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapOptions;

    fn test_state() -> PreviewState {
        let (frame_tx, _) = crate::preview::create_frame_channel();
        PreviewState {
            map: Arc::new(RwLock::new(TurkeyMap::new(MapOptions::default()))),
            frame_tx,
        }
    }

    #[tokio::test]
    async fn enter_broadcasts_hover_then_scene() {
        let state = test_state();
        let mut rx = state.frame_tx.subscribe();

        apply_event(
            &state,
            &PointerEvent::Enter {
                id: "ankara".to_string(),
            },
        )
        .await;

        match rx.recv().await.unwrap() {
            PreviewFrame::Hover { city: Some(city) } => assert_eq!(city.id, "ankara"),
            other => panic!("expected hover frame, got {other:?}"),
        }
        match rx.recv().await.unwrap() {
            PreviewFrame::Scene { svg } => assert!(svg.contains("#dc3522")),
            other => panic!("expected scene frame, got {other:?}"),
        }
        assert_eq!(state.map.read().await.hovered_id(), Some("ankara"));
    }

    #[tokio::test]
    async fn click_broadcasts_payload_without_scene() {
        let state = test_state();
        let mut rx = state.frame_tx.subscribe();

        apply_event(
            &state,
            &PointerEvent::Click {
                id: "izmir".to_string(),
            },
        )
        .await;

        match rx.recv().await.unwrap() {
            PreviewFrame::Click { city } => assert_eq!(city.plate_number, 35),
            other => panic!("expected click frame, got {other:?}"),
        }
        // No state change, so no scene frame followed
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unknown_region_enter_broadcasts_nothing() {
        let state = test_state();
        let mut rx = state.frame_tx.subscribe();

        apply_event(
            &state,
            &PointerEvent::Enter {
                id: "atlantis".to_string(),
            },
        )
        .await;

        // No hover frame (that would read as a spurious leave) and no
        // scene frame, since nothing changed.
        assert!(rx.try_recv().is_err());
        assert_eq!(state.map.read().await.hovered_id(), None);
    }
}
