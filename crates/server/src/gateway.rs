use crate::feed::HighlightFeed;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use repograph_graph::GraphStore;
use repograph_protocol::{HighlightUpdate, ViewerMessage};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Shared state injected into every connection handler.
struct GatewayState {
    store: Arc<GraphStore>,
    feed: HighlightFeed,
}

/// Build the viewer-facing router: a single `/ws` upgrade endpoint.
pub fn router(store: Arc<GraphStore>, feed: HighlightFeed) -> Router {
    let state = Arc::new(GatewayState { store, feed });
    Router::new()
        .route("/ws", get(ws_handler))
        .with_state(state)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<GatewayState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_viewer(socket, state))
}

/// Serve one viewer: INIT with the full snapshot, then forward UPDATEs
/// until either side goes away.
async fn handle_viewer(socket: WebSocket, state: Arc<GatewayState>) {
    // subscribe before snapshotting so no update slips between the two
    let updates = state.feed.subscribe();
    let snapshot = state.store.snapshot();

    let (mut sender, receiver) = socket.split();

    let init = ViewerMessage::init(snapshot);
    let payload = match serde_json::to_string(&init) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Failed to encode INIT message: {err}");
            return;
        }
    };
    if sender.send(Message::Text(payload)).await.is_err() {
        debug!("Viewer went away before INIT");
        return;
    }

    info!("Viewer connected ({} live)", state.feed.viewer_count());

    let mut send_task = tokio::spawn(forward_updates(sender, updates));
    let mut recv_task = tokio::spawn(drain_inbound(receiver));

    // either task ending means the connection is done
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    info!("Viewer disconnected");
}

/// Forward highlight updates to one viewer until its socket or the feed
/// closes.
async fn forward_updates(
    mut sender: SplitSink<WebSocket, Message>,
    mut updates: broadcast::Receiver<HighlightUpdate>,
) {
    loop {
        match updates.recv().await {
            Ok(update) => {
                let message = ViewerMessage::update(update.highlighted);
                let payload = match serde_json::to_string(&message) {
                    Ok(payload) => payload,
                    Err(err) => {
                        warn!("Failed to encode UPDATE message: {err}");
                        continue;
                    }
                };
                // a failed send skips this viewer only; teardown happens
                // through the connection tasks, not the broadcast
                if sender.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                debug!("Viewer lagged; skipped {skipped} updates");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Inbound viewer frames carry no semantics; this loop exists only to
/// detect disconnection.
async fn drain_inbound(mut receiver: SplitStream<WebSocket>) {
    while let Some(message) = receiver.next().await {
        match message {
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }
}
