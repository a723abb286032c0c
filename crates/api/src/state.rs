use std::sync::Arc;

use oficio_db::RosterStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The roster store, built once at startup.
    pub store: Arc<RosterStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
