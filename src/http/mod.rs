pub mod envelope;
pub mod handlers;
pub mod health;
mod middleware;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::get;

use crate::domain::ContactManager;
use crate::errors::AppError;

pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared handler state. The manager is built by the caller and injected here.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<Mutex<ContactManager>>,
    pub started_at: Instant,
    pub max_body_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(manager: ContactManager) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(manager)),
            started_at: Instant::now(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    #[must_use]
    pub fn with_body_limit(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Locks the manager for one whole operation. Never hold the guard
    /// across an `.await`; mutations and export/import also do synchronous
    /// file writes while it is held.
    pub fn contacts(&self) -> Result<MutexGuard<'_, ContactManager>, AppError> {
        Ok(self.contacts.lock()?)
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

fn contact_routes(prefix: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{prefix}/contacts"),
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            &format!("{prefix}/contacts/export/json"),
            get(handlers::export_contacts),
        )
        .route(
            &format!("{prefix}/contacts/import/json"),
            get(handlers::import_contacts),
        )
        .route(
            &format!("{prefix}/contacts/:phone_number"),
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
}

/// Contact routes live at `/contacts` and under the `/api` prefix used by the
/// browser client; health endpoints only under `/api`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(contact_routes(""))
        .merge(contact_routes("/api"))
        .route("/api", get(health::health_check))
        .route("/api/", get(health::health_check))
        .route("/api/test", get(health::test_endpoint))
        .fallback(health::route_not_found)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(from_fn(middleware::cors))
        .layer(from_fn(middleware::request_logging))
        .with_state(state)
}
