//! Session middleware configuration and state-store persistence.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The visitor's
//! [`AppState`] (coordinates and nearby shop list) lives under a single
//! session key; handlers load it into a [`Store`], dispatch actions, and
//! save it back.

use sqlx::PgPool;
use tower_sessions::{Expiry, Session, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use coffee_compass_core::{AppState, Store};

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "compass_session";

/// Session key holding the visitor's application state.
pub const APP_STATE_KEY: &str = "app_state";

/// Session expiry time in seconds (1 day).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
///
/// Runs the store's own table migration before returning.
///
/// # Errors
///
/// Returns `sqlx::Error` if the session tables cannot be created.
pub async fn create_session_layer(
    pool: &PgPool,
    config: &SiteConfig,
) -> Result<SessionManagerLayer<PostgresStore>, sqlx::Error> {
    let store = PostgresStore::new(pool.clone());
    store.migrate().await?;

    // Secure cookies only when actually served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/"))
}

/// Load the visitor's state store from the session.
///
/// A fresh session yields a store with default (empty) state.
///
/// # Errors
///
/// Returns the session backend's error if the state cannot be read.
pub async fn load_store(session: &Session) -> Result<Store, tower_sessions::session::Error> {
    let state = session.get::<AppState>(APP_STATE_KEY).await?;
    Ok(state.map_or_else(Store::new, Store::from_state))
}

/// Save the visitor's state store back to the session.
///
/// # Errors
///
/// Returns the session backend's error if the state cannot be written.
pub async fn save_store(
    session: &Session,
    store: Store,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(APP_STATE_KEY, store.into_state()).await
}
