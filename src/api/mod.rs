//! # Callback API
//!
//! HTTP handlers for the local server started by `spotify-rg login`.
//!
//! The implicit grant returns the access token in the fragment of the redirect
//! URI, which browsers never send to a server. [`callback`] therefore serves a
//! small page whose script forwards the fragment to [`token`] as a query
//! string. [`health`] answers liveness checks.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotify_rg::api::{callback, health, token};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/token", get(token))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::{callback, token};
pub use health::health;
