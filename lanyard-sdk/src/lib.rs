//! A client SDK for Lanyard-style presence gateways: WebSocket endpoints that push a single
//! subject's Discord presence as JSON `{op, d}` frames. The client keeps the connection alive
//! with heartbeats and reconnects on its own after a fixed delay, so a handler registered once
//! keeps receiving updates for the lifetime of the [Client].
//! # Watching a subject
//! ```no_run
//! use lanyard_sdk::{Client, Event, RenderState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new(
//!         "wss://api.lanyard.rest/socket".to_string(),
//!         "321284718035468288".to_string(),
//!     )
//!     .unwrap();
//!
//!     client.add_event_handler_closure(|event| {
//!         if let Event::PresenceUpdate(presence) = event {
//!             let mut render = RenderState::default();
//!             render.apply(&presence);
//!             println!("{} {}", render.status_text, render.username.unwrap_or_default());
//!         }
//!     });
//! }
//! ```

pub mod client;
mod connection;
pub mod event;
pub mod event_handler;
mod gateway;
pub mod models;
pub mod preferences;
pub mod sdk_error;
mod session;
pub mod status;

pub use client::Client;
pub use event::Event;
pub use models::presence::{Activity, Presence, Subject};
pub use models::render_state::{ActivityLine, RenderState};
pub use preferences::Preferences;
pub use sdk_error::SdkError;
pub use status::Status;
