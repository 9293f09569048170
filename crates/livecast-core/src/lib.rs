//! Livecast mobile core business logic.
//!
//! Home and room screen state for a live-streaming client built on a
//! third-party AV engine. The engine itself (capture, encoding, transport,
//! room signaling) sits behind the [`engine::AvEngine`] seam; native UI
//! shells supply the real implementation and all rendering.

pub mod config;
pub mod confirm;
pub mod engine;
pub mod errors;
pub mod events;
pub mod home;
pub mod identity;
pub mod logging;
pub mod membership;
pub mod permissions;
pub mod room;

pub use config::{Role, RoomConfig};
pub use errors::LivecastError;
pub use events::SessionEvent;
pub use home::HomeFlow;
pub use room::RoomSession;
