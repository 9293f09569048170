use std::future::Future;

use tokio::sync::mpsc;

use crate::errors::LivecastError;
use crate::identity::LocalIdentity;

/// App credentials for the AV engine.
#[derive(Debug, Clone)]
pub struct AppCredentials {
    pub app_id: u32,
    pub app_sign: String,
}

/// One entry in the engine's participant roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user_id: String,
    pub user_name: String,
}

/// Membership events pushed by the AV engine after joining a room.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Participants whose audio/video just became available, in engine order.
    AudioVideoAvailable(Vec<UserInfo>),
    UserJoined(Vec<UserInfo>),
    UserLeft(Vec<UserInfo>),
}

/// Seam to the closed-source AV engine (capture, encoding, transport,
/// room signaling).
///
/// Control calls are fire-and-forget: the engine owns delivery and failure
/// handling, and this layer observes neither. The event stream is handed out
/// as an owned channel; dropping the receiver deregisters, so a room visit
/// cannot leave a stale callback behind.
pub trait AvEngine: Send + Sync + 'static {
    /// Initialize the engine for the given identity. Must resolve before
    /// permission requests or any room operation.
    fn init(
        &self,
        credentials: &AppCredentials,
        identity: &LocalIdentity,
    ) -> impl Future<Output = Result<(), LivecastError>> + Send;

    /// Empty `target` addresses the local user.
    fn turn_camera_on(&self, target: &str, on: bool);
    fn turn_microphone_on(&self, target: &str, on: bool);
    fn set_audio_output_to_speaker(&self, on: bool);
    fn join_room(&self, room_id: &str);
    fn leave_room(&self);

    /// Synchronous snapshot of the authoritative roster.
    fn all_users(&self) -> Vec<UserInfo>;

    /// Take the membership event stream for the current room visit.
    fn events(&self) -> mpsc::UnboundedReceiver<EngineEvent>;
}
