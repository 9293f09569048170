use std::future::Future;

use crate::errors::LivecastError;

/// Device media capabilities the room screens depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPermission {
    Microphone,
    Camera,
}

/// Seam to the mobile OS permission APIs (query + prompt).
pub trait PermissionProvider: Send + Sync {
    /// Whether the permission is currently granted.
    fn check(
        &self,
        permission: MediaPermission,
    ) -> impl Future<Output = Result<bool, LivecastError>> + Send;

    /// Prompt the user for the given permissions.
    fn request(
        &self,
        permissions: &[MediaPermission],
    ) -> impl Future<Output = Result<(), LivecastError>> + Send;
}

/// Request any media permission not already granted.
///
/// A failed check marks both permissions ungranted; a failed request is
/// logged and otherwise ignored, with no retry. A missing grant never blocks
/// joining a room.
pub async fn ensure_media_permissions<P: PermissionProvider>(provider: &P) {
    let mut missing = Vec::new();

    let microphone = provider.check(MediaPermission::Microphone).await;
    let camera = provider.check(MediaPermission::Camera).await;
    match (microphone, camera) {
        (Ok(microphone_granted), Ok(camera_granted)) => {
            if !microphone_granted {
                missing.push(MediaPermission::Microphone);
            }
            if !camera_granted {
                missing.push(MediaPermission::Camera);
            }
        }
        _ => {
            missing.push(MediaPermission::Microphone);
            missing.push(MediaPermission::Camera);
        }
    }

    if missing.is_empty() {
        return;
    }

    tracing::info!("requesting media permissions: {missing:?}");
    if let Err(e) = provider.request(&missing).await {
        tracing::warn!("media permission request failed: {e}");
    }
}
