use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{Role, RoomConfig};
use crate::engine::{AppCredentials, AvEngine};
use crate::errors::LivecastError;
use crate::identity::LocalIdentity;
use crate::permissions::{self, PermissionProvider};

/// Parameters handed from the home screen to the room screen.
#[derive(Debug, Clone)]
pub struct JoinRequest {
    pub config: RoomConfig,
    pub user_id: String,
    pub live_id: String,
}

/// Home screen flow: engine init, permission grants, role selection.
pub struct HomeFlow<E: AvEngine> {
    engine: Arc<E>,
    credentials: AppCredentials,
    identity: LocalIdentity,
    ready: AtomicBool,
}

impl<E: AvEngine> HomeFlow<E> {
    pub fn new(engine: Arc<E>, credentials: AppCredentials, identity: LocalIdentity) -> Self {
        Self {
            engine,
            credentials,
            identity,
            ready: AtomicBool::new(false),
        }
    }

    pub fn identity(&self) -> &LocalIdentity {
        &self.identity
    }

    /// Initialize the engine, then request any missing media permissions.
    /// Permissions are only requested once init has resolved.
    pub async fn start<P: PermissionProvider>(&self, provider: &P) -> Result<(), LivecastError> {
        self.engine.init(&self.credentials, &self.identity).await?;
        tracing::info!("engine initialized for user {}", self.identity.user_id);
        permissions::ensure_media_permissions(provider).await;
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Build the room entry parameters for the chosen role.
    ///
    /// Fails until [`HomeFlow::start`] has completed: joining must not begin
    /// before engine initialization.
    pub fn join_request(&self, role: Role, live_id: &str) -> Result<JoinRequest, LivecastError> {
        if !self.ready.load(Ordering::SeqCst) {
            return Err(LivecastError::NotInitialized);
        }
        Ok(JoinRequest {
            config: role.preset().clone(),
            user_id: self.identity.user_id.clone(),
            live_id: live_id.to_string(),
        })
    }
}
