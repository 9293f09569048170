use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

use crate::config::RoomConfig;
use crate::confirm::{LeaveDecision, LeavePrompt};
use crate::engine::{AvEngine, EngineEvent};
use crate::events::{EventEmitter, SessionEvent, SessionEventListener, Subscription};
use crate::home::JoinRequest;
use crate::membership::Membership;

/// Outcome of a confirmed-leave attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left,
    Cancelled,
}

/// One room visit: entry side effects, membership tracking, teardown.
///
/// Joining applies the chosen config (camera, microphone, speaker), enters
/// the room, and starts consuming the engine's membership events. Leaving
/// tears all of that down; teardown always completes before the visit is
/// considered over, and a cancelled leave performs no teardown at all.
pub struct RoomSession<E: AvEngine> {
    engine: Arc<E>,
    live_id: String,
    config: RoomConfig,
    emitter: EventEmitter,
    membership: Arc<Mutex<Membership>>,
    event_task: Mutex<Option<JoinHandle<()>>>,
    active: AtomicBool,
}

impl<E: AvEngine> RoomSession<E> {
    /// Enter a room. Must be called on the runtime; the event loop task is
    /// spawned here and aborted on leave.
    pub fn join(engine: Arc<E>, request: JoinRequest) -> Self {
        let JoinRequest {
            config,
            user_id,
            live_id,
        } = request;

        let initial_host = config.publishes_on_join().then_some(user_id);
        let membership = Arc::new(Mutex::new(Membership::new(initial_host)));
        let emitter = EventEmitter::new();

        engine.turn_camera_on("", config.turn_on_camera_when_joining);
        engine.turn_microphone_on("", config.turn_on_microphone_when_joining);
        engine.set_audio_output_to_speaker(config.use_speaker_when_joining);
        engine.join_room(&live_id);

        let events = engine.events();
        let task = tokio::spawn(Self::event_loop(
            engine.clone(),
            events,
            membership.clone(),
            emitter.clone(),
        ));

        tracing::info!("joined room {live_id}");

        Self {
            engine,
            live_id,
            config,
            emitter,
            membership,
            event_task: Mutex::new(Some(task)),
            active: AtomicBool::new(true),
        }
    }

    pub fn live_id(&self) -> &str {
        &self.live_id
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Whether the visit is still in progress (no completed leave yet).
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub async fn host_id(&self) -> Option<String> {
        self.membership.lock().await.host_id().map(String::from)
    }

    pub async fn member_count(&self) -> usize {
        self.membership.lock().await.member_count()
    }

    /// Register a UI listener for membership changes. The registration lives
    /// as long as the returned handle.
    pub fn subscribe(&self, listener: Arc<dyn SessionEventListener>) -> Subscription {
        self.emitter.subscribe(listener)
    }

    /// Tear down local media and leave the room. Idempotent.
    pub async fn leave(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        self.engine.turn_camera_on("", false);
        self.engine.turn_microphone_on("", false);
        self.engine.set_audio_output_to_speaker(false);
        self.engine.leave_room();
        if let Some(task) = self.event_task.lock().await.take() {
            task.abort();
        }
        tracing::info!("left room {}", self.live_id);
    }

    /// Gate [`RoomSession::leave`] behind the confirmation dialog.
    ///
    /// A cancelled dialog aborts the leave entirely: no teardown, and the
    /// session stays active.
    pub async fn leave_if_confirmed(&self, prompt: LeavePrompt) -> LeaveOutcome {
        match prompt.decision().await {
            LeaveDecision::Confirmed => {
                self.leave().await;
                LeaveOutcome::Left
            }
            LeaveDecision::Cancelled => {
                tracing::debug!("leave cancelled for room {}", self.live_id);
                LeaveOutcome::Cancelled
            }
        }
    }

    async fn event_loop(
        engine: Arc<E>,
        mut events: mpsc::UnboundedReceiver<EngineEvent>,
        membership: Arc<Mutex<Membership>>,
        emitter: EventEmitter,
    ) {
        while let Some(event) = events.recv().await {
            Self::handle_event(&engine, event, &membership, &emitter).await;
        }
        tracing::debug!("room event loop ended");
    }

    async fn handle_event(
        engine: &E,
        event: EngineEvent,
        membership: &Mutex<Membership>,
        emitter: &EventEmitter,
    ) {
        match event {
            EngineEvent::AudioVideoAvailable(users) => {
                let mut m = membership.lock().await;
                if m.on_audio_video_available(&users) {
                    emitter.emit(SessionEvent::HostChanged(m.host_id().map(String::from)));
                }
            }

            EngineEvent::UserJoined(_) => {
                let roster_size = engine.all_users().len();
                let mut m = membership.lock().await;
                if m.on_user_joined(roster_size) {
                    emitter.emit(SessionEvent::MemberCountChanged(m.member_count()));
                }
            }

            EngineEvent::UserLeft(users) => {
                let roster_size = engine.all_users().len();
                let mut m = membership.lock().await;
                let (host_cleared, count_changed) = m.on_user_left(&users, roster_size);
                if host_cleared {
                    emitter.emit(SessionEvent::HostChanged(None));
                }
                if count_changed {
                    emitter.emit(SessionEvent::MemberCountChanged(m.member_count()));
                }
            }
        }
    }
}
