use crate::engine::UserInfo;

/// Per-room-visit membership state: current host and member count.
///
/// Updated by the room event loop from engine events. The engine roster is
/// the source of truth for counts; they are recomputed from it, never
/// incremented locally, to avoid drift.
#[derive(Debug, Clone)]
pub struct Membership {
    host_id: Option<String>,
    member_count: usize,
}

impl Membership {
    /// Seed state at room entry. A publisher starts as its own host.
    pub fn new(initial_host: Option<String>) -> Self {
        Self {
            host_id: initial_host,
            member_count: 1,
        }
    }

    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// First reported user becomes host. Returns true if the host changed.
    ///
    /// With several simultaneous publishers the engine's ordering decides;
    /// first-wins is kept from the source behavior.
    pub fn on_audio_video_available(&mut self, users: &[UserInfo]) -> bool {
        match users.first() {
            Some(first) if self.host_id.as_deref() != Some(first.user_id.as_str()) => {
                self.host_id = Some(first.user_id.clone());
                true
            }
            _ => false,
        }
    }

    /// Recompute the count from the roster. Returns true if it changed.
    pub fn on_user_joined(&mut self, roster_size: usize) -> bool {
        let changed = self.member_count != roster_size;
        self.member_count = roster_size;
        changed
    }

    /// Clears the host if it is among the departing users, then recomputes
    /// the count from the roster. The host is never left pointing at a user
    /// who is gone. Returns (host_cleared, count_changed).
    pub fn on_user_left(&mut self, departed: &[UserInfo], roster_size: usize) -> (bool, bool) {
        let host_cleared = match self.host_id.as_deref() {
            Some(host) if departed.iter().any(|u| u.user_id == host) => {
                self.host_id = None;
                true
            }
            _ => false,
        };
        let count_changed = self.member_count != roster_size;
        self.member_count = roster_size;
        (host_cleared, count_changed)
    }
}
