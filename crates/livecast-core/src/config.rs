use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Buttons that can appear in the room menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuBarButton {
    ToggleCamera,
    ToggleMicrophone,
    SwitchCamera,
    SwitchAudioOutput,
    Leave,
}

/// Immutable per-room-visit configuration, chosen on the home screen and
/// handed to the room screen unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub show_sound_waves_in_audio_mode: bool,
    pub turn_on_camera_when_joining: bool,
    pub turn_on_microphone_when_joining: bool,
    pub use_speaker_when_joining: bool,
    pub show_in_room_message_button: bool,
    pub menu_bar_buttons: Vec<MenuBarButton>,
    pub menu_bar_buttons_max_count: usize,
    pub menu_bar_extended_buttons: Vec<MenuBarButton>,
}

impl RoomConfig {
    /// Whether this config publishes local audio or video on join.
    pub fn publishes_on_join(&self) -> bool {
        self.turn_on_camera_when_joining || self.turn_on_microphone_when_joining
    }
}

/// Preset for the broadcasting side: camera, microphone, and speaker on,
/// media controls in the menu bar.
pub static HOST_DEFAULT: LazyLock<RoomConfig> = LazyLock::new(|| RoomConfig {
    show_sound_waves_in_audio_mode: true,
    turn_on_camera_when_joining: true,
    turn_on_microphone_when_joining: true,
    use_speaker_when_joining: true,
    show_in_room_message_button: true,
    menu_bar_buttons: vec![
        MenuBarButton::ToggleCamera,
        MenuBarButton::ToggleMicrophone,
        MenuBarButton::SwitchCamera,
    ],
    menu_bar_buttons_max_count: 5,
    menu_bar_extended_buttons: Vec::new(),
});

/// Preset for the viewing side: playback only, no menu bar controls.
pub static AUDIENCE_DEFAULT: LazyLock<RoomConfig> = LazyLock::new(|| RoomConfig {
    show_sound_waves_in_audio_mode: true,
    turn_on_camera_when_joining: false,
    turn_on_microphone_when_joining: false,
    use_speaker_when_joining: true,
    show_in_room_message_button: true,
    menu_bar_buttons: Vec::new(),
    menu_bar_buttons_max_count: 0,
    menu_bar_extended_buttons: Vec::new(),
});

/// Role chosen on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Host,
    Audience,
}

impl Role {
    /// The preset config for this role. Pure lookup over process-wide
    /// constants; callers that need to tweak a config clone it first.
    pub fn preset(self) -> &'static RoomConfig {
        match self {
            Role::Host => &HOST_DEFAULT,
            Role::Audience => &AUDIENCE_DEFAULT,
        }
    }
}
