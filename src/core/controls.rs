use super::params::{ParamKey, ParamUpdate};

/// Range slider description for one numeric parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub key: ParamKey,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub note: Option<&'static str>,
}

impl SliderSpec {
    /// Update for a raw slider reading; `None` for non-numeric keys.
    pub fn update(&self, value: f32) -> Option<ParamUpdate> {
        match self.key {
            ParamKey::FollowSpeed => Some(ParamUpdate::FollowSpeed(value)),
            ParamKey::Lag => Some(ParamUpdate::Lag(value)),
            ParamKey::Shake => Some(ParamUpdate::Shake(value)),
            ParamKey::Easing => None,
        }
    }
}

pub const LAB_SLIDERS: [SliderSpec; 3] = [
    SliderSpec {
        key: ParamKey::FollowSpeed,
        label: "Follow Speed",
        min: 0.0,
        max: 1.0,
        step: 0.005,
        note: Some("How quickly camera closes distance to target each frame."),
    },
    SliderSpec {
        key: ParamKey::Lag,
        label: "Lag",
        min: 0.0,
        max: 1.0,
        step: 0.005,
        note: Some("Offsets based on velocity to simulate trailing camera."),
    },
    SliderSpec {
        key: ParamKey::Shake,
        label: "Shake",
        min: 0.0,
        max: 10.0,
        step: 0.1,
        note: Some("Click canvas to add instantaneous shake (decays over time)."),
    },
];

pub const COMPARE_SLIDERS: [SliderSpec; 2] = [
    SliderSpec {
        key: ParamKey::FollowSpeed,
        label: "Follow Speed",
        min: 0.0,
        max: 1.0,
        step: 0.01,
        note: None,
    },
    SliderSpec {
        key: ParamKey::Lag,
        label: "Lag",
        min: 0.0,
        max: 1.0,
        step: 0.01,
        note: None,
    },
];

pub const EASING_NOTE: &str = "Transforms follow speed non-linearly.";

/// Slider readout text.
#[inline]
pub fn format_value(value: f32) -> String {
    format!("{:.3}", value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    ResetDefaults,
    Share,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::TogglePause),
        "r" | "R" => Some(KeyAction::ResetDefaults),
        "s" | "S" => Some(KeyAction::Share),
        _ => None,
    }
}
