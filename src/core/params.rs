use super::constants::{DEFAULT_FOLLOW_SPEED, DEFAULT_LAG, DEFAULT_SHAKE};
use super::easing;
use std::fmt;

/// Curve applied to `follow_speed` before it is used as the per-frame
/// interpolation factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
    QuadOut,
}

impl Easing {
    pub const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseInOut, Easing::QuadOut];

    /// Wire/display name, as used in query strings and the easing select.
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "easeInOut",
            Easing::QuadOut => "quadOut",
        }
    }

    /// Exact, case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Easing> {
        Easing::ALL.into_iter().find(|e| e.as_str() == name)
    }

    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => easing::linear(t),
            Easing::EaseInOut => easing::ease_in_out(t),
            Easing::QuadOut => easing::quad_out(t),
        }
    }
}

impl AsRef<str> for Easing {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera-follow tuning values. Replaced wholesale on every change.
///
/// Ranges are enforced by the input widgets, not here:
/// - `follow_speed`: \[0, 1\], fraction of remaining distance closed per frame
/// - `lag`: \[0, 1\], scales the velocity-based trailing offset
/// - `shake`: >= 0, amount added to the shake accumulator per trigger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    pub follow_speed: f32,
    pub lag: f32,
    pub easing: Easing,
    pub shake: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            follow_speed: DEFAULT_FOLLOW_SPEED,
            lag: DEFAULT_LAG,
            easing: Easing::default(),
            shake: DEFAULT_SHAKE,
        }
    }
}

/// Names of the individual parameter fields, in query-string order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    FollowSpeed,
    Lag,
    Easing,
    Shake,
}

impl ParamKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKey::FollowSpeed => "followSpeed",
            ParamKey::Lag => "lag",
            ParamKey::Easing => "easing",
            ParamKey::Shake => "shake",
        }
    }
}

/// A single-field replacement, see `ParamStore::set_param`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamUpdate {
    FollowSpeed(f32),
    Lag(f32),
    Easing(Easing),
    Shake(f32),
}

impl CameraParams {
    /// Copy of `self` with one field replaced.
    pub fn with(self, update: ParamUpdate) -> Self {
        let mut next = self;
        match update {
            ParamUpdate::FollowSpeed(v) => next.follow_speed = v,
            ParamUpdate::Lag(v) => next.lag = v,
            ParamUpdate::Easing(e) => next.easing = e,
            ParamUpdate::Shake(v) => next.shake = v,
        }
        next
    }

    /// Interpolation factor for one frame: the easing curve applied to
    /// `follow_speed`.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.easing.apply(self.follow_speed)
    }
}

/// Partial parameter set. `None` fields take their default on hydration
/// and are omitted when encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParamPatch {
    pub follow_speed: Option<f32>,
    pub lag: Option<f32>,
    pub easing: Option<Easing>,
    pub shake: Option<f32>,
}

impl ParamPatch {
    /// Merge over the defaults (never over some current state).
    pub fn over_defaults(&self) -> CameraParams {
        let d = CameraParams::default();
        CameraParams {
            follow_speed: self.follow_speed.unwrap_or(d.follow_speed),
            lag: self.lag.unwrap_or(d.lag),
            easing: self.easing.unwrap_or(d.easing),
            shake: self.shake.unwrap_or(d.shake),
        }
    }
}

impl From<&CameraParams> for ParamPatch {
    fn from(p: &CameraParams) -> Self {
        Self {
            follow_speed: Some(p.follow_speed),
            lag: Some(p.lag),
            easing: Some(p.easing),
            shake: Some(p.shake),
        }
    }
}

impl From<CameraParams> for ParamPatch {
    fn from(p: CameraParams) -> Self {
        ParamPatch::from(&p)
    }
}
