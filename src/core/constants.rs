/// Simulation tuning constants.
///
/// These keep the per-frame arithmetic free of magic numbers. None of the
/// per-frame factors are normalized by elapsed time; they assume ~60 Hz.

// Fraction of the target->pointer vector taken as the new target velocity
pub const POINTER_PULL: f32 = 0.12;

// Per-frame velocity damping (velocity *= VELOCITY_DAMPING)
pub const VELOCITY_DAMPING: f32 = 1.0 - POINTER_PULL;

// Scales lag * velocity into a trailing offset for the desired camera position
pub const LAG_OFFSET_SCALE: f32 = 80.0;

// Upper bound on a single frame's elapsed time (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.032;

// Shake accumulator
pub const SHAKE_DECAY_PER_SEC: f32 = 60.0;
pub const SHAKE_MAX: f32 = 20.0;

// Parameter defaults
pub const DEFAULT_FOLLOW_SPEED: f32 = 0.12;
pub const DEFAULT_LAG: f32 = 0.1;
pub const DEFAULT_SHAKE: f32 = 0.0;

// Share links
pub const SHARE_PATH: &str = "/labs/camera";
