use super::constants::{
    LAG_OFFSET_SCALE, MAX_FRAME_DT_SEC, POINTER_PULL, SHAKE_DECAY_PER_SEC, SHAKE_MAX,
    VELOCITY_DAMPING,
};
use super::easing::lerp;
use super::params::CameraParams;
use glam::Vec2;
use rand::Rng;

/// Whether the frame loop keeps scheduling frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Running,
    Paused,
}

/// Ephemeral per-run state. Rebuilt (centered, at rest) on every restart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimState {
    pub target_pos: Vec2,
    pub target_vel: Vec2,
    pub camera_pos: Vec2,
    pub shake: f32,
}

impl SimState {
    pub fn centered(viewport: Vec2) -> Self {
        let center = viewport * 0.5;
        Self {
            target_pos: center,
            target_vel: Vec2::ZERO,
            camera_pos: center,
            shake: 0.0,
        }
    }
}

/// Everything the renderer needs for one frame, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameView {
    pub viewport: Vec2,
    /// Applied before drawing: centers the camera, plus shake jitter.
    pub translation: Vec2,
    pub target: Vec2,
    pub camera: Vec2,
    pub shake: f32,
}

/// Camera-follow simulation for one view.
pub struct CameraSim {
    params: CameraParams,
    viewport: Vec2,
    state: SimState,
    loop_state: LoopState,
    pending_pointer: Option<Vec2>,
}

impl CameraSim {
    pub fn new(params: CameraParams, viewport: Vec2) -> Self {
        Self {
            params,
            viewport,
            state: SimState::centered(viewport),
            loop_state: LoopState::Running,
            pending_pointer: None,
        }
    }

    #[inline]
    pub fn params(&self) -> CameraParams {
        self.params
    }

    #[inline]
    pub fn state(&self) -> SimState {
        self.state
    }

    #[inline]
    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    /// Record the latest pointer sample (viewport units). It is consumed by
    /// the next `step`; later samples overwrite earlier ones.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        self.pending_pointer = Some(pointer);
    }

    /// Add the configured shake amount, capped at `SHAKE_MAX`.
    pub fn trigger_shake(&mut self) {
        self.state.shake = (self.state.shake + self.params.shake).min(SHAKE_MAX);
    }

    /// Advance one frame. Always completes the frame; returns whether the
    /// loop should schedule another.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let s = &mut self.state;

        if let Some(pointer) = self.pending_pointer.take() {
            s.target_vel = (pointer - s.target_pos) * POINTER_PULL;
        }

        // Neither the damping nor the follow factor is scaled by dt.
        s.target_pos += s.target_vel;
        s.target_vel *= VELOCITY_DAMPING;

        let desired = s.target_pos - s.target_vel * (self.params.lag * LAG_OFFSET_SCALE);
        let alpha = self.params.alpha();
        s.camera_pos = Vec2::new(
            lerp(s.camera_pos.x, desired.x, alpha),
            lerp(s.camera_pos.y, desired.y, alpha),
        );

        if s.shake > 0.0 {
            s.shake = (s.shake - SHAKE_DECAY_PER_SEC * dt).max(0.0);
        }

        self.is_running()
    }

    /// Scene for the current state. `rng` supplies the shake jitter.
    pub fn frame_view<R: Rng + ?Sized>(&self, rng: &mut R) -> FrameView {
        let shake = self.state.shake;
        let jitter = Vec2::new(
            (rng.gen::<f32>() - 0.5) * shake,
            (rng.gen::<f32>() - 0.5) * shake,
        );
        FrameView {
            viewport: self.viewport,
            translation: -self.state.camera_pos + self.viewport * 0.5 + jitter,
            target: self.state.target_pos,
            camera: self.state.camera_pos,
            shake,
        }
    }

    /// Running -> Paused. The state is kept so the last frame stays visible.
    /// Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if self.loop_state == LoopState::Paused {
            return false;
        }
        self.loop_state = LoopState::Paused;
        log::debug!("[sim] paused");
        true
    }

    /// Paused -> Running, restarting from a centered state.
    /// Returns false if already running.
    pub fn resume(&mut self) -> bool {
        if self.loop_state == LoopState::Running {
            return false;
        }
        self.restart();
        self.loop_state = LoopState::Running;
        log::debug!("[sim] resumed");
        true
    }

    /// Flip between Running and Paused; returns the new state.
    pub fn toggle(&mut self) -> LoopState {
        if !self.pause() {
            self.resume();
        }
        self.loop_state
    }

    /// Install new parameters. Always a restart: the state is rebuilt
    /// centered and at rest. The loop state is left as it was.
    pub fn apply_params(&mut self, params: CameraParams) {
        self.params = params;
        self.restart();
        log::debug!("[sim] restart with {:?}", params);
    }

    fn restart(&mut self) {
        self.state = SimState::centered(self.viewport);
        self.pending_pointer = None;
    }
}
