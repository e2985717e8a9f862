use super::params::{CameraParams, ParamPatch, ParamUpdate};
use super::share::{import_preset, ImportError};
use super::sim::CameraSim;
use super::store::ParamStore;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SideLabel {
    A,
    B,
}

impl SideLabel {
    pub fn title(self) -> &'static str {
        match self {
            SideLabel::A => "Preset A",
            SideLabel::B => "Preset B",
        }
    }
}

/// One independent store + simulation pair.
pub struct Side {
    pub label: SideLabel,
    pub store: ParamStore,
    pub sim: CameraSim,
}

impl Side {
    pub fn new(label: SideLabel, viewport: Vec2) -> Self {
        let params = CameraParams::default();
        Self {
            label,
            store: ParamStore::new(params),
            sim: CameraSim::new(params, viewport),
        }
    }

    /// Push the store's current value into the simulation (a restart).
    pub fn sync_sim(&mut self) {
        self.sim.apply_params(self.store.params());
    }

    pub fn set_param(&mut self, update: ParamUpdate) {
        self.store.set_param(update);
        self.sync_sim();
    }

    pub fn hydrate_from(&mut self, patch: &ParamPatch) {
        self.store.hydrate_from(patch);
        self.sync_sim();
    }

    pub fn replace(&mut self, params: CameraParams) {
        self.store.replace(params);
        self.sync_sim();
    }

    pub fn reset(&mut self) {
        self.hydrate_from(&ParamPatch::default());
    }
}

/// Two sides with no cross-talk except the one-way import into A.
pub struct Comparison {
    pub a: Side,
    pub b: Side,
}

impl Comparison {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            a: Side::new(SideLabel::A, viewport),
            b: Side::new(SideLabel::B, viewport),
        }
    }

    pub fn side_mut(&mut self, label: SideLabel) -> &mut Side {
        match label {
            SideLabel::A => &mut self.a,
            SideLabel::B => &mut self.b,
        }
    }

    /// Parse `link` and install the result into side A. On error nothing
    /// changes on either side.
    pub fn import_into_a(&mut self, link: &str) -> Result<CameraParams, ImportError> {
        let params = import_preset(link)?;
        self.a.replace(params);
        Ok(params)
    }
}
