use super::params::{CameraParams, ParamPatch, ParamUpdate};

/// Handle returned by `ParamStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CameraParams)>;

/// Owns one `CameraParams` value for a single view and notifies observers
/// on every change. No validation happens here; callers sanitize first.
pub struct ParamStore {
    params: CameraParams,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new(CameraParams::default())
    }
}

impl ParamStore {
    pub fn new(params: CameraParams) -> Self {
        Self {
            params,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn params(&self) -> CameraParams {
        self.params
    }

    /// Replace one field and notify.
    pub fn set_param(&mut self, update: ParamUpdate) {
        self.replace(self.params.with(update));
    }

    /// Merge `patch` over the defaults (not over current state) and notify.
    pub fn hydrate_from(&mut self, patch: &ParamPatch) {
        let next = patch.over_defaults();
        log::debug!("[store] hydrate {:?}", next);
        self.replace(next);
    }

    /// Install a complete parameter set and notify.
    pub fn replace(&mut self, params: CameraParams) {
        self.params = params;
        let current = self.params;
        for (_, observer) in self.observers.iter_mut() {
            observer(&current);
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.hydrate_from(&ParamPatch::default());
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&CameraParams) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }
}
