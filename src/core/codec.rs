use super::params::{CameraParams, Easing, ParamKey, ParamPatch};
use url::form_urlencoded;

// Query-string codec for camera parameters.
//
// Decoding is total: absent or malformed values are repaired to the
// caller-provided fallback and never surface as errors.

/// Decoded query-string pairs in their original order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    /// First value recorded for `key`, matching `URLSearchParams.get`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl FromIterator<(String, String)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Serialize the present fields of `patch` as `key=value` pairs joined by `&`.
/// Fields that are `None` are omitted.
pub fn encode(patch: &ParamPatch) -> String {
    let fields = [
        (ParamKey::FollowSpeed, patch.follow_speed.map(|v| v.to_string())),
        (ParamKey::Lag, patch.lag.map(|v| v.to_string())),
        (ParamKey::Easing, patch.easing.map(|e| e.as_str().to_string())),
        (ParamKey::Shake, patch.shake.map(|v| v.to_string())),
    ];
    let mut out = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &fields {
        if let Some(value) = value {
            out.append_pair(key.as_str(), value);
        }
    }
    out.finish()
}

#[inline]
pub fn encode_params(params: &CameraParams) -> String {
    encode(&ParamPatch::from(params))
}

/// Parse `raw` as a float; `fallback` when absent, empty, unparseable or
/// not finite. Surrounding whitespace is ignored.
pub fn decode_number(raw: Option<&str>, fallback: f32) -> f32 {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.trim().parse::<f32>() {
        Ok(n) if n.is_finite() => n,
        _ => fallback,
    }
}

/// `raw` if it names one of `allowed` exactly, else `fallback`.
pub fn decode_enum<T: Copy + AsRef<str>>(raw: Option<&str>, allowed: &[T], fallback: T) -> T {
    let Some(raw) = raw else {
        return fallback;
    };
    allowed
        .iter()
        .copied()
        .find(|a| {
            let name: &str = a.as_ref();
            name == raw
        })
        .unwrap_or(fallback)
}

/// Full parameter set from a query map, every field defaulted independently.
pub fn decode_params(query: &QueryMap) -> CameraParams {
    let d = CameraParams::default();
    CameraParams {
        follow_speed: decode_number(query.get(ParamKey::FollowSpeed.as_str()), d.follow_speed),
        lag: decode_number(query.get(ParamKey::Lag.as_str()), d.lag),
        easing: decode_enum(query.get(ParamKey::Easing.as_str()), &Easing::ALL, d.easing),
        shake: decode_number(query.get(ParamKey::Shake.as_str()), d.shake),
    }
}

/// Split a raw query string (leading `?` optional) into decoded pairs.
/// A pair without `=` has an empty value; empty segments are skipped,
/// `+` is a space and malformed `%` escapes are kept literally.
pub fn parse_query(query: &str) -> QueryMap {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[inline]
pub fn decode_query(query: &str) -> CameraParams {
    decode_params(&parse_query(query))
}
