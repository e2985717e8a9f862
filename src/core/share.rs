use super::codec::{decode_query, encode_params};
use super::constants::SHARE_PATH;
use super::params::CameraParams;
use thiserror::Error;
use url::Url;

/// Why a pasted share link could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("link is empty")]
    Empty,
    #[error("not an absolute URL {link:?}: {source}")]
    Malformed {
        link: String,
        #[source]
        source: url::ParseError,
    },
}

/// Relative share path, e.g. `/labs/camera?followSpeed=0.12&...`.
pub fn share_path(params: &CameraParams) -> String {
    format!("{}?{}", SHARE_PATH, encode_params(params))
}

/// Absolute share link for `origin` (scheme + host, no trailing slash).
pub fn share_link(origin: &str, params: &CameraParams) -> String {
    format!("{}{}", origin.trim_end_matches('/'), share_path(params))
}

/// Parse an absolute share link into a full parameter set.
///
/// The link must parse as an absolute URL; the fragment is ignored. The
/// query is decoded with the usual repair-to-default policy, so a
/// well-formed link with missing or garbage values still imports.
pub fn import_preset(link: &str) -> Result<CameraParams, ImportError> {
    let link = link.trim();
    if link.is_empty() {
        return Err(ImportError::Empty);
    }
    let parsed = Url::parse(link).map_err(|source| ImportError::Malformed {
        link: link.to_string(),
        source,
    })?;
    Ok(decode_query(parsed.query().unwrap_or("")))
}
