//! Design URL parsing.

use url::Url;

/// File and layer addressed by a design URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignUrl {
    pub file_id: String,
    pub layer_id: String,
}

/// Extracts the file and layer ids from a full design URL.
///
/// The file id is the first all-digit path segment and the layer id is the
/// `layer_id` query parameter. Returns `None` unless both are present.
///
/// # Example
///
/// ```rust
/// use dslscope_fetch::parse_design_url;
///
/// let ids = parse_design_url("https://mastergo.com/file/155675508499265?layer_id=158:0002")
///     .unwrap();
/// assert_eq!(ids.file_id, "155675508499265");
/// assert_eq!(ids.layer_id, "158:0002");
/// ```
pub fn parse_design_url(url: &str) -> Option<DesignUrl> {
    let url = Url::parse(url).ok()?;
    let file_id = url
        .path_segments()?
        .find(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))?
        .to_string();
    let layer_id = url
        .query_pairs()
        .find(|(key, _)| key == "layer_id")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())?;

    Some(DesignUrl { file_id, layer_id })
}

/// Returns true for short links, which must be resolved before parsing.
pub fn is_short_link(url: &str) -> bool {
    url.contains("/goto/")
}

/// Returns true if `url` points at a design file or short link.
pub fn is_valid_design_url(url: &str) -> bool {
    let Ok(url) = Url::parse(url) else {
        return false;
    };
    let host = url.host_str().unwrap_or_default();
    let path = url.path();
    host.contains("mastergo") && (path.contains("/goto/") || path.contains("/file/"))
}
