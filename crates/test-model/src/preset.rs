use serde::{Deserialize, Serialize};

/// The preset reply for one user turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// Text returned by the model.
    pub content: String,
    /// If set, the request fails with this kind of error instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<PresetFailure>,
}

/// Error kinds a preset reply can fail with.
///
/// Mirrors `crease_model::ErrorKind`, which is not serializable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetFailure {
    Unavailable,
    RateLimitExceeded,
    InvalidResponse,
}

impl PresetReply {
    /// Creates a `PresetReply` with the specified text.
    #[inline]
    pub fn with_content<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            failure: None,
        }
    }

    /// Creates a `PresetReply` that always fails.
    #[inline]
    pub fn failing(failure: PresetFailure) -> Self {
        Self {
            content: String::new(),
            failure: Some(failure),
        }
    }
}
