//! Media classification and the viewer application table.

use serde::{Deserialize, Serialize};

/// Package id of the viewer application for 360 video content.
pub const VIDEO_VIEWER_PACKAGE: &str = "com.oculus.cinema";

/// Package id of the viewer application for 360 photo content.
pub const PHOTO_VIEWER_PACKAGE: &str = "com.oculus.oculus360photos";

/// The kind of media a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    Photo,
}

impl MediaKind {
    /// Package id of the native viewer application for this media kind.
    pub fn viewer_package(self) -> &'static str {
        match self {
            MediaKind::Video => VIDEO_VIEWER_PACKAGE,
            MediaKind::Photo => PHOTO_VIEWER_PACKAGE,
        }
    }

    /// Authority segment used in viewer-application URIs.
    pub(crate) fn uri_authority(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Photo => "photo",
        }
    }
}

/// A reference to a piece of media that can be resolved to a launch request.
///
/// Valid when `media_id` is non-empty; [`crate::link::resolve`] returns
/// `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLink {
    pub media_id: String,
    pub kind: MediaKind,
}

impl MediaLink {
    pub fn new(media_id: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            media_id: media_id.into(),
            kind,
        }
    }
}
