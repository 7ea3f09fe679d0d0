//! Media item kinds carried by slider items.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of media a slider item references.
///
/// Stored as lowercase text in the database; parsed back through
/// [`MediaKind::parse`] at the validation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// A hosted image, identified by `url`.
    Image,
    /// A YouTube video, identified by `youtube_id`.
    Youtube,
    /// A directly hosted video file, identified by `url`.
    VideoUrl,
}

impl MediaKind {
    /// The lowercase text form stored in the `slider_items.kind` column.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Youtube => "youtube",
            MediaKind::VideoUrl => "video_url",
        }
    }

    /// Parse the stored text form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "image" => Ok(MediaKind::Image),
            "youtube" => Ok(MediaKind::Youtube),
            "video_url" => Ok(MediaKind::VideoUrl),
            other => Err(CoreError::Validation(format!(
                "Unknown media kind '{other}' (expected image, youtube, or video_url)"
            ))),
        }
    }

    /// Whether this kind is identified by a hosted `url`.
    pub fn requires_url(self) -> bool {
        matches!(self, MediaKind::Image | MediaKind::VideoUrl)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
