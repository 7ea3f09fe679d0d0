//! YouTube reference parsing and derived-URL helpers.
//!
//! Editors paste whatever URL shape YouTube handed them; the store keeps
//! only the canonical 11-character video id. Thumbnail and embed URLs are
//! derived from that id at serve time.

use regex::Regex;

/// Thumbnail quality variants offered by `img.youtube.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    Default,
    MqDefault,
    HqDefault,
    SdDefault,
    MaxResDefault,
}

impl ThumbnailQuality {
    fn as_str(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::MqDefault => "mqdefault",
            ThumbnailQuality::HqDefault => "hqdefault",
            ThumbnailQuality::SdDefault => "sddefault",
            ThumbnailQuality::MaxResDefault => "maxresdefault",
        }
    }
}

/// Player flags for derived embed URLs.
#[derive(Debug, Clone, Copy)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub mute: bool,
    pub loop_: bool,
    pub controls: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            mute: false,
            loop_: false,
            controls: true,
        }
    }
}

/// Extract the canonical 11-character video id from a YouTube reference.
///
/// Recognized shapes:
/// - `https://www.youtube.com/watch?v=<id>` (with any extra query params)
/// - `https://youtu.be/<id>`
/// - `https://www.youtube.com/embed/<id>`
/// - `https://www.youtube.com/v/<id>` (legacy)
/// - a bare 11-character id
///
/// Returns `None` when no id can be resolved.
pub fn extract_id(reference: &str) -> Option<String> {
    let reference = reference.trim();

    // Bare id: exactly 11 chars from the id alphabet.
    let bare = Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("static regex");
    if bare.is_match(reference) {
        return Some(reference.to_string());
    }

    // URL shapes. Each pattern captures the id in group 1.
    let patterns = [
        r"(?:youtube\.com|youtube-nocookie\.com)/watch\?(?:[^#]*&)?v=([A-Za-z0-9_-]{11})",
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"(?:youtube\.com|youtube-nocookie\.com)/embed/([A-Za-z0-9_-]{11})",
        r"youtube\.com/v/([A-Za-z0-9_-]{11})",
    ];
    for pattern in patterns {
        let re = Regex::new(pattern).expect("static regex");
        if let Some(caps) = re.captures(reference) {
            return Some(caps[1].to_string());
        }
    }
    None
}

/// Thumbnail URL for a video id at the given quality.
pub fn thumbnail_url(id: &str, quality: ThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{id}/{}.jpg", quality.as_str())
}

/// Embed URL for a video id with the given player flags.
///
/// Looping a single video requires the `playlist` param to be set to the
/// video's own id, per the YouTube IFrame API.
pub fn embed_url(id: &str, options: &EmbedOptions) -> String {
    let mut url = format!(
        "https://www.youtube.com/embed/{id}?autoplay={}&mute={}&controls={}",
        options.autoplay as u8, options.mute as u8, options.controls as u8
    );
    if options.loop_ {
        url.push_str(&format!("&loop=1&playlist={id}"));
    }
    url
}
