//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP or terminal types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A preconfigured remote image-analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub description: String,
}

/// Reference to a locally selected image.
///
/// `locator` is an opaque path/URI; the adapter that produced it knows how to
/// resolve it into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub locator: String,
    pub display_name: Option<String>,
    pub mime_type: Option<String>,
}

impl ImageRef {
    /// File name sent in the multipart part. Falls back to the last path
    /// segment of the locator, then to `"upload.jpg"`.
    pub fn file_name(&self) -> String {
        if let Some(name) = self.display_name.as_deref() {
            if !name.is_empty() {
                return name.to_string();
            }
        }
        self.locator
            .rsplit(['/', '\\'])
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "upload.jpg".to_string())
    }

    /// MIME type sent in the multipart part. Defaults to `image/jpeg`.
    pub fn mime(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("image/jpeg")
    }
}

/// Upload lifecycle of a single analysis request.
///
/// `Success` and `Error` are not final: `select_domain` or `reset_flow`
/// returns the machine to `Idle`. No transition is retried automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadState {
    #[default]
    Idle,
    Selecting,
    Uploading,
    Success,
    Error,
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UploadState::Idle => "idle",
            UploadState::Selecting => "selecting",
            UploadState::Uploading => "uploading",
            UploadState::Success => "success",
            UploadState::Error => "error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(locator: &str, name: Option<&str>, mime: Option<&str>) -> ImageRef {
        ImageRef {
            locator: locator.to_string(),
            display_name: name.map(str::to_string),
            mime_type: mime.map(str::to_string),
        }
    }

    #[test]
    fn file_name_prefers_display_name() {
        let img = image("/photos/a.png", Some("portrait.png"), None);
        assert_eq!(img.file_name(), "portrait.png");
    }

    #[test]
    fn file_name_falls_back_to_last_path_segment() {
        let img = image("/photos/holiday/beach.jpg", None, None);
        assert_eq!(img.file_name(), "beach.jpg");

        let img = image("C:\\photos\\beach.jpg", None, None);
        assert_eq!(img.file_name(), "beach.jpg");
    }

    #[test]
    fn file_name_generic_fallback() {
        assert_eq!(image("", None, None).file_name(), "upload.jpg");
        assert_eq!(image("/photos/", None, None).file_name(), "upload.jpg");
        // An empty display name does not shadow the fallback chain.
        assert_eq!(image("", Some(""), None).file_name(), "upload.jpg");
    }

    #[test]
    fn mime_defaults_to_jpeg() {
        assert_eq!(image("a.png", None, None).mime(), "image/jpeg");
        assert_eq!(image("a.png", None, Some("image/png")).mime(), "image/png");
    }

    #[test]
    fn upload_state_starts_idle() {
        assert_eq!(UploadState::default(), UploadState::Idle);
        assert_eq!(UploadState::Success.to_string(), "success");
    }
}
