//! Filesystem media picker. An inquire path prompt stands in for a gallery.
//!
//! Esc cancels the pick. An OS permission denial maps to
//! `DomainError::Permission` so the flow can alert without storing an error.

use crate::domain::{DomainError, ImageRef};
use crate::ports::MediaPickerPort;
use inquire::Text;
use std::io::ErrorKind;
use std::path::Path;

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// Builds an ImageRef for an existing, readable file at `path`.
fn image_ref_for_path(path: &Path) -> Result<ImageRef, DomainError> {
    let not_readable = |e: std::io::Error| match e.kind() {
        ErrorKind::PermissionDenied => DomainError::Permission(path.display().to_string()),
        _ => DomainError::Validation(format!("{} is not a readable file", path.display())),
    };

    let meta = std::fs::metadata(path).map_err(not_readable)?;
    if !meta.is_file() {
        return Err(DomainError::Validation(format!(
            "{} is not a file",
            path.display()
        )));
    }
    // Opening catches permission denials that metadata alone does not.
    std::fs::File::open(path).map_err(not_readable)?;

    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    let mime_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .map(str::to_string);

    Ok(ImageRef {
        locator: path.display().to_string(),
        display_name,
        mime_type,
    })
}

/// Media picker prompting for a local file path.
pub struct FsMediaPicker;

impl FsMediaPicker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsMediaPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MediaPickerPort for FsMediaPicker {
    async fn pick_image(&self) -> Result<Option<ImageRef>, DomainError> {
        let answer = Text::new("Path to image:")
            .with_help_message("Esc to cancel")
            .prompt_skippable()
            .map_err(|e| DomainError::Input(e.to_string()))?;

        let Some(raw) = answer else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        image_ref_for_path(Path::new(raw)).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_inference_covers_common_extensions() {
        assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("heic"), Some("image/heic"));
        assert_eq!(mime_for_extension("exe"), None);
    }

    #[test]
    fn builds_image_ref_for_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beach.png");
        std::fs::write(&path, b"fake image bytes").unwrap();

        let image = image_ref_for_path(&path).unwrap();
        assert_eq!(image.display_name.as_deref(), Some("beach.png"));
        assert_eq!(image.mime_type.as_deref(), Some("image/png"));
        assert_eq!(image.locator, path.display().to_string());
    }

    #[test]
    fn unknown_extension_leaves_mime_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.raw");
        std::fs::write(&path, b"raw").unwrap();

        let image = image_ref_for_path(&path).unwrap();
        assert!(image.mime_type.is_none());
        // The upload default kicks in instead.
        assert_eq!(image.mime(), "image/jpeg");
    }

    #[test]
    fn missing_file_is_a_validation_error() {
        let err = image_ref_for_path(Path::new("/nonexistent/cat.jpg")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn directory_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = image_ref_for_path(dir.path()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
