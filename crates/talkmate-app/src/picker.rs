//! Image selection from the local filesystem.

use std::path::Path;

use talkmate_ai::ImageRef;
use talkmate_common::TalkmateError;

/// Load an image file as an `ImageRef`, guessing its MIME type from the
/// file extension. Non-image files are rejected.
pub fn load_image(path: &Path) -> Result<ImageRef, TalkmateError> {
    let mime = mime_guess::from_path(path)
        .first()
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| {
            TalkmateError::Image(format!("not an image file: {}", path.display()))
        })?;

    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(TalkmateError::Image(format!(
            "empty image file: {}",
            path.display()
        )));
    }

    tracing::debug!(
        path = %path.display(),
        mime = %mime,
        len = bytes.len(),
        "image attached"
    );
    Ok(ImageRef::new(bytes, mime.essence_str()))
}
