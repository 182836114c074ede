//! Stored-filename derivation for uploaded point images.
//!
//! Filenames are content-addressed: a SHA-256 digest prefix plus an image
//! extension. Two uploads of the same bytes map to the same name, so a
//! file left behind by a rolled-back registration is reclaimed by the next
//! attempt instead of leaking, and the client-supplied name never reaches
//! the filesystem.

use image::ImageFormat;
use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// Digest prefix length used in stored filenames.
const NAME_HASH_LEN: usize = 16;

/// Image formats accepted for point images.
const ACCEPTED_FORMATS: &[ImageFormat] = &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Sniff the upload's format from its bytes and derive the stored filename.
///
/// The original extension is preserved when it agrees with the sniffed
/// format (`.jpg` and `.jpeg` both count as JPEG); otherwise the format's
/// canonical extension is used, so the stored name never lies about the
/// content. Anything that is not PNG, JPEG, or WebP is a validation
/// failure.
pub fn stored_filename(original_name: &str, bytes: &[u8]) -> Result<String, CoreError> {
    let format = sniff_format(bytes)?;

    let ext = match original_extension(original_name) {
        Some(ext) if format.extensions_str().contains(&ext.as_str()) => ext,
        _ => canonical_extension(format).to_string(),
    };

    let digest = format!("{:x}", Sha256::digest(bytes));
    Ok(format!("{}.{ext}", &digest[..NAME_HASH_LEN]))
}

/// Detect the image format from the file's magic bytes.
pub fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, CoreError> {
    let format = image::guess_format(bytes).map_err(|_| {
        CoreError::Validation("image must be a PNG, JPEG, or WebP file".into())
    })?;

    if ACCEPTED_FORMATS.contains(&format) {
        Ok(format)
    } else {
        Err(CoreError::Validation(
            "image must be a PNG, JPEG, or WebP file".into(),
        ))
    }
}

fn canonical_extension(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpg",
        ImageFormat::WebP => "webp",
        // Unreachable past sniff_format; fall back to the crate's first
        // registered extension for the format.
        other => other.extensions_str().first().copied().unwrap_or("bin"),
    }
}

fn original_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_ascii_lowercase())
    }
}
