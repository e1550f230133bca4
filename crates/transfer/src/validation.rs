use std::path::{Component, Path};

use gigapdf_protocol::UploadOptions;
use gigapdf_protocol::constants::{PDF_EXTENSION, PDF_MIME_TYPE};

use crate::{SourceFile, TransferError};

/// Validates that a file name is a single plain path component.
///
/// The service joins `filename` into its upload directory, so the name must
/// not be able to address anything outside it.
///
/// Rejects:
/// - Empty names
/// - Absolute paths and Windows prefixes (`C:`, `\\server`)
/// - Parent (`..`) and current (`.`) directory references
/// - Names containing a path separator
pub fn validate_filename(name: &str) -> Result<(), TransferError> {
    if name.trim().is_empty() {
        return Err(TransferError::InvalidName("empty name".into()));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(TransferError::InvalidName(format!(
            "path separator not allowed: {name}"
        )));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(TransferError::InvalidName(format!(
            "not a plain file name: {name}"
        ))),
    }
}

/// Returns the file extension associated with a MIME type.
fn extension_for(mime_type: &str) -> Option<&'static str> {
    match mime_type {
        PDF_MIME_TYPE => Some(PDF_EXTENSION),
        _ => None,
    }
}

/// Decides whether `file` may be uploaded under `options`.
///
/// Runs before any network activity; a rejected file leaves no trace.
pub fn validate_source(file: &SourceFile, options: &UploadOptions) -> Result<(), TransferError> {
    validate_filename(file.name())?;

    if file.len() > options.max_file_size {
        return Err(TransferError::FileTooLarge {
            size: file.len(),
            max: options.max_file_size,
        });
    }

    let expected = extension_for(&options.accepted_mime_type).ok_or_else(|| {
        TransferError::InvalidArgument(format!(
            "no known extension for MIME type {}",
            options.accepted_mime_type
        ))
    })?;

    let matches = Path::new(file.name())
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(expected));
    if !matches {
        return Err(TransferError::UnsupportedType {
            name: file.name().to_string(),
            expected: options.accepted_mime_type.clone(),
        });
    }

    Ok(())
}
