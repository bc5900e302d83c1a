//! File attachment model: accepted kinds, per-field size policies, and
//! deferred reads addressed to a specific form slot.

mod loader;
mod policy;

pub use loader::{load_attachment, AttachmentLoader, AttachmentSlot, SlotOutcome};
pub use policy::{
    AttachmentPolicy, AttachmentRejection, SizeBounds, CERTIFICATE_POLICY, DOCUMENT_POLICY,
    IMAGE_POLICY, SCORECARD_POLICY,
};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File formats accepted anywhere in the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileKind {
    Png,
    Jpeg,
    Pdf,
}

impl FileKind {
    /// Derives the kind from a file name's extension, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(FileKind::Png),
            "jpg" | "jpeg" => Some(FileKind::Jpeg),
            "pdf" => Some(FileKind::Pdf),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Png => "PNG",
            FileKind::Jpeg => "JPEG",
            FileKind::Pdf => "PDF",
        }
    }
}

/// A file bound to a specific form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub kind: FileKind,
    pub size_bytes: u64,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, kind: FileKind, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
            size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_name_recognises_extensions() {
        assert_eq!(FileKind::from_name("marksheet.PDF"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_name("photo.jpeg"), Some(FileKind::Jpeg));
        assert_eq!(FileKind::from_name("photo.jpg"), Some(FileKind::Jpeg));
        assert_eq!(FileKind::from_name("scan.png"), Some(FileKind::Png));
    }

    #[test]
    fn kind_from_name_rejects_unknown_or_missing_extension() {
        assert_eq!(FileKind::from_name("notes.docx"), None);
        assert_eq!(FileKind::from_name("noextension"), None);
    }
}
