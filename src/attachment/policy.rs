use thiserror::Error;

use super::{Attachment, FileKind};

const KB: u64 = 1024;

/// Why a picked file was refused. Surfaced as a field-local message; the
/// field's stored value is cleared alongside.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttachmentRejection {
    #[error("unsupported file type for `{file_name}`; allowed: PNG, JPEG, PDF")]
    UnsupportedKind { file_name: String },
    #[error("`{file_name}` could not be read")]
    Unreadable { file_name: String },
    #[error("`{file_name}` is too small ({size_bytes} bytes, minimum {min_bytes})")]
    TooSmall {
        file_name: String,
        size_bytes: u64,
        min_bytes: u64,
    },
    #[error("`{file_name}` is too large ({size_bytes} bytes, maximum {max_bytes})")]
    TooLarge {
        file_name: String,
        size_bytes: u64,
        max_bytes: u64,
    },
}

/// Exclusive size window: a file is accepted only strictly between the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min_bytes: u64,
    pub max_bytes: u64,
}

impl SizeBounds {
    pub const fn between(min_bytes: u64, max_bytes: u64) -> Self {
        Self {
            min_bytes,
            max_bytes,
        }
    }

    pub fn accepts(&self, size_bytes: u64) -> bool {
        size_bytes > self.min_bytes && size_bytes < self.max_bytes
    }
}

/// Per-field acceptance rule. These are configuration, not engine logic;
/// each upload slot names the policy it is bound to.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentPolicy {
    pub kinds: &'static [FileKind],
    pub bounds: SizeBounds,
}

/// Entrance scorecard: any accepted format, strictly between 50 and 150 KB.
pub const SCORECARD_POLICY: AttachmentPolicy = AttachmentPolicy {
    kinds: &[FileKind::Pdf, FileKind::Jpeg, FileKind::Png],
    bounds: SizeBounds::between(50 * KB, 150 * KB),
};

/// Generic document uploads: up to 300 KB.
pub const DOCUMENT_POLICY: AttachmentPolicy = AttachmentPolicy {
    kinds: &[FileKind::Pdf, FileKind::Jpeg, FileKind::Png],
    bounds: SizeBounds::between(0, 300 * KB + 1),
};

/// Category certificates share the generic document bounds.
pub const CERTIFICATE_POLICY: AttachmentPolicy = DOCUMENT_POLICY;

/// Profile photo and signature: images only, up to 1 MB.
pub const IMAGE_POLICY: AttachmentPolicy = AttachmentPolicy {
    kinds: &[FileKind::Png, FileKind::Jpeg],
    bounds: SizeBounds::between(0, 1024 * KB + 1),
};

impl AttachmentPolicy {
    pub fn check(&self, attachment: &Attachment) -> Result<(), AttachmentRejection> {
        if !self.kinds.contains(&attachment.kind) {
            return Err(AttachmentRejection::UnsupportedKind {
                file_name: attachment.file_name.clone(),
            });
        }
        if attachment.size_bytes <= self.bounds.min_bytes {
            return Err(AttachmentRejection::TooSmall {
                file_name: attachment.file_name.clone(),
                size_bytes: attachment.size_bytes,
                min_bytes: self.bounds.min_bytes,
            });
        }
        if attachment.size_bytes >= self.bounds.max_bytes {
            return Err(AttachmentRejection::TooLarge {
                file_name: attachment.file_name.clone(),
                size_bytes: attachment.size_bytes,
                max_bytes: self.bounds.max_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scorecard_rejects_200_kb_pdf() {
        let attachment = Attachment::new("scorecard.pdf", FileKind::Pdf, 200 * KB);
        assert!(matches!(
            SCORECARD_POLICY.check(&attachment),
            Err(AttachmentRejection::TooLarge { .. })
        ));
    }

    #[test]
    fn scorecard_rejects_undersized_file() {
        let attachment = Attachment::new("scorecard.pdf", FileKind::Pdf, 20 * KB);
        assert!(matches!(
            SCORECARD_POLICY.check(&attachment),
            Err(AttachmentRejection::TooSmall { .. })
        ));
    }

    #[test]
    fn scorecard_accepts_within_bounds() {
        let attachment = Attachment::new("scorecard.png", FileKind::Png, 100 * KB);
        assert!(SCORECARD_POLICY.check(&attachment).is_ok());
    }

    #[test]
    fn document_policy_accepts_up_to_300_kb() {
        let at_limit = Attachment::new("tc.pdf", FileKind::Pdf, 300 * KB);
        assert!(DOCUMENT_POLICY.check(&at_limit).is_ok());
        let over = Attachment::new("tc.pdf", FileKind::Pdf, 300 * KB + 1);
        assert!(DOCUMENT_POLICY.check(&over).is_err());
    }

    #[test]
    fn image_policy_refuses_pdf() {
        let attachment = Attachment::new("photo.pdf", FileKind::Pdf, 10 * KB);
        assert!(matches!(
            IMAGE_POLICY.check(&attachment),
            Err(AttachmentRejection::UnsupportedKind { .. })
        ));
    }
}
