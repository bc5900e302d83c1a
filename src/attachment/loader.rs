use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::form::{FormStateStore, SectionData, SectionKey};

use super::{Attachment, AttachmentPolicy, AttachmentRejection, FileKind};

/// Every upload slot in the form, addressed independently of the wizard's
/// current section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentSlot {
    CategoryCertificate,
    Scorecard,
    MatricMarksheet,
    SeniorMarksheet,
    EntranceScorecard,
    TransferCertificate,
}

impl AttachmentSlot {
    pub fn section(&self) -> SectionKey {
        match self {
            AttachmentSlot::CategoryCertificate => SectionKey::CategorySelection,
            AttachmentSlot::Scorecard => SectionKey::EntranceDetails,
            AttachmentSlot::MatricMarksheet
            | AttachmentSlot::SeniorMarksheet
            | AttachmentSlot::EntranceScorecard
            | AttachmentSlot::TransferCertificate => SectionKey::UploadDocuments,
        }
    }
}

struct PendingRead {
    slot: AttachmentSlot,
    path: PathBuf,
    policy: AttachmentPolicy,
}

/// Result of one completed read, for field-local feedback.
#[derive(Debug, Clone)]
pub struct SlotOutcome {
    pub slot: AttachmentSlot,
    pub result: Result<Attachment, AttachmentRejection>,
}

/// Completes file picks out of band.
///
/// A request is addressed to a specific slot, not to "the current section":
/// if the wizard navigates away before the read completes, the result is
/// still applied to the slot that asked for it. Per slot, the last completed
/// write wins. A rejected file clears the slot rather than leaving a partial
/// value behind.
#[derive(Default)]
pub struct AttachmentLoader {
    pending: VecDeque<PendingRead>,
}

impl AttachmentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, slot: AttachmentSlot, path: PathBuf, policy: AttachmentPolicy) {
        self.pending.push_back(PendingRead { slot, path, policy });
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drains every pending request, applying each outcome to its slot.
    pub fn drain(&mut self, store: &mut FormStateStore) -> Vec<SlotOutcome> {
        let mut outcomes = Vec::new();
        while let Some(read) = self.pending.pop_front() {
            let result = complete_read(&read);
            debug!(slot = ?read.slot, ok = result.is_ok(), "attachment read completed");
            apply_to_slot(store, read.slot, result.as_ref().ok().cloned());
            outcomes.push(SlotOutcome {
                slot: read.slot,
                result,
            });
        }
        outcomes
    }
}

/// Reads a picked file and checks it against `policy`.
///
/// Unreadable files surface as a field-local rejection, not a fatal error.
pub fn load_attachment(
    path: &Path,
    policy: &AttachmentPolicy,
) -> Result<Attachment, AttachmentRejection> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    let kind = match FileKind::from_name(&file_name) {
        Some(kind) => kind,
        None => return Err(AttachmentRejection::UnsupportedKind { file_name }),
    };
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return Err(AttachmentRejection::Unreadable { file_name }),
    };
    let attachment = Attachment::new(file_name, kind, bytes.len() as u64);
    policy.check(&attachment)?;
    Ok(attachment)
}

fn complete_read(read: &PendingRead) -> Result<Attachment, AttachmentRejection> {
    load_attachment(&read.path, &read.policy)
}

fn apply_to_slot(store: &mut FormStateStore, slot: AttachmentSlot, value: Option<Attachment>) {
    match slot {
        AttachmentSlot::CategoryCertificate => {
            let mut selection = store.state().category_selection.clone();
            selection.certificate = value;
            store.update(SectionData::CategorySelection(selection));
        }
        AttachmentSlot::Scorecard => {
            let mut details = store.state().entrance_details.clone();
            details.scorecard = value;
            store.update(SectionData::EntranceDetails(details));
        }
        AttachmentSlot::MatricMarksheet
        | AttachmentSlot::SeniorMarksheet
        | AttachmentSlot::EntranceScorecard
        | AttachmentSlot::TransferCertificate => {
            let mut documents = store.state().upload_documents.clone();
            match slot {
                AttachmentSlot::MatricMarksheet => documents.matric_marksheet = value,
                AttachmentSlot::SeniorMarksheet => documents.senior_marksheet = value,
                AttachmentSlot::EntranceScorecard => documents.entrance_scorecard = value,
                AttachmentSlot::TransferCertificate => documents.transfer_certificate = value,
                _ => unreachable!(),
            }
            store.update(SectionData::UploadDocuments(documents));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;
    use crate::attachment::{DOCUMENT_POLICY, SCORECARD_POLICY};

    fn write_file(dir: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).expect("create file");
        file.write_all(&vec![0u8; len]).expect("write file");
        path
    }

    #[test]
    fn completed_read_lands_in_the_addressed_slot() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "tc.pdf", 10_000);
        let mut store = FormStateStore::new();
        let mut loader = AttachmentLoader::new();

        loader.request(AttachmentSlot::TransferCertificate, path, DOCUMENT_POLICY);
        let outcomes = loader.drain(&mut store);

        assert!(outcomes[0].result.is_ok());
        let attached = store
            .state()
            .upload_documents
            .transfer_certificate
            .as_ref()
            .expect("transfer certificate attached");
        assert_eq!(attached.size_bytes, 10_000);
        assert!(!loader.has_pending());
    }

    #[test]
    fn oversized_scorecard_is_rejected_and_slot_stays_empty() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "scorecard.pdf", 200 * 1024);
        let mut store = FormStateStore::new();
        let mut loader = AttachmentLoader::new();

        loader.request(AttachmentSlot::Scorecard, path, SCORECARD_POLICY);
        let outcomes = loader.drain(&mut store);

        assert!(matches!(
            outcomes[0].result,
            Err(AttachmentRejection::TooLarge { .. })
        ));
        assert!(store.state().entrance_details.scorecard.is_none());
    }

    #[test]
    fn missing_file_is_reported_as_unreadable() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing.pdf");
        let mut store = FormStateStore::new();
        let mut loader = AttachmentLoader::new();

        loader.request(AttachmentSlot::Scorecard, path, SCORECARD_POLICY);
        let outcomes = loader.drain(&mut store);

        assert!(matches!(
            outcomes[0].result,
            Err(AttachmentRejection::Unreadable { .. })
        ));
        assert!(store.state().entrance_details.scorecard.is_none());
    }

    #[test]
    fn rejection_clears_a_previously_attached_file() {
        let dir = TempDir::new().expect("temp dir");
        let good = write_file(&dir, "ok.pdf", 100 * 1024);
        let bad = write_file(&dir, "big.pdf", 200 * 1024);
        let mut store = FormStateStore::new();
        let mut loader = AttachmentLoader::new();

        loader.request(AttachmentSlot::Scorecard, good, SCORECARD_POLICY);
        loader.drain(&mut store);
        assert!(store.state().entrance_details.scorecard.is_some());

        loader.request(AttachmentSlot::Scorecard, bad, SCORECARD_POLICY);
        loader.drain(&mut store);
        assert!(store.state().entrance_details.scorecard.is_none());
    }

    #[test]
    fn reads_pending_across_navigation_still_apply() {
        // The slot address, not the wizard position, decides where the
        // result goes; nothing in the loader consults the controller.
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "cert.pdf", 50_000);
        let mut store = FormStateStore::new();
        let mut loader = AttachmentLoader::new();

        loader.request(
            AttachmentSlot::CategoryCertificate,
            path,
            DOCUMENT_POLICY,
        );
        // Simulate edits to a different section before the read completes.
        store.update(SectionData::SelectedFaculty("Design".into()));
        loader.drain(&mut store);

        assert!(store.state().category_selection.certificate.is_some());
        assert_eq!(store.state().selected_faculty, "Design");
    }
}
