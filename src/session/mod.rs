//! Session profile, the demo auth boundary, and cross-session faculty
//! persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::attachment::Attachment;
use crate::errors::AdmissionError;
use crate::storage::LocalStore;

/// Storage key holding the serialized profile.
pub const USER_KEY: &str = "user";
/// Storage key holding the faculty chosen before or during login.
pub const FACULTY_KEY: &str = "selectedFaculty";

/// The authenticated applicant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub selected_faculty: String,
    pub created_at: DateTime<Utc>,
}

/// Credential check seam. The bundled implementation is the demo stub from
/// the original flow; a real verifier is an external collaborator that slots
/// in here without touching the session manager.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Accepts any email with the literal password `"password"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, email: &str, password: &str) -> bool {
        !email.is_empty() && password == "password"
    }
}

/// Owns the profile lifecycle and the one piece of cross-session state
/// (`selectedFaculty`).
pub struct SessionManager {
    store: LocalStore,
    verifier: Box<dyn CredentialVerifier>,
    profile: Option<SessionProfile>,
}

impl SessionManager {
    pub fn new(store: LocalStore) -> Result<Self, AdmissionError> {
        Self::with_verifier(store, Box::new(DemoVerifier))
    }

    pub fn with_verifier(
        store: LocalStore,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Result<Self, AdmissionError> {
        let profile = store.get_json(USER_KEY)?;
        Ok(Self {
            store,
            verifier,
            profile,
        })
    }

    /// Deterministic local login. Succeeds only when all four inputs are
    /// non-empty and the verifier accepts the credentials; failure is a
    /// single coarse `false` with no unknown-user/wrong-password split.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        selected_faculty: &str,
    ) -> Result<bool, AdmissionError> {
        if email.is_empty() || password.is_empty() || name.is_empty() || selected_faculty.is_empty()
        {
            return Ok(false);
        }
        if !self.verifier.verify(email, password) {
            return Ok(false);
        }
        let profile = SessionProfile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            selected_faculty: selected_faculty.to_string(),
            created_at: Utc::now(),
        };
        self.store.put_json(USER_KEY, &profile)?;
        self.store.put(FACULTY_KEY, selected_faculty)?;
        info!(email, "session opened");
        self.profile = Some(profile);
        Ok(true)
    }

    /// Clears the persisted profile and returns the caller to the entry
    /// point. The remembered faculty survives logout.
    pub fn logout(&mut self) -> Result<(), AdmissionError> {
        self.store.remove(USER_KEY)?;
        self.profile = None;
        info!("session closed");
        Ok(())
    }

    pub fn profile(&self) -> Option<&SessionProfile> {
        self.profile.as_ref()
    }

    /// The gate for everything downstream of login: wizard construction must
    /// fail loudly, not default silently, without a profile.
    pub fn require_profile(&self) -> Result<&SessionProfile, AdmissionError> {
        self.profile.as_ref().ok_or(AdmissionError::SessionRequired)
    }

    /// Persists the faculty choice independently of login, so the selector
    /// can be pre-filled on the next visit.
    pub fn remember_faculty(&self, faculty: &str) -> Result<(), AdmissionError> {
        self.store.put(FACULTY_KEY, faculty)
    }

    pub fn remembered_faculty(&self) -> Result<Option<String>, AdmissionError> {
        self.store.get(FACULTY_KEY)
    }
}

/// Dashboard prerequisites: the wizard opens only once both the profile
/// photo and the signature are uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardUploads {
    pub photo: Option<Attachment>,
    pub signature: Option<Attachment>,
}

impl DashboardUploads {
    pub fn can_continue(&self) -> bool {
        self.photo.is_some() && self.signature.is_some()
    }

    /// Dashboard progress bar: 50% per upload.
    pub fn progress_percent(&self) -> u8 {
        let count = u8::from(self.photo.is_some()) + u8::from(self.signature.is_some());
        count * 50
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::attachment::FileKind;

    fn manager_with_temp_dir() -> (SessionManager, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = LocalStore::open(temp.path().to_path_buf()).expect("open store");
        let manager = SessionManager::new(store).expect("session manager");
        (manager, temp)
    }

    #[test]
    fn login_succeeds_with_demo_password_and_full_inputs() {
        let (mut manager, _guard) = manager_with_temp_dir();
        let ok = manager
            .login("asha@example.com", "password", "Asha", "Design")
            .expect("login");
        assert!(ok);
        let profile = manager.profile().expect("profile");
        assert_eq!(profile.email, "asha@example.com");
        assert_eq!(profile.selected_faculty, "Design");
    }

    #[test]
    fn login_fails_on_wrong_password_or_blank_input() {
        let (mut manager, _guard) = manager_with_temp_dir();
        assert!(!manager
            .login("asha@example.com", "hunter2", "Asha", "Design")
            .expect("login"));
        assert!(!manager
            .login("", "password", "Asha", "Design")
            .expect("login"));
        assert!(!manager
            .login("asha@example.com", "password", "", "Design")
            .expect("login"));
        assert!(!manager
            .login("asha@example.com", "password", "Asha", "")
            .expect("login"));
        assert!(manager.profile().is_none());
    }

    #[test]
    fn profile_persists_across_manager_instances() {
        let temp = TempDir::new().expect("temp dir");
        let store = LocalStore::open(temp.path().to_path_buf()).expect("open store");
        let mut manager = SessionManager::new(store.clone()).expect("session manager");
        manager
            .login("asha@example.com", "password", "Asha", "Design")
            .expect("login");
        let id = manager.profile().expect("profile").id;

        let reloaded = SessionManager::new(store).expect("session manager");
        assert_eq!(reloaded.profile().map(|p| p.id), Some(id));
    }

    #[test]
    fn logout_clears_the_profile_but_keeps_the_faculty() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager
            .login("asha@example.com", "password", "Asha", "Design")
            .expect("login");
        manager.logout().expect("logout");
        assert!(manager.profile().is_none());
        assert!(matches!(
            manager.require_profile(),
            Err(AdmissionError::SessionRequired)
        ));
        assert_eq!(
            manager.remembered_faculty().expect("faculty").as_deref(),
            Some("Design")
        );
    }

    #[test]
    fn faculty_can_be_remembered_before_login() {
        let (manager, _guard) = manager_with_temp_dir();
        manager.remember_faculty("Performing Arts").expect("put");
        assert_eq!(
            manager.remembered_faculty().expect("faculty").as_deref(),
            Some("Performing Arts")
        );
    }

    #[test]
    fn dashboard_gate_needs_both_uploads() {
        let mut uploads = DashboardUploads::default();
        assert!(!uploads.can_continue());
        assert_eq!(uploads.progress_percent(), 0);

        uploads.photo = Some(Attachment::new("photo.png", FileKind::Png, 20_000));
        assert_eq!(uploads.progress_percent(), 50);
        assert!(!uploads.can_continue());

        uploads.signature = Some(Attachment::new("sig.jpg", FileKind::Jpeg, 8_000));
        assert_eq!(uploads.progress_percent(), 100);
        assert!(uploads.can_continue());
    }
}
