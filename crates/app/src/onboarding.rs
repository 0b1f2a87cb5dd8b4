//! User type onboarding: the selection held by the page and the submission
//! that persists it.
//!
//! The flow talks to the backend only through [`IdentitySource`] and
//! [`ProfileStore`], so the page wires in the server-function implementations
//! and tests wire in doubles.

use dioxus::prelude::ServerFnError;
use shared_types::{AppError, Identity, UserType};
use shared_ui::{Notice, NoticeSeverity};
use std::fmt;

/// Which user type card is currently chosen. Empty until the first click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<UserType>);

impl Selection {
    /// Choose `user_type`, replacing any earlier choice.
    pub fn select(&mut self, user_type: UserType) {
        self.0 = Some(user_type);
    }

    /// Choose by identifier, as reported by the radio group. Unknown ids
    /// leave the current choice alone.
    pub fn select_id(&mut self, id: &str) {
        if let Some(user_type) = UserType::parse(id) {
            self.select(user_type);
        }
    }

    pub fn selected(&self) -> Option<UserType> {
        self.0
    }

    pub fn is_selected(&self, user_type: UserType) -> bool {
        self.0 == Some(user_type)
    }
}

/// Whether a submission is running. Only one may run at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight(bool);

impl InFlight {
    /// Mark a submission as started. Returns `false`, changing nothing, if
    /// one is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.0 {
            return false;
        }
        self.0 = true;
        true
    }

    pub fn finish(&mut self) {
        self.0 = false;
    }

    pub fn is_active(&self) -> bool {
        self.0
    }
}

/// Supplies the authenticated identity of the person onboarding.
#[allow(async_fn_in_trait)]
pub trait IdentitySource {
    async fn current_identity(&self) -> Result<Option<Identity>, AppError>;
}

/// Writes the chosen user type to a profile record.
#[allow(async_fn_in_trait)]
pub trait ProfileStore {
    async fn set_user_type(&self, user_id: i64, user_type: UserType) -> Result<(), AppError>;
}

/// Why a submission did not reach the next onboarding step.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Continue was pressed before any card was chosen. Nothing was sent.
    NoSelection,
    /// The identity lookup or the profile write failed. The detail is for
    /// logs only; the user sees a generic message.
    SubmissionFailure(AppError),
}

impl SubmitError {
    /// The toast to show for this error.
    pub fn notice(&self) -> Notice {
        match self {
            SubmitError::NoSelection => Notice::new(
                "Error",
                "Please select a user type",
                NoticeSeverity::Warning,
            ),
            SubmitError::SubmissionFailure(_) => Notice::new(
                "Error",
                "Failed to update user type. Please try again.",
                NoticeSeverity::Error,
            ),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NoSelection => write!(f, "no user type selected"),
            SubmitError::SubmissionFailure(e) => write!(f, "submission failed: {e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Persist the selected user type for the current identity and return the
/// route to continue onboarding at.
///
/// Makes at most one identity lookup followed by at most one profile write,
/// in that order, with no retries. The selection is read once, when the
/// call starts.
pub async fn submit<I, S>(selection: Selection, identity: &I, store: &S) -> Result<&'static str, SubmitError>
where
    I: IdentitySource,
    S: ProfileStore,
{
    let user_type = selection.selected().ok_or(SubmitError::NoSelection)?;

    let identity = identity
        .current_identity()
        .await
        .map_err(|e| failure("identity lookup failed", e))?
        .ok_or_else(|| failure("no identity", AppError::unauthorized("No user found")))?;

    store
        .set_user_type(identity.id, user_type)
        .await
        .map_err(|e| failure("profile update failed", e))?;

    tracing::info!(user_id = identity.id, user_type = %user_type, "User type saved");
    Ok(user_type.onboarding_path())
}

fn failure(stage: &str, error: AppError) -> SubmitError {
    tracing::error!(stage, error = %error, "Error updating user type");
    SubmitError::SubmissionFailure(error)
}

/// Recover the structured error a server function sent back.
fn from_server_fn_error(error: ServerFnError) -> AppError {
    let raw = error.to_string();
    AppError::from_server_error(&raw).unwrap_or_else(|| AppError::internal(raw))
}

/// Identity from the session cookie, resolved by the server.
pub struct ServerIdentity;

impl IdentitySource for ServerIdentity {
    async fn current_identity(&self) -> Result<Option<Identity>, AppError> {
        server::api::get_current_identity()
            .await
            .map_err(from_server_fn_error)
    }
}

/// The `profiles` table, written through a server function.
pub struct ServerProfileStore;

impl ProfileStore for ServerProfileStore {
    async fn set_user_type(&self, user_id: i64, user_type: UserType) -> Result<(), AppError> {
        server::api::update_user_type(user_id, user_type)
            .await
            .map(|_| ())
            .map_err(from_server_fn_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, ALL_USER_TYPES};
    use std::cell::{Cell, RefCell};

    struct FakeIdentity {
        result: Result<Option<Identity>, AppError>,
        calls: Cell<u32>,
    }

    impl FakeIdentity {
        fn user(id: i64) -> Self {
            Self {
                result: Ok(Some(Identity {
                    id,
                    email: format!("user{id}@example.com"),
                })),
                calls: Cell::new(0),
            }
        }

        fn anonymous() -> Self {
            Self {
                result: Ok(None),
                calls: Cell::new(0),
            }
        }
    }

    impl IdentitySource for FakeIdentity {
        async fn current_identity(&self) -> Result<Option<Identity>, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct FakeStore {
        fail_with: Option<AppError>,
        writes: RefCell<Vec<(i64, UserType)>>,
    }

    impl ProfileStore for FakeStore {
        async fn set_user_type(&self, user_id: i64, user_type: UserType) -> Result<(), AppError> {
            self.writes.borrow_mut().push((user_id, user_type));
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn selected(user_type: UserType) -> Selection {
        let mut selection = Selection::default();
        selection.select(user_type);
        selection
    }

    #[test]
    fn selection_starts_empty() {
        let selection = Selection::default();
        assert_eq!(selection.selected(), None);
        assert!(ALL_USER_TYPES.iter().all(|t| !selection.is_selected(*t)));
    }

    #[test]
    fn later_selection_replaces_earlier() {
        let mut selection = Selection::default();
        selection.select(UserType::Blogger);
        selection.select(UserType::Merchandiser);
        assert!(selection.is_selected(UserType::Merchandiser));
        assert!(!selection.is_selected(UserType::Blogger));
    }

    #[test]
    fn select_id_ignores_unknown_ids() {
        let mut selection = Selection::default();
        selection.select_id("events_manager");
        assert_eq!(selection.selected(), Some(UserType::EventsManager));

        selection.select_id("promoter");
        assert_eq!(selection.selected(), Some(UserType::EventsManager));
    }

    #[test]
    fn second_submission_is_refused_while_one_runs() {
        let mut in_flight = InFlight::default();
        assert!(in_flight.try_begin());
        assert!(in_flight.is_active());
        assert!(!in_flight.try_begin(), "double click must not start a second write");

        in_flight.finish();
        assert!(!in_flight.is_active());
        assert!(in_flight.try_begin());
    }

    #[tokio::test]
    async fn empty_selection_makes_no_calls() {
        let identity = FakeIdentity::user(1);
        let store = FakeStore::default();

        let result = submit(Selection::default(), &identity, &store).await;

        assert_eq!(result, Err(SubmitError::NoSelection));
        assert_eq!(identity.calls.get(), 0);
        assert!(store.writes.borrow().is_empty());
    }

    #[tokio::test]
    async fn fan_for_user_one_goes_to_fan_step() {
        let identity = FakeIdentity::user(1);
        let store = FakeStore::default();

        let path = submit(selected(UserType::Fan), &identity, &store).await;

        assert_eq!(path, Ok("/onboarding/fan"));
        assert_eq!(*store.writes.borrow(), vec![(1, UserType::Fan)]);
    }

    #[tokio::test]
    async fn artist_goes_to_basic_info() {
        let identity = FakeIdentity::user(5);
        let store = FakeStore::default();

        let path = submit(selected(UserType::Artist), &identity, &store).await;

        assert_eq!(path, Ok("/onboarding/basic-info"));
    }

    #[tokio::test]
    async fn every_other_role_goes_to_its_own_step() {
        for user_type in ALL_USER_TYPES.iter().filter(|t| **t != UserType::Artist) {
            let identity = FakeIdentity::user(9);
            let store = FakeStore::default();

            let path = submit(selected(*user_type), &identity, &store).await.unwrap();

            assert_eq!(path, format!("/onboarding/{}", user_type.as_str()));
            assert_eq!(*store.writes.borrow(), vec![(9, *user_type)]);
        }
    }

    #[tokio::test]
    async fn missing_identity_skips_the_write() {
        let identity = FakeIdentity::anonymous();
        let store = FakeStore::default();

        let result = submit(selected(UserType::Blogger), &identity, &store).await;

        match result {
            Err(SubmitError::SubmissionFailure(e)) => assert_eq!(e.kind, AppErrorKind::Unauthorized),
            other => panic!("expected SubmissionFailure, got {other:?}"),
        }
        assert_eq!(identity.calls.get(), 1);
        assert!(store.writes.borrow().is_empty());
    }

    #[tokio::test]
    async fn identity_lookup_error_skips_the_write() {
        let identity = FakeIdentity {
            result: Err(AppError::internal("connection reset")),
            calls: Cell::new(0),
        };
        let store = FakeStore::default();

        let result = submit(selected(UserType::Fan), &identity, &store).await;

        assert!(matches!(result, Err(SubmitError::SubmissionFailure(_))));
        assert!(store.writes.borrow().is_empty());
    }

    #[tokio::test]
    async fn store_error_is_a_submission_failure() {
        let identity = FakeIdentity::user(3);
        let store = FakeStore {
            fail_with: Some(AppError::database("relation \"profiles\" does not exist")),
            ..Default::default()
        };

        let result = submit(selected(UserType::EventsManager), &identity, &store).await;

        assert!(matches!(result, Err(SubmitError::SubmissionFailure(_))));
        assert_eq!(store.writes.borrow().len(), 1, "exactly one attempt, no retry");
    }

    #[tokio::test]
    async fn last_selection_is_the_one_written() {
        let identity = FakeIdentity::user(2);
        let store = FakeStore::default();
        let mut selection = Selection::default();
        selection.select(UserType::Blogger);
        selection.select(UserType::Merchandiser);

        submit(selection, &identity, &store).await.unwrap();

        assert_eq!(*store.writes.borrow(), vec![(2, UserType::Merchandiser)]);
    }

    #[test]
    fn notices_match_the_two_error_kinds() {
        let warning = SubmitError::NoSelection.notice();
        assert_eq!(warning.description, "Please select a user type");
        assert_eq!(warning.severity, NoticeSeverity::Warning);

        let failure = SubmitError::SubmissionFailure(AppError::database("boom")).notice();
        assert_eq!(failure.description, "Failed to update user type. Please try again.");
        assert_eq!(failure.severity, NoticeSeverity::Error);
        assert!(!failure.description.contains("boom"));
    }

    #[test]
    fn server_fn_error_payload_is_recovered() {
        let err = ServerFnError::new(
            serde_json::to_string(&AppError::forbidden("Cannot update another user's profile"))
                .unwrap(),
        );
        let app_error = from_server_fn_error(err);
        assert_eq!(app_error.kind, AppErrorKind::Forbidden);
    }
}
