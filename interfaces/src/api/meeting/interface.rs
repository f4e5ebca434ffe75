use async_trait::async_trait;

use crate::api::{
    error::ServerError,
    meeting::types::{MeetingForm, MeetingQueryRequest, ProfileForm, ProfileMiniForm},
};

/// The remote meeting API. One method per endpoint; every response is a
/// tagged result instead of the wire's `{error?}/{result?}` object.
#[async_trait(?Send)]
pub trait MeetingClientInterface {
    /// Query all meetings matching the given filters.
    async fn query_meetings(
        &self,
        request: &MeetingQueryRequest,
    ) -> Result<Vec<MeetingForm>, ServerError>;

    /// Meetings created by the signed-in user.
    async fn get_meetings_created(&self) -> Result<Vec<MeetingForm>, ServerError>;

    /// Meetings the signed-in user has registered for.
    async fn get_meetings_to_attend(&self) -> Result<Vec<MeetingForm>, ServerError>;

    async fn get_meeting(&self, websafe_meeting_key: &str) -> Result<MeetingForm, ServerError>;

    /// Returns whether the registration was applied.
    async fn register_for_meeting(
        &self,
        websafe_meeting_key: &str,
    ) -> Result<bool, ServerError>;

    /// Returns whether the unregistration was applied.
    async fn unregister_from_meeting(
        &self,
        websafe_meeting_key: &str,
    ) -> Result<bool, ServerError>;

    async fn get_profile(&self) -> Result<ProfileForm, ServerError>;

    /// Update the user-editable profile fields, returning the saved profile.
    async fn save_profile(&self, profile: &ProfileMiniForm) -> Result<ProfileForm, ServerError>;

    /// Create a new meeting, returning the created form.
    async fn create_meeting(&self, meeting: &MeetingForm) -> Result<MeetingForm, ServerError>;
}
