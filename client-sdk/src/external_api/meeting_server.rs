use async_trait::async_trait;
use meeting_interfaces::api::{
    error::ServerError,
    meeting::{
        interface::MeetingClientInterface,
        types::{
            MeetingForm, MeetingListResponse, MeetingQueryRequest, MeetingsToAttendResponse,
            ProfileForm, ProfileMiniForm, RegistrationResponse,
        },
    },
};

use super::utils::query::{get_request, post_request};

/// HTTP client for the meeting API.
#[derive(Debug, Clone)]
pub struct MeetingServerClient {
    base_url: String,
}

impl MeetingServerClient {
    pub fn new(base_url: &str) -> Self {
        MeetingServerClient {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl MeetingClientInterface for MeetingServerClient {
    async fn query_meetings(
        &self,
        request: &MeetingQueryRequest,
    ) -> Result<Vec<MeetingForm>, ServerError> {
        let response: MeetingListResponse =
            post_request(&self.base_url, "/meeting/v1/queryMeetings", request).await?;
        Ok(response.items)
    }

    async fn get_meetings_created(&self) -> Result<Vec<MeetingForm>, ServerError> {
        let response: MeetingListResponse =
            post_request(&self.base_url, "/meeting/v1/getMeetingsCreated", &()).await?;
        Ok(response.items)
    }

    async fn get_meetings_to_attend(&self) -> Result<Vec<MeetingForm>, ServerError> {
        let response: MeetingsToAttendResponse =
            get_request::<(), _>(&self.base_url, "/meeting/v1/getMeetingsToAttend", None).await?;
        Ok(response.result.items)
    }

    async fn get_meeting(&self, websafe_meeting_key: &str) -> Result<MeetingForm, ServerError> {
        get_request::<(), _>(
            &self.base_url,
            &format!("/meeting/v1/meeting/{}", websafe_meeting_key),
            None,
        )
        .await
    }

    async fn register_for_meeting(
        &self,
        websafe_meeting_key: &str,
    ) -> Result<bool, ServerError> {
        let response: RegistrationResponse = post_request(
            &self.base_url,
            &format!("/meeting/v1/meeting/{}/register", websafe_meeting_key),
            &(),
        )
        .await?;
        Ok(response.result)
    }

    async fn unregister_from_meeting(
        &self,
        websafe_meeting_key: &str,
    ) -> Result<bool, ServerError> {
        let response: RegistrationResponse = post_request(
            &self.base_url,
            &format!("/meeting/v1/meeting/{}/unregister", websafe_meeting_key),
            &(),
        )
        .await?;
        Ok(response.result)
    }

    async fn get_profile(&self) -> Result<ProfileForm, ServerError> {
        get_request::<(), _>(&self.base_url, "/meeting/v1/profile", None).await
    }

    async fn save_profile(&self, profile: &ProfileMiniForm) -> Result<ProfileForm, ServerError> {
        post_request(&self.base_url, "/meeting/v1/profile", profile).await
    }

    async fn create_meeting(&self, meeting: &MeetingForm) -> Result<MeetingForm, ServerError> {
        post_request(&self.base_url, "/meeting/v1/meeting", meeting).await
    }
}
