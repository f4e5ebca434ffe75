use meeting_interfaces::api::meeting::{
    interface::MeetingClientInterface, types::MeetingForm,
};

use crate::client::session::Session;

use super::AlertStatus;

/// State of the meeting detail page for one meeting key.
#[derive(Debug, Default)]
pub struct MeetingDetailView {
    pub websafe_meeting_key: String,
    pub meeting: MeetingForm,
    pub is_user_attending: bool,
    pub loading: bool,
    pub messages: Option<String>,
    pub alert_status: Option<AlertStatus>,
}

impl MeetingDetailView {
    pub fn new(websafe_meeting_key: &str) -> Self {
        MeetingDetailView {
            websafe_meeting_key: websafe_meeting_key.to_string(),
            ..MeetingDetailView::default()
        }
    }

    /// Loads the meeting and marks whether the user is attending it. The
    /// attendance check is silent on failure.
    pub async fn init<M: MeetingClientInterface>(&mut self, api: &M) {
        self.loading = true;
        match api.get_meeting(&self.websafe_meeting_key).await {
            Ok(meeting) => {
                self.alert_status = Some(AlertStatus::Success);
                self.meeting = meeting;
            }
            Err(e) => {
                let message = format!(
                    "Failed to get the meeting : {} {}",
                    self.websafe_meeting_key, e
                );
                log::error!("{}", message);
                self.messages = Some(message);
                self.alert_status = Some(AlertStatus::Warning);
            }
        }

        match api.get_profile().await {
            Ok(profile) => {
                if profile
                    .meeting_keys_to_attend
                    .iter()
                    .any(|key| key == &self.websafe_meeting_key)
                {
                    self.alert_status = Some(AlertStatus::Info);
                    self.messages = Some("You are attending this meeting".to_string());
                    self.is_user_attending = true;
                }
            }
            Err(e) => {
                log::warn!("failed to retrieve profile: {}", e);
            }
        }
        self.loading = false;
    }

    pub async fn register_for_meeting<M: MeetingClientInterface>(
        &mut self,
        api: &M,
        session: &mut Session,
    ) {
        self.loading = true;
        let outcome = api.register_for_meeting(&self.websafe_meeting_key).await;
        self.loading = false;
        match outcome {
            Ok(true) => {
                self.messages = Some("Registered for the meeting".to_string());
                self.alert_status = Some(AlertStatus::Success);
                self.is_user_attending = true;
                self.meeting.seats_available =
                    self.meeting.seats_available.map(|s| s.saturating_sub(1));
            }
            Ok(false) => {
                self.messages = Some("Failed to register for the meeting".to_string());
                self.alert_status = Some(AlertStatus::Warning);
            }
            Err(e) => {
                let message = format!("Failed to register for the meeting : {}", e);
                log::error!("{}", message);
                self.messages = Some(message);
                self.alert_status = Some(AlertStatus::Warning);
                if e.is_unauthorized() {
                    session.request_sign_in();
                }
            }
        }
    }

    pub async fn unregister_from_meeting<M: MeetingClientInterface>(
        &mut self,
        api: &M,
        session: &mut Session,
    ) {
        self.loading = true;
        let outcome = api.unregister_from_meeting(&self.websafe_meeting_key).await;
        self.loading = false;
        match outcome {
            Ok(true) => {
                self.messages = Some("Unregistered from the meeting".to_string());
                self.alert_status = Some(AlertStatus::Success);
                self.is_user_attending = false;
                self.meeting.seats_available = self.meeting.seats_available.map(|s| s + 1);
                log::info!("unregistered from {}", self.websafe_meeting_key);
            }
            Ok(false) => {
                self.messages = Some("Failed to unregister from the meeting".to_string());
                self.alert_status = Some(AlertStatus::Warning);
            }
            Err(e) => {
                let message = format!("Failed to unregister from the meeting : {}", e);
                log::error!("{}", message);
                self.messages = Some(message);
                self.alert_status = Some(AlertStatus::Warning);
                if e.is_unauthorized() {
                    session.request_sign_in();
                }
            }
        }
    }
}
