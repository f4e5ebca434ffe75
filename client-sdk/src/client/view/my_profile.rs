use meeting_interfaces::api::meeting::{
    interface::MeetingClientInterface,
    types::{ProfileForm, ProfileMiniForm, TeeShirtSize},
};

use crate::client::session::Session;

use super::AlertStatus;

/// State of the My Profile page.
#[derive(Debug, Default)]
pub struct MyProfileView {
    /// The fields being edited.
    pub profile: ProfileMiniForm,
    /// The profile as last retrieved from the server, kept to know the
    /// dirty state.
    pub initial_profile: Option<ProfileForm>,
    pub submitted: bool,
    pub loading: bool,
    pub messages: Option<String>,
    pub alert_status: Option<AlertStatus>,
}

impl MyProfileView {
    pub fn new() -> Self {
        MyProfileView::default()
    }

    /// Candidates for the tee shirt size select box.
    pub fn tee_shirt_sizes() -> &'static [TeeShirtSize] {
        TeeShirtSize::selectable()
    }

    pub fn is_dirty(&self) -> bool {
        match &self.initial_profile {
            Some(initial) => {
                initial.display_name != self.profile.display_name
                    || initial.tee_shirt_size != self.profile.tee_shirt_size
            }
            None => false,
        }
    }

    /// Initializes the page. Requires a signed-in session; otherwise the
    /// sign-in prompt is raised and no call is issued.
    pub async fn init<M: MeetingClientInterface>(&mut self, api: &M, session: &mut Session) {
        if !session.signed_in() {
            session.request_sign_in();
            return;
        }
        self.load_profile(api).await;
    }

    /// Fetches the stored profile into the editable fields. A failed fetch
    /// leaves the page blank without a user-visible error, like the
    /// original page.
    pub async fn load_profile<M: MeetingClientInterface>(&mut self, api: &M) {
        self.loading = true;
        let outcome = api.get_profile().await;
        self.loading = false;
        match outcome {
            Ok(profile) => {
                self.profile.display_name = profile.display_name.clone();
                self.profile.tee_shirt_size = profile.tee_shirt_size;
                self.initial_profile = Some(profile);
            }
            Err(e) => {
                log::warn!("failed to retrieve profile: {}", e);
            }
        }
    }

    pub async fn save_profile<M: MeetingClientInterface>(
        &mut self,
        api: &M,
        session: &mut Session,
    ) {
        self.submitted = true;
        self.loading = true;
        let outcome = api.save_profile(&self.profile).await;
        self.loading = false;
        match outcome {
            Ok(saved) => {
                self.messages = Some("The profile has been updated".to_string());
                self.alert_status = Some(AlertStatus::Success);
                self.submitted = false;
                log::info!("profile updated for {:?}", saved.display_name);
                self.initial_profile = Some(saved);
            }
            Err(e) => {
                let message = format!("Failed to update a profile : {}", e);
                log::error!("{} profile: {:?}", message, self.profile);
                self.messages = Some(message);
                self.alert_status = Some(AlertStatus::Warning);
                if e.is_unauthorized() {
                    session.request_sign_in();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use meeting_interfaces::api::meeting::types::ProfileForm;

    use crate::client::view::testing::MockMeetingClient;

    use super::*;

    fn stored_profile() -> ProfileForm {
        ProfileForm {
            display_name: Some("Ada".to_string()),
            tee_shirt_size: TeeShirtSize::MW,
            ..ProfileForm::default()
        }
    }

    #[tokio::test]
    async fn init_while_signed_out_prompts_without_calling() {
        let api = MockMeetingClient::default();
        let mut session = Session::new();
        let mut view = MyProfileView::new();

        view.init(&api, &mut session).await;

        assert_eq!(api.call_count(), 0);
        assert!(session.take_sign_in_prompt());
        assert!(view.initial_profile.is_none());
    }

    #[tokio::test]
    async fn init_loads_profile_into_editable_fields() {
        let api = MockMeetingClient {
            profile: stored_profile(),
            ..MockMeetingClient::default()
        };
        let mut session = Session::new();
        session.sign_in("ada@example.com");
        let mut view = MyProfileView::new();

        view.init(&api, &mut session).await;

        assert_eq!(view.profile.display_name.as_deref(), Some("Ada"));
        assert_eq!(view.profile.tee_shirt_size, TeeShirtSize::MW);
        assert!(!view.is_dirty());

        view.profile.tee_shirt_size = TeeShirtSize::LW;
        assert!(view.is_dirty());
    }

    #[tokio::test]
    async fn save_profile_success_resets_dirty_state() {
        let api = MockMeetingClient {
            profile: stored_profile(),
            ..MockMeetingClient::default()
        };
        let mut session = Session::new();
        session.sign_in("ada@example.com");
        let mut view = MyProfileView::new();
        view.load_profile(&api).await;
        view.profile.display_name = Some("Ada L.".to_string());

        view.save_profile(&api, &mut session).await;

        assert_eq!(view.messages.as_deref(), Some("The profile has been updated"));
        assert_eq!(view.alert_status, Some(AlertStatus::Success));
        assert!(!view.submitted);
        assert!(!view.is_dirty());
    }

    #[tokio::test]
    async fn save_profile_unauthorized_prompts_sign_in() {
        let api = MockMeetingClient::failing(401);
        let mut session = Session::new();
        let mut view = MyProfileView::new();

        view.save_profile(&api, &mut session).await;

        assert_eq!(view.alert_status, Some(AlertStatus::Warning));
        assert!(view
            .messages
            .as_deref()
            .unwrap()
            .starts_with("Failed to update a profile"));
        assert!(session.take_sign_in_prompt());
        assert!(view.submitted);
    }

    #[test]
    fn fourteen_sizes_are_selectable() {
        assert_eq!(MyProfileView::tee_shirt_sizes().len(), 14);
        assert!(!MyProfileView::tee_shirt_sizes().contains(&TeeShirtSize::NotSpecified));
    }
}
