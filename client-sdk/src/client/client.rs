use meeting_interfaces::api::meeting::interface::MeetingClientInterface;

use crate::external_api::meeting_server::MeetingServerClient;

use super::{
    config::Config,
    session::Session,
    view::{
        create_meeting::CreateMeetingView, meeting_detail::MeetingDetailView,
        my_profile::MyProfileView, show_meetings::ShowMeetingsView,
    },
};

/// Aggregates the remote API client and the session shared by every view.
pub struct Client<M: MeetingClientInterface> {
    pub meeting_server: M,
    pub session: Session,
}

impl Client<MeetingServerClient> {
    pub fn from_config(config: &Config) -> Self {
        Client::new(MeetingServerClient::new(&config.meeting_server_base_url))
    }
}

impl<M: MeetingClientInterface> Client<M> {
    pub fn new(meeting_server: M) -> Self {
        Client {
            meeting_server,
            session: Session::new(),
        }
    }

    pub fn show_meetings(&self) -> ShowMeetingsView {
        ShowMeetingsView::new()
    }

    pub fn my_profile(&self) -> MyProfileView {
        MyProfileView::new()
    }

    pub fn create_meeting(&self) -> CreateMeetingView {
        CreateMeetingView::new()
    }

    pub fn meeting_detail(&self, websafe_meeting_key: &str) -> MeetingDetailView {
        MeetingDetailView::new(websafe_meeting_key)
    }
}
