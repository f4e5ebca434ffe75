use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use meeting_interfaces::api::meeting::{
    interface::MeetingClientInterface, types::MeetingForm,
};
use regex::Regex;

use crate::client::session::Session;

use super::AlertStatus;

fn max_attendees_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").unwrap())
}

/// The meeting being edited. Text inputs stay raw strings until validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingDraft {
    pub name: String,
    pub description: String,
    pub city: String,
    pub topics: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub max_attendees: String,
}

impl MeetingDraft {
    fn to_form(&self) -> MeetingForm {
        MeetingForm {
            name: self.name.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            city: (!self.city.is_empty()).then(|| self.city.clone()),
            topics: self.topics.clone(),
            start_date: self.start_date,
            month: self.start_date.map(|d| d.month()),
            end_date: self.end_date,
            max_attendees: self.max_attendees.parse().ok(),
            ..MeetingForm::default()
        }
    }
}

/// State of the Create meeting page.
#[derive(Debug, Default)]
pub struct CreateMeetingView {
    pub meeting: MeetingDraft,
    pub loading: bool,
    pub submitted: bool,
    pub messages: Option<String>,
    pub alert_status: Option<AlertStatus>,
}

impl CreateMeetingView {
    pub fn new() -> Self {
        CreateMeetingView::default()
    }

    /// Default candidates for the city select box.
    pub fn cities() -> &'static [&'static str] {
        &["Chicago", "London", "Paris", "San Francisco", "Tokyo"]
    }

    /// Default candidates for the topics select box.
    pub fn topics() -> &'static [&'static str] {
        &[
            "Medical Innovations",
            "Programming Languages",
            "Web Technologies",
            "Movie Making",
            "Health and Nutrition",
        ]
    }

    /// Empty is accepted; otherwise the input must be a non-negative
    /// integer.
    pub fn is_valid_max_attendees(&self) -> bool {
        if self.meeting.max_attendees.is_empty() {
            return true;
        }
        max_attendees_re().is_match(&self.meeting.max_attendees)
    }

    /// A start date without an end date is accepted; an end date without a
    /// start date is not.
    pub fn is_valid_dates(&self) -> bool {
        match (self.meeting.start_date, self.meeting.end_date) {
            (None, None) => true,
            (Some(_), None) => true,
            (Some(start), Some(end)) => start <= end,
            (None, Some(_)) => false,
        }
    }

    pub fn is_valid_meeting(&self) -> bool {
        !self.meeting.name.is_empty() && self.is_valid_max_attendees() && self.is_valid_dates()
    }

    /// Creates the drafted meeting. An invalid draft issues no call and
    /// shows no error.
    pub async fn create_meeting<M: MeetingClientInterface>(
        &mut self,
        api: &M,
        session: &mut Session,
    ) {
        if !self.is_valid_meeting() {
            return;
        }
        self.loading = true;
        let outcome = api.create_meeting(&self.meeting.to_form()).await;
        self.loading = false;
        match outcome {
            Ok(created) => {
                let message = format!("The meeting has been created : {}", created.name);
                log::info!("{}", message);
                self.messages = Some(message);
                self.alert_status = Some(AlertStatus::Success);
                self.submitted = false;
                self.meeting = MeetingDraft::default();
            }
            Err(e) => {
                let message = format!("Failed to create a meeting : {}", e);
                log::error!("{} meeting: {:?}", message, self.meeting);
                self.messages = Some(message);
                self.alert_status = Some(AlertStatus::Warning);
                if e.is_unauthorized() {
                    session.request_sign_in();
                }
            }
        }
    }
}
