use serde::{Deserialize, Serialize};

pub mod create_meeting;
pub mod meeting_detail;
pub mod my_profile;
pub mod show_meetings;

/// Display severity of the status message bound to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertStatus {
    Success,
    Warning,
    Info,
}
