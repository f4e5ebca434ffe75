use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Meeting fields a query filter can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterField {
    City,
    Topic,
    Month,
    MaxAttendees,
}

impl FilterField {
    /// Candidates for the filter field select box, in display order.
    pub fn all() -> &'static [FilterField] {
        &[
            FilterField::City,
            FilterField::Topic,
            FilterField::Month,
            FilterField::MaxAttendees,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterField::City => "City",
            FilterField::Topic => "Topic",
            FilterField::Month => "Start month",
            FilterField::MaxAttendees => "Max Attendees",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Eq,
    Gt,
    Gteq,
    Lt,
    Lteq,
    Ne,
}

impl FilterOperator {
    /// Candidates for the operator select box, in display order.
    pub fn all() -> &'static [FilterOperator] {
        &[
            FilterOperator::Eq,
            FilterOperator::Gt,
            FilterOperator::Gteq,
            FilterOperator::Lt,
            FilterOperator::Lteq,
            FilterOperator::Ne,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Gt => ">",
            FilterOperator::Gteq => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Lteq => "<=",
            FilterOperator::Ne => "!=",
        }
    }
}

/// One (field, operator, value) constraint as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub field: FilterField,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingQueryRequest {
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingForm {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub organizer_user_id: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub seats_available: Option<u32>,
    #[serde(default)]
    pub web_safe_key: Option<String>,
    #[serde(default)]
    pub organizer_display_name: Option<String>,
}

/// T-shirt size enumeration. Wire values are text like `XS_M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeeShirtSize {
    #[default]
    NotSpecified,
    XsM,
    XsW,
    SM,
    SW,
    MM,
    MW,
    LM,
    LW,
    XlM,
    XlW,
    XxlM,
    XxlW,
    XxxlM,
    XxxlW,
}

impl TeeShirtSize {
    /// Candidates for the size select box; `NotSpecified` is not selectable.
    pub fn selectable() -> &'static [TeeShirtSize] {
        &[
            TeeShirtSize::XsM,
            TeeShirtSize::XsW,
            TeeShirtSize::SM,
            TeeShirtSize::SW,
            TeeShirtSize::MM,
            TeeShirtSize::MW,
            TeeShirtSize::LM,
            TeeShirtSize::LW,
            TeeShirtSize::XlM,
            TeeShirtSize::XlW,
            TeeShirtSize::XxlM,
            TeeShirtSize::XxlW,
            TeeShirtSize::XxxlM,
            TeeShirtSize::XxxlW,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TeeShirtSize::NotSpecified => "Not specified",
            TeeShirtSize::XsM => "XS - Men's",
            TeeShirtSize::XsW => "XS - Women's",
            TeeShirtSize::SM => "S - Men's",
            TeeShirtSize::SW => "S - Women's",
            TeeShirtSize::MM => "M - Men's",
            TeeShirtSize::MW => "M - Women's",
            TeeShirtSize::LM => "L - Men's",
            TeeShirtSize::LW => "L - Women's",
            TeeShirtSize::XlM => "XL - Men's",
            TeeShirtSize::XlW => "XL - Women's",
            TeeShirtSize::XxlM => "XXL - Men's",
            TeeShirtSize::XxlW => "XXL - Women's",
            TeeShirtSize::XxxlM => "XXXL - Men's",
            TeeShirtSize::XxxlW => "XXXL - Women's",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub main_email: Option<String>,
    pub tee_shirt_size: TeeShirtSize,
    pub meeting_keys_to_attend: Vec<String>,
}

/// The subset of profile fields a user can edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileMiniForm {
    pub display_name: Option<String>,
    pub tee_shirt_size: TeeShirtSize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingListResponse {
    #[serde(default)]
    pub items: Vec<MeetingForm>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingItems {
    #[serde(default)]
    pub items: Vec<MeetingForm>,
}

/// `getMeetingsToAttend` nests its items one level deeper than the other
/// list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsToAttendResponse {
    pub result: MeetingItems,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub result: bool,
}
