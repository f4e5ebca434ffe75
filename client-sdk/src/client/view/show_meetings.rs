use meeting_interfaces::api::{
    error::ServerError,
    meeting::{
        interface::MeetingClientInterface,
        types::{Filter, FilterField, FilterOperator, MeetingForm, MeetingQueryRequest},
    },
};

use crate::client::session::Session;

use super::AlertStatus;

/// Meetings shown per page. Not configurable.
pub const PAGE_SIZE: usize = 20;

/// One user-editable filter row. Field and operator can be unset from the
/// select boxes, so they stay optional until the row is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterEntry {
    pub field: Option<FilterField>,
    pub operator: Option<FilterOperator>,
    pub value: String,
}

/// Which query the view issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    YouHaveCreated,
    YouWillAttend,
}

impl Tab {
    /// The created/attending tabs only make sense for a signed-in user.
    pub fn requires_sign_in(&self) -> bool {
        !matches!(self, Tab::All)
    }

    fn success_message(&self) -> &'static str {
        match self {
            Tab::All => "Query succeeded",
            Tab::YouHaveCreated => "Query succeeded : Meetings you have created",
            Tab::YouWillAttend => {
                "Query succeeded : Meetings you will attend (or you have attended)"
            }
        }
    }

    fn failure_label(&self) -> &'static str {
        match self {
            Tab::All => "Failed to query meetings",
            Tab::YouHaveCreated => "Failed to query the meetings created",
            Tab::YouWillAttend => "Failed to query the meetings to attend",
        }
    }
}

/// A rendered pager control; `disabled` mirrors the "disabled" marker on
/// the element.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageControl {
    pub disabled: bool,
}

/// Page-selector state derived from the displayed meeting list.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub current_page: usize,
}

impl Pagination {
    pub fn number_of_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(PAGE_SIZE)
    }

    /// Indices used to render the page-selector controls.
    pub fn page_indices(&self, number_of_pages: usize) -> Vec<usize> {
        (0..number_of_pages).collect()
    }

    pub fn is_control_disabled(control: &PageControl) -> bool {
        control.disabled
    }
}

/// Identifies one in-flight dispatch. A response is applied only while its
/// token is still current, so a late response for an abandoned tab or a
/// superseded query cannot overwrite the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchToken {
    epoch: u64,
    tab: Tab,
}

pub struct ShowMeetingsView {
    pub selected_tab: Tab,
    pub filters: Vec<FilterEntry>,
    pub meetings: Vec<MeetingForm>,
    pub pagination: Pagination,
    pub loading: bool,
    pub submitted: bool,
    pub messages: Option<String>,
    pub alert_status: Option<AlertStatus>,
    epoch: u64,
}

impl Default for ShowMeetingsView {
    fn default() -> Self {
        ShowMeetingsView {
            selected_tab: Tab::All,
            filters: Vec::new(),
            meetings: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            submitted: false,
            messages: None,
            alert_status: None,
            epoch: 0,
        }
    }
}

impl ShowMeetingsView {
    pub fn new() -> Self {
        ShowMeetingsView::default()
    }

    /// Appends a filter row with the first field/operator preselected and
    /// an empty value.
    pub fn add_filter(&mut self) {
        self.filters.push(FilterEntry {
            field: Some(FilterField::all()[0]),
            operator: Some(FilterOperator::all()[0]),
            value: String::new(),
        });
    }

    /// Removes the filter at `index`; out-of-range indices are a no-op.
    pub fn remove_filter(&mut self, index: usize) {
        if index < self.filters.len() {
            self.filters.remove(index);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Builds the query payload, silently dropping rows with a missing
    /// field/operator or an empty value. Display order is preserved.
    pub fn build_query_request(&self) -> MeetingQueryRequest {
        let filters = self
            .filters
            .iter()
            .filter_map(|entry| match (entry.field, entry.operator) {
                (Some(field), Some(operator)) if !entry.value.is_empty() => Some(Filter {
                    field,
                    operator,
                    value: entry.value.clone(),
                }),
                _ => None,
            })
            .collect();
        MeetingQueryRequest { filters }
    }

    pub fn number_of_pages(&self) -> usize {
        self.pagination.number_of_pages(self.meetings.len())
    }

    pub fn page_indices(&self) -> Vec<usize> {
        self.pagination.page_indices(self.number_of_pages())
    }

    /// Switches tabs. Invalidates any dispatch still in flight; its
    /// response will be dropped on completion.
    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
        self.epoch += 1;
        self.loading = false;
    }

    /// Marks a dispatch as started and returns its token.
    pub fn begin_dispatch(&mut self) -> DispatchToken {
        self.epoch += 1;
        self.loading = true;
        self.submitted = false;
        DispatchToken {
            epoch: self.epoch,
            tab: self.selected_tab,
        }
    }

    pub fn is_current(&self, token: DispatchToken) -> bool {
        token.epoch == self.epoch && token.tab == self.selected_tab
    }

    /// Applies the outcome of a dispatch. Stale tokens are dropped without
    /// touching the view.
    pub fn finish_dispatch(
        &mut self,
        token: DispatchToken,
        outcome: Result<Vec<MeetingForm>, ServerError>,
        session: &mut Session,
    ) {
        if !self.is_current(token) {
            log::debug!("dropping stale query response for {:?}", token.tab);
            return;
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.meetings = items;
                self.pagination.current_page = 0;
                self.messages = Some(token.tab.success_message().to_string());
                self.alert_status = Some(AlertStatus::Success);
                log::info!("{}", token.tab.success_message());
            }
            Err(e) => {
                let message = format!("{} : {}", token.tab.failure_label(), e);
                log::error!("{}", message);
                self.messages = Some(message);
                self.alert_status = Some(AlertStatus::Warning);
                if e.is_unauthorized() {
                    session.request_sign_in();
                }
            }
        }
        self.submitted = true;
    }

    /// Queries the meetings for the currently selected tab. The created and
    /// attending tabs require a signed-in session; otherwise the sign-in
    /// prompt is raised and no call is issued.
    pub async fn query_meetings<M: MeetingClientInterface>(
        &mut self,
        api: &M,
        session: &mut Session,
    ) {
        if self.selected_tab.requires_sign_in() && !session.signed_in() {
            session.request_sign_in();
            return;
        }
        let token = self.begin_dispatch();
        let outcome = match token.tab {
            Tab::All => api.query_meetings(&self.build_query_request()).await,
            Tab::YouHaveCreated => api.get_meetings_created().await,
            Tab::YouWillAttend => api.get_meetings_to_attend().await,
        };
        self.finish_dispatch(token, outcome, session);
    }
}

#[cfg(test)]
mod tests {
    use meeting_interfaces::api::meeting::types::{FilterField, FilterOperator};

    use crate::client::view::testing::{meetings, MockMeetingClient};
    use crate::utils::logger::init_logger;

    use super::*;

    fn entry(field: FilterField, operator: FilterOperator, value: &str) -> FilterEntry {
        FilterEntry {
            field: Some(field),
            operator: Some(operator),
            value: value.to_string(),
        }
    }

    #[test]
    fn add_filter_uses_first_candidates_as_defaults() {
        let mut view = ShowMeetingsView::new();
        view.add_filter();
        assert_eq!(view.filters.len(), 1);
        assert_eq!(view.filters[0].field, Some(FilterField::City));
        assert_eq!(view.filters[0].operator, Some(FilterOperator::Eq));
        assert!(view.filters[0].value.is_empty());
    }

    #[test]
    fn remove_filter_is_positional_and_tolerates_out_of_range() {
        let mut view = ShowMeetingsView::new();
        view.filters = vec![
            entry(FilterField::City, FilterOperator::Eq, "Paris"),
            entry(FilterField::Topic, FilterOperator::Eq, "Rust"),
            entry(FilterField::Month, FilterOperator::Gteq, "6"),
        ];

        view.remove_filter(1);
        assert_eq!(view.filters.len(), 2);
        assert_eq!(view.filters[0].value, "Paris");
        assert_eq!(view.filters[1].value, "6");

        view.remove_filter(5);
        assert_eq!(view.filters.len(), 2);

        view.clear_filters();
        assert!(view.filters.is_empty());
    }

    #[test]
    fn build_query_request_drops_incomplete_rows_preserving_order() {
        let mut view = ShowMeetingsView::new();
        view.filters = vec![
            entry(FilterField::City, FilterOperator::Eq, "Paris"),
            entry(FilterField::Topic, FilterOperator::Eq, ""),
            FilterEntry {
                field: None,
                operator: Some(FilterOperator::Gt),
                value: "10".to_string(),
            },
            entry(FilterField::MaxAttendees, FilterOperator::Gteq, "10"),
        ];

        let request = view.build_query_request();
        assert_eq!(request.filters.len(), 2);
        assert_eq!(request.filters[0].field, FilterField::City);
        assert_eq!(request.filters[0].value, "Paris");
        assert_eq!(request.filters[1].field, FilterField::MaxAttendees);
    }

    #[test]
    fn page_count_edges() {
        let pagination = Pagination::default();
        assert_eq!(pagination.number_of_pages(0), 0);
        assert_eq!(pagination.number_of_pages(20), 1);
        assert_eq!(pagination.number_of_pages(21), 2);
        assert_eq!(pagination.page_indices(3), vec![0, 1, 2]);
        assert_eq!(pagination.page_indices(0), Vec::<usize>::new());
    }

    #[test]
    fn disabled_control_is_detected() {
        assert!(Pagination::is_control_disabled(&PageControl {
            disabled: true
        }));
        assert!(!Pagination::is_control_disabled(&PageControl::default()));
    }

    #[tokio::test]
    async fn all_query_sends_only_complete_filters() {
        init_logger();
        let api = MockMeetingClient::with_meetings(meetings(2));
        let mut session = Session::new();
        let mut view = ShowMeetingsView::new();
        view.filters = vec![
            entry(FilterField::City, FilterOperator::Eq, "Paris"),
            entry(FilterField::Topic, FilterOperator::Eq, ""),
        ];

        view.query_meetings(&api, &mut session).await;

        let sent = api.last_query.borrow().clone().unwrap();
        assert_eq!(sent.filters.len(), 1);
        assert_eq!(sent.filters[0].value, "Paris");
        assert_eq!(view.meetings.len(), 2);
        assert_eq!(view.alert_status, Some(AlertStatus::Success));
        assert!(view.submitted);
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn created_tab_while_signed_out_prompts_without_calling() {
        let api = MockMeetingClient::default();
        let mut session = Session::new();
        let mut view = ShowMeetingsView::new();
        view.select_tab(Tab::YouHaveCreated);

        view.query_meetings(&api, &mut session).await;

        assert_eq!(api.call_count(), 0);
        assert!(session.take_sign_in_prompt());
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn attending_tab_queries_once_signed_in() {
        let api = MockMeetingClient::with_meetings(meetings(1));
        let mut session = Session::new();
        session.sign_in("user@example.com");
        let mut view = ShowMeetingsView::new();
        view.select_tab(Tab::YouWillAttend);

        view.query_meetings(&api, &mut session).await;

        assert_eq!(api.calls.borrow().as_slice(), ["get_meetings_to_attend"]);
        assert_eq!(view.meetings.len(), 1);
    }

    #[tokio::test]
    async fn forty_five_results_paginate_to_three_pages() {
        let api = MockMeetingClient::with_meetings(meetings(45));
        let mut session = Session::new();
        let mut view = ShowMeetingsView::new();

        view.query_meetings(&api, &mut session).await;

        assert_eq!(view.meetings.len(), 45);
        assert_eq!(view.number_of_pages(), 3);
        assert_eq!(view.page_indices(), vec![0, 1, 2]);
        assert_eq!(view.pagination.current_page, 0);
    }

    #[tokio::test]
    async fn unauthorized_failure_raises_sign_in_prompt() {
        let api = MockMeetingClient::failing(401);
        let mut session = Session::new();
        session.sign_in("user@example.com");
        let mut view = ShowMeetingsView::new();
        view.select_tab(Tab::YouHaveCreated);

        view.query_meetings(&api, &mut session).await;

        assert_eq!(view.alert_status, Some(AlertStatus::Warning));
        assert!(view
            .messages
            .as_deref()
            .unwrap()
            .starts_with("Failed to query the meetings created"));
        assert!(session.take_sign_in_prompt());
    }

    #[tokio::test]
    async fn server_failure_shows_warning_without_prompt() {
        let api = MockMeetingClient::failing(500);
        let mut session = Session::new();
        let mut view = ShowMeetingsView::new();

        view.query_meetings(&api, &mut session).await;

        assert_eq!(view.alert_status, Some(AlertStatus::Warning));
        assert!(!session.sign_in_prompt());
        assert!(view.submitted);
    }

    #[test]
    fn late_response_for_abandoned_tab_is_dropped() {
        let mut session = Session::new();
        let mut view = ShowMeetingsView::new();
        view.meetings = meetings(2);

        let token = view.begin_dispatch();
        view.select_tab(Tab::YouHaveCreated);
        view.finish_dispatch(token, Ok(meetings(45)), &mut session);

        // The stale response must not overwrite the displayed list.
        assert_eq!(view.meetings.len(), 2);
        assert!(view.messages.is_none());
    }

    #[test]
    fn superseded_dispatch_is_dropped_in_favor_of_the_newer_one() {
        let mut session = Session::new();
        let mut view = ShowMeetingsView::new();

        let first = view.begin_dispatch();
        let second = view.begin_dispatch();
        assert!(!view.is_current(first));

        view.finish_dispatch(first, Ok(meetings(45)), &mut session);
        assert!(view.meetings.is_empty());

        view.finish_dispatch(second, Ok(meetings(3)), &mut session);
        assert_eq!(view.meetings.len(), 3);
    }
}
