use crate::view_model::PreviewViewModel;

/// Generation token attached to every issued fetch.
pub type RequestId = u64;

pub const IDLE_STATUS: &str = "Enter a URL to preview its content";
pub const EMPTY_URL_STATUS: &str = "Please enter a URL";
pub const SUCCESS_STATUS: &str = "Content loaded successfully";
pub const NO_CONTENT_PLACEHOLDER: &str = "(No content)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    url: String,
    status: String,
    response_body: String,
    response_status_code: Option<u16>,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            url: String::new(),
            status: IDLE_STATUS.to_string(),
            response_body: String::new(),
            response_status_code: None,
            in_flight: None,
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PreviewViewModel {
        PreviewViewModel {
            url: self.url.clone(),
            status: self.status.clone(),
            response_body: self.response_body.clone(),
            response_status_code: self.response_status_code,
            loading: self.is_loading(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.dirty = true;
        }
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.dirty = true;
    }

    /// Enters the loading state and returns the token for the new request.
    pub(crate) fn begin_request(&mut self, url: &str) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.status = format!("Loading {url}...");
        self.response_body.clear();
        self.response_status_code = None;
        self.dirty = true;
        request_id
    }

    /// Returns true when `request_id` is the outstanding request.
    pub(crate) fn is_current(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn complete_request(&mut self, status_code: u16, body: String) {
        self.in_flight = None;
        self.status = SUCCESS_STATUS.to_string();
        self.response_status_code = Some(status_code);
        self.response_body = body;
        self.dirty = true;
    }

    pub(crate) fn fail_request(&mut self, message: &str) {
        self.in_flight = None;
        self.status = format!("Error: {message}");
        self.response_body.clear();
        self.response_status_code = None;
        self.dirty = true;
    }

    /// Restores every visible field to its default and forgets the outstanding
    /// request. Returns the token of the request that was dropped, if any.
    pub(crate) fn reset(&mut self) -> Option<RequestId> {
        let dropped = self.in_flight.take();
        let visible_default = self.url.is_empty()
            && self.status == IDLE_STATUS
            && self.response_body.is_empty()
            && self.response_status_code.is_none();
        if visible_default && dropped.is_none() {
            return None;
        }
        self.url.clear();
        self.status = IDLE_STATUS.to_string();
        self.response_body.clear();
        self.response_status_code = None;
        self.dirty = true;
        dropped
    }
}
