use crate::preview::truncate_for_display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewViewModel {
    pub url: String,
    pub status: String,
    pub response_body: String,
    pub response_status_code: Option<u16>,
    pub loading: bool,
}

impl PreviewViewModel {
    /// Response body cut down to what the screen should hold.
    pub fn display_body(&self) -> String {
        truncate_for_display(&self.response_body)
    }
}
