use crate::RequestId;

/// Decoded payload of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Payload decoded as text (possibly empty).
    Text(String),
    /// Payload could not be decoded as text.
    Binary { byte_len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input (full new contents).
    UrlChanged(String),
    /// User triggered the preview action.
    PreviewRequested,
    /// User triggered the clear action.
    ClearRequested,
    /// Engine obtained a response for a request.
    PreviewCompleted {
        request_id: RequestId,
        status_code: u16,
        body: ResponseBody,
    },
    /// Engine failed before a response was obtained.
    PreviewFailed {
        request_id: RequestId,
        message: String,
    },
}
