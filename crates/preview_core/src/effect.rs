use crate::RequestId;

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET request for `url`, tagged with `request_id`.
    FetchUrl { request_id: RequestId, url: String },
    /// The result of `request_id` will be discarded; abort it if possible.
    CancelFetch { request_id: RequestId },
}
