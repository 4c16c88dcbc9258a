//! Preview engine: HTTP fetching, body decoding and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_body, DecodeError};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchOutput, RequestId};
