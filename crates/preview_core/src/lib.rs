//! Preview core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod preview;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, ResponseBody};
pub use preview::{truncate_for_display, MAX_DISPLAY_BODY};
pub use state::{
    PreviewState, RequestId, EMPTY_URL_STATUS, IDLE_STATUS, NO_CONTENT_PLACEHOLDER,
    SUCCESS_STATUS,
};
pub use update::update;
pub use view_model::PreviewViewModel;
