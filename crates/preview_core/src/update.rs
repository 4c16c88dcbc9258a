use preview_logging::preview_debug;

use crate::{Effect, Msg, PreviewState, ResponseBody, EMPTY_URL_STATUS, NO_CONTENT_PLACEHOLDER};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PreviewState, msg: Msg) -> (PreviewState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(text) => {
            state.set_url(text);
            Vec::new()
        }
        Msg::PreviewRequested => {
            // A second trigger while a request is outstanding is dropped, not queued.
            if state.is_loading() {
                return (state, Vec::new());
            }
            let url = state.url().trim().to_owned();
            if url.is_empty() {
                state.set_status(EMPTY_URL_STATUS);
                return (state, Vec::new());
            }
            let request_id = state.begin_request(&url);
            vec![Effect::FetchUrl { request_id, url }]
        }
        Msg::ClearRequested => match state.reset() {
            Some(request_id) => vec![Effect::CancelFetch { request_id }],
            None => Vec::new(),
        },
        Msg::PreviewCompleted {
            request_id,
            status_code,
            body,
        } => {
            if state.is_current(request_id) {
                state.complete_request(status_code, body_text(body));
            } else {
                preview_debug!(
                    "Discarding stale response request_id={} status={}",
                    request_id,
                    status_code
                );
            }
            Vec::new()
        }
        Msg::PreviewFailed {
            request_id,
            message,
        } => {
            if state.is_current(request_id) {
                state.fail_request(&message);
            } else {
                preview_debug!(
                    "Discarding stale failure request_id={} message={}",
                    request_id,
                    message
                );
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn body_text(body: ResponseBody) -> String {
    match body {
        ResponseBody::Text(text) if text.is_empty() => NO_CONTENT_PLACEHOLDER.to_string(),
        ResponseBody::Text(text) => text,
        ResponseBody::Binary { byte_len } => format!("[Binary data: {byte_len} bytes]"),
    }
}
