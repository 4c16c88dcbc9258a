use preview_core::{update, Effect, Msg, PreviewState, ResponseBody, IDLE_STATUS, SUCCESS_STATUS};

fn submit_url(state: PreviewState, input: &str) -> (PreviewState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlChanged(input.to_string()));
    update(state, Msg::PreviewRequested)
}

fn completed(request_id: u64, body: &str) -> Msg {
    Msg::PreviewCompleted {
        request_id,
        status_code: 200,
        body: ResponseBody::Text(body.to_string()),
    }
}

#[test]
fn request_ids_increase_monotonically() {
    let (state, effects) = submit_url(PreviewState::new(), "a.example");
    assert_eq!(
        effects,
        vec![Effect::FetchUrl {
            request_id: 1,
            url: "a.example".to_string()
        }]
    );
    let (state, _) = update(state, completed(1, "a"));

    let (state, _) = update(state, Msg::ClearRequested);
    let (_state, effects) = submit_url(state, "b.example");
    assert_eq!(
        effects,
        vec![Effect::FetchUrl {
            request_id: 2,
            url: "b.example".to_string()
        }]
    );
}

#[test]
fn clear_while_loading_resets_and_cancels() {
    let (state, _) = submit_url(PreviewState::new(), "https://slow.example");
    assert!(state.view().loading);

    let (mut state, effects) = update(state, Msg::ClearRequested);
    let view = state.view();

    assert_eq!(effects, vec![Effect::CancelFetch { request_id: 1 }]);
    assert!(!view.loading);
    assert_eq!(view.url, "");
    assert_eq!(view.status, IDLE_STATUS);
    assert_eq!(view.response_body, "");
    assert_eq!(view.response_status_code, None);
    assert_eq!(state.in_flight(), None);
    assert!(state.consume_dirty());
}

#[test]
fn late_response_after_clear_is_discarded() {
    let (state, _) = submit_url(PreviewState::new(), "https://slow.example");
    let (mut state, _) = update(state, Msg::ClearRequested);
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut state, effects) = update(state, completed(1, "late"));

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn late_failure_after_clear_is_discarded() {
    let (state, _) = submit_url(PreviewState::new(), "https://slow.example");
    let (state, _) = update(state, Msg::ClearRequested);
    let before = state.clone();

    let (state, _) = update(
        state,
        Msg::PreviewFailed {
            request_id: 1,
            message: "timeout".into(),
        },
    );

    assert_eq!(state, before);
}

#[test]
fn response_for_older_request_does_not_overwrite_newer_one() {
    let (state, _) = submit_url(PreviewState::new(), "https://old.example");
    let (state, _) = update(state, Msg::ClearRequested);
    let (state, effects) = submit_url(state, "https://new.example");
    assert_eq!(
        effects,
        vec![Effect::FetchUrl {
            request_id: 2,
            url: "https://new.example".to_string()
        }]
    );

    let (state, _) = update(state, completed(1, "old body"));
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.status, "Loading https://new.example...");
    assert_eq!(view.response_body, "");

    let (state, _) = update(state, completed(2, "new body"));
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.status, SUCCESS_STATUS);
    assert_eq!(view.response_body, "new body");
}

#[test]
fn duplicate_completion_is_ignored() {
    let (state, _) = submit_url(PreviewState::new(), "https://example.com");
    let (state, _) = update(state, completed(1, "first"));
    let (state, _) = update(state, Msg::UrlChanged("https://other.example".into()));
    let before = state.view();

    let (state, _) = update(state, completed(1, "second"));

    assert_eq!(state.view(), before);
    assert_eq!(state.view().response_body, "first");
}

#[test]
fn editing_url_while_loading_keeps_request() {
    let (state, _) = submit_url(PreviewState::new(), "https://example.com");
    let (state, effects) = update(state, Msg::UrlChanged("https://typing.example".into()));

    assert!(effects.is_empty());
    assert!(state.view().loading);
    assert_eq!(state.in_flight(), Some(1));

    let (state, _) = update(state, completed(1, "body"));
    let view = state.view();
    assert_eq!(view.url, "https://typing.example");
    assert_eq!(view.response_body, "body");
}
