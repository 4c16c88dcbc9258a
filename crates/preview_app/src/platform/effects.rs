use std::sync::mpsc;
use std::thread;

use preview_core::{Effect, Msg, ResponseBody};
use preview_engine::{decode_body, EngineError, EngineEvent, EngineHandle, FetchSettings};
use preview_logging::{preview_debug, preview_info};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(settings, event_tx)?;
        spawn_event_loop(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchUrl { request_id, url } => {
                    preview_info!(
                        "FetchUrl request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.fetch(request_id, url);
                }
                Effect::CancelFetch { request_id } => {
                    self.engine.cancel(request_id);
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        for event in event_rx {
            if msg_tx.send(event_to_msg(event)).is_err() {
                break;
            }
        }
    });
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { request_id, result } => match result {
            Ok(output) => {
                let body = match decode_body(&output.bytes, output.content_type.as_deref()) {
                    Ok(text) => ResponseBody::Text(text),
                    Err(err) => {
                        preview_debug!("request_id={} body is binary: {}", request_id, err);
                        ResponseBody::Binary {
                            byte_len: output.bytes.len(),
                        }
                    }
                };
                Msg::PreviewCompleted {
                    request_id,
                    status_code: output.status_code,
                    body,
                }
            }
            Err(err) => Msg::PreviewFailed {
                request_id,
                message: err.to_string(),
            },
        },
    }
}
