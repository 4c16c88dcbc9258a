use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use preview_logging::{preview_debug, preview_info, preview_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchError, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
    Cancel { request_id: RequestId },
}

type InFlight = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Runs fetches on a background tokio runtime and reports completions on a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: FetchSettings,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let fetcher = Arc::new(ReqwestFetcher::new(settings)?);
        Self::with_fetcher(fetcher, event_tx)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            let in_flight: InFlight = Arc::default();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Fetch { request_id, url } => {
                        let token = CancellationToken::new();
                        lock(&in_flight).insert(request_id, token.clone());
                        runtime.spawn(run_fetch(
                            fetcher.clone(),
                            request_id,
                            url,
                            token,
                            in_flight.clone(),
                            event_tx.clone(),
                        ));
                    }
                    EngineCommand::Cancel { request_id } => {
                        if let Some(token) = lock(&in_flight).remove(&request_id) {
                            preview_info!("Cancelling request_id={}", request_id);
                            token.cancel();
                        }
                    }
                }
            }
            preview_debug!("Engine command channel closed; shutting down");
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            url: url.into(),
        });
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }
}

async fn run_fetch(
    fetcher: Arc<dyn Fetcher>,
    request_id: RequestId,
    url: String,
    token: CancellationToken,
    in_flight: InFlight,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            preview_debug!("request_id={} dropped after cancellation", request_id);
        }
        result = fetcher.fetch(request_id, &url) => {
            lock(&in_flight).remove(&request_id);
            if let Err(err) = &result {
                preview_warn!("request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}

fn lock(in_flight: &InFlight) -> std::sync::MutexGuard<'_, HashMap<RequestId, CancellationToken>> {
    in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
