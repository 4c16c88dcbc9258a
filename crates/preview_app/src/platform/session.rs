use std::sync::mpsc;

use preview_core::{update, Msg, PreviewState, PreviewViewModel};
use preview_engine::{EngineError, FetchSettings};

use super::effects::EffectRunner;

/// Owns the preview state on the UI thread and feeds it messages one at a time.
pub struct Session {
    state: PreviewState,
    view: PreviewViewModel,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Session {
    pub fn start(settings: FetchSettings) -> Result<Self, EngineError> {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let effects = EffectRunner::new(settings, msg_tx)?;
        let state = PreviewState::new();
        let view = state.view();
        Ok(Self {
            state,
            view,
            effects,
            msg_rx,
        })
    }

    pub fn view(&self) -> &PreviewViewModel {
        &self.view
    }

    /// Applies `msg` and runs its effects. Returns true when the view changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        if changed {
            self.view = state.view();
        }
        self.state = state;
        self.effects.enqueue(effects);
        changed
    }

    /// Drains engine messages without blocking. Returns true when the view changed.
    pub fn process_pending_messages(&mut self) -> bool {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        let mut changed = false;
        for msg in inbox {
            changed |= self.dispatch(msg);
        }
        changed
    }

    /// Blocks until the outstanding request resolves.
    pub fn wait_until_idle(&mut self) -> Result<(), mpsc::RecvError> {
        while self.state.is_loading() {
            let msg = self.msg_rx.recv()?;
            self.dispatch(msg);
        }
        Ok(())
    }
}
