use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use preview_core::Msg;
use preview_logging::preview_info;
use ratatui::DefaultTerminal;

use super::config::AppConfig;
use super::input::KeyAction;
use super::session::Session;
use super::ui;
use super::ui::constants::{PAGE_SIZE, TICK_INTERVAL_MS};

pub fn run_app(config: &AppConfig, initial_url: Option<String>) -> anyhow::Result<()> {
    let session =
        Session::start(config.fetch.to_settings()).context("failed to start fetch engine")?;
    let mut app = App::new(session);
    if let Some(url) = initial_url {
        app.session.dispatch(Msg::UrlChanged(url));
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    preview_info!("Interactive session ended");
    result
}

struct App {
    session: Session,
    scroll: u16,
    quit: bool,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            scroll: 0,
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut needs_redraw = true;

        while !self.quit {
            if needs_redraw {
                let view = self.session.view();
                let scroll = self.scroll;
                terminal.draw(|frame| ui::render::render(frame, view, scroll))?;
                needs_redraw = false;
            }

            if event::poll(period)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let action = KeyAction::from_key_event(key, &self.session.view().url);
                        self.handle_action(action);
                        needs_redraw = true;
                    }
                    Event::Resize(..) => needs_redraw = true,
                    _ => {}
                }
            }

            if self.session.process_pending_messages() {
                needs_redraw = true;
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Dispatch(msg) => {
                if matches!(msg, Msg::PreviewRequested | Msg::ClearRequested) {
                    self.scroll = 0;
                }
                self.session.dispatch(msg);
            }
            KeyAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            KeyAction::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            KeyAction::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SIZE),
            KeyAction::PageDown => self.scroll = self.scroll.saturating_add(PAGE_SIZE),
            KeyAction::Quit => self.quit = true,
            KeyAction::None => {}
        }
    }
}
