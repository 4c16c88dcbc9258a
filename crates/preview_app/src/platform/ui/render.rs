use preview_core::{PreviewViewModel, IDLE_STATUS};
use ratatui::layout::Position;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::ScreenLayout;
use crate::platform::input::key_bindings;

pub fn render(frame: &mut Frame, view: &PreviewViewModel, scroll: u16) {
    let layout = ScreenLayout::split(frame.area());

    // Keep the end of the URL, where typing happens, inside the box.
    let inner_width = layout.input.width.saturating_sub(2);
    let typed = u16::try_from(view.url.chars().count()).unwrap_or(u16::MAX);
    let offset = typed.saturating_sub(inner_width.saturating_sub(1));
    let input = Paragraph::new(view.url.as_str())
        .block(
            Block::bordered()
                .title(INPUT_TITLE)
                .title_top(Line::from(TITLE).right_aligned()),
        )
        .scroll((0, offset));
    frame.render_widget(input, layout.input);
    frame.set_cursor_position(Position::new(
        layout.input.x + 1 + (typed - offset),
        layout.input.y + 1,
    ));

    let status = Paragraph::new(status_line(view)).block(Block::bordered().title(STATUS_TITLE));
    frame.render_widget(status, layout.status);

    let body = Paragraph::new(view.display_body())
        .block(Block::bordered().title(response_title(view.response_status_code)))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(body, layout.response);

    frame.render_widget(Paragraph::new(footer_line()), layout.footer);
}

fn status_line(view: &PreviewViewModel) -> Line<'_> {
    let style = if view.loading {
        Style::default().fg(Color::Yellow)
    } else if view.response_status_code.is_some() {
        Style::default().fg(Color::Green)
    } else if view.status == IDLE_STATUS {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Red)
    };
    let mut spans = Vec::with_capacity(2);
    if view.loading {
        spans.push(Span::styled("⟳ ", style.add_modifier(Modifier::BOLD)));
    }
    spans.push(Span::styled(view.status.as_str(), style));
    Line::from(spans)
}

fn response_title(status_code: Option<u16>) -> Line<'static> {
    match status_code {
        Some(code) => {
            let color = match code {
                200..=299 => Color::Green,
                300..=399 => Color::Cyan,
                _ => Color::Red,
            };
            Line::from(vec![
                Span::raw(RESPONSE_TITLE),
                Span::styled(
                    format!("HTTP {code} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(RESPONSE_TITLE),
    }
}

fn footer_line() -> Line<'static> {
    let mut spans = Vec::new();
    for binding in key_bindings() {
        spans.push(Span::styled(
            binding.keys,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", binding.description)));
    }
    Line::from(spans)
}
