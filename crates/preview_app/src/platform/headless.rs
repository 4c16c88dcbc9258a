use std::io::Write;

use anyhow::Context;
use preview_core::{Msg, PreviewViewModel};

use super::config::AppConfig;
use super::session::Session;

/// Runs one preview without a screen and prints the result to `out`.
///
/// Returns true when a response was obtained, whatever its status code.
pub fn run_headless(
    config: &AppConfig,
    url: String,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut session =
        Session::start(config.fetch.to_settings()).context("failed to start fetch engine")?;
    session.dispatch(Msg::UrlChanged(url));
    session.dispatch(Msg::PreviewRequested);
    session
        .wait_until_idle()
        .context("fetch engine stopped before the request finished")?;

    let view = session.view();
    write_view(view, out).context("failed to write preview")?;
    Ok(view.response_status_code.is_some())
}

fn write_view(view: &PreviewViewModel, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Status: {}", view.status)?;
    if let Some(code) = view.response_status_code {
        writeln!(out, "HTTP status: {code}")?;
    }
    if !view.response_body.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", view.response_body)?;
    }
    out.flush()
}
