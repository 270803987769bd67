use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Render the bottom status bar: keybinding hints plus the cursor
/// position and frame counter. Falls back to the short form when the
/// terminal is too narrow for the full hints.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "node {}/{} {}  {} frames",
        app.chain.active_index() + 1,
        app.chain.node_count(),
        if app.chain.cursor_dir() > 0 { "→" } else { "←" },
        app.frames,
    );

    let mut spans = hints(app, &status);
    let total: usize = spans.iter().map(|s| s.content.width()).sum();
    if total > area.width as usize {
        spans = short_hints(app, &status);
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn hints(app: &App, status: &str) -> Vec<Span<'static>> {
    vec![
        key(app, "Click/Space"),
        desc(app, "Step "),
        key(app, "q"),
        desc(app, "Quit   "),
        Span::styled(status.to_string(), app.theme.style_dim()),
    ]
}

fn short_hints(app: &App, status: &str) -> Vec<Span<'static>> {
    vec![
        key(app, "Space"),
        key(app, "q"),
        Span::styled(status.to_string(), app.theme.style_dim()),
    ]
}

fn key(app: &App, k: &'static str) -> Span<'static> {
    Span::styled(format!(" [{k}] "), app.theme.style_key_hint())
}

fn desc(app: &App, d: &'static str) -> Span<'static> {
    Span::styled(d, app.theme.style_key_desc())
}
