pub mod stage;
pub mod status_bar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

/// Top-level draw function: stage + status bar
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Stage
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    stage::render(f, app, chunks[0]);
    status_bar::render(f, app, chunks[1]);
}
