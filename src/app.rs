use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;
use tracing::debug;

use crate::animation::{Chain, TickLoop};
use crate::config::Config;
use crate::error::Result;
use crate::event::Event;
use crate::ui::theme::Theme;

/// Application state: the chain, the tick loop that drives it, and the
/// glue between the two.
///
/// This layer stays thin. A tap asks the chain to start and spins up the
/// ticker only if a transition actually began; each tick advances the
/// chain exactly once; once the chain settles idle the ticker is stopped
/// and the next draw pass paints the settled state.
pub struct App {
    pub chain: Chain,
    pub ticker: TickLoop,
    pub theme: Theme,
    pub regions: u16,
    pub frames: u64,
    pub should_quit: bool,

    // Tick events are funneled into the main event channel
    event_tx: mpsc::UnboundedSender<Event>,
}

impl App {
    pub fn new(config: &Config, event_tx: mpsc::UnboundedSender<Event>) -> Result<Self> {
        Ok(Self {
            chain: Chain::new(config.animation.node_count, config.animation.region_count)?,
            ticker: TickLoop::new(config.tick_rate()),
            theme: Theme::from_config(&config.theme),
            regions: config.animation.region_count,
            frames: 0,
            should_quit: false,
            event_tx,
        })
    }

    /// Handle events from the event loop
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Tick => self.tick(),
            Event::Resize(_w, _h) => {
                // Terminal resized — ratatui redraws automatically
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.tap();
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(_) = mouse.kind {
            self.tap();
        }
    }

    /// One tap maps to at most one started transition. A tap while the
    /// active node is already easing is a no-op and never reaches the
    /// ticker.
    fn tap(&mut self) {
        let mut started = false;
        self.chain.request_start(|| started = true);
        if started {
            debug!(node = self.chain.active_index(), "transition started");
            let tx = self.event_tx.clone();
            self.ticker.start(move || {
                let _ = tx.send(Event::Tick);
            });
        }
    }

    /// One tick: the frame for the pre-tick state was already drawn at
    /// the top of the main loop, so advance the chain by one quantum,
    /// then stop the ticker once the chain has settled. The loop's next
    /// iteration paints the settled state.
    fn tick(&mut self) {
        let mut stepped = false;
        self.chain.step(|| stepped = true);
        if stepped {
            self.frames += 1;
        }

        if self.chain.is_idle() {
            self.ticker.stop();
            debug!(
                node = self.chain.active_index(),
                dir = self.chain.cursor_dir(),
                "transition settled"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton};

    fn test_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(&Config::default(), tx).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click() -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn tap_starts_chain_and_ticker() {
        let mut app = test_app();
        app.handle_event(Event::Mouse(click()));
        assert!(!app.chain.is_idle());
        assert!(app.ticker.is_running());
    }

    #[tokio::test]
    async fn space_is_a_tap() {
        let mut app = test_app();
        app.handle_event(Event::Key(press(KeyCode::Char(' '))));
        assert!(!app.chain.is_idle());
        assert!(app.ticker.is_running());
    }

    #[tokio::test]
    async fn ticks_drive_the_chain_to_rest() {
        let mut app = test_app();
        app.handle_event(Event::Mouse(click()));

        let mut ticks = 0;
        while !app.chain.is_idle() {
            app.handle_event(Event::Tick);
            ticks += 1;
            assert!(ticks < 10_000, "transition did not terminate");
        }
        // One tap advanced exactly one node
        assert_eq!(app.chain.active_index(), 1);
        assert!(!app.ticker.is_running());
        assert_eq!(app.frames, ticks);
    }

    #[tokio::test]
    async fn tap_while_animating_changes_nothing() {
        let mut app = test_app();
        app.handle_event(Event::Mouse(click()));
        app.handle_event(Event::Tick);

        let progress_before: Vec<f32> = {
            let mut v = Vec::new();
            app.chain.render(|_, p| v.push(p));
            v
        };
        app.handle_event(Event::Mouse(click()));

        let mut progress_after = Vec::new();
        app.chain.render(|_, p| progress_after.push(p));
        assert_eq!(progress_before, progress_after);
        assert!(app.ticker.is_running());
    }

    #[tokio::test]
    async fn idle_tick_keeps_ticker_stopped() {
        let mut app = test_app();
        app.handle_event(Event::Tick);
        assert!(app.chain.is_idle());
        assert!(!app.ticker.is_running());
    }

    #[tokio::test]
    async fn q_quits() {
        let mut app = test_app();
        app.handle_event(Event::Key(press(KeyCode::Char('q'))));
        assert!(app.should_quit);
    }
}
