use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;

/// Application-level events
#[derive(Debug, Clone)]
pub enum Event {
    /// User key press
    Key(KeyEvent),
    /// Pointer event (tap capture)
    Mouse(MouseEvent),
    /// Animation tick from the tick loop
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Handles event collection from the terminal.
///
/// Uses crossterm's async `EventStream` (via `futures::StreamExt`)
/// instead of blocking `event::poll()` / `event::read()`, so no tokio
/// worker thread is ever blocked. Animation ticks are not produced
/// here — the tick loop sends `Event::Tick` through `sender()` only
/// while a transition is running.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Create a new event handler. Spawns a background task for async
    /// terminal input.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let _tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));

        let input_tx = tx.clone();
        let input_stop = stop.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                if input_stop.load(Ordering::Relaxed) {
                    return;
                }
                let maybe_event = reader.next().await;
                if input_stop.load(Ordering::Relaxed) {
                    return;
                }
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => {
                        if key.kind == KeyEventKind::Press
                            && input_tx.send(Event::Key(key)).is_err()
                        {
                            return;
                        }
                    }
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => {
                        if input_tx.send(Event::Mouse(mouse)).is_err() {
                            return;
                        }
                    }
                    Some(Ok(CrosstermEvent::Resize(w, h))) => {
                        if input_tx.send(Event::Resize(w, h)).is_err() {
                            return;
                        }
                    }
                    Some(Err(_)) | None => {
                        // Stream ended or errored — exit gracefully
                        return;
                    }
                    _ => {}
                }
            }
        });

        Self { rx, _tx: tx, stop }
    }

    /// Get a clone of the sender for forwarding tick events
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self._tx.clone()
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Signal the input task to stop
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
