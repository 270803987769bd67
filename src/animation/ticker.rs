use std::time::Duration;

use tokio::task::JoinHandle;

/// Fixed-period repeating trigger, decoupled from what it triggers.
///
/// `start` and `stop` are both idempotent: starting while running and
/// stopping while stopped are no-ops. The callback runs on a spawned
/// tokio task, so stopping lands on the interval await point and never
/// interrupts a callback already in flight.
pub struct TickLoop {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl TickLoop {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Begin invoking `on_tick` once per period. The first invocation
    /// lands one full period after start; tokio's interval fires
    /// immediately on its first tick, so that one is swallowed.
    pub fn start(&mut self, on_tick: impl Fn() + Send + 'static) {
        if self.handle.is_some() {
            return;
        }
        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                on_tick();
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TickLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    const PERIOD: Duration = Duration::from_millis(50);

    fn counting_ticker() -> (TickLoop, Arc<AtomicU32>) {
        (TickLoop::new(PERIOD), Arc::new(AtomicU32::new(0)))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (mut ticker, ticks) = counting_ticker();
        let counter = ticks.clone();
        ticker.start(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(PERIOD * 10 + Duration::from_millis(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn double_start_keeps_a_single_timer() {
        let (mut ticker, ticks) = counting_ticker();
        for _ in 0..2 {
            let counter = ticks.clone();
            ticker.start(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(PERIOD * 10 + Duration::from_millis(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_ticking() {
        let (mut ticker, ticks) = counting_ticker();
        let counter = ticks.clone();
        ticker.start(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(PERIOD * 2 + Duration::from_millis(5)).await;
        ticker.stop();
        assert!(!ticker.is_running());

        let seen = ticks.load(Ordering::SeqCst);
        assert_eq!(seen, 2);
        tokio::time::sleep(PERIOD * 10).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_while_stopped_is_a_no_op() {
        let (mut ticker, _) = counting_ticker();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_stop_ticks_again() {
        let (mut ticker, ticks) = counting_ticker();
        let counter = ticks.clone();
        ticker.start(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(PERIOD + Duration::from_millis(5)).await;
        ticker.stop();

        let counter = ticks.clone();
        ticker.start(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(ticker.is_running());
        tokio::time::sleep(PERIOD * 3 + Duration::from_millis(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 4);
    }
}
