/// Base progress step per tick, before region scaling
const STEP_RATE: f32 = 0.05;

/// Per-node easing state machine.
///
/// A node's visual expansion is a single `progress` value easing between
/// 0 (collapsed) and 1 (expanded). `anchor` is the value the current
/// transition started from and the value progress snaps back onto when
/// the transition settles. Between transitions `anchor` is exactly 0 or 1,
/// so the next transition direction is simply `1 - 2 * anchor`.
///
/// Progress is deliberately never clamped: a transition is finished when
/// it has accumulated more than a full unit of travel from its anchor,
/// and the overshoot is snapped away in the same step. Clamping would
/// break the completion check.
#[derive(Debug, Clone)]
pub struct EaseState {
    progress: f32,
    direction: i8,
    anchor: f32,
    regions: u16,
}

impl EaseState {
    /// A fresh state: collapsed, idle. `regions` is the number of
    /// sub-strokes the owning node draws; it also divides the step rate
    /// in the slow first half of a transition.
    pub fn new(regions: u16) -> Self {
        Self {
            progress: 0.0,
            direction: 0,
            anchor: 0.0,
            regions,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn anchor(&self) -> f32 {
        self.anchor
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0
    }

    /// Kick off a transition away from the current anchor. No-op while a
    /// transition is already running. `on_started` fires synchronously
    /// after the direction flips.
    pub fn begin_transition(&mut self, on_started: impl FnOnce()) {
        if self.direction != 0 {
            return;
        }
        self.direction = (1.0 - 2.0 * self.anchor) as i8;
        on_started();
    }

    /// Advance the transition by one tick quantum. No-op while idle.
    ///
    /// The rate is two-region: below the midpoint the step is divided by
    /// `regions` (a slow crawl), past it the full step applies, giving an
    /// ease-in kick once the transition crosses half way. Completion is
    /// the overshoot test `|progress - anchor| > 1`; the value then snaps
    /// to `anchor + direction` and `on_completed` fires synchronously.
    pub fn step(&mut self, on_completed: impl FnOnce()) {
        if self.direction == 0 {
            return;
        }
        let rate = if (self.progress / 0.5).floor() == 0.0 {
            STEP_RATE / self.regions as f32
        } else {
            STEP_RATE
        };
        self.progress += rate * self.direction as f32;
        if (self.progress - self.anchor).abs() > 1.0 {
            self.progress = self.anchor + self.direction as f32;
            self.direction = 0;
            self.anchor = self.progress;
            on_completed();
        }
    }
}
