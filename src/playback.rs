// playback.rs
// Fixed-cadence playback cursor over the ordered iteration list.

/// Whether the cursor auto-advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// Steps a cursor through `0..=last` on a wall-clock accumulator.
///
/// The cursor is a position in the ordered iteration list and is valid at
/// all times: every mutation clamps, none can push it out of range. Pause
/// suspends auto-advance only; manual stepping and reset work in either
/// state. At the end of the log the timer keeps resetting but the cursor
/// holds (no wraparound).
#[derive(Clone, Debug)]
pub struct Playback {
    state: PlaybackState,
    cursor: usize,
    last: usize,
    timer_ms: f64,
    step_interval_ms: f64,
}

impl Playback {
    /// `last` is the index of the final iteration in the list.
    pub fn new(last: usize, step_interval_ms: f64) -> Self {
        Self {
            state: PlaybackState::Playing,
            cursor: 0,
            last,
            timer_ms: 0.0,
            step_interval_ms: step_interval_ms.max(1.0),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    /// Accumulate elapsed wall-clock time. When the accumulator reaches the
    /// step interval it resets unconditionally; the cursor advances only
    /// while playing and not yet at the last iteration.
    pub fn advance(&mut self, dt_ms: f64) {
        self.timer_ms += dt_ms;
        if self.timer_ms >= self.step_interval_ms {
            if self.state == PlaybackState::Playing && self.cursor < self.last {
                self.cursor += 1;
            }
            self.timer_ms = 0.0;
        }
    }

    /// Pause while held; resume on release.
    pub fn set_paused(&mut self, paused: bool) {
        self.state = if paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        };
    }

    /// Single manual step back. Callers deliver one call per key-down
    /// transition, so holding the key does not skip through the log.
    pub fn step_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Single manual step forward, clamped at the last iteration.
    pub fn step_forward(&mut self) {
        if self.cursor < self.last {
            self.cursor += 1;
        }
    }

    /// Rewind to the start. State is untouched: a paused viewer stays
    /// paused on iteration 0.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.timer_ms = 0.0;
    }
}
