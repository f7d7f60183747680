use std::time::{Duration, Instant};

/// Frame timing snapshot handed to the application each iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Monotonic frame counter. The first rendered frame observes 1.
    pub frame_index: u64,

    /// Seconds elapsed since the clock was created, recomputed at the last
    /// tick.
    pub elapsed: f64,
}

/// Fixed-rate frame clock.
///
/// The clock never blocks: it only computes how long the caller should sleep
/// to hold the target rate. If the frame body overruns the target interval,
/// [`sleep_time`](Self::sleep_time) is zero; there is no catch-up or
/// frame-skip logic, the loop simply runs late for that frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    frame_index: u64,
    elapsed: f64,
    target_interval: Duration,
}

impl FrameClock {
    /// Creates a clock targeting `target_fps` frames per second.
    ///
    /// A zero rate is treated as 1 fps rather than dividing by zero.
    pub fn new(target_fps: u32) -> Self {
        Self::new_at(Instant::now(), target_fps)
    }

    fn new_at(now: Instant, target_fps: u32) -> Self {
        Self {
            start: now,
            last_tick: now,
            frame_index: 1,
            elapsed: 0.0,
            target_interval: Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1))),
        }
    }

    /// Advances the clock: records a new timestamp, increments the frame
    /// index, and recomputes the elapsed-seconds counter.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.last_tick = now;
        self.frame_index = self.frame_index.wrapping_add(1);
        self.elapsed = now.saturating_duration_since(self.start).as_secs_f64();
    }

    /// Remaining time in the current frame's budget:
    /// `max(0, target_interval - time_since_last_tick)`.
    ///
    /// The caller performs the actual wait; the clock itself never sleeps.
    pub fn sleep_time(&self) -> Duration {
        self.sleep_time_at(Instant::now())
    }

    fn sleep_time_at(&self, now: Instant) -> Duration {
        self.target_interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Returns the current timing snapshot without advancing the clock.
    pub fn frame_time(&self) -> FrameTime {
        FrameTime {
            frame_index: self.frame_index,
            elapsed: self.elapsed,
        }
    }

    /// The interval the clock is pacing toward.
    pub fn target_interval(&self) -> Duration {
        self.target_interval
    }
}
