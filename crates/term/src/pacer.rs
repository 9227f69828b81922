use std::time::{Duration, Instant};

/// Paces the driver loop to a fixed frame interval.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    frames: u64,
    overruns: u64,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frames: 0,
            overruns: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Frames finished so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that took longer than the interval to render.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// How long to sleep after a frame that took `elapsed` to produce.
    ///
    /// `interval - elapsed`, clamped to zero.
    pub fn finish_frame(&mut self, elapsed: Duration) -> Duration {
        self.frames += 1;
        match self.interval.checked_sub(elapsed) {
            Some(delay) => delay,
            None => {
                self.overruns += 1;
                Duration::ZERO
            }
        }
    }

    /// Finish the frame that started at `frame_start` and sleep off the rest
    /// of the interval.
    pub fn pace(&mut self, frame_start: Instant) -> Duration {
        let delay = self.finish_frame(frame_start.elapsed());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        delay
    }
}
