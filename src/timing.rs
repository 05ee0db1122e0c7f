//! Frame timing and FPS reporting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Measures elapsed time between frames
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick (or since construction)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Min/avg/max frames per second over a reporting window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsStats {
    pub min: f32,
    pub avg: f32,
    pub max: f32,
}

/// Rolling FPS tracker that reports once per second
pub struct FpsTracker {
    frame_times: VecDeque<Duration>,
    since_report: Duration,
    min_fps: f32,
    max_fps: f32,
}

/// Frames kept for the rolling average
const WINDOW: usize = 60;

impl FpsTracker {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
            since_report: Duration::ZERO,
            min_fps: f32::MAX,
            max_fps: 0.0,
        }
    }

    /// Record one frame's duration
    ///
    /// # Returns
    /// Stats once at least a second has passed since the last report
    pub fn record(&mut self, frame_time: Duration) -> Option<FpsStats> {
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }

        let current = self.current_fps();
        if current > 0.0 {
            self.min_fps = self.min_fps.min(current);
            self.max_fps = self.max_fps.max(current);
        }

        self.since_report += frame_time;
        if self.since_report < Duration::from_secs(1) {
            return None;
        }
        self.since_report = Duration::ZERO;

        let stats = FpsStats {
            min: self.min_fps,
            avg: current,
            max: self.max_fps,
        };
        log::info!(
            "FPS - Min: {:.1}, Avg: {:.1}, Max: {:.1}",
            stats.min,
            stats.avg,
            stats.max
        );
        Some(stats)
    }

    fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f32() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}
