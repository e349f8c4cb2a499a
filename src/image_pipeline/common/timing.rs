use std::time::{Duration, Instant};

use tracing::info;

/// Duration of one pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Stage durations for a single frame, in execution order.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timer: Timer) {
        self.steps.push(StepTiming {
            name: timer.name,
            duration: timer.start.elapsed(),
        });
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration().as_secs_f64();
        for step in &self.steps {
            let ms = step.duration.as_secs_f64() * 1000.0;
            let percent = if total > 0.0 {
                step.duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            info!(stage = step.name, ms, percent, "stage timing");
        }
        info!(ms = total * 1000.0, "frame total");
    }
}

/// Running clock for one named stage, consumed by [`PipelineTimings::record`].
pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }
}
