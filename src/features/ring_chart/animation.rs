//! Draw-in animation phase
//!
//! The phase runs linearly from 0.0 to 1.0 over a fixed duration and scales
//! every sweep of the chart. The host frame clock drives it through
//! [`PhaseDriver::tick`].

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Callback invoked with the new phase on every tick
pub type PhaseListener = Box<dyn FnMut(f32) + Send>;

fn phase_easing(duration: Duration) -> Easing {
    Easing::LINEAR.with_duration(duration)
}

/// Linear 0..1 ticker owned by one chart
pub struct PhaseDriver {
    duration: Duration,
    animation: Animated<f32>,
    phase: f32,
    running: bool,
    listener: Option<PhaseListener>,
}

impl std::fmt::Debug for PhaseDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseDriver")
            .field("duration", &self.duration)
            .field("animation", &self.animation)
            .field("phase", &self.phase)
            .field("running", &self.running)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl PhaseDriver {
    /// A driver that has never run reports a full phase
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            animation: Animated::transition(1.0, phase_easing(duration)),
            phase: 1.0,
            running: false,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl FnMut(f32) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn set_listener(&mut self, listener: impl FnMut(f32) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Takes effect on the next `start`
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Restart from zero, cancelling any cycle in flight
    pub fn start(&mut self) {
        self.animation = Animated::transition(0.0, phase_easing(self.duration));
        self.animation.update(1.0.into());
        self.phase = 0.0;
        self.running = true;
    }

    /// Advance the phase. Returns false when idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            self.animation.tick(now);
            self.animation.value().clamp(0.0, 1.0)
        };
        // never move backwards, even if the clock does
        self.phase = progress.max(self.phase);

        if self.phase >= 1.0 || !self.animation.is_animating() {
            self.phase = 1.0;
            self.running = false;
        }

        if let Some(listener) = self.listener.as_mut() {
            listener(self.phase);
        }
        true
    }

    /// Cancel the current cycle, keeping the phase where it is
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and drop the listener
    pub fn release(&mut self) {
        self.stop();
        self.listener = None;
    }
}
