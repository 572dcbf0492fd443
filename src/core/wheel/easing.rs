/// Matches the half-second ease-out the wheel uses for discrete jumps.
const DEFAULT_DURATION_SECS: f64 = 0.5;

/// Repeated `advance` calls accumulate float error, so a sum of steps that
/// nominally reaches the duration can land a few ulps short. One nanosecond
/// of slack is far below a frame and well above the accumulated error.
const SETTLE_SLACK_SECS: f64 = 1e-9;

/// Display-side rotation smoothing.
///
/// Discrete rotation changes (a sector click or a post-drag snap) glide to
/// their target with an ease-out curve; pointer-driven rotation during an
/// active drag bypasses the easing entirely via [`EasedRotation::snap_to`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedRotation {
    start: f64,
    target: f64,
    elapsed_secs: f64,
    duration_secs: f64,
}

impl EasedRotation {
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            start: initial,
            target: initial,
            elapsed_secs: DEFAULT_DURATION_SECS,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    /// Jumps straight to `angle` with no transition.
    pub fn snap_to(&mut self, angle: f64) {
        self.start = angle;
        self.target = angle;
        self.elapsed_secs = self.duration_secs;
    }

    /// Starts an eased transition from the current display angle.
    pub fn glide_to(&mut self, angle: f64) {
        self.start = self.current();
        self.target = angle;
        self.elapsed_secs = 0.0;
    }

    /// Advances the transition clock. Returns whether the display angle
    /// changed, so callers can skip redraws once settled.
    pub fn advance(&mut self, dt_secs: f64) -> bool {
        if self.is_settled() || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return false;
        }

        self.elapsed_secs = (self.elapsed_secs + dt_secs).min(self.duration_secs);
        true
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        if self.is_settled() {
            return self.target;
        }

        let t = self.elapsed_secs / self.duration_secs;
        self.start + (self.target - self.start) * ease_out_cubic(t)
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.duration_secs - self.elapsed_secs <= SETTLE_SLACK_SECS
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);

    1.0 - inverse * inverse * inverse
}
