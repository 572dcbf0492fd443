use crate::core::data::viewport::Viewport;
use rand::Rng;

/// How far past the viewport bottom a particle may drift before it wraps,
/// and how far above the top it reappears.
pub const WRAP_MARGIN_PX: f32 = 10.0;

const TWINKLE_FLOOR: f64 = 0.7;
const TWINKLE_SWING: f64 = 0.3;

/// Spawn distributions for new particles. All ranges are half-open except
/// where noted; the defaults match the classic starfield tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRanges {
    pub size_min: f32,
    pub size_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Vertical drift in pixels per tick.
    pub drift_min: f32,
    pub drift_max: f32,
    /// Twinkle angular rate in radians per elapsed millisecond.
    pub twinkle_min: f32,
    pub twinkle_max: f32,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            size_min: 0.5,
            size_max: 2.5,
            opacity_min: 0.2,
            opacity_max: 1.0,
            drift_min: 0.005,
            drift_max: 0.025,
            twinkle_min: 0.01,
            twinkle_max: 0.03,
        }
    }
}

/// One star. Only `y` (and `x` on wrap) mutate after spawn; the rendered
/// opacity is derived from elapsed time, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub base_opacity: f32,
    pub drift_speed: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Viewport, ranges: &SpawnRanges) -> Self {
        Self {
            x: rng.gen_range(0.0..viewport.width() as f32),
            y: rng.gen_range(0.0..viewport.height() as f32),
            size: rng.gen_range(ranges.size_min..ranges.size_max),
            base_opacity: rng.gen_range(ranges.opacity_min..ranges.opacity_max),
            drift_speed: rng.gen_range(ranges.drift_min..ranges.drift_max),
            twinkle_speed: rng.gen_range(ranges.twinkle_min..ranges.twinkle_max),
            twinkle_phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    /// Advances one tick of vertical drift. When the particle leaves the
    /// viewport bottom it is recycled in place: moved just above the top
    /// with a fresh uniform-random x. Returns whether a wrap occurred.
    pub fn drift<R: Rng>(&mut self, rng: &mut R, viewport: Viewport) -> bool {
        self.y += self.drift_speed;

        if self.y > viewport.height() as f32 + WRAP_MARGIN_PX {
            self.y = -WRAP_MARGIN_PX;
            self.x = rng.gen_range(0.0..viewport.width() as f32);
            return true;
        }

        false
    }

    /// Instantaneous opacity at `time_ms`: the stored base scaled by a
    /// sinusoidal multiplier bounded to [0.4, 1.0].
    #[must_use]
    pub fn opacity_at(&self, time_ms: f64) -> f32 {
        let angle = time_ms * f64::from(self.twinkle_speed) + f64::from(self.twinkle_phase);
        let multiplier = TWINKLE_FLOOR + TWINKLE_SWING * angle.sin();

        self.base_opacity * multiplier as f32
    }
}
