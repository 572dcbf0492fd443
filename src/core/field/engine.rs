use crate::core::actions::cancellation::CancelToken;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::field::field::StarField;
use crate::core::field::particle::SpawnRanges;
use crate::core::render::scene::{SceneError, paint_scene_cancelable};
use rand::Rng;
use std::time::Duration;

/// Fixed-step tuning for the field engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTuning {
    pub tick_hz: u32,
    /// Cap on ticks run for a single frame; excess elapsed time is dropped
    /// so a stalled host does not trigger a catch-up burst.
    pub max_ticks_per_frame: u32,
    pub spawn: SpawnRanges,
}

impl FieldTuning {
    #[must_use]
    pub fn dt(&self) -> f64 {
        if self.tick_hz == 0 {
            0.0
        } else {
            1.0 / f64::from(self.tick_hz)
        }
    }
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            max_ticks_per_frame: 10,
            spawn: SpawnRanges::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineReport {
    pub ticks_run: u32,
    pub wrapped: usize,
    pub excess_dropped: bool,
}

/// Owns the star field and its clocks: a fixed-step accumulator for drift
/// ticks and a continuous millisecond clock for twinkle and link pulses.
///
/// Generic over the RNG so tests drive it with a seeded [`rand::rngs::StdRng`].
pub struct FieldEngine<R: Rng> {
    field: StarField,
    tuning: FieldTuning,
    rng: R,
    accumulator_secs: f64,
    clock_ms: f64,
}

impl<R: Rng> FieldEngine<R> {
    pub fn new(mut rng: R, viewport: Viewport, tuning: FieldTuning) -> Self {
        let field = StarField::new(&mut rng, viewport, tuning.spawn);

        Self {
            field,
            tuning,
            rng,
            accumulator_secs: 0.0,
            clock_ms: 0.0,
        }
    }

    /// Consumes `elapsed` wall time: advances the twinkle clock and runs as
    /// many whole drift ticks as fit, up to the per-frame cap.
    pub fn advance(&mut self, elapsed: Duration) -> EngineReport {
        let mut report = EngineReport::default();
        let dt = self.tuning.dt();

        self.clock_ms += elapsed.as_secs_f64() * 1000.0;

        if !dt.is_finite() || dt <= 0.0 {
            return report;
        }

        self.accumulator_secs += elapsed.as_secs_f64();
        if !self.accumulator_secs.is_finite() || self.accumulator_secs < 0.0 {
            self.accumulator_secs = 0.0;
        }

        let ticks_available = (self.accumulator_secs / dt).floor();
        let max_ticks = f64::from(self.tuning.max_ticks_per_frame);
        report.ticks_run = ticks_available.min(max_ticks) as u32;
        report.excess_dropped = ticks_available > max_ticks;

        for _ in 0..report.ticks_run {
            report.wrapped += self.field.tick(&mut self.rng).wrapped;
        }

        if report.excess_dropped {
            self.accumulator_secs = 0.0;
        } else {
            self.accumulator_secs -= f64::from(report.ticks_run) * dt;
            if self.accumulator_secs < 0.0 {
                self.accumulator_secs = 0.0;
            }
        }

        report
    }

    /// Applies a new viewport; the whole particle collection is replaced.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.field.viewport() {
            return;
        }

        self.field.resize(&mut self.rng, viewport);
    }

    pub fn render<C: CancelToken>(&self, cancel: &C) -> Result<PixelBuffer, SceneError> {
        paint_scene_cancelable(&self.field, self.clock_ms, cancel)
    }

    #[must_use]
    pub fn field(&self) -> &StarField {
        &self.field
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.field.viewport()
    }

    #[must_use]
    pub fn time_ms(&self) -> f64 {
        self.clock_ms
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldEngine, FieldTuning};
    use crate::core::data::viewport::Viewport;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn engine(seed: u64) -> FieldEngine<StdRng> {
        FieldEngine::new(
            StdRng::seed_from_u64(seed),
            Viewport::new(400, 300).unwrap(),
            FieldTuning::default(),
        )
    }

    #[test]
    fn one_tick_per_sixtieth_of_a_second() {
        let mut engine = engine(1);

        let report = engine.advance(Duration::from_secs_f64(1.0 / 60.0));

        assert_eq!(report.ticks_run, 1);
        assert!(!report.excess_dropped);
    }

    #[test]
    fn fractional_elapsed_time_carries_over() {
        let mut engine = engine(1);

        let first = engine.advance(Duration::from_secs_f64(0.5 / 60.0));
        let second = engine.advance(Duration::from_secs_f64(0.6 / 60.0));

        assert_eq!(first.ticks_run, 0);
        assert_eq!(second.ticks_run, 1);
    }

    #[test]
    fn tick_burst_is_capped_and_excess_dropped() {
        let mut engine = engine(1);

        let report = engine.advance(Duration::from_secs(2));

        assert_eq!(report.ticks_run, 10);
        assert!(report.excess_dropped);

        let follow_up = engine.advance(Duration::ZERO);
        assert_eq!(follow_up.ticks_run, 0);
    }

    #[test]
    fn the_twinkle_clock_tracks_elapsed_time_continuously() {
        let mut engine = engine(1);

        engine.advance(Duration::from_millis(5));
        engine.advance(Duration::from_millis(7));

        assert!((engine.time_ms() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn resize_regenerates_and_identical_viewport_is_a_no_op() {
        let mut engine = engine(2);
        let before = engine.field().particles().to_vec();

        engine.resize(Viewport::new(400, 300).unwrap());
        assert_eq!(engine.field().particles(), before.as_slice());

        engine.resize(Viewport::new(800, 600).unwrap());
        assert_eq!(engine.field().particles().len(), 120);
    }

    #[test]
    fn render_reflects_the_advanced_clock() {
        let mut engine = engine(3);
        let early = engine.render(&crate::core::actions::cancellation::NeverCancel).unwrap();

        engine.advance(Duration::from_secs(5));
        let late = engine.render(&crate::core::actions::cancellation::NeverCancel).unwrap();

        assert_ne!(early.data(), late.data());
    }

    #[test]
    fn zero_tick_rate_never_ticks_but_the_clock_still_runs() {
        let tuning = FieldTuning {
            tick_hz: 0,
            ..FieldTuning::default()
        };
        let mut engine = FieldEngine::new(
            StdRng::seed_from_u64(4),
            Viewport::new(400, 300).unwrap(),
            tuning,
        );

        let report = engine.advance(Duration::from_secs(1));

        assert_eq!(report.ticks_run, 0);
        assert!((engine.time_ms() - 1000.0).abs() < 1e-9);
    }
}
