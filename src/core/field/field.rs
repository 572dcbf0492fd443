use crate::core::data::viewport::Viewport;
use crate::core::field::particle::{Particle, SpawnRanges};
use rand::Rng;

/// The particle collection for one viewport.
///
/// Resizing destroys and fully replaces the collection; particles are never
/// created or destroyed between resizes, only recycled in place.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    viewport: Viewport,
    ranges: SpawnRanges,
    particles: Vec<Particle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldTickReport {
    pub wrapped: usize,
}

impl StarField {
    pub fn new<R: Rng>(rng: &mut R, viewport: Viewport, ranges: SpawnRanges) -> Self {
        let mut field = Self {
            viewport,
            ranges,
            particles: Vec::new(),
        };
        field.regenerate(rng);
        field
    }

    /// Applies a new viewport. Regeneration is idempotent, so a resize that
    /// lands mid-frame is simply picked up by the next tick.
    pub fn resize<R: Rng>(&mut self, rng: &mut R, viewport: Viewport) {
        self.viewport = viewport;
        self.regenerate(rng);
    }

    /// Advances every particle by one tick of drift.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> FieldTickReport {
        let mut report = FieldTickReport::default();

        for particle in &mut self.particles {
            if particle.drift(rng, self.viewport) {
                report.wrapped += 1;
            }
        }

        report
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        let budget = self.viewport.particle_budget();

        self.particles.clear();
        self.particles
            .extend((0..budget).map(|_| Particle::spawn(rng, self.viewport, &self.ranges)));
    }
}

#[cfg(test)]
mod tests {
    use super::StarField;
    use crate::core::data::viewport::Viewport;
    use crate::core::field::particle::{SpawnRanges, WRAP_MARGIN_PX};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height).unwrap()
    }

    fn field(width: u32, height: u32, seed: u64) -> (StarField, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = StarField::new(&mut rng, viewport(width, height), SpawnRanges::default());
        (field, rng)
    }

    #[test]
    fn population_matches_the_viewport_budget() {
        let (field, _) = field(800, 600, 1);

        assert_eq!(field.particles().len(), 120);
    }

    #[test]
    fn resize_to_quadruple_area_quadruples_the_population() {
        let (mut field, mut rng) = field(800, 600, 1);

        field.resize(&mut rng, viewport(1600, 1200));

        assert_eq!(field.particles().len(), 480);
    }

    #[test]
    fn resize_replaces_every_particle() {
        let (mut field, mut rng) = field(800, 600, 1);
        let before = field.particles().to_vec();

        field.resize(&mut rng, viewport(800, 600));

        // Same budget, but no particle carries over its spawn state.
        assert_eq!(field.particles().len(), before.len());
        assert!(
            field
                .particles()
                .iter()
                .zip(&before)
                .all(|(after, before)| after != before)
        );
    }

    #[test]
    fn tick_advances_every_particle_downward_or_wraps() {
        let (mut field, mut rng) = field(400, 300, 2);
        let before = field.particles().to_vec();

        field.tick(&mut rng);

        for (after, before) in field.particles().iter().zip(&before) {
            let drifted = after.y == before.y + before.drift_speed;
            let wrapped = after.y == -WRAP_MARGIN_PX;
            assert!(drifted || wrapped);
        }
    }

    #[test]
    fn tick_reports_wrap_counts() {
        let (mut field, mut rng) = field(400, 300, 3);
        let mut total_wrapped = 0;

        // Enough ticks for at least one particle to cross the bottom margin.
        for _ in 0..100_000 {
            total_wrapped += field.tick(&mut rng).wrapped;
            if total_wrapped > 0 {
                break;
            }
        }

        assert!(total_wrapped > 0);
    }

    #[test]
    fn all_particles_stay_inside_the_wrap_band() {
        let (mut field, mut rng) = field(200, 150, 4);

        for _ in 0..50_000 {
            field.tick(&mut rng);
        }

        for particle in field.particles() {
            assert!(particle.y >= -WRAP_MARGIN_PX);
            assert!(particle.y <= 150.0 + WRAP_MARGIN_PX + particle.drift_speed);
            assert!(particle.x >= 0.0 && particle.x < 200.0);
        }
    }

    #[test]
    fn zero_budget_viewport_yields_an_empty_field() {
        let (mut field, mut rng) = field(60, 60, 5);

        assert!(field.particles().is_empty());
        assert_eq!(field.tick(&mut rng).wrapped, 0);
    }
}
