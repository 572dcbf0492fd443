use crate::core::field::particle::Particle;

/// Only the first few particles participate in constellation linking.
pub const LINK_LEADER_COUNT: usize = 20;

/// Consecutive leaders further apart than this are not linked.
pub const MAX_LINK_DISTANCE_PX: f32 = 200.0;

const PULSE_RATE_PER_MS: f64 = 0.001;
const ALPHA_BASE: f32 = 0.03;
const ALPHA_SWING: f32 = 0.02;

/// A faint line segment between two linked particles, with its pulse alpha
/// already resolved for the requested time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub alpha: f32,
}

/// Selects the link segments visible at `time_ms`.
///
/// Each segment pulses on its own phase, keyed by its index, so links fade
/// in and out independently of one another.
#[must_use]
pub fn link_segments(particles: &[Particle], time_ms: f64) -> Vec<LinkSegment> {
    let leaders = &particles[..particles.len().min(LINK_LEADER_COUNT)];

    leaders
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let (a, b) = (&pair[0], &pair[1]);
            let distance = (a.x - b.x).hypot(a.y - b.y);

            if distance >= MAX_LINK_DISTANCE_PX {
                return None;
            }

            Some(LinkSegment {
                from: (a.x, a.y),
                to: (b.x, b.y),
                alpha: pulse_alpha(index, time_ms),
            })
        })
        .collect()
}

fn pulse_alpha(index: usize, time_ms: f64) -> f32 {
    let pulse = 0.5 + 0.5 * (time_ms * PULSE_RATE_PER_MS + index as f64).sin();

    ALPHA_BASE + ALPHA_SWING * pulse as f32
}
