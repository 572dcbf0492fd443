use crate::core::data::colour::Colour;

/// A three-stop radial fade: a solid-ish core, a mid tint, and a fully
/// transparent rim. Positions are fractions of the gradient radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialFade {
    pub stops: [FadeStop; 3],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStop {
    pub position: f32,
    pub colour: Colour,
    pub alpha: f32,
}

impl RadialFade {
    /// Samples the fade at `t` = distance / radius. Beyond the rim the
    /// result is fully transparent.
    #[must_use]
    pub fn sample(&self, t: f32) -> (Colour, f32) {
        let [core, mid, rim] = self.stops;

        if t <= core.position {
            return (core.colour, core.alpha);
        }
        if t >= rim.position {
            return (rim.colour, 0.0);
        }

        let (from, to) = if t < mid.position { (core, mid) } else { (mid, rim) };
        let span = to.position - from.position;
        let local = if span > 0.0 { (t - from.position) / span } else { 1.0 };

        let colour = Colour {
            r: lerp_channel(from.colour.r, to.colour.r, local),
            g: lerp_channel(from.colour.g, to.colour.g, local),
            b: lerp_channel(from.colour.b, to.colour.b, local),
        };
        let alpha = from.alpha + (to.alpha - from.alpha) * local;

        (colour, alpha)
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::{FadeStop, RadialFade};
    use crate::core::data::colour::Colour;

    fn fade() -> RadialFade {
        RadialFade {
            stops: [
                FadeStop {
                    position: 0.0,
                    colour: Colour {
                        r: 200,
                        g: 100,
                        b: 0,
                    },
                    alpha: 1.0,
                },
                FadeStop {
                    position: 0.5,
                    colour: Colour {
                        r: 100,
                        g: 100,
                        b: 100,
                    },
                    alpha: 0.5,
                },
                FadeStop {
                    position: 1.0,
                    colour: Colour {
                        r: 0,
                        g: 100,
                        b: 200,
                    },
                    alpha: 0.0,
                },
            ],
        }
    }

    #[test]
    fn core_and_rim_return_their_stops() {
        let (core_colour, core_alpha) = fade().sample(0.0);
        let (rim_colour, rim_alpha) = fade().sample(1.0);

        assert_eq!(
            core_colour,
            Colour {
                r: 200,
                g: 100,
                b: 0
            }
        );
        assert_eq!(core_alpha, 1.0);
        assert_eq!(
            rim_colour,
            Colour {
                r: 0,
                g: 100,
                b: 200
            }
        );
        assert_eq!(rim_alpha, 0.0);
    }

    #[test]
    fn mid_stop_is_hit_exactly() {
        let (colour, alpha) = fade().sample(0.5);

        assert_eq!(
            colour,
            Colour {
                r: 100,
                g: 100,
                b: 100
            }
        );
        assert_eq!(alpha, 0.5);
    }

    #[test]
    fn samples_interpolate_between_stops() {
        let (colour, alpha) = fade().sample(0.25);

        assert_eq!(
            colour,
            Colour {
                r: 150,
                g: 100,
                b: 50
            }
        );
        assert!((alpha - 0.75).abs() < 1e-6);
    }

    #[test]
    fn beyond_the_rim_is_transparent() {
        let (_, alpha) = fade().sample(1.5);

        assert_eq!(alpha, 0.0);
    }

    #[test]
    fn alpha_decreases_monotonically_outward() {
        let fade = fade();
        let mut previous = f32::INFINITY;

        for step in 0..=20 {
            let (_, alpha) = fade.sample(step as f32 / 20.0);
            assert!(alpha <= previous);
            previous = alpha;
        }
    }
}
