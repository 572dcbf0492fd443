use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_ROWS, CancelToken, Cancelled, NeverCancel};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::field::field::StarField;
use crate::core::field::links::link_segments;
use crate::core::field::particle::Particle;
use crate::core::render::gradient::{FadeStop, RadialFade};
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

pub const BACKGROUND: Colour = Colour { r: 10, g: 10, b: 18 };

const STAR_WARM_WHITE: Colour = Colour {
    r: 244,
    g: 228,
    b: 188,
};
const LINK_GOLD: Colour = Colour {
    r: 196,
    g: 160,
    b: 82,
};
const STAR_CORE: Colour = Colour {
    r: 255,
    g: 255,
    b: 255,
};

const GLOW_RADIUS_FACTOR: f32 = 3.0;
const CORE_RADIUS_FACTOR: f32 = 0.5;

/// The two fixed nebula layers, positioned relative to the viewport.
const NEBULAE: [Nebula; 2] = [
    Nebula {
        centre: (0.70, 0.30),
        radius_width_factor: 0.5,
        fade: RadialFade {
            stops: [
                FadeStop {
                    position: 0.0,
                    colour: Colour {
                        r: 88,
                        g: 28,
                        b: 135,
                    },
                    alpha: 0.08,
                },
                FadeStop {
                    position: 0.5,
                    colour: Colour { r: 49, g: 10, b: 82 },
                    alpha: 0.04,
                },
                FadeStop {
                    position: 1.0,
                    colour: BACKGROUND,
                    alpha: 0.0,
                },
            ],
        },
    },
    Nebula {
        centre: (0.20, 0.70),
        radius_width_factor: 0.4,
        fade: RadialFade {
            stops: [
                FadeStop {
                    position: 0.0,
                    colour: Colour {
                        r: 139,
                        g: 105,
                        b: 20,
                    },
                    alpha: 0.05,
                },
                FadeStop {
                    position: 0.5,
                    colour: Colour { r: 49, g: 38, b: 10 },
                    alpha: 0.02,
                },
                FadeStop {
                    position: 1.0,
                    colour: BACKGROUND,
                    alpha: 0.0,
                },
            ],
        },
    },
];

const STAR_GLOW: RadialFade = RadialFade {
    stops: [
        FadeStop {
            position: 0.0,
            colour: STAR_WARM_WHITE,
            alpha: 1.0,
        },
        FadeStop {
            position: 0.5,
            colour: LINK_GOLD,
            alpha: 0.3,
        },
        FadeStop {
            position: 1.0,
            colour: LINK_GOLD,
            alpha: 0.0,
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Nebula {
    centre: (f32, f32),
    radius_width_factor: f32,
    fade: RadialFade,
}

#[derive(Debug)]
pub enum SceneError {
    Cancelled(Cancelled),
    Buffer(PixelBufferError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::Buffer(err) => write!(f, "scene buffer error: {}", err),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::Buffer(err) => Some(err),
        }
    }
}

/// Paints one full frame of the starfield.
///
/// Order matters: background and nebulae first, then constellation links,
/// then the stars so their glows sit on top.
pub fn paint_scene(field: &StarField, time_ms: f64) -> Result<PixelBuffer, SceneError> {
    paint_scene_cancelable(field, time_ms, &NeverCancel)
}

/// Cancel-aware variant of [`paint_scene`]. The backdrop pass checks the
/// token every few rows so a superseded frame aborts quickly.
pub fn paint_scene_cancelable<C: CancelToken>(
    field: &StarField,
    time_ms: f64,
    cancel: &C,
) -> Result<PixelBuffer, SceneError> {
    let viewport = field.viewport();
    let mut buffer = paint_backdrop(viewport, cancel)?;

    if cancel.is_cancelled() {
        return Err(SceneError::Cancelled(Cancelled));
    }
    for segment in link_segments(field.particles(), time_ms) {
        paint_line(&mut buffer, segment.from, segment.to, LINK_GOLD, segment.alpha);
    }

    if cancel.is_cancelled() {
        return Err(SceneError::Cancelled(Cancelled));
    }
    for particle in field.particles() {
        paint_star(&mut buffer, particle, time_ms);
    }

    Ok(buffer)
}

/// Clears to the background colour and composites both nebula fades, row
/// parallel: every pixel of the viewport is touched exactly once.
fn paint_backdrop<C: CancelToken>(
    viewport: Viewport,
    cancel: &C,
) -> Result<PixelBuffer, SceneError> {
    let width = viewport.width() as usize;
    let row_bytes = width * 3;
    let mut data = vec![0u8; viewport.area() as usize * 3];

    data.par_chunks_exact_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| {
            if y as u32 % CANCEL_CHECK_INTERVAL_ROWS == 0 && cancel.is_cancelled() {
                return Err(SceneError::Cancelled(Cancelled));
            }

            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                let colour = backdrop_pixel(viewport, x as f32, y as f32);
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }

            Ok(())
        })?;

    PixelBuffer::from_data(viewport, data).map_err(SceneError::Buffer)
}

fn backdrop_pixel(viewport: Viewport, x: f32, y: f32) -> Colour {
    let width = viewport.width() as f32;
    let height = viewport.height() as f32;
    let mut colour = BACKGROUND;

    for nebula in &NEBULAE {
        let centre_x = width * nebula.centre.0;
        let centre_y = height * nebula.centre.1;
        let radius = width * nebula.radius_width_factor;
        let t = (x - centre_x).hypot(y - centre_y) / radius;

        let (tint, alpha) = nebula.fade.sample(t);
        colour = tint.over(colour, alpha);
    }

    colour
}

/// Blends a thin line by stepping one pixel at a time along the segment.
fn paint_line(buffer: &mut PixelBuffer, from: (f32, f32), to: (f32, f32), colour: Colour, alpha: f32) {
    let length = (to.0 - from.0).hypot(to.1 - from.1);
    let steps = length.ceil().max(1.0) as i32;
    let mut previous: Option<Point> = None;

    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let point = Point {
            x: (from.0 + (to.0 - from.0) * t).round() as i32,
            y: (from.1 + (to.1 - from.1) * t).round() as i32,
        };

        // One-pixel steps can land on the same pixel twice; blending it
        // again would brighten the line unevenly.
        if previous != Some(point) {
            buffer.blend(point, colour, alpha);
            previous = Some(point);
        }
    }
}

/// A star is a soft glow disc with a small solid core on top, both scaled
/// by the particle's instantaneous twinkle opacity.
fn paint_star(buffer: &mut PixelBuffer, particle: &Particle, time_ms: f64) {
    let opacity = particle.opacity_at(time_ms);
    let glow_radius = particle.size * GLOW_RADIUS_FACTOR;
    // Sub-pixel cores still light their centre pixel.
    let core_radius = (particle.size * CORE_RADIUS_FACTOR).max(0.5);

    let min_x = (particle.x - glow_radius).floor() as i32;
    let max_x = (particle.x + glow_radius).ceil() as i32;
    let min_y = (particle.y - glow_radius).floor() as i32;
    let max_y = (particle.y + glow_radius).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let distance = (x as f32 - particle.x).hypot(y as f32 - particle.y);
            let point = Point { x, y };

            if distance <= glow_radius {
                let (tint, alpha) = STAR_GLOW.sample(distance / glow_radius);
                buffer.blend(point, tint, alpha * opacity);
            }

            if distance <= core_radius {
                buffer.blend(point, STAR_CORE, opacity);
            }
        }
    }
}
