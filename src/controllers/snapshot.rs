use std::path::Path;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::viewport::Viewport;
use crate::core::field::engine::{FieldEngine, FieldTuning};
use crate::presenters::file::ppm::PpmFilePresenter;

/// Renders a single frame of the star field and writes it as a PPM file.
///
/// The field is advanced a few seconds first so the snapshot catches the
/// particles mid-drift with twinkle and link pulses away from their
/// zero-time values.
pub fn snapshot_controller(
    width: u32,
    height: u32,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let warmup = Duration::from_millis(250);
    let warmup_frames = 12;

    let viewport = Viewport::new(width, height)?;
    let mut engine = FieldEngine::new(StdRng::from_entropy(), viewport, FieldTuning::default());

    println!("Rendering star field snapshot...");
    println!("Image size: {}x{}", width, height);
    println!("Particles: {}", viewport.particle_budget());

    for _ in 0..warmup_frames {
        engine.advance(warmup);
    }

    let start = Instant::now();
    let pixel_buffer = engine.render(&crate::core::actions::cancellation::NeverCancel)?;
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);

    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    PpmFilePresenter::new().write_frame(&pixel_buffer, &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());

    Ok(())
}
