use crate::controllers::animation::data::frame_data::FrameData;
use crate::controllers::animation::data::frame_request::FrameRequest;
use crate::controllers::animation::errors::render::RenderError;
use crate::controllers::animation::events::render::RenderEvent;
use crate::controllers::animation::ports::presenter::AnimationPresenterPort;
use crate::core::field::engine::{FieldEngine, FieldTuning};
use crate::core::render::scene::SceneError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<FrameRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn AnimationPresenterPort>,
}

/// Drives the particle field on a dedicated worker thread.
///
/// The worker owns the [`FieldEngine`] outright: the shell only submits
/// viewport-stamped frame requests and receives frames (or errors) through
/// the presenter port. Dropping the controller joins the worker, which is
/// the deterministic teardown for the recurring frame loop.
pub struct AnimationController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl AnimationController {
    pub fn new(presenter_port: Arc<dyn AnimationPresenterPort>, tuning: FieldTuning) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, tuning);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues a frame request, superseding any unstarted one, and returns
    /// its generation number.
    pub fn submit_request(&self, request: Arc<FrameRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>, tuning: FieldTuning) {
        // Created on the first request, once a viewport is known.
        let mut engine: Option<FieldEngine<StdRng>> = None;
        let mut last_frame_at: Option<Instant> = None;

        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let engine = engine.get_or_insert_with(|| {
                FieldEngine::new(StdRng::from_entropy(), request.viewport, tuning)
            });
            engine.resize(request.viewport);

            let now = Instant::now();
            let elapsed = last_frame_at.map_or(std::time::Duration::ZERO, |at| now - at);
            last_frame_at = Some(now);
            engine.advance(elapsed);

            let start = Instant::now();
            let result = engine.render(&cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(pixel_buffer) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(SceneError::Cancelled(_)) => {
                    continue;
                }
                Err(error) => {
                    if job_generation != shared.generation.load(Ordering::Acquire) {
                        continue;
                    }

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message: error.to_string(),
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }
}

impl Drop for AnimationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
