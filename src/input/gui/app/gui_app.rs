use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::animation::AnimationController;
use crate::core::data::viewport::Viewport;
use crate::core::wheel::angle::sector_centre_angle;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::pointer_input::{PointerInputState, PointerTransition};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::signs::ZODIAC_SIGNS;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::app::wheel_input::WheelLayout;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: AnimationController,
    ui_state: GuiAppState,
    pointer_input: PointerInputState,
    last_redraw: Option<Instant>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: AnimationController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            ui_state: GuiAppState::default(),
            pointer_input: PointerInputState::default(),
            last_redraw: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(
            egui_output,
            &self.egui_ctx,
            self.ui_state.latest_submitted_generation,
        )
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        // Any frame in flight is at the old size and will be dropped.
        self.ui_state.reset_schedule();
    }

    pub fn submit_frame_request_if_needed(&mut self) {
        let Ok(viewport) = Viewport::new(self.width, self.height) else {
            return;
        };

        let controller = &self.controller;
        self.ui_state.submit_frame_if_ready(
            viewport,
            controller.last_completed_generation(),
            |request| controller.submit_request(request),
        );
    }

    /// Runs the egui frame: the zodiac wheel overlay plus the info panel.
    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        let width = self.width;
        let height = self.height;
        let rotation = self.ui_state.wheel.display_rotation();
        let selected = self.ui_state.wheel.selected();
        let generation = self.ui_state.latest_submitted_generation;

        self.egui_ctx.run(raw_input, |ctx| {
            paint_wheel(ctx, width, height, rotation, selected);

            egui::Window::new("Astral Chain")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 160.0])
                .show(ctx, |ui| {
                    ui.heading("Select your sign");
                    ui.separator();

                    match selected {
                        Some(index) => {
                            let sign = &ZODIAC_SIGNS[index];
                            ui.label(format!("{} {}", sign.glyph, sign.name));
                            ui.label(format!("{} \u{2022} {}", sign.dates, sign.element));
                        }
                        None => {
                            ui.label("Click a glyph or drag the wheel.");
                        }
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", width, height));
                    ui.label(format!("Latest generation: {}", generation));
                });
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    fn handle_pointer_event(&mut self, event: &WindowEvent) {
        let transition = match event {
            WindowEvent::CursorMoved { position, .. } => self
                .pointer_input
                .handle_cursor_moved(position.x, position.y),
            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer_input.handle_mouse_input(*button, *state)
            }
            WindowEvent::CursorLeft { .. } => self.pointer_input.handle_cursor_left(),
            WindowEvent::Touch(touch) => self.pointer_input.handle_touch(
                touch.id,
                touch.phase,
                touch.location.x,
                touch.location.y,
            ),
            _ => None,
        };

        let Some(transition) = transition else {
            return;
        };

        let layout = WheelLayout::for_window(self.width, self.height);
        let wheel = &mut self.ui_state.wheel;

        match transition {
            PointerTransition::Pressed { x, y } => {
                wheel.pointer_pressed(layout, x, y);
            }
            PointerTransition::Moved { x, y } => {
                wheel.pointer_moved(layout, x, y);
            }
            PointerTransition::Released { x, y } => {
                wheel.pointer_released(layout, x, y);
            }
        }
    }

    fn advance_wheel_glide(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_redraw
            .map_or(Duration::ZERO, |at| now - at)
            .as_secs_f64();
        self.last_redraw = Some(now);

        self.ui_state.wheel.advance(dt);
    }

    /// Runs the event loop; does not return until the window closes.
    pub fn run(mut self, window: &'static Window, event_loop: EventLoop<GuiEvent>) {
        event_loop
            .run(move |event, elwt| {
                match event {
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        let (egui_consumed, _) = self.handle_window_event(window, event);

                        match event {
                            WindowEvent::CloseRequested => {
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                self.advance_wheel_glide();
                                self.submit_frame_request_if_needed();

                                let egui_output = self.update_ui(window);
                                self.egui_state
                                    .handle_platform_output(window, egui_output.platform_output.clone());

                                if let Err(e) = self.render(egui_output) {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                self.resize(size.width, size.height);
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                self.scale_factor = *scale_factor;
                                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                self.resize(size.width, size.height);
                            }
                            WindowEvent::Focused(false) => {
                                self.pointer_input.reset();
                            }
                            _ => {
                                if !egui_consumed {
                                    self.handle_pointer_event(event);
                                }
                            }
                        }
                    }
                    Event::UserEvent(GuiEvent::Wake) => {
                        window.request_redraw();
                    }
                    Event::AboutToWait => {
                        // The field animates continuously.
                        window.request_redraw();
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}

/// Paints the rotating wheel with egui shapes over the star field.
fn paint_wheel(ctx: &Context, width: u32, height: u32, rotation: f64, selected: Option<usize>) {
    if width == 0 || height == 0 {
        return;
    }

    let ppp = f64::from(ctx.pixels_per_point());
    let layout = WheelLayout::for_window(width, height);
    let centre = egui::pos2(
        (layout.centre_x / ppp) as f32,
        (layout.centre_y / ppp) as f32,
    );
    let radius = (layout.radius / ppp) as f32;

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("zodiac_wheel"),
    ));

    let gold = egui::Color32::from_rgba_unmultiplied(196, 160, 82, 110);
    let faint_gold = egui::Color32::from_rgba_unmultiplied(196, 160, 82, 40);
    let warm_white = egui::Color32::from_rgb(244, 228, 188);

    painter.circle_stroke(centre, radius, egui::Stroke::new(1.5, gold));
    painter.circle_stroke(centre, radius * 0.55, egui::Stroke::new(1.0, faint_gold));

    for (index, sign) in ZODIAC_SIGNS.iter().enumerate() {
        let label_angle = (rotation + sector_centre_angle(index)).to_radians();
        let (sin, cos) = label_angle.sin_cos();
        let label = egui::pos2(
            centre.x + cos as f32 * radius * 0.8,
            centre.y + sin as f32 * radius * 0.8,
        );

        let is_selected = selected == Some(index);
        let (size, colour) = if is_selected {
            (26.0, warm_white)
        } else {
            (20.0, gold)
        };

        painter.text(
            label,
            egui::Align2::CENTER_CENTER,
            sign.glyph,
            egui::FontId::proportional(size),
            colour,
        );

        // Sector boundary, half a sector behind the label.
        let boundary_angle = (rotation + sector_centre_angle(index) - 15.0).to_radians();
        let (bsin, bcos) = boundary_angle.sin_cos();
        let inner = egui::pos2(
            centre.x + bcos as f32 * radius * 0.55,
            centre.y + bsin as f32 * radius * 0.55,
        );
        let outer = egui::pos2(
            centre.x + bcos as f32 * radius,
            centre.y + bsin as f32 * radius,
        );
        painter.line_segment([inner, outer], egui::Stroke::new(1.0, faint_gold));
    }

    // Fixed marker above the wheel pointing at the selected sector.
    let marker_top = egui::pos2(centre.x, centre.y - radius * 1.12);
    let marker_bottom = egui::pos2(centre.x, centre.y - radius * 1.04);
    painter.line_segment([marker_top, marker_bottom], egui::Stroke::new(2.0, warm_white));
}
