//! Window, event wiring, and per-frame drawing.

use std::sync::Arc;
use std::time::Instant;

use log::{error, warn};
use pixels::{Pixels, SurfaceTexture};
use roulette_core::{Wheel, WinnerResult};
use roulette_graphics::{Color, Point};
use roulette_render_pixels::{
    clear_frame, draw_text, draw_text_centered, fill_rect, WheelSurface, CANVAS_SIZE,
};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::items::ItemList;

const WINDOW_WIDTH: u32 = 520;
const WINDOW_HEIGHT: u32 = 660;
const WHEEL_ORIGIN_X: i32 = 10;
const WHEEL_ORIGIN_Y: i32 = 80;

const BACKGROUND: Color = Color::from_rgb_u8(18, 18, 24);
const HUD_COLOR: Color = Color::from_rgb_u8(0xC7, 0xC7, 0xC7);
const BANNER_BG: Color = Color::rgba(0.0, 0.0, 0.0, 0.82);

pub struct AppConfig {
    pub title: String,
    pub items: ItemList,
}

pub struct WheelApp {
    title: String,
    started: Instant,
    items: ItemList,
    wheel: Wheel,
    surface: WheelSurface,
    surface_dirty: bool,
    winner: Option<WinnerResult>,
    /// Last cursor position in buffer coordinates.
    cursor: Point,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
}

impl WheelApp {
    pub fn new(config: AppConfig) -> Self {
        let wheel = Wheel::new(config.items.labels().to_vec());
        Self {
            title: config.title,
            started: Instant::now(),
            items: config.items,
            wheel,
            surface: WheelSurface::new(CANVAS_SIZE),
            surface_dirty: true,
            winner: None,
            cursor: Point::ZERO,
            window: None,
            pixels: None,
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn wheel_local(&self, pos: Point) -> Point {
        Point::new(
            pos.x - WHEEL_ORIGIN_X as f32,
            pos.y - WHEEL_ORIGIN_Y as f32,
        )
    }

    /// Pushes the current item list into the wheel and schedules a sector
    /// repaint.
    fn sync_items(&mut self) {
        self.wheel.set_labels(self.items.labels().to_vec());
        self.surface_dirty = true;
    }

    fn trigger_spin(&mut self) {
        match self.wheel.spin(random_unit()) {
            Ok(true) => self.winner = None,
            Ok(false) => {}
            Err(err) => warn!("spin refused: {err}"),
        }
    }

    fn on_mouse_pressed(&mut self) {
        if self.winner.take().is_some() {
            self.request_redraw();
            return;
        }
        let local = self.wheel_local(self.cursor);
        if self.surface.contains(local) {
            self.wheel.drag_start(local, self.surface.center(), self.now_ms());
            self.request_redraw();
        }
    }

    fn on_mouse_released(&mut self) {
        if self.wheel.is_dragging() {
            self.wheel.drag_end(self.now_ms(), random_unit());
            self.request_redraw();
        }
    }

    fn on_cursor_moved(&mut self, pos: Point) {
        self.cursor = pos;
        if self.wheel.is_dragging() {
            let local = self.wheel_local(pos);
            self.wheel.drag_move(local, self.surface.center(), self.now_ms());
            self.request_redraw();
        }
    }

    fn on_key_pressed(&mut self, code: KeyCode) {
        match code {
            KeyCode::Space => self.trigger_spin(),
            KeyCode::Escape => {
                self.winner = None;
            }
            // Item controls stay locked while the wheel moves.
            KeyCode::ArrowUp if !self.wheel.in_motion() => {
                self.items.adjust_count(1);
                self.sync_items();
            }
            KeyCode::ArrowDown if !self.wheel.in_motion() => {
                self.items.adjust_count(-1);
                self.sync_items();
            }
            KeyCode::KeyM if !self.wheel.in_motion() => {
                self.items.toggle_mode();
                self.sync_items();
            }
            KeyCode::KeyR => self.items.toggle_remove_on_win(),
            _ => return,
        }
        self.request_redraw();
    }

    fn finish_spin(&mut self, winner: WinnerResult) {
        if self.items.remove_on_win() {
            self.items.remove_winner(&winner.label);
            self.sync_items();
        }
        self.winner = Some(winner);
    }

    fn advance_animation(&mut self) {
        let result = self.wheel.on_frame(self.now_ms());
        if let Some(winner) = result.winner {
            self.finish_spin(winner);
        }
    }

    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface_dirty {
            self.surface.render_sectors(self.items.labels());
            self.surface_dirty = false;
        }
        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };
        let frame = pixels.frame_mut();

        clear_frame(frame, BACKGROUND);
        self.surface.blit_rotated(
            frame,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            WHEEL_ORIGIN_X,
            WHEEL_ORIGIN_Y,
            self.wheel.rotation_deg(),
        );
        self.surface
            .draw_pointer(frame, WINDOW_WIDTH, WINDOW_HEIGHT, WHEEL_ORIGIN_X, WHEEL_ORIGIN_Y);

        draw_hud(frame, &self.title, &self.items, &self.wheel);
        if let Some(winner) = &self.winner {
            draw_banner(frame, winner);
        }

        if let Err(err) = pixels.render() {
            error!("render failed: {err}");
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for WheelApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(
                WINDOW_WIDTH as f64,
                WINDOW_HEIGHT as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("failed to create window"),
        );

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(WINDOW_WIDTH, WINDOW_HEIGHT, surface_texture)
            .expect("failed to create pixel buffer");

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(pixels) = self.pixels.as_mut() {
                        if let Err(err) = pixels.resize_surface(size.width, size.height) {
                            error!("surface resize failed: {err}");
                            event_loop.exit();
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let mapped = self.pixels.as_ref().map(|pixels| {
                    pixels
                        .window_pos_to_pixel((position.x as f32, position.y as f32))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos))
                });
                if let Some((px, py)) = mapped {
                    self.on_cursor_moved(Point::new(px as f32, py as f32));
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.on_mouse_pressed(),
                ElementState::Released => self.on_mouse_released(),
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.on_key_pressed(code);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.advance_animation();
                self.draw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Poll and keep frames coming while the wheel moves; sleep on
        // events otherwise.
        if self.wheel.in_motion() {
            self.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

/// Uniform sample in `[0, 1)` from the OS entropy source.
fn random_unit() -> f64 {
    let mut buf = [0u8; 8];
    if let Err(err) = getrandom::fill(&mut buf) {
        warn!("OS rng unavailable ({err}), falling back to midpoint sample");
        return 0.5;
    }
    (u64::from_le_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64
}

fn draw_hud(frame: &mut [u8], title: &str, items: &ItemList, wheel: &Wheel) {
    draw_text_centered(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WINDOW_WIDTH as f32 / 2.0,
        24.0,
        title,
        24.0,
        Color::WHITE,
    );

    let state = if wheel.is_dragging() {
        "dragging"
    } else if wheel.is_spinning() {
        "spinning"
    } else {
        "ready"
    };
    let mode = match items.mode() {
        crate::items::ItemMode::Numbers => "numbers",
        crate::items::ItemMode::Custom => "custom",
    };
    let status = format!(
        "{} items | {} | remove-on-win: {} | {}",
        items.len(),
        mode,
        if items.remove_on_win() { "on" } else { "off" },
        state,
    );
    draw_text_centered(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WINDOW_WIDTH as f32 / 2.0,
        52.0,
        &status,
        14.0,
        HUD_COLOR,
    );

    draw_text(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        16.0,
        (WINDOW_HEIGHT - 52) as f32,
        "Space: spin    Up/Down: count    M: mode    R: remove-on-win",
        13.0,
        HUD_COLOR,
    );
    draw_text(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        16.0,
        (WINDOW_HEIGHT - 30) as f32,
        "Drag the wheel and let go to spin    Esc: dismiss result",
        13.0,
        HUD_COLOR,
    );
}

fn draw_banner(frame: &mut [u8], winner: &WinnerResult) {
    let w = 400u32;
    let h = 110u32;
    let x = ((WINDOW_WIDTH - w) / 2) as i32;
    let y = (WHEEL_ORIGIN_Y + CANVAS_SIZE as i32 / 2) - h as i32 / 2;
    fill_rect(frame, WINDOW_WIDTH, WINDOW_HEIGHT, x, y, w, h, BANNER_BG);

    let cx = WINDOW_WIDTH as f32 / 2.0;
    draw_text_centered(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        cx,
        y as f32 + 28.0,
        "The wheel has chosen",
        14.0,
        HUD_COLOR,
    );
    draw_text_centered(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        cx,
        y as f32 + 58.0,
        &winner.label,
        28.0,
        Color::WHITE,
    );
    draw_text_centered(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        cx,
        y as f32 + 88.0,
        "click or press Esc to continue",
        12.0,
        HUD_COLOR,
    );
}
