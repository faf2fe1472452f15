use grid_system::{DebugSink, WorldPoint};
use macroquad::prelude::*;
use tracing::{debug, info};

use crate::board::{self, Board, Gem};
use crate::settings::{self, Settings};
use crate::view::ScreenProjection;

const LABEL_FONT_SIZE: f32 = 14.0;
const GEM_RADIUS: f32 = 0.35; // in cells

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    // Runs before tracing is set up, so a bad file only costs the window settings here;
    // the board loader reports the error.
    let window = settings::load_config()
        .map(|settings| settings.window)
        .unwrap_or_default();
    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        high_dpi: true,
        ..Default::default()
    }
}

/// Draws a grid's debug overlay onto the window.
struct ScreenSink<'a> {
    view: &'a ScreenProjection,
    color: Color,
}

impl DebugSink for ScreenSink<'_> {
    fn draw_line(&mut self, from: WorldPoint, to: WorldPoint) {
        let (x1, y1) = self.view.to_screen(from);
        let (x2, y2) = self.view.to_screen(to);
        draw_line(x1, y1, x2, y2, 1.0, self.color);
    }

    // The projection always looks straight at the board, so every label already faces the viewer.
    fn draw_label(&mut self, text: &str, position: WorldPoint, _forward: WorldPoint) {
        let (x, y) = self.view.to_screen(position);
        let size = measure_text(text, None, LABEL_FONT_SIZE as u16, 1.0);
        draw_text(text, x - size.width / 2.0, y + size.height / 2.0, LABEL_FONT_SIZE, self.color);
    }
}

fn gem_color(gem: Gem) -> Color {
    match gem {
        Gem::Red => RED,
        Gem::Green => GREEN,
        Gem::Blue => BLUE,
        Gem::Yellow => YELLOW,
        Gem::Purple => PURPLE,
    }
}

pub async fn run_board_loop(mut board: Board, settings: &Settings) {
    info!("Board loop starting inside graphics module...");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, closing board.");
            break;
        }

        // Recomputed every frame so the board stays centered when the window is resized.
        let view = ScreenProjection::centered_on(
            board.world_bounds(),
            board.converter(),
            settings.window.pixels_per_unit,
            screen_width(),
            screen_height(),
        );
        let (mouse_x, mouse_y) = mouse_position();
        let pointer = view.to_world(mouse_x, mouse_y);

        if is_mouse_button_pressed(MouseButton::Left) {
            debug!(%pointer, "Left click");
            board::cycle_at_world(&mut board, pointer);
        }
        if is_mouse_button_pressed(MouseButton::Right) {
            debug!(%pointer, "Right click");
            board::clear_at_world(&mut board, pointer);
        }
        if is_key_pressed(KeyCode::R) {
            info!("Refilling board.");
            board::fill_random(&mut board, &mut ::rand::rng());
        }

        clear_background(DARKGRAY);

        let radius = GEM_RADIUS * board.cell_size() * view.scale();
        for x in 0..board.width() as i32 {
            for y in 0..board.height() as i32 {
                if let Some(gem) = board.get_value(x, y) {
                    let (sx, sy) = view.to_screen(board.grid_to_world_center(x, y));
                    draw_circle(sx, sy, radius, gem_color(gem));
                }
            }
        }

        if settings.board.debug {
            board.draw_debug(&mut ScreenSink {
                view: &view,
                color: WHITE,
            });
        }

        let hovered = board.world_to_grid(pointer);
        let status = if board.is_valid_position(hovered.x, hovered.y) {
            format!("Cell ({}): {:?}", hovered, board.get_value(hovered.x, hovered.y))
        } else {
            "Outside board".to_string()
        };
        draw_text(&status, 10.0, 20.0, 20.0, WHITE);
        draw_text("Left click: cycle gem  Right click: clear  R: refill", 10.0, 40.0, 20.0, LIGHTGRAY);

        next_frame().await
    }
}
