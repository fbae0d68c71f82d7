use cairo::{Context, ImageSurface};
use pixel_studio::backend::{LaunchOptions, build_input_state};
use pixel_studio::config::{Config, StatusBarStyle, StatusPosition};
use pixel_studio::draw::Color;
use pixel_studio::input::{InputState, Mode, MouseButton};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

const WIDTH: i32 = 1280;
const HEIGHT: i32 = 800;

fn make_input_state(config: &Config) -> InputState {
    let mut state = build_input_state(
        config,
        &LaunchOptions::default(),
        StdRng::seed_from_u64(11),
        Instant::now(),
    )
    .unwrap();
    state.update_screen_dimensions(WIDTH as u32, HEIGHT as u32);
    state.mode = Mode::Color;
    state.drawing_enabled = true;
    state
}

fn render(state: &InputState, config: &Config) -> ImageSurface {
    let surface = ImageSurface::create(cairo::Format::ARgb32, WIDTH, HEIGHT).unwrap();
    let ctx = Context::new(&surface).unwrap();
    pixel_studio::ui::render_scene(&ctx, state, config);
    drop(ctx);
    surface.flush();
    surface
}

/// Reads an opaque pixel as (r, g, b).
fn pixel(surface: &mut ImageSurface, x: f64, y: f64) -> (u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    // ARGB32 is stored native-endian; on little-endian hosts the bytes are B, G, R, A
    let value = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

fn cell_center(state: &InputState, index: usize) -> (f64, f64) {
    let (x, y, w, h) = state.grid.cell_bounds(index).unwrap();
    (
        state.layout.canvas.x + x + w / 2.0,
        state.layout.canvas.y + y + h / 2.0,
    )
}

#[test]
fn clicked_cell_renders_in_base_color() {
    let config = Config::default();
    let mut state = make_input_state(&config);
    state.base_color = Color::rgb(0x43, 0x61, 0xee);

    let (x, y) = cell_center(&state, 0);
    state.on_mouse_press(MouseButton::Left, x, y);
    state.on_pointer_leave();

    let (ux, uy) = cell_center(&state, 1);
    let mut surface = render(&state, &config);
    assert_eq!(pixel(&mut surface, x, y), (0x43, 0x61, 0xee));
    assert_eq!(pixel(&mut surface, ux, uy), (0xff, 0xff, 0xff));
}

#[test]
fn erased_cell_renders_white_again() {
    let config = Config::default();
    let mut state = make_input_state(&config);
    let (x, y) = cell_center(&state, 5);

    state.on_mouse_press(MouseButton::Left, x, y);
    state.mode = Mode::Eraser;
    state.on_mouse_press(MouseButton::Left, x, y);
    state.on_pointer_leave();

    let mut surface = render(&state, &config);
    assert_eq!(pixel(&mut surface, x, y), (0xff, 0xff, 0xff));
}

#[test]
fn help_overlay_changes_the_frame() {
    let config = Config::default();
    let mut state = make_input_state(&config);

    let mut plain = render(&state, &config);
    state.show_help = true;
    let mut with_help = render(&state, &config);

    let plain_data = plain.data().unwrap().to_vec();
    let help_data = with_help.data().unwrap().to_vec();
    assert_ne!(plain_data, help_data);
}

#[test]
fn status_bar_draws_for_all_positions() {
    let config = Config::default();
    let state = make_input_state(&config);
    let style = StatusBarStyle::default();

    for position in [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ] {
        let mut surface = ImageSurface::create(cairo::Format::ARgb32, 400, 200).unwrap();
        let ctx = Context::new(&surface).unwrap();
        pixel_studio::ui::render_status_bar(&ctx, &state, position, &style, 400, 200);
        drop(ctx);
        let has_pixels = surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false);
        assert!(has_pixels, "status bar should render for {:?}", position);
    }
}
