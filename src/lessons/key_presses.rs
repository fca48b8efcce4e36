use sdl2::{event::Event, keyboard::Scancode, pixels::PixelFormatEnum, rect::Rect, surface::Surface};

use crate::{sdl_wrapper::SDLContext, settings::Settings, texture::load_surface};

use super::{is_quit, SURFACE_FRAME_DELAY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyPressSurface {
    Default = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl KeyPressSurface {
    const ALL: [KeyPressSurface; 5] = [
        KeyPressSurface::Default,
        KeyPressSurface::Up,
        KeyPressSurface::Down,
        KeyPressSurface::Left,
        KeyPressSurface::Right,
    ];

    fn file_name(self) -> &'static str {
        match self {
            KeyPressSurface::Default => "press.bmp",
            KeyPressSurface::Up => "up.bmp",
            KeyPressSurface::Down => "down.bmp",
            KeyPressSurface::Left => "left.bmp",
            KeyPressSurface::Right => "right.bmp",
        }
    }

    fn from_scancode(scancode: Option<Scancode>) -> Self {
        match scancode {
            Some(Scancode::Up) => KeyPressSurface::Up,
            Some(Scancode::Down) => KeyPressSurface::Down,
            Some(Scancode::Left) => KeyPressSurface::Left,
            Some(Scancode::Right) => KeyPressSurface::Right,
            _ => KeyPressSurface::Default,
        }
    }
}

/// Loads an image already converted to the screen's pixel format.
fn load_optimized(
    settings: &Settings,
    file_name: &str,
    format: PixelFormatEnum,
) -> Option<Surface<'static>> {
    let loaded = match load_surface(&settings.asset_path(file_name)) {
        Ok(surface) => surface,
        Err(err) => {
            log::error!("Unable to load image {}! {}", file_name, err);
            return None;
        }
    };

    match loaded.convert_format(format) {
        Ok(optimized) => Some(optimized),
        Err(err) => {
            log::error!("Unable to optimize image {}! {}", file_name, err);
            None
        }
    }
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let window = sdl_context.build_new_window(settings)?;
    let format = window.window_pixel_format();

    // Every image is attempted so each failure gets reported.
    let loaded: Vec<Option<Surface>> = KeyPressSurface::ALL
        .iter()
        .map(|kind| load_optimized(settings, kind.file_name(), format))
        .collect();
    let surfaces: Vec<Surface> = match loaded.into_iter().collect::<Option<Vec<_>>>() {
        Some(surfaces) => surfaces,
        None => return Err(String::from("Failed to load media!")),
    };

    let mut current = KeyPressSurface::Default;
    let stretch_rect = Rect::new(0, 0, settings.screen_width, settings.screen_height);

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
            if let Event::KeyDown { scancode, .. } = event {
                current = KeyPressSurface::from_scancode(scancode);
            }
        }

        let mut screen = window.surface(&sdl_context.event_pump)?;
        surfaces[current as usize].blit_scaled(None::<Rect>, &mut screen, stretch_rect)?;
        screen.update_window()?;

        std::thread::sleep(SURFACE_FRAME_DELAY);
    }

    Ok(())
}
