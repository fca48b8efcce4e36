use sdl2::rect::Rect;

use crate::{color::WHITE, sdl_wrapper::SDLContext, settings::Settings, texture::load_surface};

use super::{is_quit, SURFACE_FRAME_DELAY};

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let window = sdl_context.build_new_window(settings)?;

    // A missing image only leaves the window blank.
    let hello_world = match load_surface(&settings.asset_path("hello_world.bmp")) {
        Ok(surface) => Some(surface),
        Err(err) => {
            log::warn!("Unable to load image hello_world.bmp! {}", err);
            None
        }
    };

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        let mut screen = window.surface(&sdl_context.event_pump)?;
        screen.fill_rect(None::<Rect>, WHITE)?;
        if let Some(image) = hello_world.as_ref() {
            image.blit(None::<Rect>, &mut screen, None::<Rect>)?;
        }
        screen.update_window()?;

        std::thread::sleep(SURFACE_FRAME_DELAY);
    }

    Ok(())
}
