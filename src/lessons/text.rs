use crate::{color::BLACK, sdl_wrapper::SDLContext, settings::Settings};

use super::{centered, clear_white, is_quit, open_font, render_text};

const FONT_SIZE: f32 = 28.0;
const MESSAGE: &str = "The quick brown fox jumps over the lazy dog";

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let font = open_font(settings, "lazy.ttf", FONT_SIZE)?;
    let message = render_text(&texture_creator, &font, MESSAGE, BLACK)?;
    let (x, y) = centered(settings, message.width(), message.height());

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        clear_white(&mut canvas);
        message.render_at(&mut canvas, x, y)?;
        canvas.present();
    }

    Ok(())
}
