use crate::{sdl_wrapper::SDLContext, settings::Settings};

use super::{clear_white, is_quit, load_texture};

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let texture = load_texture(&texture_creator, settings, "texture.png", None)?;

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        clear_white(&mut canvas);
        texture.render_stretched(&mut canvas, None)?;
        canvas.present();
    }

    Ok(())
}
