use sdl2::{event::Event, keyboard::Scancode, render::BlendMode};

use crate::{color::AlphaMod, sdl_wrapper::SDLContext, settings::Settings};

use super::{clear_white, is_quit, load_texture};

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let mut modulated = load_texture(&texture_creator, settings, "fadeout.png", None)?;
    modulated.set_blend_mode(BlendMode::Blend);
    let background = load_texture(&texture_creator, settings, "fadein.png", None)?;

    let mut alpha = AlphaMod::default();

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
            match event {
                Event::KeyDown {
                    scancode: Some(Scancode::W),
                    ..
                } => alpha.raise(),
                Event::KeyDown {
                    scancode: Some(Scancode::S),
                    ..
                } => alpha.lower(),
                _ => {}
            }
        }

        clear_white(&mut canvas);
        background.render_stretched(&mut canvas, None)?;
        modulated.set_alpha(alpha.0);
        modulated.render_stretched(&mut canvas, None)?;
        canvas.present();
    }

    Ok(())
}
