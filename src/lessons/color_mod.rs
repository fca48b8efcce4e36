use sdl2::{event::Event, keyboard::Scancode};

use crate::{
    color::{Channel, ColorMod},
    sdl_wrapper::SDLContext,
    settings::Settings,
};

use super::{clear_white, is_quit, load_texture};

fn apply_key(color: &mut ColorMod, scancode: Scancode) {
    match scancode {
        Scancode::Q => color.raise(Channel::Red),
        Scancode::W => color.raise(Channel::Green),
        Scancode::E => color.raise(Channel::Blue),
        Scancode::A => color.lower(Channel::Red),
        Scancode::S => color.lower(Channel::Green),
        Scancode::D => color.lower(Channel::Blue),
        _ => {}
    }
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let mut texture = load_texture(&texture_creator, settings, "colors.png", None)?;
    let mut color = ColorMod::default();

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
            if let Event::KeyDown {
                scancode: Some(scancode),
                ..
            } = event
            {
                apply_key(&mut color, scancode);
                log::debug!("color modulation is now {:?}", color);
            }
        }

        clear_white(&mut canvas);
        texture.set_color(color.r, color.g, color.b);
        texture.render_stretched(&mut canvas, None)?;
        canvas.present();
    }

    Ok(())
}
