use crate::{color::COLOR_KEY, sdl_wrapper::SDLContext, settings::Settings, sprite::grid_clips};

use super::{clear_white, is_quit, load_texture};

const DOT_SIZE: u32 = 100;

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let sprite_sheet = load_texture(&texture_creator, settings, "dots.png", Some(COLOR_KEY))?;
    let clips = grid_clips(2, 2, DOT_SIZE, DOT_SIZE);

    let right = (settings.screen_width - DOT_SIZE) as i32;
    let bottom = (settings.screen_height - DOT_SIZE) as i32;
    let corners = [(0, 0), (right, 0), (0, bottom), (right, bottom)];

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        clear_white(&mut canvas);
        for (clip, &(x, y)) in clips.iter().zip(corners.iter()) {
            sprite_sheet.render_clip(&mut canvas, x, y, Some(*clip))?;
        }
        canvas.present();
    }

    Ok(())
}
