use sdl2::rect::Rect;

use crate::{sdl_wrapper::SDLContext, settings::Settings};

use super::{clear_white, is_quit, load_texture};

/// Top-left quarter, top-right quarter and bottom half of the screen.
fn viewports(width: u32, height: u32) -> [Rect; 3] {
    let half_width = width / 2;
    let half_height = height / 2;
    [
        Rect::new(0, 0, half_width, half_height),
        Rect::new(half_width as i32, 0, half_width, half_height),
        Rect::new(0, half_height as i32, width, height - half_height),
    ]
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let texture = load_texture(&texture_creator, settings, "viewport.png", None)?;
    let viewports = viewports(settings.screen_width, settings.screen_height);

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        canvas.set_viewport(None::<Rect>);
        clear_white(&mut canvas);

        for viewport in viewports.iter() {
            canvas.set_viewport(*viewport);
            texture.render_stretched(&mut canvas, None)?;
        }

        canvas.present();
    }

    Ok(())
}
