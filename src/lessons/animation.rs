use crate::{
    color::COLOR_KEY,
    sdl_wrapper::SDLContext,
    settings::Settings,
    sprite::{grid_clips, Animation},
};

use super::{centered, clear_white, is_quit, load_texture};

const WALKING_FRAMES: u32 = 4;
const FRAME_WIDTH: u32 = 64;
const FRAME_HEIGHT: u32 = 205;
/// Presented frames per animation frame.
const SLOWDOWN: u32 = 4;

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let sprite_sheet = load_texture(&texture_creator, settings, "foo.png", Some(COLOR_KEY))?;
    let clips = grid_clips(WALKING_FRAMES, 1, FRAME_WIDTH, FRAME_HEIGHT);
    let mut animation = Animation::new(WALKING_FRAMES, SLOWDOWN);
    let (x, y) = centered(settings, FRAME_WIDTH, FRAME_HEIGHT);

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        clear_white(&mut canvas);
        sprite_sheet.render_clip(&mut canvas, x, y, Some(clips[animation.frame()]))?;
        canvas.present();

        animation.advance();
    }

    Ok(())
}
