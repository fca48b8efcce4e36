use sdl2::rect::Rect;

use crate::{
    button::{Button, ButtonSprite, BUTTON_HEIGHT, BUTTON_WIDTH},
    sdl_wrapper::SDLContext,
    settings::Settings,
    sprite::grid_clips,
};

use super::{clear_white, is_quit, load_texture};

const TOTAL_BUTTONS: usize = 4;

/// One button in each corner of the screen.
fn corner_buttons(settings: &Settings) -> [Button; TOTAL_BUTTONS] {
    let right = settings.screen_width as i32 - BUTTON_WIDTH as i32;
    let bottom = settings.screen_height as i32 - BUTTON_HEIGHT as i32;
    [
        Button::new(0, 0),
        Button::new(right, 0),
        Button::new(0, bottom),
        Button::new(right, bottom),
    ]
}

fn sprite_clips() -> [Rect; ButtonSprite::COUNT] {
    let clips = grid_clips(1, ButtonSprite::COUNT as u32, BUTTON_WIDTH, BUTTON_HEIGHT);
    [clips[0], clips[1], clips[2], clips[3]]
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let sprite_sheet = load_texture(&texture_creator, settings, "button.png", None)?;
    let clips = sprite_clips();
    let mut buttons = corner_buttons(settings);

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
            for button in buttons.iter_mut() {
                button.handle_event(&event);
            }
        }

        clear_white(&mut canvas);
        for button in buttons.iter() {
            button.render(&mut canvas, &sprite_sheet, &clips)?;
        }
        canvas.present();
    }

    Ok(())
}
