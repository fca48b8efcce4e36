use sdl2::{event::Event, keyboard::Scancode};

use crate::{
    color::BLACK,
    sdl_wrapper::SDLContext,
    settings::Settings,
    timer::{Clock, Timer},
};

use super::{clear_white, is_quit, open_font, render_text};

const FONT_SIZE: f32 = 28.0;

fn time_text(ticks: u32) -> String {
    format!("Seconds since start time {:.3}", ticks as f64 / 1000.0)
}

fn apply_key<C: Clock>(timer: &mut Timer<C>, scancode: Scancode) {
    match scancode {
        Scancode::S => {
            if timer.is_started() {
                timer.stop();
            } else {
                timer.start();
            }
        }
        Scancode::P => {
            if timer.is_paused() {
                timer.unpause();
            } else {
                timer.pause();
            }
        }
        _ => {}
    }
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let font = open_font(settings, "lazy.ttf", FONT_SIZE)?;
    let start_prompt = render_text(
        &texture_creator,
        &font,
        "Press S to Start or Stop the Timer",
        BLACK,
    )?;
    let pause_prompt = render_text(
        &texture_creator,
        &font,
        "Press P to Pause or Unpause the Timer",
        BLACK,
    )?;

    let mut timer = Timer::new(sdl_context.timer_subsystem.clone());
    let screen_width = settings.screen_width as i32;

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
                apply_key(&mut timer, scancode);
            }
        }

        // A failed render only drops this frame's time display.
        let time = match render_text(&texture_creator, &font, &time_text(timer.ticks()), BLACK) {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::error!("Unable to render time texture! {}", err);
                None
            }
        };

        clear_white(&mut canvas);
        start_prompt.render_at(&mut canvas, (screen_width - start_prompt.width() as i32) / 2, 0)?;
        pause_prompt.render_at(
            &mut canvas,
            (screen_width - pause_prompt.width() as i32) / 2,
            start_prompt.height() as i32,
        )?;
        if let Some(time) = time.as_ref() {
            time.render_at(
                &mut canvas,
                (screen_width - time.width() as i32) / 2,
                (settings.screen_height as i32 - time.height() as i32) / 2,
            )?;
        }
        canvas.present();
    }

    Ok(())
}
