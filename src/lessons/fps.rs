use crate::{color::BLACK, sdl_wrapper::SDLContext, settings::Settings, timer::Timer};

use super::{clear_white, is_quit, open_font, render_text};

const FONT_SIZE: f32 = 28.0;
/// Averages above this only happen on the first frames, before time has passed.
const MAX_PLAUSIBLE_FPS: f32 = 2_000_000.0;

fn average_fps(frames: u32, ticks: u32) -> f32 {
    let fps = frames as f32 / (ticks as f32 / 1000.0);
    if !fps.is_finite() || fps > MAX_PLAUSIBLE_FPS {
        0.0
    } else {
        fps
    }
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let font = open_font(settings, "msyh.ttc", FONT_SIZE)?;

    let mut fps_timer = Timer::new(sdl_context.timer_subsystem.clone());
    let mut frames: u32 = 0;
    fps_timer.start();

    'running: loop {
        for event in sdl_context.event_pump.poll_iter() {
            if is_quit(&event) {
                break 'running;
            }
        }

        let text = format!("平均FPS为：{}", average_fps(frames, fps_timer.ticks()));
        let fps_texture = match render_text(&texture_creator, &font, &text, BLACK) {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::error!("Unable to render fps texture! {}", err);
                None
            }
        };

        clear_white(&mut canvas);
        if let Some(fps_texture) = fps_texture.as_ref() {
            fps_texture.render_at(&mut canvas, 10, 10)?;
        }
        canvas.present();

        frames += 1;
    }

    log::info!("{} frames in {} ms", frames, fps_timer.ticks());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::average_fps;

    #[test]
    fn average_over_elapsed_seconds() {
        assert_eq!(average_fps(120, 2000), 60.0);
    }

    #[test]
    fn no_elapsed_time_shows_zero() {
        assert_eq!(average_fps(0, 0), 0.0);
        assert_eq!(average_fps(3, 0), 0.0);
    }

    #[test]
    fn implausible_rates_show_zero() {
        assert_eq!(average_fps(5000, 1), 0.0);
        assert_eq!(average_fps(1000, 500), 2000.0);
    }
}
