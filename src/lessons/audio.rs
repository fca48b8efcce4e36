use sdl2::{event::Event, keyboard::Scancode};

use crate::{
    audio::{AudioPlayer, Sound},
    sdl_wrapper::SDLContext,
    settings::Settings,
};

use super::{clear_white, is_quit, load_texture};

struct Sounds {
    music: Sound,
    scratch: Sound,
    high: Sound,
    medium: Sound,
    low: Sound,
}

impl Sounds {
    fn load(player: &AudioPlayer, settings: &Settings) -> Result<Self, String> {
        let load = |file_name: &str| match player.load_wav(&settings.asset_path(file_name)) {
            Ok(sound) => Ok(sound),
            Err(err) => Err(format!("Failed to load {}! {}", file_name, err)),
        };

        Ok(Self {
            music: load("beat.wav")?,
            scratch: load("scratch.wav")?,
            high: load("high.wav")?,
            medium: load("medium.wav")?,
            low: load("low.wav")?,
        })
    }
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();
    let audio_subsystem = sdl_context.audio_subsystem()?;

    let prompt = load_texture(&texture_creator, settings, "prompt.png", None)?;
    let mut player = AudioPlayer::open(&audio_subsystem)?;
    let sounds = Sounds::load(&player, settings)?;

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
                match scancode {
                    Scancode::Num1 => player.play_effect(&sounds.high),
                    Scancode::Num2 => player.play_effect(&sounds.medium),
                    Scancode::Num3 => player.play_effect(&sounds.low),
                    Scancode::Num4 => player.play_effect(&sounds.scratch),
                    Scancode::Num9 => player.toggle_music(&sounds.music),
                    Scancode::Num0 => player.halt_music(),
                    _ => {}
                }
            }
        }

        clear_white(&mut canvas);
        prompt.render_stretched(&mut canvas, None)?;
        canvas.present();
    }

    Ok(())
}
