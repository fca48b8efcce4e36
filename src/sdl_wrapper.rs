use sdl2::{
    render::WindowCanvas, video::Window, AudioSubsystem, EventPump, Sdl, TimerSubsystem,
    VideoSubsystem,
};

use crate::settings::Settings;

pub struct SDLContext {
    pub sdl: Sdl,
    pub video_subsystem: VideoSubsystem,
    pub timer_subsystem: TimerSubsystem,
    pub event_pump: EventPump,
}

impl SDLContext {
    pub fn new() -> Result<Self, String> {
        let sdl = sdl2::init()?;

        Ok(SDLContext {
            video_subsystem: sdl.video()?,
            timer_subsystem: sdl.timer()?,
            event_pump: sdl.event_pump()?,
            sdl,
        })
    }

    /// Audio is only brought up by the lessons that play sound.
    pub fn audio_subsystem(&self) -> Result<AudioSubsystem, String> {
        self.sdl.audio()
    }

    pub fn build_new_window(&self, settings: &Settings) -> Result<Window, String> {
        match self
            .video_subsystem
            .window(&settings.title, settings.screen_width, settings.screen_height)
            .position_centered()
            .build()
        {
            Ok(window) => Ok(window),
            Err(err) => Err(format!("{err}")),
        }
    }

    pub fn build_new_canvas(&self, settings: &Settings) -> Result<WindowCanvas, String> {
        let window = self.build_new_window(settings)?;

        match window.into_canvas().accelerated().present_vsync().build() {
            Ok(canvas) => Ok(canvas),
            Err(err) => Err(format!("{err}")),
        }
    }
}
