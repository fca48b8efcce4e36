use std::time::Duration;

use sdl2::{
    event::Event,
    pixels::Color,
    render::{TextureCreator, WindowCanvas},
    video::WindowContext,
};

use crate::{
    color::WHITE,
    sdl_wrapper::SDLContext,
    settings::Settings,
    text::FontFace,
    texture::LTexture,
};

pub mod alpha_blend;
pub mod animation;
pub mod audio;
pub mod button;
pub mod color_mod;
pub mod fps;
pub mod key_presses;
pub mod png_texture;
pub mod rotation;
pub mod sprite_clip;
pub mod text;
pub mod timer;
pub mod viewport;
pub mod window;

pub type LessonFn = fn(&mut SDLContext, &Settings) -> Result<(), String>;

pub struct Lesson {
    pub name: &'static str,
    pub description: &'static str,
    pub run: LessonFn,
}

pub const LESSONS: &[Lesson] = &[
    Lesson {
        name: "window",
        description: "open a window and blit a BMP onto its surface",
        run: window::run,
    },
    Lesson {
        name: "key_presses",
        description: "switch between BMP surfaces with the arrow keys",
        run: key_presses::run,
    },
    Lesson {
        name: "png",
        description: "load a PNG into a texture",
        run: png_texture::run,
    },
    Lesson {
        name: "viewport",
        description: "draw one texture into three viewports",
        run: viewport::run,
    },
    Lesson {
        name: "sprite_clip",
        description: "color key a sprite sheet and draw its clips",
        run: sprite_clip::run,
    },
    Lesson {
        name: "color_mod",
        description: "modulate texture color with q/w/e and a/s/d",
        run: color_mod::run,
    },
    Lesson {
        name: "alpha_blend",
        description: "fade a texture in and out with w/s",
        run: alpha_blend::run,
    },
    Lesson {
        name: "animation",
        description: "cycle through sprite sheet frames",
        run: animation::run,
    },
    Lesson {
        name: "rotation",
        description: "rotate with a/d and flip with q/w/e",
        run: rotation::run,
    },
    Lesson {
        name: "text",
        description: "render a line of TrueType text",
        run: text::run,
    },
    Lesson {
        name: "button",
        description: "four mouse driven buttons",
        run: button::run,
    },
    Lesson {
        name: "audio",
        description: "play sound effects with 1-4, music with 9 and 0",
        run: audio::run,
    },
    Lesson {
        name: "timer",
        description: "start/stop with s, pause/unpause with p",
        run: timer::run,
    },
    Lesson {
        name: "fps",
        description: "show the average frames per second",
        run: fps::run,
    },
];

pub fn find_lesson(name: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|lesson| lesson.name == name)
}

/// Pacing for the lessons drawing straight to the window surface, which have no vsync.
const SURFACE_FRAME_DELAY: Duration = Duration::from_millis(16);

fn is_quit(event: &Event) -> bool {
    matches!(event, Event::Quit { .. })
}

fn clear(canvas: &mut WindowCanvas, color: Color) {
    canvas.set_draw_color(color);
    canvas.clear();
}

fn clear_white(canvas: &mut WindowCanvas) {
    clear(canvas, WHITE);
}

fn load_texture<'a>(
    creator: &'a TextureCreator<WindowContext>,
    settings: &Settings,
    file_name: &str,
    color_key: Option<Color>,
) -> Result<LTexture<'a>, String> {
    let mut texture = LTexture::new();
    match texture.load_from_file(creator, &settings.asset_path(file_name), color_key) {
        Ok(()) => Ok(texture),
        Err(err) => Err(format!("Unable to load image {}! {}", file_name, err)),
    }
}

fn open_font(settings: &Settings, file_name: &str, px_size: f32) -> Result<FontFace, String> {
    match FontFace::open(&settings.asset_path(file_name), px_size) {
        Ok(font) => Ok(font),
        Err(err) => Err(format!("Failed to load font {}! {}", file_name, err)),
    }
}

fn render_text<'a>(
    creator: &'a TextureCreator<WindowContext>,
    font: &FontFace,
    text: &str,
    color: Color,
) -> Result<LTexture<'a>, String> {
    let mut texture = LTexture::new();
    match texture.load_from_rendered_text(creator, font, text, color) {
        Ok(()) => Ok(texture),
        Err(err) => Err(format!("Unable to render text \"{}\"! {}", text, err)),
    }
}

/// Top-left corner that centers a `width` x `height` box on the screen.
fn centered(settings: &Settings, width: u32, height: u32) -> (i32, i32) {
    (
        (settings.screen_width as i32 - width as i32) / 2,
        (settings.screen_height as i32 - height as i32) / 2,
    )
}
