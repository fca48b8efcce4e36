pub mod audio;
pub mod button;
pub mod color;
pub mod lessons;
pub mod logging;
pub mod sdl_wrapper;
pub mod settings;
pub mod sprite;
pub mod text;
pub mod texture;
pub mod timer;
