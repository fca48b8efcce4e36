use sdl2::{event::Event, keyboard::Scancode};

use crate::{sdl_wrapper::SDLContext, settings::Settings, texture::Flip};

use super::{centered, clear_white, is_quit, load_texture};

const ROTATION_STEP: f64 = 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Orientation {
    degrees: f64,
    flip: Flip,
}

impl Orientation {
    fn apply_key(&mut self, scancode: Scancode) {
        match scancode {
            Scancode::A => self.degrees -= ROTATION_STEP,
            Scancode::D => self.degrees += ROTATION_STEP,
            Scancode::Q => self.flip = Flip::HORIZONTAL,
            Scancode::W => self.flip = Flip::NONE,
            Scancode::E => self.flip = Flip::VERTICAL,
            _ => {}
        }
    }
}

pub fn run(sdl_context: &mut SDLContext, settings: &Settings) -> Result<(), String> {
    let mut canvas = sdl_context.build_new_canvas(settings)?;
    let texture_creator = canvas.texture_creator();

    let arrow = load_texture(&texture_creator, settings, "arrow.png", None)?;
    let (x, y) = centered(settings, arrow.width(), arrow.height());
    let mut orientation = Orientation::default();

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
                orientation.apply_key(scancode);
            }
        }

        clear_white(&mut canvas);
        arrow.render(
            &mut canvas,
            x,
            y,
            None,
            orientation.degrees,
            None,
            orientation.flip,
        )?;
        canvas.present();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use sdl2::keyboard::Scancode;

    use super::Orientation;
    use crate::texture::Flip;

    #[test]
    fn rotates_in_steps() {
        let mut orientation = Orientation::default();
        orientation.apply_key(Scancode::D);
        orientation.apply_key(Scancode::D);
        orientation.apply_key(Scancode::A);
        assert_eq!(orientation.degrees, 60.0);
    }

    #[test]
    fn flip_keys_replace_flip() {
        let mut orientation = Orientation::default();
        orientation.apply_key(Scancode::Q);
        assert_eq!(orientation.flip, Flip::HORIZONTAL);
        orientation.apply_key(Scancode::E);
        assert_eq!(orientation.flip, Flip::VERTICAL);
        orientation.apply_key(Scancode::W);
        assert_eq!(orientation.flip, Flip::NONE);
    }
}
