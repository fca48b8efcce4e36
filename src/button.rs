use sdl2::{event::Event, rect::Rect, render::WindowCanvas};

use crate::texture::LTexture;

pub const BUTTON_WIDTH: u32 = 300;
pub const BUTTON_HEIGHT: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSprite {
    MouseOut = 0,
    MouseOverMotion = 1,
    MouseDown = 2,
    MouseUp = 3,
}

impl ButtonSprite {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Mouse input relevant to a button, in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Motion { x: i32, y: i32 },
    Down { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

impl PointerAction {
    pub fn from_event(event: &Event) -> Option<Self> {
        match *event {
            Event::MouseMotion { x, y, .. } => Some(Self::Motion { x, y }),
            Event::MouseButtonDown { x, y, .. } => Some(Self::Down { x, y }),
            Event::MouseButtonUp { x, y, .. } => Some(Self::Up { x, y }),
            _ => None,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        match *self {
            Self::Motion { x, y } | Self::Down { x, y } | Self::Up { x, y } => (x, y),
        }
    }
}

pub struct Button {
    x: i32,
    y: i32,
    current_sprite: ButtonSprite,
}

impl Button {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            current_sprite: ButtonSprite::MouseOut,
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn current_sprite(&self) -> ButtonSprite {
        self.current_sprite
    }

    /// Near edges are inside, far edges are not. Compared in `i64` so far
    /// edges past `i32::MAX` stay representable.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        let left = self.x as i64;
        let top = self.y as i64;
        let right = left + BUTTON_WIDTH as i64;
        let bottom = top + BUTTON_HEIGHT as i64;

        !(x < left || x >= right || y < top || y >= bottom)
    }

    pub fn handle_pointer(&mut self, action: PointerAction) {
        let (x, y) = action.position();

        self.current_sprite = if !self.contains(x, y) {
            ButtonSprite::MouseOut
        } else {
            match action {
                PointerAction::Motion { .. } => ButtonSprite::MouseOverMotion,
                PointerAction::Down { .. } => ButtonSprite::MouseDown,
                PointerAction::Up { .. } => ButtonSprite::MouseUp,
            }
        };
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(action) = PointerAction::from_event(event) {
            self.handle_pointer(action);
        }
    }

    pub fn render(
        &self,
        canvas: &mut WindowCanvas,
        sprite_sheet: &LTexture,
        clips: &[Rect; ButtonSprite::COUNT],
    ) -> Result<(), String> {
        sprite_sheet.render_clip(
            canvas,
            self.x,
            self.y,
            Some(clips[self.current_sprite.index()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Button, ButtonSprite, PointerAction, BUTTON_HEIGHT, BUTTON_WIDTH};

    const W: i32 = BUTTON_WIDTH as i32;
    const H: i32 = BUTTON_HEIGHT as i32;

    #[test]
    fn top_left_corner_is_inside() {
        let button = Button::new(40, 60);
        assert!(button.contains(40, 60));
    }

    #[test]
    fn far_edges_are_exclusive() {
        let button = Button::new(40, 60);
        assert!(button.contains(40 + W - 1, 60 + H - 1));
        assert!(!button.contains(40 + W, 60));
        assert!(!button.contains(40, 60 + H));
    }

    #[test]
    fn points_before_near_edges_are_outside() {
        let button = Button::new(40, 60);
        assert!(!button.contains(39, 60));
        assert!(!button.contains(40, 59));
    }

    #[test]
    fn positions_near_the_integer_limit_do_not_overflow() {
        let button = Button::new(i32::MAX - 10, i32::MAX - 10);
        assert!(button.contains(i32::MAX, i32::MAX));
        assert!(!button.contains(i32::MAX - 11, i32::MAX));

        let mut button = Button::new(0, 0);
        button.set_position(i32::MAX, i32::MIN);
        assert!(button.contains(i32::MAX, i32::MIN));
        assert!(!button.contains(0, 0));
    }

    #[test]
    fn starts_as_mouse_out() {
        assert_eq!(Button::new(0, 0).current_sprite(), ButtonSprite::MouseOut);
    }

    #[test]
    fn pointer_actions_select_sprites() {
        let mut button = Button::new(0, 0);

        button.handle_pointer(PointerAction::Motion { x: 10, y: 10 });
        assert_eq!(button.current_sprite(), ButtonSprite::MouseOverMotion);

        button.handle_pointer(PointerAction::Down { x: 10, y: 10 });
        assert_eq!(button.current_sprite(), ButtonSprite::MouseDown);

        button.handle_pointer(PointerAction::Up { x: 10, y: 10 });
        assert_eq!(button.current_sprite(), ButtonSprite::MouseUp);

        button.handle_pointer(PointerAction::Down { x: W, y: 10 });
        assert_eq!(button.current_sprite(), ButtonSprite::MouseOut);
    }

    #[test]
    fn moved_button_tests_new_position() {
        let mut button = Button::new(0, 0);
        button.set_position(340, 280);
        assert!(!button.contains(0, 0));
        assert!(button.contains(340, 280));
    }

    #[test]
    fn sprite_indices_cover_clips() {
        let sprites = [
            ButtonSprite::MouseOut,
            ButtonSprite::MouseOverMotion,
            ButtonSprite::MouseDown,
            ButtonSprite::MouseUp,
        ];
        for (expected, sprite) in sprites.iter().enumerate() {
            assert_eq!(sprite.index(), expected);
        }
        assert_eq!(sprites.len(), ButtonSprite::COUNT);
    }
}
