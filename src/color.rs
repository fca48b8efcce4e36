use sdl2::pixels::Color;

pub const MOD_STEP: u8 = 32;

pub const WHITE: Color = Color::RGBA(0xFF, 0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::RGBA(0x00, 0x00, 0x00, 0xFF);
/// Cyan background of the sprite sheets, keyed out on load.
pub const COLOR_KEY: Color = Color::RGB(0x00, 0xFF, 0xFF);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Texture color modulation. Channels wrap around when stepped past either end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorMod {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for ColorMod {
    fn default() -> Self {
        Self {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
        }
    }
}

impl ColorMod {
    pub fn raise(&mut self, channel: Channel) {
        let value = self.channel_mut(channel);
        *value = value.wrapping_add(MOD_STEP);
    }

    pub fn lower(&mut self, channel: Channel) {
        let value = self.channel_mut(channel);
        *value = value.wrapping_sub(MOD_STEP);
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }
}

/// Texture alpha modulation, clamped to the valid range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlphaMod(pub u8);

impl Default for AlphaMod {
    fn default() -> Self {
        Self(0xFF)
    }
}

impl AlphaMod {
    pub fn raise(&mut self) {
        self.0 = self.0.saturating_add(MOD_STEP);
    }

    pub fn lower(&mut self) {
        self.0 = self.0.saturating_sub(MOD_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::{AlphaMod, Channel, ColorMod};

    #[test]
    fn color_channels_wrap() {
        let mut color = ColorMod::default();
        color.raise(Channel::Red);
        assert_eq!(color.r, 31);

        color.lower(Channel::Green);
        color.lower(Channel::Blue);
        assert_eq!(color, ColorMod { r: 31, g: 223, b: 223 });

        let mut color = ColorMod { r: 0, g: 0, b: 0 };
        color.lower(Channel::Blue);
        assert_eq!(color.b, 224);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut color = ColorMod::default();
        for _ in 0..8 {
            color.raise(Channel::Green);
        }
        assert_eq!(color, ColorMod::default());
    }

    #[test]
    fn alpha_clamps_at_both_ends() {
        let mut alpha = AlphaMod::default();
        alpha.raise();
        assert_eq!(alpha, AlphaMod(255));

        for _ in 0..7 {
            alpha.lower();
        }
        assert_eq!(alpha, AlphaMod(31));

        alpha.lower();
        assert_eq!(alpha, AlphaMod(0));
        alpha.lower();
        assert_eq!(alpha, AlphaMod(0));

        alpha.raise();
        assert_eq!(alpha, AlphaMod(32));
    }
}
