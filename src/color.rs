/// An 8-bit-per-channel RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_hex(0xffffff);
    pub const BLACK: Rgb = Rgb::from_hex(0x000000);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Builds a colour from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Scales every channel by `intensity`, saturating at 255
    pub fn scaled(self, intensity: f64) -> Self {
        let channel = |c: u8| (c as f64 * intensity).clamp(0.0, 255.0) as u8;
        Rgb {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(color: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels() {
        let c = Rgb::from_hex(0x87cefa);
        assert_eq!(c, Rgb::new(0x87, 0xce, 0xfa));
        assert_eq!(c.to_hex(), 0x87cefa);
    }

    #[test]
    fn scaling_saturates() {
        assert_eq!(Rgb::new(200, 100, 0).scaled(2.0), Rgb::new(255, 200, 0));
        assert_eq!(Rgb::WHITE.scaled(0.0), Rgb::BLACK);
    }
}
