//! Region id <-> color codec.

use std::fmt;

/// Largest id with a distinct color. Larger ids wrap through the byte masks.
pub const MAX_ID: u32 = 0xFF_FFFF;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Split an id into three big-endian bytes: `id = (r << 16) | (g << 8) | b`.
    ///
    /// Only the low 24 bits are encoded, so ids above [`MAX_ID`] silently
    /// alias smaller ones (`from_id(MAX_ID + 1) == from_id(0)`).
    #[inline]
    pub const fn from_id(id: u32) -> Self {
        Self {
            r: ((id >> 16) & 0xFF) as u8,
            g: ((id >> 8) & 0xFF) as u8,
            b: (id & 0xFF) as u8,
        }
    }

    /// Inverse of [`Rgb::from_id`] for ids up to [`MAX_ID`].
    #[inline]
    pub const fn to_id(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase `rrggbb`, no prefix.
    pub fn to_hex(self) -> String { self.to_string() }
}

impl fmt::Display for Rgb {
    /// Format as lowercase hex: rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self { image::Rgb([color.r, color.g, color.b]) }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self { Rgb::new(pixel[0], pixel[1], pixel[2]) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_big_endian_bytes() {
        assert_eq!(Rgb::from_id(0), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::from_id(1), Rgb::new(0, 0, 1));
        assert_eq!(Rgb::from_id(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(Rgb::from_id(MAX_ID), Rgb::new(255, 255, 255));
    }

    #[test]
    fn round_trips_whole_domain() {
        for id in 0..=MAX_ID {
            let color = Rgb::from_id(id);
            assert_eq!(color.to_id(), id);
        }
    }

    #[test]
    fn hex_is_six_lowercase_digits() {
        for id in (0..=MAX_ID).step_by(4099).chain([MAX_ID, 0xABCDEF]) {
            let hex = Rgb::from_id(id).to_hex();
            assert_eq!(hex.len(), 6);
            assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')), "{hex}");
            assert_eq!(u32::from_str_radix(&hex, 16).unwrap(), id);
        }
        assert_eq!(Rgb::from_id(0xABCDEF).to_hex(), "abcdef");
        assert_eq!(Rgb::from_id(10).to_hex(), "00000a");
    }

    #[test]
    fn ids_past_ceiling_wrap() {
        assert_eq!(Rgb::from_id(MAX_ID + 1), Rgb::from_id(0));
        assert_eq!(Rgb::from_id(MAX_ID + 6), Rgb::from_id(5));
        assert_eq!(Rgb::from_id(u32::MAX), Rgb::from_id(MAX_ID));
    }
}
