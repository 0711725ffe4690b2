/*
    Spiralife

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::SpiralifeError;

/// A [VizColor] represents a color in 32-bit RGBA format.
/// Colors produced by the layout engine are always fully opaque.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VizColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for VizColor {
    fn default() -> VizColor {
        VizColor::TRANSPARENT
    }
}

#[rustfmt::skip]
impl VizColor {
    pub const TRANSPARENT: VizColor = VizColor { r: 0, g: 0, b: 0, a: 0 };
    pub const WHITE: VizColor = VizColor { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: VizColor = VizColor { r: 0, g: 0, b: 0, a: 255 };
    pub const YELLOW: VizColor = VizColor { r: 255, g: 255, b: 0, a: 255 };

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> VizColor {
        VizColor { r, g, b, a: 255 }
    }

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> VizColor {
        VizColor { r, g, b, a }
    }

    /// Build a color from untyped integer channels, as read from a settings file.
    /// Returns `None` if any channel is outside `0..=255`.
    pub fn from_channels(channels: &[i64]) -> Option<VizColor> {
        match channels {
            [r, g, b] => {
                let r = u8::try_from(*r).ok()?;
                let g = u8::try_from(*g).ok()?;
                let b = u8::try_from(*b).ok()?;
                Some(VizColor::from_rgb8(r, g, b))
            }
            _ => None,
        }
    }

    /// Component-wise floor of the average of two colors. Alpha is taken from `self`.
    pub fn average(&self, other: &VizColor) -> VizColor {
        VizColor {
            r: ((self.r as u16 + other.r as u16) / 2) as u8,
            g: ((self.g as u16 + other.g as u16) / 2) as u8,
            b: ((self.b as u16 + other.b as u16) / 2) as u8,
            a: self.a,
        }
    }

    /// Format as a lowercase `#rrggbb` hex string, ignoring alpha.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for VizColor {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl From<[u8; 3]> for VizColor {
    fn from(rgb: [u8; 3]) -> Self {
        VizColor::from_rgb8(rgb[0], rgb[1], rgb[2])
    }
}

/// Parse a color from a hex string (`#RRGGBB`, `#RGB`, with or without the leading `#`) or an
/// RGB string (`R,G,B`).
impl FromStr for VizColor {
    type Err = SpiralifeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let bad = || SpiralifeError::InvalidColor(input.to_string());

        if input.contains(',') {
            let parts: Vec<&str> = input.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(bad());
            }
            let mut rgb = [0u8; 3];
            for (channel, part) in rgb.iter_mut().zip(parts) {
                *channel = part.parse::<u8>().map_err(|_| bad())?;
            }
            return Ok(VizColor::from(rgb));
        }

        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        // Expand shorthand form (e.g. "03F") to full form (e.g. "0033FF")
        let hex = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(bad()),
        };
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        Ok(VizColor::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_floors_each_channel() {
        let a = VizColor::from_rgb8(255, 255, 255);
        let b = VizColor::from_rgb8(2, 100, 255);
        assert_eq!(a.average(&b), VizColor::from_rgb8(128, 177, 255));
        let c = VizColor::from_rgb8(1, 0, 3);
        assert_eq!(c.average(&VizColor::BLACK), VizColor::from_rgb8(0, 0, 1));
    }

    #[test]
    fn parse_hex_and_shorthand() {
        assert_eq!("#ff6400".parse::<VizColor>(), Ok(VizColor::from_rgb8(255, 100, 0)));
        assert_eq!("03F".parse::<VizColor>(), Ok(VizColor::from_rgb8(0x00, 0x33, 0xff)));
        assert_eq!("130, 255, 100".parse::<VizColor>(), Ok(VizColor::from_rgb8(130, 255, 100)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("#12345".parse::<VizColor>().is_err());
        assert!("#gg0000".parse::<VizColor>().is_err());
        assert!("1,2".parse::<VizColor>().is_err());
        assert!("1,2,256".parse::<VizColor>().is_err());
        assert!("#ÄÄÄ".parse::<VizColor>().is_err());
    }

    #[test]
    fn from_channels_validates_range() {
        assert_eq!(VizColor::from_channels(&[0, 128, 255]), Some(VizColor::from_rgb8(0, 128, 255)));
        assert_eq!(VizColor::from_channels(&[0, 128, 256]), None);
        assert_eq!(VizColor::from_channels(&[-1, 0, 0]), None);
        assert_eq!(VizColor::from_channels(&[0, 0]), None);
    }

    #[test]
    fn hex_string_is_lowercase() {
        assert_eq!(VizColor::from_rgb8(200, 100, 0).to_hex_string(), "#c86400");
    }
}
