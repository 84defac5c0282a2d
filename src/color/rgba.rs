use crate::color::Rgb;

/// Color with normalized (0.0-1.0) channels, alpha included
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from normalized channels
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from a u32 value (0xRRGGBB format)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_rgb_u32(color: u32) -> Self {
        Self::opaque(
            channel_from_u8(((color >> 16) & 0xFF) as u8),
            channel_from_u8(((color >> 8) & 0xFF) as u8),
            channel_from_u8((color & 0xFF) as u8),
        )
    }

    /// Create a color from a u32 value (0xAARRGGBB format)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_argb_u32(color: u32) -> Self {
        let rgb = Self::from_rgb_u32(color);
        rgb.with_alpha(channel_from_u8(((color >> 24) & 0xFF) as u8))
    }

    /// Parse `#RGB`, `#RRGGBB` or `#AARRGGBB`
    ///
    /// The leading `#` is optional. Returns `None` for any other length or
    /// for non-hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            3 => {
                // Each nibble expands to a full byte (0xF -> 0xFF)
                let r = ((value >> 8) & 0xF) * 17;
                let g = ((value >> 4) & 0xF) * 17;
                let b = (value & 0xF) * 17;
                Some(Self::from_rgb_u32((r << 16) | (g << 8) | b))
            }
            6 => Some(Self::from_rgb_u32(value)),
            8 => Some(Self::from_argb_u32(value)),
            _ => None,
        }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear per-channel blend, `fraction` 0.0 = all `self`, 1.0 = all `other`
    pub fn lerp(self, other: Self, fraction: f32) -> Self {
        Self {
            r: lerp_channel(self.r, other.r, fraction),
            g: lerp_channel(self.g, other.g, fraction),
            b: lerp_channel(self.b, other.b, fraction),
            a: lerp_channel(self.a, other.a, fraction),
        }
    }

    /// Convert to an 8-bit color, dropping alpha
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: channel_to_u8(self.r),
            g: channel_to_u8(self.g),
            b: channel_to_u8(self.b),
        }
    }

    /// Convert to an 8-bit color with alpha premultiplied into the channels
    pub fn to_rgb_premultiplied(self) -> Rgb {
        let a = self.a.clamp(0.0, 1.0);
        Rgb {
            r: channel_to_u8(self.r * a),
            g: channel_to_u8(self.g * a),
            b: channel_to_u8(self.b * a),
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(color: Rgb) -> Self {
        Self::opaque(
            channel_from_u8(color.r),
            channel_from_u8(color.g),
            channel_from_u8(color.b),
        )
    }
}

#[inline]
fn lerp_channel(a: f32, b: f32, fraction: f32) -> f32 {
    a + fraction * (b - a)
}

#[inline]
#[allow(clippy::cast_lossless)]
const fn channel_from_u8(value: u8) -> f32 {
    value as f32 / 255.0
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(value: f32) -> u8 {
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}
