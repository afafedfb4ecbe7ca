//! Colour-to-attribute mapping.
//!
//! Colours are packed into the 4-bit-per-layer attribute model of legacy text
//! consoles: one bit per RGB channel plus an intensity bit, once for the
//! foreground and once for the background.

use bitflags::bitflags;

use crate::types::Colour;

bitflags! {
    /// Packed foreground/background attribute of a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u16 {
        const FG_BLUE = 0x0001;
        const FG_GREEN = 0x0002;
        const FG_RED = 0x0004;
        const FG_INTENSITY = 0x0008;
        const BG_BLUE = 0x0010;
        const BG_GREEN = 0x0020;
        const BG_RED = 0x0040;
        const BG_INTENSITY = 0x0080;
    }
}

/// Which half of the attribute a colour lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

/// Channel bits of one layer, decoded from an [`Attr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerBits {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub intense: bool,
}

/// Channels above this value set the layer's intensity bit.
const INTENSITY_THRESHOLD: u8 = 128;

impl Attr {
    /// Map one colour into the bits of `layer`.
    ///
    /// A non-zero channel sets its bit; a channel above 128 additionally sets
    /// the shared intensity bit of that layer.
    pub fn from_colour(colour: Colour, layer: Layer) -> Self {
        let [red, green, blue, intensity] = match layer {
            Layer::Foreground => [Self::FG_RED, Self::FG_GREEN, Self::FG_BLUE, Self::FG_INTENSITY],
            Layer::Background => [Self::BG_RED, Self::BG_GREEN, Self::BG_BLUE, Self::BG_INTENSITY],
        };

        let mut attr = Self::empty();
        for (value, bit) in [(colour.r, red), (colour.g, green), (colour.b, blue)] {
            if value != 0 {
                attr |= bit;
                if value > INTENSITY_THRESHOLD {
                    attr |= intensity;
                }
            }
        }
        attr
    }

    pub fn from_colours(fg: Colour, bg: Colour) -> Self {
        Self::from_colour(fg, Layer::Foreground) | Self::from_colour(bg, Layer::Background)
    }

    pub fn layer(self, layer: Layer) -> LayerBits {
        match layer {
            Layer::Foreground => LayerBits {
                red: self.contains(Self::FG_RED),
                green: self.contains(Self::FG_GREEN),
                blue: self.contains(Self::FG_BLUE),
                intense: self.contains(Self::FG_INTENSITY),
            },
            Layer::Background => LayerBits {
                red: self.contains(Self::BG_RED),
                green: self.contains(Self::BG_GREEN),
                blue: self.contains(Self::BG_BLUE),
                intense: self.contains(Self::BG_INTENSITY),
            },
        }
    }
}
