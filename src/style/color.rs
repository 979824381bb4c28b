//! Color types for cosmetic styles
//!
//! This module provides the RGBA color type used by style configurations
//! and painters. Style colors arrive from the upstream UI as hex RGB
//! strings (`#rrggbb`); opacity travels separately on the style entry, so
//! the serialized form carries no alpha channel.
//!
//! # Examples
//!
//! ```
//! use facepaint::Rgba;
//!
//! let lipstick = Rgba::parse("#cc2244").unwrap();
//! let shorthand = Rgba::parse("#f0a").unwrap();
//! assert_eq!(shorthand, Rgba::rgb(0xff, 0x00, 0xaa));
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not a `#rgb` or `#rrggbb` hex string
    #[error("invalid hex color: '{0}'")]
    InvalidHex(String),
}

/// RGBA color representation
///
/// - R, G, B: 0-255 (stored as u8)
/// - A: 0.0-1.0 (stored as f32, where 0.0 is fully transparent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0.0-1.0)
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Opaque black
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    /// Opaque white
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
    };

    /// The fixed gold tone used by the eyeshadow shimmer overlay
    pub const GOLD: Self = Self {
        r: 255,
        g: 215,
        b: 0,
        a: 1.0,
    };

    /// Creates a new RGBA color
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque RGB color (alpha = 1.0)
    ///
    /// # Examples
    ///
    /// ```
    /// use facepaint::Rgba;
    ///
    /// let plum = Rgba::rgb(128, 0, 128);
    /// assert_eq!(plum.a, 1.0);
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a `#rrggbb` or `#rgb` hex color string
    ///
    /// The leading `#` is required. Parsing is case-insensitive. The
    /// resulting color is opaque; opacity is a separate style parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use facepaint::Rgba;
    ///
    /// assert_eq!(Rgba::parse("#FF0000").unwrap(), Rgba::rgb(255, 0, 0));
    /// assert!(Rgba::parse("red").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;

        // byte-indexed slicing below is only safe on ASCII input
        if !hex.is_ascii() {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::rgb(r, g, b))
            }
            3 => {
                let component = |s: &str| -> Result<u8, ColorParseError> {
                    let v = u8::from_str_radix(s, 16).map_err(|_| invalid())?;
                    Ok(v * 17) // expand 0xf to 0xff
                };
                Ok(Self::rgb(
                    component(&hex[0..1])?,
                    component(&hex[1..2])?,
                    component(&hex[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    /// Formats the color as a `#rrggbb` hex string (alpha dropped)
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns a new color with the given alpha value
    ///
    /// # Examples
    ///
    /// ```
    /// use facepaint::Rgba;
    ///
    /// let veil = Rgba::WHITE.with_alpha(0.5);
    /// assert_eq!(veil.a, 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Alpha as a 0-255 byte
    pub fn alpha_u8(self) -> u8 {
        (self.a * 255.0 + 0.5) as u8
    }

    /// Returns a copy with each RGB channel shifted by `amount` levels,
    /// clamped to 0-255
    ///
    /// Used by the hair painter to jitter strand brightness around the
    /// configured base color.
    ///
    /// # Examples
    ///
    /// ```
    /// use facepaint::Rgba;
    ///
    /// let base = Rgba::rgb(100, 200, 250);
    /// let lighter = base.adjust_brightness(20);
    /// assert_eq!(lighter, Rgba::rgb(120, 220, 255));
    /// ```
    pub fn adjust_brightness(self, amount: i32) -> Self {
        let shift = |channel: u8| (channel as i32 + amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
            a: self.a,
        }
    }

    /// Returns true if the color is fully transparent
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Rgba::parse(&value).map_err(D::Error::custom)
    }
}
