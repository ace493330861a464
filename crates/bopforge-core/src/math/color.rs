// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the 8-bit `Color` type written into bopjson levels.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::wire::{WireError, WireValue};

/// An 8-bit-per-channel color, with an optional alpha channel.
///
/// Every constructor and setter clamps its input to `[0, 255]`, so a `Color`
/// can never hold an out-of-range channel. A color without alpha is written
/// as `Color8`; one with alpha as `Color8A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    a: Option<u8>,
}

/// Clamps an integer channel into the `u8` range.
#[inline]
fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

impl Color {
    /// The bopjson type name of an opaque color.
    pub const TYPE_NAME: &'static str = "Color8";
    /// The bopjson type name of a color carrying alpha.
    pub const TYPE_NAME_ALPHA: &'static str = "Color8A";

    // --- Common Color Constants ---

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates a color from channels that are already in range.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Creates a color, clamping every channel to `[0, 255]`.
    #[inline]
    pub fn new(r: i64, g: i64, b: i64) -> Self {
        Self::rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Creates a color with alpha, clamping every channel to `[0, 255]`.
    #[inline]
    pub fn with_alpha(r: i64, g: i64, b: i64, a: i64) -> Self {
        Self {
            a: Some(clamp_channel(a)),
            ..Self::new(r, g, b)
        }
    }

    /// Creates a color from hue (degrees), saturation and value (both `0..=1`).
    ///
    /// The hue wheel is split in six sectors of 60 degrees. Within a sector,
    /// one channel is full, one is at the saturation floor and the third
    /// follows the fractional position inside the sector.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let sector = h.trunc();
        let rising = h - sector;
        let falling = 1.0 - rising;
        let floor = 1.0 - saturation;
        let rising = saturation * rising + floor;
        let falling = saturation * falling + floor;

        let (r, g, b) = match sector as u8 {
            0 => (1.0, rising, floor),
            1 => (falling, 1.0, floor),
            2 => (floor, 1.0, rising),
            3 => (floor, falling, 1.0),
            4 => (rising, floor, 1.0),
            5 => (1.0, floor, falling),
            _ => (1.0, 1.0, 1.0),
        };
        let scale = |c: f64| (c * value * 255.0) as i64;
        Self::new(scale(r), scale(g), scale(b))
    }

    /// The red channel.
    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    /// The green channel.
    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    /// The blue channel.
    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// The alpha channel, if this color carries one.
    #[inline]
    pub fn a(&self) -> Option<u8> {
        self.a
    }

    /// Sets the red channel, clamped to `[0, 255]`.
    #[inline]
    pub fn set_r(&mut self, value: i64) {
        self.r = clamp_channel(value);
    }

    /// Sets the green channel, clamped to `[0, 255]`.
    #[inline]
    pub fn set_g(&mut self, value: i64) {
        self.g = clamp_channel(value);
    }

    /// Sets the blue channel, clamped to `[0, 255]`.
    #[inline]
    pub fn set_b(&mut self, value: i64) {
        self.b = clamp_channel(value);
    }

    /// Sets (or with `None`, removes) the alpha channel, clamped to `[0, 255]`.
    #[inline]
    pub fn set_a(&mut self, value: Option<i64>) {
        self.a = value.map(clamp_channel);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "{}({}, {}, {}, {a})", Self::TYPE_NAME_ALPHA, self.r, self.g, self.b),
            None => write!(f, "{}({}, {}, {})", Self::TYPE_NAME, self.r, self.g, self.b),
        }
    }
}

impl WireValue for Color {
    fn type_name(&self) -> &'static str {
        if self.a.is_some() {
            Self::TYPE_NAME_ALPHA
        } else {
            Self::TYPE_NAME
        }
    }

    fn payload(&self) -> Result<Value, WireError> {
        let mut obj = json!({ "r": self.r, "g": self.g, "b": self.b });
        if let (Some(a), Some(map)) = (self.a, obj.as_object_mut()) {
            map.insert("a".to_owned(), json!(a));
        }
        Ok(obj)
    }

    fn from_payload(payload: &Value) -> Result<Self, WireError> {
        Self::deserialize(payload).map_err(|e| WireError::InvalidPayload {
            type_name: Self::TYPE_NAME,
            reason: e.to_string(),
        })
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_clamped_on_construction() {
        let c = Color::with_alpha(-20, 300, 128, 1000);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0, 255, 128, Some(255)));
    }

    #[test]
    fn test_channels_are_clamped_on_mutation() {
        let mut c = Color::new(10, 10, 10);
        c.set_r(-1);
        c.set_g(256);
        c.set_b(i64::MAX);
        c.set_a(Some(i64::MIN));
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0, 255, 255, Some(0)));
    }

    #[test]
    fn test_from_hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::rgb(0, 0, 255));
        // Hue wraps around the wheel.
        assert_eq!(Color::from_hsv(360.0, 1.0, 1.0), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hsv_blends_by_saturation_and_value() {
        // Sector 1 with half saturation: (falling, 1, floor) = (1, 1, 0.5).
        assert_eq!(Color::from_hsv(60.0, 0.5, 1.0), Color::rgb(255, 255, 127));
        // Zero saturation is grey at the given value.
        assert_eq!(Color::from_hsv(200.0, 0.0, 0.5), Color::rgb(127, 127, 127));
        // Zero value is black whatever the hue.
        assert_eq!(Color::from_hsv(300.0, 1.0, 0.0), Color::BLACK);
    }

    #[test]
    fn test_from_hsv_out_of_range_inputs_still_clamp() {
        // Hue -30 lands in sector 5; oversaturation pushes green below zero.
        assert_eq!(Color::from_hsv(-30.0, 2.0, 3.0), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_wire_type_name_depends_on_alpha() {
        let opaque = Color::new(1, 2, 3).to_wire().unwrap();
        assert_eq!(opaque["type"], "Color8");
        assert_eq!(opaque["value"], json!({"r": 1, "g": 2, "b": 3}));

        let translucent = Color::with_alpha(1, 2, 3, 4).to_wire().unwrap();
        assert_eq!(translucent["type"], "Color8A");
        assert_eq!(translucent["value"], json!({"r": 1, "g": 2, "b": 3, "a": 4}));
    }

    #[test]
    fn test_payload_round_trip() {
        for color in [Color::new(9, 8, 7), Color::with_alpha(0, 255, 0, 128)] {
            let back = Color::from_payload(&color.payload().unwrap()).unwrap();
            assert_eq!(back, color);
        }
    }
}
