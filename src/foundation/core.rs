use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{DialError, DialResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Layer dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Full watch-face resolution (454×454).
    pub const FACE: Self = Self::square(454);

    /// Build a canvas of arbitrary size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square canvas with side `n`.
    pub const fn square(n: u32) -> Self {
        Self::new(n, n)
    }

    /// Geometric center.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Radius of the largest centered circle.
    pub fn radius(self) -> f64 {
        f64::from(self.width.min(self.height)) / 2.0
    }

    /// Number of bytes of an RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Point on a circle around `center`: 0° is 12 o'clock, angles grow clockwise.
pub fn polar_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let a = (angle_deg - 90.0).to_radians();
    Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

/// Unit vector pointing along a dial angle (same convention as [`polar_point`]).
pub fn dial_direction(angle_deg: f64) -> Vec2 {
    let a = (angle_deg - 90.0).to_radians();
    Vec2::new(a.cos(), a.sin())
}

/// Wall-clock time shown on a preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// 10:27:45, the time shown on previews unless overridden.
    pub const SAMPLE: Self = Self {
        hour: 10,
        minute: 27,
        second: 45,
    };

    /// Create a validated time (`hour < 24`, `minute < 60`, `second < 60`).
    pub fn new(hour: u8, minute: u8, second: u8) -> DialResult<Self> {
        if hour >= 24 {
            return Err(DialError::validation(format!("hour {hour} out of range")));
        }
        if minute >= 60 {
            return Err(DialError::validation(format!(
                "minute {minute} out of range"
            )));
        }
        if second >= 60 {
            return Err(DialError::validation(format!(
                "second {second} out of range"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour of day (0..24).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute (0..60).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Second (0..60).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Hour-hand angle in degrees: `((H mod 12) + M/60) * 30`.
    pub fn hour_angle(self) -> f64 {
        // (60H + M) / 2 is the same quantity without the inexact M/60 step.
        let minutes = u16::from(self.hour % 12) * 60 + u16::from(self.minute);
        f64::from(minutes) / 2.0
    }

    /// Minute-hand angle in degrees: `M * 6`.
    pub fn minute_angle(self) -> f64 {
        f64::from(self.minute) * 6.0
    }

    /// Second-hand angle in degrees: `S * 6`.
    pub fn second_angle(self) -> f64 {
        f64::from(self.second) * 6.0
    }

    /// Digital readout, `HH:MM`.
    pub fn hh_mm(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for ClockTime {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(DialError::validation(format!(
                "time \"{s}\" must be HH:MM or HH:MM:SS"
            )));
        }
        let field = |p: &str| -> DialResult<u8> {
            p.parse::<u8>()
                .map_err(|_| DialError::validation(format!("invalid time field \"{p}\" in \"{s}\"")))
        };
        let hour = field(parts[0])?;
        let minute = field(parts[1])?;
        let second = match parts.get(2) {
            Some(p) => field(p)?,
            None => 0,
        };
        Self::new(hour, minute, second)
    }
}

impl serde::Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
