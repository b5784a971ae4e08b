//! Built-in and user-supplied face themes.
//!
//! A theme carries every literal that varies between face variants: colors, numeral style, dial
//! insets and hand shapes. Geometry is in pixels at the 454×454 face resolution.

use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba8;
use crate::foundation::error::{DialError, DialResult};

/// Dial and text colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Background gradient color at the center.
    pub bg_center: Rgba8,
    /// Background gradient color at the rim.
    pub bg_edge: Rgba8,
    /// Minute and hour dots.
    pub dot: Rgba8,
    /// Short hour tick lines.
    pub tick: Rgba8,
    pub numeral: Rgba8,
    pub inner_ring: Rgba8,
    /// Dark hand body, also the outer and inner disc of the center cap.
    pub hand: Rgba8,
    /// Hand highlight, also the middle disc of the center cap.
    pub hand_light: Rgba8,
    pub panel_border: Rgba8,
    pub panel_text: Rgba8,
    pub panel_rule: Rgba8,
    pub text_dark: Rgba8,
    pub text_gray: Rgba8,
    pub separator: Rgba8,
    pub heart: Rgba8,
}

/// Colors of the weather glyphs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherPalette {
    pub cloud: Rgba8,
    pub sun: Rgba8,
    pub rain: Rgba8,
    pub snow: Rgba8,
    pub fog: Rgba8,
    pub haze: Rgba8,
}

impl Default for WeatherPalette {
    fn default() -> Self {
        Self {
            cloud: Rgba8::rgb(160, 165, 175),
            sun: Rgba8::rgb(240, 190, 50),
            rain: Rgba8::rgb(80, 130, 200),
            snow: Rgba8::rgb(190, 200, 220),
            fog: Rgba8::rgb(170, 175, 185),
            haze: Rgba8::new(180, 170, 150, 160),
        }
    }
}

/// How the twelve hour labels are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralStyle {
    Arabic,
    Roman,
}

impl NumeralStyle {
    /// Label for hour `1..=12`.
    pub fn label(self, hour: u8) -> String {
        const ROMAN: [&str; 12] = [
            "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
        ];
        match self {
            Self::Arabic => hour.to_string(),
            Self::Roman => ROMAN
                .get(usize::from(hour.clamp(1, 12)) - 1)
                .copied()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// File name of the numeral layer under `background/`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Arabic => "numerals.png",
            Self::Roman => "roman_numerals.png",
        }
    }
}

/// Radii and sizes of the dial furniture, as insets from the face radius.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialGeometry {
    /// Inset of the dot ring from the rim.
    pub dot_inset: f64,
    pub major_dot_radius: f64,
    pub minor_dot_radius: f64,
    /// Gap between the dot ring and the start of an hour tick.
    pub tick_gap: f64,
    pub tick_length: f64,
    pub tick_width: f64,
    /// Inset of the numeral ring from the rim.
    pub numeral_inset: f64,
    pub numeral_size: f32,
    /// Vertical nudge applied to each numeral after centering.
    pub numeral_nudge: f64,
    pub inner_ring_inset: f64,
    pub inner_ring_width: f64,
    /// Side of the square center cap sprite.
    pub cap_size: u32,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            dot_inset: 22.0,
            major_dot_radius: 3.0,
            minor_dot_radius: 1.5,
            tick_gap: 8.0,
            tick_length: 10.0,
            tick_width: 2.0,
            numeral_inset: 58.0,
            numeral_size: 36.0,
            numeral_nudge: -2.0,
            inner_ring_inset: 80.0,
            inner_ring_width: 1.0,
            cap_size: 20,
        }
    }
}

/// Extra mass on the tail side of a hand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Counterweight {
    /// The tail narrows to `neck` px behind the pivot, then widens to `half_width` at its end.
    Flare { neck: f64, half_width: f64 },
    /// A filled disc centered on the tail end.
    Disc { radius: f64 },
}

/// Standalone hand sprite: the hand points up with its pivot at `(width / 2, pivot_y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSpec {
    pub width: u32,
    pub height: u32,
    pub pivot_y: u32,
}

/// Shape and color of one clock hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandSpec {
    /// Pivot to tip.
    pub length: f64,
    /// Pivot to tail end.
    pub tail: f64,
    pub base_half_width: f64,
    pub tip_half_width: f64,
    pub tail_half_width: f64,
    /// Distance of the widest point from the pivot, towards the tip.
    pub base_offset: f64,
    #[serde(default)]
    pub counterweight: Option<Counterweight>,
    pub color: Rgba8,
    /// Center line from 15% to 85% of the length.
    #[serde(default)]
    pub highlight: Option<Rgba8>,
    /// Fill for the part of the hand behind the pivot.
    #[serde(default)]
    pub back_color: Option<Rgba8>,
    pub sprite: SpriteSpec,
}

/// Everything that varies between face variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
    #[serde(default)]
    pub weather: WeatherPalette,
    pub numerals: NumeralStyle,
    #[serde(default)]
    pub dial: DialGeometry,
    pub hour_hand: HandSpec,
    pub minute_hand: HandSpec,
    pub second_hand: HandSpec,
}

impl Theme {
    /// Names accepted by [`Theme::builtin`].
    pub const BUILTIN: [&'static str; 3] = ["business", "heritage", "midnight"];

    /// Look up a built-in theme by name.
    pub fn builtin(name: &str) -> DialResult<Self> {
        match name {
            "business" => Ok(Self::business()),
            "heritage" => Ok(Self::heritage()),
            "midnight" => Ok(Self::midnight()),
            other => Err(DialError::validation(format!(
                "unknown theme '{other}' (expected one of: {})",
                Self::BUILTIN.join(", ")
            ))),
        }
    }

    /// White-silver dial, blue arabic numerals, dark tapered hands.
    pub fn business() -> Self {
        let hand = Rgba8::rgb(25, 35, 60);
        let hand_light = Rgba8::rgb(50, 70, 120);
        Self {
            name: "business".to_string(),
            palette: Palette {
                bg_center: Rgba8::WHITE,
                bg_edge: Rgba8::rgb(220, 220, 223),
                dot: Rgba8::rgb(60, 95, 165),
                tick: Rgba8::rgb(50, 80, 150),
                numeral: Rgba8::rgb(45, 75, 145),
                inner_ring: Rgba8::new(200, 205, 215, 80),
                hand,
                hand_light,
                panel_border: Rgba8::rgb(70, 105, 170),
                panel_text: Rgba8::rgb(55, 85, 155),
                panel_rule: Rgba8::new(180, 190, 210, 100),
                text_dark: Rgba8::rgb(30, 30, 40),
                text_gray: Rgba8::rgb(110, 115, 125),
                separator: Rgba8::rgb(170, 175, 185),
                heart: Rgba8::rgb(200, 50, 60),
            },
            weather: WeatherPalette::default(),
            numerals: NumeralStyle::Arabic,
            dial: DialGeometry::default(),
            hour_hand: HandSpec {
                length: 95.0,
                tail: 18.0,
                base_half_width: 7.0,
                tip_half_width: 1.5,
                tail_half_width: 3.0,
                base_offset: 5.0,
                counterweight: None,
                color: hand,
                highlight: Some(hand_light),
                back_color: None,
                sprite: SpriteSpec {
                    width: 28,
                    height: 130,
                    pivot_y: 105,
                },
            },
            minute_hand: HandSpec {
                length: 135.0,
                tail: 22.0,
                base_half_width: 5.0,
                tip_half_width: 1.0,
                tail_half_width: 3.0,
                base_offset: 5.0,
                counterweight: None,
                color: hand,
                highlight: Some(hand_light),
                back_color: None,
                sprite: SpriteSpec {
                    width: 20,
                    height: 170,
                    pivot_y: 140,
                },
            },
            second_hand: HandSpec {
                length: 150.0,
                tail: 30.0,
                base_half_width: 0.75,
                tip_half_width: 0.5,
                tail_half_width: 1.0,
                base_offset: 0.0,
                counterweight: Some(Counterweight::Disc { radius: 3.0 }),
                color: hand_light,
                highlight: None,
                back_color: None,
                sprite: SpriteSpec {
                    width: 8,
                    height: 195,
                    pivot_y: 160,
                },
            },
        }
    }

    /// Ivory dial, roman numerals, flared two-tone hands.
    pub fn heritage() -> Self {
        let hand = Rgba8::rgb(40, 30, 20);
        let hand_light = Rgba8::rgb(176, 141, 87);
        let accent = Rgba8::rgb(150, 40, 35);
        let mut theme = Self::business();
        theme.name = "heritage".to_string();
        theme.numerals = NumeralStyle::Roman;
        theme.palette = Palette {
            bg_center: Rgba8::rgb(252, 248, 238),
            bg_edge: Rgba8::rgb(226, 214, 190),
            dot: Rgba8::rgb(120, 95, 60),
            tick: Rgba8::rgb(90, 70, 45),
            numeral: Rgba8::rgb(70, 50, 30),
            inner_ring: Rgba8::new(176, 141, 87, 110),
            hand,
            hand_light,
            panel_border: Rgba8::rgb(150, 120, 80),
            panel_text: Rgba8::rgb(90, 65, 40),
            panel_rule: Rgba8::new(176, 141, 87, 120),
            text_dark: Rgba8::rgb(45, 35, 25),
            text_gray: Rgba8::rgb(125, 110, 95),
            separator: Rgba8::rgb(190, 175, 150),
            heart: accent,
        };
        theme.dial.numeral_size = 30.0;
        for spec in [&mut theme.hour_hand, &mut theme.minute_hand] {
            spec.color = hand;
            spec.highlight = Some(hand_light);
            spec.back_color = Some(hand_light);
            spec.counterweight = Some(Counterweight::Flare {
                neck: spec.tail * 0.4,
                half_width: spec.base_half_width - 1.0,
            });
        }
        theme.second_hand.color = accent;
        theme.second_hand.counterweight = Some(Counterweight::Flare {
            neck: 12.0,
            half_width: 2.5,
        });
        theme
    }

    /// Navy dial, light arabic numerals, silver hands with disc counterweights.
    pub fn midnight() -> Self {
        let hand = Rgba8::rgb(225, 230, 240);
        let hand_light = Rgba8::rgb(140, 190, 255);
        let mut theme = Self::business();
        theme.name = "midnight".to_string();
        theme.palette = Palette {
            bg_center: Rgba8::rgb(28, 40, 70),
            bg_edge: Rgba8::rgb(8, 12, 24),
            dot: Rgba8::rgb(150, 175, 220),
            tick: Rgba8::rgb(200, 215, 240),
            numeral: Rgba8::rgb(220, 228, 245),
            inner_ring: Rgba8::new(120, 140, 190, 90),
            hand,
            hand_light,
            panel_border: Rgba8::rgb(90, 120, 180),
            panel_text: Rgba8::rgb(190, 210, 245),
            panel_rule: Rgba8::new(90, 120, 180, 110),
            text_dark: Rgba8::rgb(235, 240, 250),
            text_gray: Rgba8::rgb(150, 160, 185),
            separator: Rgba8::rgb(80, 95, 130),
            heart: Rgba8::rgb(255, 90, 100),
        };
        theme.weather.cloud = Rgba8::rgb(175, 185, 205);
        for spec in [&mut theme.hour_hand, &mut theme.minute_hand] {
            spec.color = hand;
            spec.highlight = Some(hand_light);
        }
        theme.second_hand.color = Rgba8::rgb(255, 150, 60);
        theme.second_hand.counterweight = Some(Counterweight::Disc { radius: 4.0 });
        theme
    }

    /// Reject shapes that cannot be drawn.
    pub fn validate(&self) -> DialResult<()> {
        for (label, spec) in self.hands() {
            let dims = [
                spec.length,
                spec.tail,
                spec.base_half_width,
                spec.tip_half_width,
                spec.tail_half_width,
                spec.base_offset,
            ];
            if dims.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(DialError::validation(format!(
                    "theme '{}': {label} hand dimensions must be finite and >= 0",
                    self.name
                )));
            }
            let s = spec.sprite;
            if s.width == 0 || s.height == 0 || s.pivot_y >= s.height {
                return Err(DialError::validation(format!(
                    "theme '{}': {label} hand sprite needs width, height > 0 and pivot_y < height",
                    self.name
                )));
            }
        }
        if self.dial.cap_size == 0 {
            return Err(DialError::validation(format!(
                "theme '{}': dial.cap_size must be > 0",
                self.name
            )));
        }
        if !self.dial.numeral_size.is_finite() || self.dial.numeral_size <= 0.0 {
            return Err(DialError::validation(format!(
                "theme '{}': dial.numeral_size must be finite and > 0",
                self.name
            )));
        }
        Ok(())
    }

    /// The three hands with their file stems.
    pub fn hands(&self) -> [(&'static str, &HandSpec); 3] {
        [
            ("hour", &self.hour_hand),
            ("minute", &self.minute_hand),
            ("second", &self.second_hand),
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::business()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/theme.rs"]
mod tests;
