//! Closed appearance tables: color schemes, font styles, pointer styles.
//!
//! Each enumeration maps to a fixed lookup table so that a configuration can
//! never name a palette or font that does not exist.

use core::fmt;

use crate::draw::Color32;

const CLASSIC: [Color32; 8] = [
    Color32::from_rgb_u32(0xE6194B),
    Color32::from_rgb_u32(0x3CB44B),
    Color32::from_rgb_u32(0xFFE119),
    Color32::from_rgb_u32(0x4363D8),
    Color32::from_rgb_u32(0xF58231),
    Color32::from_rgb_u32(0x911EB4),
    Color32::from_rgb_u32(0x46F0F0),
    Color32::from_rgb_u32(0xF032E6),
];

const PASTEL: [Color32; 6] = [
    Color32::from_rgb_u32(0xFFB3BA),
    Color32::from_rgb_u32(0xFFDFBA),
    Color32::from_rgb_u32(0xFFFFBA),
    Color32::from_rgb_u32(0xBAFFC9),
    Color32::from_rgb_u32(0xBAE1FF),
    Color32::from_rgb_u32(0xD7BAFF),
];

const NEON: [Color32; 6] = [
    Color32::from_rgb_u32(0xFF00FF),
    Color32::from_rgb_u32(0x00FFFF),
    Color32::from_rgb_u32(0x39FF14),
    Color32::from_rgb_u32(0xFFFF00),
    Color32::from_rgb_u32(0xFF3131),
    Color32::from_rgb_u32(0x1F51FF),
];

const OCEAN: [Color32; 5] = [
    Color32::from_rgb_u32(0x03045E),
    Color32::from_rgb_u32(0x0077B6),
    Color32::from_rgb_u32(0x00B4D8),
    Color32::from_rgb_u32(0x90E0EF),
    Color32::from_rgb_u32(0x023E8A),
];

const SUNSET: [Color32; 5] = [
    Color32::from_rgb_u32(0xFF4E50),
    Color32::from_rgb_u32(0xFC913A),
    Color32::from_rgb_u32(0xF9D423),
    Color32::from_rgb_u32(0xE84A5F),
    Color32::from_rgb_u32(0xFF847C),
];

const FOREST: [Color32; 5] = [
    Color32::from_rgb_u32(0x2D6A4F),
    Color32::from_rgb_u32(0x40916C),
    Color32::from_rgb_u32(0x52B788),
    Color32::from_rgb_u32(0x74C69D),
    Color32::from_rgb_u32(0x1B4332),
];

const MONO: [Color32; 4] = [
    Color32::from_rgb_u32(0x212121),
    Color32::from_rgb_u32(0x616161),
    Color32::from_rgb_u32(0x9E9E9E),
    Color32::from_rgb_u32(0xE0E0E0),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Classic,
    Pastel,
    Neon,
    Ocean,
    Sunset,
    Forest,
    Mono,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 7] = [
        ColorScheme::Classic,
        ColorScheme::Pastel,
        ColorScheme::Neon,
        ColorScheme::Ocean,
        ColorScheme::Sunset,
        ColorScheme::Forest,
        ColorScheme::Mono,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| value.eq_ignore_ascii_case(scheme.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "classic",
            ColorScheme::Pastel => "pastel",
            ColorScheme::Neon => "neon",
            ColorScheme::Ocean => "ocean",
            ColorScheme::Sunset => "sunset",
            ColorScheme::Forest => "forest",
            ColorScheme::Mono => "mono",
        }
    }

    pub fn colors(&self) -> &'static [Color32] {
        match self {
            ColorScheme::Classic => &CLASSIC,
            ColorScheme::Pastel => &PASTEL,
            ColorScheme::Neon => &NEON,
            ColorScheme::Ocean => &OCEAN,
            ColorScheme::Sunset => &SUNSET,
            ColorScheme::Forest => &FOREST,
            ColorScheme::Mono => &MONO,
        }
    }

    /// Round-robin color for segment `index`.
    #[inline]
    pub fn color_for(&self, index: usize) -> Color32 {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved font parameters for segment labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub weight: u16,
    pub size_px: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Sans,
    Serif,
    Mono,
    Rounded,
}

impl FontStyle {
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Sans,
        FontStyle::Serif,
        FontStyle::Mono,
        FontStyle::Rounded,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| value.eq_ignore_ascii_case(style.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Sans => "sans",
            FontStyle::Serif => "serif",
            FontStyle::Mono => "mono",
            FontStyle::Rounded => "rounded",
        }
    }

    pub fn spec(&self) -> FontSpec {
        match self {
            FontStyle::Sans => FontSpec {
                family: "sans-serif",
                weight: 600,
                size_px: 14,
            },
            FontStyle::Serif => FontSpec {
                family: "serif",
                weight: 500,
                size_px: 15,
            },
            FontStyle::Mono => FontSpec {
                family: "monospace",
                weight: 500,
                size_px: 13,
            },
            FontStyle::Rounded => FontSpec {
                family: "ui-rounded",
                weight: 700,
                size_px: 14,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerStyle {
    #[default]
    Triangle,
    Arrow,
    Pin,
}

impl PointerStyle {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("triangle") {
            Some(PointerStyle::Triangle)
        } else if value.eq_ignore_ascii_case("arrow") {
            Some(PointerStyle::Arrow)
        } else if value.eq_ignore_ascii_case("pin") {
            Some(PointerStyle::Pin)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PointerStyle::Triangle => "triangle",
            PointerStyle::Arrow => "arrow",
            PointerStyle::Pin => "pin",
        }
    }
}
