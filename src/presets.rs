//! Built-in splatter, gradient and resolution presets.
//!
//! Presets are looked up by slug: the lowercased name with runs of
//! non-alphanumerics replaced by a single `-` ("Full HD" is `full-hd`).

use crate::error::{CraftError, Result};
use crate::random::random_seed;
use crate::types::{Colour, GradientConfig, GradientKind, Resolution, SplatterConfig};

const fn hex(rgb: u32) -> Colour {
    Colour::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// A named splatter look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplatterPreset {
    pub name: &'static str,
    pub colours: &'static [Colour],
    pub background: Colour,
    pub count: u32,
    pub min_size: f64,
    pub max_size: f64,
    pub blur: f64,
    pub opacity: f64,
    pub use_blending: bool,
}

impl SplatterPreset {
    pub fn slug(&self) -> String {
        slugify(self.name)
    }

    /// Config for this preset with a freshly drawn seed.
    pub fn to_config(&self) -> SplatterConfig {
        self.to_config_with_seed(random_seed())
    }

    pub fn to_config_with_seed(&self, seed: u32) -> SplatterConfig {
        SplatterConfig {
            colours: self.colours.to_vec(),
            background: self.background,
            count: self.count,
            min_size: self.min_size,
            max_size: self.max_size,
            blur: self.blur,
            opacity: self.opacity,
            use_blending: self.use_blending,
            seed,
        }
    }
}

/// A named gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPreset {
    pub name: &'static str,
    pub colours: &'static [Colour],
    pub stops: &'static [f64],
    pub kind: GradientKind,
    pub angle: f64,
}

impl GradientPreset {
    pub fn slug(&self) -> String {
        slugify(self.name)
    }

    pub fn to_config(&self) -> GradientConfig {
        GradientConfig {
            kind: self.kind,
            colours: self.colours.to_vec(),
            stops: self.stops.to_vec(),
            angle: self.angle,
        }
    }
}

/// A named output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPreset {
    pub name: &'static str,
    pub resolution: Resolution,
}

impl ResolutionPreset {
    pub fn slug(&self) -> String {
        slugify(self.name)
    }
}

pub const SPLATTER_PRESETS: &[SplatterPreset] = &[
    SplatterPreset {
        name: "Colorful Chaos",
        colours: &[hex(0xFF5252), hex(0xFFEB3B), hex(0x2196F3), hex(0x4CAF50)],
        background: hex(0xFFFFFF),
        count: 80,
        min_size: 15.0,
        max_size: 60.0,
        blur: 2.0,
        opacity: 0.7,
        use_blending: true,
    },
    SplatterPreset {
        name: "Monochrome Splash",
        colours: &[hex(0x000000), hex(0x333333), hex(0x666666), hex(0x999999)],
        background: hex(0xFFFFFF),
        count: 60,
        min_size: 10.0,
        max_size: 50.0,
        blur: 0.0,
        opacity: 0.8,
        use_blending: false,
    },
    SplatterPreset {
        name: "Pastel Dream",
        colours: &[hex(0xFFD3E8), hex(0xD3F8FF), hex(0xFFF9D3), hex(0xD3FFD8)],
        background: hex(0xFFFFFF),
        count: 100,
        min_size: 20.0,
        max_size: 70.0,
        blur: 5.0,
        opacity: 0.6,
        use_blending: true,
    },
    SplatterPreset {
        name: "Bold Contrast",
        colours: &[hex(0xFF0000), hex(0x00FF00), hex(0x0000FF)],
        background: hex(0x000000),
        count: 40,
        min_size: 30.0,
        max_size: 80.0,
        blur: 0.0,
        opacity: 0.9,
        use_blending: false,
    },
    SplatterPreset {
        name: "Watercolor",
        colours: &[hex(0x88D8C0), hex(0x8E78FF), hex(0xFF78A8)],
        background: hex(0xF5F5F5),
        count: 30,
        min_size: 40.0,
        max_size: 120.0,
        blur: 8.0,
        opacity: 0.4,
        use_blending: true,
    },
    SplatterPreset {
        name: "Neon Explosion",
        colours: &[hex(0xFF00FF), hex(0x00FFFF), hex(0xFFFF00)],
        background: hex(0x000000),
        count: 70,
        min_size: 5.0,
        max_size: 40.0,
        blur: 3.0,
        opacity: 1.0,
        use_blending: false,
    },
];

pub const GRADIENT_PRESETS: &[GradientPreset] = &[
    GradientPreset {
        name: "Sunset",
        colours: &[hex(0xFF512F), hex(0xF09819)],
        stops: &[0.0, 100.0],
        kind: GradientKind::Linear,
        angle: 45.0,
    },
    GradientPreset {
        name: "Ocean",
        colours: &[hex(0x2E3192), hex(0x1BFFFF)],
        stops: &[0.0, 100.0],
        kind: GradientKind::Linear,
        angle: 90.0,
    },
    GradientPreset {
        name: "Purple Haze",
        colours: &[hex(0x8E2DE2), hex(0x4A00E0)],
        stops: &[0.0, 100.0],
        kind: GradientKind::Linear,
        angle: 135.0,
    },
    GradientPreset {
        name: "Emerald",
        colours: &[hex(0x348F50), hex(0x56B4D3)],
        stops: &[0.0, 100.0],
        kind: GradientKind::Linear,
        angle: 90.0,
    },
    GradientPreset {
        name: "Cosmic Fusion",
        colours: &[hex(0xFF00CC), hex(0x333399)],
        stops: &[0.0, 100.0],
        kind: GradientKind::Linear,
        angle: 45.0,
    },
    GradientPreset {
        name: "Rainbow",
        colours: &[
            hex(0xFF0000),
            hex(0xFF7F00),
            hex(0xFFFF00),
            hex(0x00FF00),
            hex(0x0000FF),
            hex(0x4B0082),
            hex(0x8B00FF),
        ],
        stops: &[0.0, 16.0, 33.0, 50.0, 67.0, 84.0, 100.0],
        kind: GradientKind::Linear,
        angle: 90.0,
    },
    GradientPreset {
        name: "Radial Sunset",
        colours: &[hex(0xFFD200), hex(0xF7971E), hex(0xFF6B6B)],
        stops: &[0.0, 50.0, 100.0],
        kind: GradientKind::Radial,
        angle: 0.0,
    },
    GradientPreset {
        name: "Conic Spectrum",
        colours: &[
            hex(0x8A2387),
            hex(0xE94057),
            hex(0xF27121),
            hex(0xFFDD00),
            hex(0x00C9FF),
            hex(0x8A2387),
        ],
        stops: &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        kind: GradientKind::Conic,
        angle: 0.0,
    },
];

pub const RESOLUTION_PRESETS: &[ResolutionPreset] = &[
    ResolutionPreset {
        name: "HD",
        resolution: Resolution::new(1280, 720),
    },
    ResolutionPreset {
        name: "Full HD",
        resolution: Resolution::new(1920, 1080),
    },
    ResolutionPreset {
        name: "4K",
        resolution: Resolution::new(3840, 2160),
    },
    ResolutionPreset {
        name: "Instagram Post",
        resolution: Resolution::new(1080, 1080),
    },
    ResolutionPreset {
        name: "Instagram Story",
        resolution: Resolution::new(1080, 1920),
    },
    ResolutionPreset {
        name: "Twitter Header",
        resolution: Resolution::new(1500, 500),
    },
    ResolutionPreset {
        name: "Facebook Cover",
        resolution: Resolution::new(851, 315),
    },
    ResolutionPreset {
        name: "YouTube Thumbnail",
        resolution: Resolution::new(1280, 720),
    },
];

pub fn splatter_preset(name: &str) -> Result<&'static SplatterPreset> {
    find(SPLATTER_PRESETS, name, "splatter", |p| p.name)
}

pub fn gradient_preset(name: &str) -> Result<&'static GradientPreset> {
    find(GRADIENT_PRESETS, name, "gradient", |p| p.name)
}

pub fn resolution_preset(name: &str) -> Result<&'static ResolutionPreset> {
    find(RESOLUTION_PRESETS, name, "resolution", |p| p.name)
}

/// Resolve either a preset slug or a literal `WIDTHxHEIGHT`.
pub fn parse_resolution(value: &str) -> Result<Resolution> {
    match resolution_preset(value) {
        Ok(preset) => Ok(preset.resolution),
        Err(preset_err) => value.parse::<Resolution>().map_err(|_| preset_err),
    }
}

fn find<T>(
    presets: &'static [T],
    name: &str,
    kind: &str,
    name_of: impl Fn(&T) -> &'static str,
) -> Result<&'static T> {
    let wanted = slugify(name);
    presets
        .iter()
        .find(|p| slugify(name_of(p)) == wanted)
        .ok_or_else(|| {
            let known: Vec<String> = presets.iter().map(|p| slugify(name_of(p))).collect();
            CraftError::invalid_with_help(
                format!("unknown {} preset '{}'", kind, name),
                format!("Available: {}", known.join(", ")),
            )
        })
}

/// Lowercase `name`, joining alphanumeric runs with `-`.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
