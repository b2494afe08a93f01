//! Render configuration records.
//!
//! These are owned by the caller and only read by the renderers. Field names
//! serialise in camelCase so configs copied out of the browser tool load
//! unchanged:
//!
//! ```json
//! {
//!   "colors": ["#ff5252", "#ffeb3b"],
//!   "backgroundColor": "#ffffff",
//!   "splatterCount": 80,
//!   "minSize": 15,
//!   "maxSize": 60,
//!   "blur": 2,
//!   "opacity": 0.7,
//!   "useBlending": true,
//!   "seed": 4521
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};

use super::Colour;

/// Abstract pattern styles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Waves,
    Voronoi,
    Geometric,
    Flow,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Waves,
        PatternKind::Voronoi,
        PatternKind::Geometric,
        PatternKind::Flow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Waves => "waves",
            PatternKind::Voronoi => "voronoi",
            PatternKind::Geometric => "geometric",
            PatternKind::Flow => "flow",
        }
    }

    /// Whether the same seed always produces the same pixels.
    ///
    /// Only waves are derived purely from the seed. Voronoi sites, geometric
    /// shapes and flow particle positions come from the non-seeded generator.
    pub fn is_reproducible(self) -> bool {
        matches!(self, PatternKind::Waves)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CraftError::invalid_with_help(
                    format!("unknown pattern type '{}'", s),
                    "Expected one of: waves, voronoi, geometric, flow",
                )
            })
    }
}

/// Gradient geometries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub const ALL: [GradientKind; 3] = [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic];

    pub fn name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for GradientKind {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CraftError::invalid_with_help(
                    format!("unknown gradient type '{}'", s),
                    "Expected one of: linear, radial, conic",
                )
            })
    }
}

/// Configuration for one abstract pattern render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternConfig {
    #[serde(default)]
    pub pattern_type: PatternKind,

    /// Colours cycled through by index.
    #[serde(rename = "colors")]
    pub colours: Vec<Colour>,

    #[serde(rename = "backgroundColor", default = "default_background")]
    pub background: Colour,

    /// Number of bands (waves) or a multiplier on sites, shapes and particles.
    #[serde(default = "default_complexity")]
    pub complexity: u32,

    /// Feature size in pixels.
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Frequency of the flow field.
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f64,

    #[serde(default)]
    pub seed: u32,
}

fn default_background() -> Colour {
    Colour::WHITE
}

fn default_complexity() -> u32 {
    5
}

fn default_scale() -> f64 {
    20.0
}

fn default_noise_scale() -> f64 {
    0.01
}

/// Smallest feature size; voronoi steps one cell per `scale` pixels.
pub const MIN_SCALE: f64 = 1.0;

impl PatternConfig {
    /// Create a config with the browser tool's default knobs.
    pub fn new(pattern_type: PatternKind, colours: Vec<Colour>) -> Self {
        Self {
            pattern_type,
            colours,
            background: default_background(),
            complexity: default_complexity(),
            scale: default_scale(),
            noise_scale: default_noise_scale(),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    pub fn with_complexity(mut self, complexity: u32) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Check the config before any drawing happens.
    pub fn validate(&self) -> Result<()> {
        require_colours(&self.colours)?;

        if !self.scale.is_finite() || self.scale < MIN_SCALE {
            return Err(CraftError::invalid_with_help(
                format!("scale must be at least {} pixel, got {}", MIN_SCALE, self.scale),
                "Voronoi cells are `scale` pixels wide",
            ));
        }
        if !self.noise_scale.is_finite() {
            return Err(CraftError::invalid(format!(
                "noise scale must be finite, got {}",
                self.noise_scale
            )));
        }

        Ok(())
    }
}

/// Configuration for a splatter render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplatterConfig {
    #[serde(rename = "colors")]
    pub colours: Vec<Colour>,

    #[serde(rename = "backgroundColor", default = "default_background")]
    pub background: Colour,

    /// Number of splatters.
    #[serde(alias = "splatterCount", default = "default_splatter_count")]
    pub count: u32,

    #[serde(default = "default_min_size")]
    pub min_size: f64,

    #[serde(default = "default_max_size")]
    pub max_size: f64,

    /// Gaussian blur standard deviation in pixels.
    #[serde(default)]
    pub blur: f64,

    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Multiply blending instead of plain painting.
    #[serde(default = "default_use_blending")]
    pub use_blending: bool,

    #[serde(default)]
    pub seed: u32,
}

fn default_splatter_count() -> u32 {
    50
}

fn default_min_size() -> f64 {
    10.0
}

fn default_max_size() -> f64 {
    50.0
}

fn default_opacity() -> f64 {
    0.7
}

fn default_use_blending() -> bool {
    true
}

impl SplatterConfig {
    /// Create a config with the browser tool's default knobs.
    pub fn new(colours: Vec<Colour>) -> Self {
        Self {
            colours,
            background: default_background(),
            count: default_splatter_count(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            blur: 0.0,
            opacity: default_opacity(),
            use_blending: default_use_blending(),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_sizes(mut self, min_size: f64, max_size: f64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Check the config before any drawing happens.
    pub fn validate(&self) -> Result<()> {
        require_colours(&self.colours)?;

        if !self.min_size.is_finite() || !self.max_size.is_finite() || self.min_size < 0.0 {
            return Err(CraftError::invalid(format!(
                "splatter sizes must be non-negative numbers, got {}..{}",
                self.min_size, self.max_size
            )));
        }
        if self.min_size > self.max_size {
            return Err(CraftError::invalid_with_help(
                format!(
                    "minimum size {} is larger than maximum size {}",
                    self.min_size, self.max_size
                ),
                "Swap the values or raise the maximum",
            ));
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            return Err(CraftError::invalid(format!(
                "blur must be zero or more, got {}",
                self.blur
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(CraftError::invalid(format!(
                "opacity must be between 0 and 1, got {}",
                self.opacity
            )));
        }

        Ok(())
    }
}

/// Configuration for a gradient render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    #[serde(rename = "type", alias = "gradientType", default)]
    pub kind: GradientKind,

    #[serde(rename = "colors")]
    pub colours: Vec<Colour>,

    /// Stop positions as percentages, one per colour.
    pub stops: Vec<f64>,

    /// Direction in degrees (linear) or start angle (conic).
    #[serde(default = "default_angle")]
    pub angle: f64,
}

fn default_angle() -> f64 {
    90.0
}

impl GradientConfig {
    /// Create a gradient with stops spread evenly from 0% to 100%.
    pub fn new(kind: GradientKind, colours: Vec<Colour>) -> Self {
        let stops = even_stops(colours.len());
        Self {
            kind,
            colours,
            stops,
            angle: default_angle(),
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_stops(mut self, stops: Vec<f64>) -> Self {
        self.stops = stops;
        self
    }

    /// Check the config before any drawing happens.
    pub fn validate(&self) -> Result<()> {
        if self.colours.len() < 2 {
            return Err(CraftError::invalid_with_help(
                format!("a gradient needs at least 2 colours, got {}", self.colours.len()),
                "Pass --color more than once",
            ));
        }
        if self.stops.len() != self.colours.len() {
            return Err(CraftError::invalid(format!(
                "{} stops given for {} colours",
                self.stops.len(),
                self.colours.len()
            )));
        }
        if let Some(bad) = self
            .stops
            .iter()
            .find(|s| !s.is_finite() || !(0.0..=100.0).contains(*s))
        {
            return Err(CraftError::invalid(format!(
                "gradient stop {} is outside 0..=100",
                bad
            )));
        }
        if !self.angle.is_finite() {
            return Err(CraftError::invalid("gradient angle must be finite"));
        }

        Ok(())
    }
}

/// Evenly spaced stop percentages, rounded to whole numbers.
pub fn even_stops(count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![0.0],
        n => (0..n)
            .map(|i| (100.0 * i as f64 / (n - 1) as f64).round())
            .collect(),
    }
}

/// Output size for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Largest output the renderers accept (8K UHD).
    pub const MAX: Resolution = Resolution::new(7680, 4320);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CraftError::invalid(format!(
                "resolution {} has no pixels",
                self
            )));
        }
        if self.width > Self::MAX.width || self.height > Self::MAX.height {
            return Err(CraftError::invalid_with_help(
                format!("resolution {} is too large", self),
                format!("Width and height are capped at {}", Self::MAX),
            ));
        }
        Ok(())
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = CraftError;

    /// Parse `WIDTHxHEIGHT`, e.g. `1080x1920`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || {
            CraftError::invalid_with_help(
                format!("invalid resolution '{}'", s),
                "Use WIDTHxHEIGHT, e.g. 1920x1080",
            )
        };

        let (w, h) = s.trim().to_lowercase().split_once('x').map(|(w, h)| {
            (w.trim().parse::<u32>(), h.trim().parse::<u32>())
        }).ok_or_else(parse_err)?;

        let resolution = Self::new(w.map_err(|_| parse_err())?, h.map_err(|_| parse_err())?);
        resolution.validate()?;
        Ok(resolution)
    }
}

fn require_colours(colours: &[Colour]) -> Result<()> {
    if colours.is_empty() {
        return Err(CraftError::invalid_with_help(
            "at least one colour is required",
            "Colours are picked by index modulo the list length",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pattern_kind_from_str() {
        assert_eq!("waves".parse::<PatternKind>().unwrap(), PatternKind::Waves);
        assert_eq!("Voronoi".parse::<PatternKind>().unwrap(), PatternKind::Voronoi);
        assert!(matches!(
            "spiral".parse::<PatternKind>(),
            Err(CraftError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_kind_display_honours_width() {
        assert_eq!(format!("{:<8}|", PatternKind::Flow), "flow    |");
        assert_eq!(format!("{:>8}", GradientKind::Conic), "   conic");
    }

    #[test]
    fn test_gradient_kind_from_str() {
        assert_eq!("conic".parse::<GradientKind>().unwrap(), GradientKind::Conic);
        assert!("diamond".parse::<GradientKind>().is_err());
    }

    #[test]
    fn test_pattern_config_from_browser_json() {
        let json = r##"{
            "colors": ["#ff0000", "#00FF00"],
            "backgroundColor": "#101010",
            "patternType": "flow",
            "complexity": 3,
            "scale": 12,
            "noiseScale": 0.02,
            "seed": 77
        }"##;

        let config: PatternConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pattern_type, PatternKind::Flow);
        assert_eq!(config.colours, vec![Colour::rgb(255, 0, 0), Colour::rgb(0, 255, 0)]);
        assert_eq!(config.background, Colour::rgb(16, 16, 16));
        assert_eq!(config.complexity, 3);
        assert_eq!(config.scale, 12.0);
        assert_eq!(config.noise_scale, 0.02);
        assert_eq!(config.seed, 77);
    }

    #[test]
    fn test_pattern_config_defaults() {
        let config: PatternConfig = serde_json::from_str(r##"{"colors": ["#000000"]}"##).unwrap();
        assert_eq!(config, PatternConfig::new(PatternKind::Waves, vec![Colour::BLACK]));
    }

    #[test]
    fn test_splatter_config_accepts_splatter_count() {
        let json = r##"{"colors": ["#ff5252"], "splatterCount": 80, "useBlending": false}"##;
        let config: SplatterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.count, 80);
        assert!(!config.use_blending);
        assert_eq!(config.opacity, 0.7);
    }

    #[test]
    fn test_splatter_config_serialises_camel_case() {
        let config = SplatterConfig::new(vec![Colour::WHITE]).with_seed(3);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["colors"][0], "#ffffff");
        assert_eq!(value["backgroundColor"], "#ffffff");
        assert_eq!(value["minSize"], 10.0);
        assert_eq!(value["useBlending"], true);
        assert_eq!(value["seed"], 3);
    }

    #[test]
    fn test_pattern_validate() {
        assert!(PatternConfig::new(PatternKind::Waves, vec![Colour::BLACK]).validate().is_ok());
        assert!(PatternConfig::new(PatternKind::Waves, vec![]).validate().is_err());
        assert!(PatternConfig::new(PatternKind::Voronoi, vec![Colour::BLACK])
            .with_scale(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_pattern_scale_below_one_pixel_rejected() {
        let config = PatternConfig::new(PatternKind::Voronoi, vec![Colour::BLACK]);
        assert!(matches!(
            config.clone().with_scale(1e-300).validate(),
            Err(CraftError::InvalidArgument { .. })
        ));
        assert!(config.clone().with_scale(0.5).validate().is_err());
        assert!(config.with_scale(MIN_SCALE).validate().is_ok());
    }

    #[test]
    fn test_splatter_validate() {
        let ok = SplatterConfig::new(vec![Colour::BLACK]);
        assert!(ok.validate().is_ok());

        assert!(SplatterConfig::new(vec![]).validate().is_err());
        assert!(ok.clone().with_sizes(60.0, 10.0).validate().is_err());
        assert!(ok.clone().with_sizes(-1.0, 10.0).validate().is_err());
        assert!(ok.clone().with_sizes(25.0, 25.0).validate().is_ok());

        let mut bad = ok.clone();
        bad.opacity = 1.5;
        assert!(bad.validate().is_err());

        let mut bad = ok;
        bad.blur = -2.0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_gradient_validate() {
        let two = vec![Colour::BLACK, Colour::WHITE];
        assert!(GradientConfig::new(GradientKind::Linear, two.clone()).validate().is_ok());
        assert!(GradientConfig::new(GradientKind::Linear, vec![Colour::BLACK])
            .validate()
            .is_err());
        assert!(GradientConfig::new(GradientKind::Radial, two.clone())
            .with_stops(vec![0.0])
            .validate()
            .is_err());
        assert!(GradientConfig::new(GradientKind::Conic, two)
            .with_stops(vec![0.0, 120.0])
            .validate()
            .is_err());
    }

    #[test]
    fn test_gradient_config_type_field() {
        let json = r##"{"colors": ["#000000", "#ffffff"], "stops": [0, 100], "type": "radial"}"##;
        let config: GradientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.kind, GradientKind::Radial);
        assert_eq!(config.angle, 90.0);
    }

    #[test]
    fn test_even_stops() {
        assert_eq!(even_stops(2), vec![0.0, 100.0]);
        assert_eq!(even_stops(3), vec![0.0, 50.0, 100.0]);
        assert_eq!(even_stops(4), vec![0.0, 33.0, 67.0, 100.0]);
        assert_eq!(even_stops(1), vec![0.0]);
    }

    #[test]
    fn test_resolution_parse() {
        assert_eq!("1080x1920".parse::<Resolution>().unwrap(), Resolution::new(1080, 1920));
        assert_eq!("640X480".parse::<Resolution>().unwrap(), Resolution::new(640, 480));
        assert!("0x10".parse::<Resolution>().is_err());
        assert!("wide".parse::<Resolution>().is_err());
        assert_eq!(Resolution::default().to_string(), "1920x1080");
    }

    #[test]
    fn test_resolution_upper_bound() {
        assert!(Resolution::MAX.validate().is_ok());
        assert!(Resolution::new(7681, 100).validate().is_err());
        assert!(Resolution::new(100, 4321).validate().is_err());
        assert!(matches!(
            "100000x100000".parse::<Resolution>(),
            Err(CraftError::InvalidArgument { .. })
        ));
    }
}
