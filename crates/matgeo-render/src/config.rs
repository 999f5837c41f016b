// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Figure Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use matgeo_types::error::GeoResult;
use serde::{Deserialize, Serialize};

/// RGB colour triple.
pub type Rgb = [u8; 3];

/// Figure appearance. Every field is defaulted, so `{}` is a valid
/// config file and `FigureConfig::default()` a usable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Canvas width in pixels (default: 800)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Canvas height in pixels (default: 600)
    #[serde(default = "default_height")]
    pub height: u32,
    /// Margin around the world rectangle, in pixels (default: 40)
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Background colour (default: white)
    #[serde(default = "default_background")]
    pub background: Rgb,
    /// Axis colour (default: black)
    #[serde(default = "default_axis_color")]
    pub axis_color: Rgb,
    /// Grid colour (default: light grey)
    #[serde(default = "default_grid_color")]
    pub grid_color: Rgb,
    /// Grid spacing in world units; 0 disables the grid (default: 1.0)
    #[serde(default = "default_grid_step")]
    pub grid_step: f64,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_margin() -> u32 {
    40
}
fn default_background() -> Rgb {
    [255, 255, 255]
}
fn default_axis_color() -> Rgb {
    [0, 0, 0]
}
fn default_grid_color() -> Rgb {
    [210, 210, 210]
}
fn default_grid_step() -> f64 {
    1.0
}

impl Default for FigureConfig {
    fn default() -> Self {
        FigureConfig {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            background: default_background(),
            axis_color: default_axis_color(),
            grid_color: default_grid_color(),
            grid_step: default_grid_step(),
        }
    }
}

impl FigureConfig {
    /// Load from a JSON file; missing fields fall back to defaults.
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Square canvas, handy for circle and conic figures.
    pub fn square(side: u32) -> Self {
        FigureConfig {
            width: side,
            height: side,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let cfg: FigureConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.width, 800);
        assert_eq!(cfg.height, 600);
        assert_eq!(cfg.background, [255, 255, 255]);
        assert!((cfg.grid_step - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_override() {
        let cfg: FigureConfig =
            serde_json::from_str(r#"{"width": 640, "grid_step": 0.5}"#).unwrap();
        assert_eq!(cfg.width, 640);
        assert_eq!(cfg.height, 600);
        assert!((cfg.grid_step - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = FigureConfig::square(512);
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: FigureConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg2.width, 512);
        assert_eq!(cfg2.height, 512);
    }
}
