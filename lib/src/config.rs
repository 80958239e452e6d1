use crate::palette::parse_color;
use std::path::PathBuf;

/// Settings for one wallpaper run
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Canvas size in pixels
    pub width: u32,              // default 1242 (iPhone XS Max)
    pub height: u32,             // default 2688

    /// Grid
    pub count: u32,              // lattice cells per axis, 1-512, default 45
    pub margin: f32,             // pixels kept clear on each edge, default 0
    pub keep_probability: f64,   // 0.0-1.0, default 0.5
    pub radius_frequency: f64,   // noise frequency for the radius sample, default 2.0

    /// Colors
    pub background: String,      // default "#212529"

    /// Font
    pub font_family: String,     // default "Arial"
    pub font_path: Option<PathBuf>,

    /// Seeds, random when absent
    pub seed: Option<u64>,
    pub filter_seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 1242,
            height: 2688,

            count: 45,
            margin: 0.0,
            keep_probability: 0.5,
            radius_frequency: 2.0,

            background: "#212529".to_string(),

            font_family: "Arial".to_string(),
            font_path: None,

            seed: None,
            filter_seed: None,
        }
    }
}

impl SketchConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "dimensions must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if self.count < 1 || self.count > 512 {
            return Err(format!("count must be between 1 and 512, got {}", self.count));
        }
        let half = self.width.min(self.height) as f32 / 2.0;
        if !(0.0..half).contains(&self.margin) {
            return Err(format!(
                "margin must be between 0 and {} (exclusive), got {}",
                half, self.margin
            ));
        }
        if !(0.0..=1.0).contains(&self.keep_probability) {
            return Err(format!(
                "keep_probability must be between 0.0 and 1.0, got {}",
                self.keep_probability
            ));
        }
        if !(self.radius_frequency > 0.0 && self.radius_frequency.is_finite()) {
            return Err(format!(
                "radius_frequency must be positive, got {}",
                self.radius_frequency
            ));
        }
        if parse_color(&self.background).is_none() {
            return Err(format!("background is not a color: {:?}", self.background));
        }
        if self.font_family.trim().is_empty() && self.font_path.is_none() {
            return Err("font_family must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SketchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (1242, 2688));
        assert_eq!(config.count, 45);
    }

    #[test]
    fn test_invalid_count() {
        let mut config = SketchConfig::default();
        config.count = 0;
        assert!(config.validate().is_err());

        config.count = 513;
        assert!(config.validate().is_err());

        config.count = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_keep_probability() {
        let mut config = SketchConfig::default();
        config.keep_probability = -0.1;
        assert!(config.validate().is_err());

        config.keep_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_margin() {
        let mut config = SketchConfig::default();
        config.margin = 621.0; // half of 1242
        assert!(config.validate().is_err());

        config.margin = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_background() {
        let config = SketchConfig {
            background: "dark grey".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("background"));
    }

    #[test]
    fn test_empty_family_needs_path() {
        let mut config = SketchConfig {
            font_family: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.font_path = Some(PathBuf::from("/tmp/face.ttf"));
        assert!(config.validate().is_ok());
    }
}
