use serde::{Deserialize, Serialize};

use crate::{
    model::{Rgba, TrafficError},
    pipeline::ColorScale,
};

pub const DEFAULT_HOUR: u8 = 18;
pub const DEFAULT_TOOLTIP: &str = "Traffic H3: {h3}\nVisitors: {count_visitor}";

/// camera parameters applied on top of the computed map center.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ViewConfiguration {
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            zoom: 13.0,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

/// defines the presentation of a traffic dashboard render. any field
/// omitted from a configuration file keeps its default.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct DashboardConfiguration {
    pub default_hour: u8,
    pub view: ViewConfiguration,
    pub map_provider: String,
    pub map_style: String,
    pub width: u32,
    pub height: u32,
    pub color_scale: ColorScale,
    pub home_fill_color: Rgba,
    pub arc_source_color: Rgba,
    pub arc_target_color: Rgba,
    pub arc_width: f64,
    pub tooltip: String,
}

impl Default for DashboardConfiguration {
    fn default() -> Self {
        Self {
            default_hour: DEFAULT_HOUR,
            view: Default::default(),
            map_provider: String::from("carto"),
            map_style: String::from("light"),
            width: 1200,
            height: 3000,
            color_scale: Default::default(),
            home_fill_color: Rgba::new(0, 200, 255, 180),
            arc_source_color: Rgba::new(0, 200, 255, 200),
            arc_target_color: Rgba::new(255, 100, 100, 200),
            arc_width: 4.0,
            tooltip: String::from(DEFAULT_TOOLTIP),
        }
    }
}

impl DashboardConfiguration {
    /// reads a configuration file if one is provided, otherwise the defaults.
    pub fn from_optional_file(f: Option<&String>) -> Result<Self, TrafficError> {
        match f {
            None => Ok(DashboardConfiguration::default()),
            Some(f) => {
                log::info!("reading dashboard configuration from {f}");
                DashboardConfiguration::try_from(f)
            }
        }
    }

    fn validate(self) -> Result<Self, TrafficError> {
        if self.default_hour > 23 {
            return Err(TrafficError::ConfigurationError(format!(
                "default_hour must be in range [0, 23], found {}",
                self.default_hour
            )));
        }
        self.color_scale
            .validate()
            .map_err(TrafficError::ConfigurationError)?;
        Ok(self)
    }
}

impl TryFrom<&String> for DashboardConfiguration {
    type Error = TrafficError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: DashboardConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TrafficError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(TrafficError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let conf: DashboardConfiguration = toml::from_str(
            r#"
            map_style = "dark"
            arc_width = 2.5

            [view]
            zoom = 11.0
            "#,
        )
        .unwrap();
        assert_eq!(conf.map_style, "dark");
        assert_eq!(conf.arc_width, 2.5);
        assert_eq!(conf.view.zoom, 11.0);
        assert_eq!(conf.view.pitch, 0.0);
        assert_eq!(conf.map_provider, "carto");
        assert_eq!(conf.default_hour, 18);
        assert_eq!(conf.color_scale, ColorScale::default());
    }

    #[test]
    fn test_json_colors() {
        let conf: DashboardConfiguration =
            serde_json::from_str(r#"{ "home_fill_color": [1, 2, 3, 4] }"#).unwrap();
        assert_eq!(conf.home_fill_color, Rgba::new(1, 2, 3, 4));
        assert_eq!(conf.arc_target_color, Rgba::new(255, 100, 100, 200));
    }

    #[test]
    fn test_invalid_default_hour() {
        let conf = DashboardConfiguration {
            default_hour: 24,
            ..Default::default()
        };
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_nan_color_scale_is_rejected() {
        for text in ["[color_scale]\nepsilon = nan\n", "[color_scale]\nrange = nan\n"] {
            let conf: DashboardConfiguration = toml::from_str(text).unwrap();
            assert!(matches!(
                conf.validate(),
                Err(TrafficError::ConfigurationError(_))
            ));
        }
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let conf = DashboardConfiguration::try_from(&String::from("pilot_traffic.toml")).unwrap();
        assert_eq!(conf, DashboardConfiguration::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DashboardConfiguration::try_from(&String::from("dashboard.yaml"));
        assert!(matches!(result, Err(TrafficError::ConfigurationError(_))));
    }
}
