use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::model::{AggregatedCell, Rgba};

/// the smallest and largest visitor count of an aggregate set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRange {
    pub min: u64,
    pub max: u64,
}

impl CountRange {
    /// None when there are no cells.
    pub fn from_cells(cells: &[AggregatedCell]) -> Option<CountRange> {
        match cells.iter().map(|c| c.count_visitor).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(CountRange { min: v, max: v }),
            MinMaxResult::MinMax(min, max) => Some(CountRange { min, max }),
        }
    }
}

/// linear color ramp from a light to a dark shade of red. the green and blue
/// channels fall from `light` toward `light - range` as the count grows,
/// never below `floor`, so the busiest cells stay visible but dark.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ColorScale {
    pub red: u8,
    pub light: f64,
    pub range: f64,
    pub floor: f64,
    pub alpha: u8,
    pub epsilon: f64,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            red: 255,
            light: 180.0,
            range: 130.0,
            floor: 50.0,
            alpha: 180,
            epsilon: 1e-6,
        }
    }
}

impl ColorScale {
    pub fn color(&self, count: u64, range: &CountRange) -> Rgba {
        let channel = self.channel(count, range);
        Rgba::new(self.red, channel, channel, self.alpha)
    }

    /// the shared green/blue channel value for a count. `epsilon` keeps the
    /// denominator positive when every count is equal, which puts them all
    /// at the light end.
    pub fn channel(&self, count: u64, range: &CountRange) -> u8 {
        let numerator = count as f64 - range.min as f64;
        let denominator = range.max as f64 - range.min as f64 + self.epsilon;
        let normalized = numerator / denominator;
        let value = (self.light - normalized * self.range).trunc();
        value
            .max(self.floor.trunc())
            .min(self.light.trunc())
            .clamp(0.0, 255.0) as u8
    }

    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("light", self.light),
            ("range", self.range),
            ("floor", self.floor),
            ("epsilon", self.epsilon),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!(
                "color_scale.{name} must be a finite number, found {value}"
            ));
        }
        if !(0.0..=255.0).contains(&self.light) {
            return Err(format!(
                "color_scale.light must be in range [0, 255], found {}",
                self.light
            ));
        }
        if !(0.0..=self.light).contains(&self.floor) {
            return Err(format!(
                "color_scale.floor must be in range [0, light], found {}",
                self.floor
            ));
        }
        if self.range < 0.0 {
            return Err(format!(
                "color_scale.range must be non-negative, found {}",
                self.range
            ));
        }
        if self.epsilon <= 0.0 {
            return Err(format!(
                "color_scale.epsilon must be positive, found {}",
                self.epsilon
            ));
        }
        Ok(())
    }
}
