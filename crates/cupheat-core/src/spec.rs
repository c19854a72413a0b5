//! Immutable grid configuration.

use serde::{Deserialize, Serialize};

use crate::error::GridSpecError;

/// Bounds, temperature domain, and stepping constants for one trial.
///
/// Bounds are inclusive on both ends. `update_rate` is the frame-rate
/// divisor of the heat-flow rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Smallest x coordinate.
    pub min_x: i32,
    /// Largest x coordinate.
    pub max_x: i32,
    /// Smallest y coordinate.
    pub min_y: i32,
    /// Largest y coordinate.
    pub max_y: i32,
    /// Lower clamp for every cell temperature.
    pub temperature_min: f64,
    /// Upper clamp for every cell temperature.
    pub temperature_max: f64,
    /// Heat-flow multiplier.
    pub flow_speed: f64,
    /// Number of ticks in a complete trial.
    pub max_ticks: u64,
    /// Frame-rate divisor of the heat-flow rule.
    pub update_rate: f64,
}

impl GridSpec {
    /// The configuration used by the cup experiment:
    /// a 21×31 grid spanning 0–100 °C, 900 ticks at 120 updates per second.
    pub fn reference() -> Self {
        Self {
            min_x: -10,
            max_x: 10,
            min_y: -15,
            max_y: 15,
            temperature_min: 0.0,
            temperature_max: 100.0,
            flow_speed: 4.0,
            max_ticks: 900,
            update_rate: 120.0,
        }
    }

    /// `temperature_max - temperature_min`.
    pub fn temperature_range(&self) -> f64 {
        self.temperature_max - self.temperature_min
    }

    /// Number of columns (`max_x - min_x + 1`).
    pub fn width(&self) -> usize {
        (self.max_x as i64 - self.min_x as i64 + 1).max(0) as usize
    }

    /// Number of rows (`max_y - min_y + 1`).
    pub fn height(&self) -> usize {
        (self.max_y as i64 - self.min_y as i64 + 1).max(0) as usize
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), GridSpecError> {
        if self.min_x > self.max_x {
            return Err(GridSpecError::InvertedBounds {
                axis: 'x',
                min: self.min_x,
                max: self.max_x,
            });
        }
        if self.min_y > self.max_y {
            return Err(GridSpecError::InvertedBounds {
                axis: 'y',
                min: self.min_y,
                max: self.max_y,
            });
        }
        for (name, value) in [
            ("temperature_min", self.temperature_min),
            ("temperature_max", self.temperature_max),
        ] {
            if !value.is_finite() {
                return Err(GridSpecError::InvalidParameter { name, value });
            }
        }
        if self.temperature_range() <= 0.0 {
            return Err(GridSpecError::EmptyTemperatureRange {
                min: self.temperature_min,
                max: self.temperature_max,
            });
        }
        for (name, value) in [
            ("flow_speed", self.flow_speed),
            ("update_rate", self.update_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridSpecError::InvalidParameter { name, value });
            }
        }
        if self.max_ticks == 0 {
            return Err(GridSpecError::ZeroTicks);
        }
        Ok(())
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_dimensions() {
        let spec = GridSpec::reference();
        assert_eq!(spec.width(), 21);
        assert_eq!(spec.height(), 31);
        assert_eq!(spec.cell_count(), 651);
        assert_eq!(spec.temperature_range(), 100.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let spec = GridSpec {
            min_x: 5,
            max_x: 4,
            ..GridSpec::reference()
        };
        assert!(matches!(
            spec.validate(),
            Err(GridSpecError::InvertedBounds { axis: 'x', .. })
        ));
    }

    #[test]
    fn zero_range_rejected() {
        let spec = GridSpec {
            temperature_max: 0.0,
            ..GridSpec::reference()
        };
        assert!(matches!(
            spec.validate(),
            Err(GridSpecError::EmptyTemperatureRange { .. })
        ));
    }

    #[test]
    fn non_positive_rate_rejected() {
        let spec = GridSpec {
            update_rate: 0.0,
            ..GridSpec::reference()
        };
        assert_eq!(
            spec.validate(),
            Err(GridSpecError::InvalidParameter {
                name: "update_rate",
                value: 0.0
            })
        );
        let spec = GridSpec {
            flow_speed: f64::NAN,
            ..GridSpec::reference()
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn zero_ticks_rejected() {
        let spec = GridSpec {
            max_ticks: 0,
            ..GridSpec::reference()
        };
        assert_eq!(spec.validate(), Err(GridSpecError::ZeroTicks));
    }

    #[test]
    fn single_cell_grid_is_valid() {
        let spec = GridSpec {
            min_x: 0,
            max_x: 0,
            min_y: 0,
            max_y: 0,
            ..GridSpec::reference()
        };
        assert!(spec.validate().is_ok());
        assert_eq!(spec.cell_count(), 1);
    }
}
