//! Trial parameters and identifiers.
//!
//! A trial is one combination of cup material, beverage temperature and
//! air temperature. Hosts usually pick temperatures from the qualitative
//! [`TemperatureLabel`] table and name the trial with a [`TrialId`] such
//! as `Clay-HotBev-ColdAir`. The engine itself only needs the numbers.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── TemperatureLabel ───────────────────────────────────────────────

/// Qualitative starting temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureLabel {
    /// 90 °C.
    Hot,
    /// 40 °C.
    Warm,
    /// 5 °C.
    Cold,
}

impl TemperatureLabel {
    /// All labels, hottest first.
    pub const ALL: [Self; 3] = [Self::Hot, Self::Warm, Self::Cold];

    /// Numeric temperature in °C.
    pub fn celsius(self) -> f64 {
        match self {
            Self::Hot => 90.0,
            Self::Warm => 40.0,
            Self::Cold => 5.0,
        }
    }

    /// Label text, e.g. `"Hot"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Warm => "Warm",
            Self::Cold => "Cold",
        }
    }
}

impl fmt::Display for TemperatureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureLabel {
    type Err = ParseTrialIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hot" => Ok(Self::Hot),
            "Warm" => Ok(Self::Warm),
            "Cold" => Ok(Self::Cold),
            other => Err(ParseTrialIdError::UnknownLabel(other.to_string())),
        }
    }
}

// ── TrialId ────────────────────────────────────────────────────────

/// `<Material>-<Beverage>Bev-<Air>Air`, e.g. `Clay-HotBev-ColdAir`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrialId {
    /// Cup material name.
    pub material: String,
    /// Beverage temperature text.
    pub beverage: String,
    /// Air temperature text.
    pub air: String,
}

impl TrialId {
    /// Build an identifier from its parts.
    pub fn new(
        material: impl Into<String>,
        beverage: impl Into<String>,
        air: impl Into<String>,
    ) -> Self {
        Self {
            material: material.into(),
            beverage: beverage.into(),
            air: air.into(),
        }
    }

    /// Parameters for this trial, resolving temperature texts as labels.
    pub fn to_params(&self) -> Result<TrialParams, ParseTrialIdError> {
        Ok(TrialParams::labelled(
            self.material.clone(),
            self.beverage.parse()?,
            self.air.parse()?,
        ))
    }
}

impl fmt::Display for TrialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}Bev-{}Air", self.material, self.beverage, self.air)
    }
}

impl FromStr for TrialId {
    type Err = ParseTrialIdError;

    /// Splits at the last `-…Air` and the last `-…Bev` before it, so the
    /// material may itself contain dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseTrialIdError::Malformed(s.to_string());
        let rest = s.strip_suffix("Air").ok_or_else(malformed)?;
        let (head, air) = rest.rsplit_once('-').ok_or_else(malformed)?;
        let head = head.strip_suffix("Bev").ok_or_else(malformed)?;
        let (material, beverage) = head.rsplit_once('-').ok_or_else(malformed)?;
        Ok(Self::new(material, beverage, air))
    }
}

/// Errors from parsing a [`TrialId`] or [`TemperatureLabel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTrialIdError {
    /// The text does not have the `<M>-<B>Bev-<A>Air` shape.
    Malformed(String),
    /// A temperature text is not `Hot`, `Warm`, or `Cold`.
    UnknownLabel(String),
}

impl fmt::Display for ParseTrialIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "'{s}' is not of the form <Material>-<Temp>Bev-<Temp>Air"),
            Self::UnknownLabel(s) => write!(f, "unknown temperature label '{s}'"),
        }
    }
}

impl Error for ParseTrialIdError {}

// ── TrialParams ────────────────────────────────────────────────────

/// Initial conditions of one trial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialParams {
    /// Cup material; `None` for an air-only world.
    pub material: Option<String>,
    /// Beverage starting temperature; `None` leaves the cup empty.
    pub liquid_temperature: Option<f64>,
    /// Air starting temperature.
    pub air_temperature: f64,
    /// Label the beverage temperature was chosen from, if any.
    pub liquid_label: Option<TemperatureLabel>,
    /// Label the air temperature was chosen from, if any.
    pub air_label: Option<TemperatureLabel>,
}

impl TrialParams {
    /// Numeric conditions without labels.
    pub fn new(
        material: Option<String>,
        liquid_temperature: Option<f64>,
        air_temperature: f64,
    ) -> Self {
        Self {
            material,
            liquid_temperature,
            air_temperature,
            liquid_label: None,
            air_label: None,
        }
    }

    /// Conditions picked from the label table.
    pub fn labelled(
        material: impl Into<String>,
        beverage: TemperatureLabel,
        air: TemperatureLabel,
    ) -> Self {
        Self {
            material: Some(material.into()),
            liquid_temperature: Some(beverage.celsius()),
            air_temperature: air.celsius(),
            liquid_label: Some(beverage),
            air_label: Some(air),
        }
    }

    /// Beverage temperature as text: the label if there is one, otherwise
    /// the number.
    pub fn liquid_text(&self) -> Option<String> {
        match (self.liquid_label, self.liquid_temperature) {
            (Some(l), _) => Some(l.to_string()),
            (None, Some(t)) => Some(format_temperature(t)),
            (None, None) => None,
        }
    }

    /// Air temperature as text.
    pub fn air_text(&self) -> String {
        self.air_label
            .map(|l| l.to_string())
            .unwrap_or_else(|| format_temperature(self.air_temperature))
    }

    /// Identifier for this trial.
    ///
    /// Unset material or beverage appear as `None`.
    pub fn trial_id(&self) -> TrialId {
        TrialId::new(
            self.material.clone().unwrap_or_else(|| "None".into()),
            self.liquid_text().unwrap_or_else(|| "None".into()),
            self.air_text(),
        )
    }
}

fn format_temperature(t: f64) -> String {
    if t.fract() == 0.0 {
        format!("{t:.0}")
    } else {
        t.to_string()
    }
}
