//! Serializable per-tick record for host applications.
//!
//! [`export_tick_state`] is a pure function of a finished [`Trial`] and a
//! tick index: it never touches the trial, so hosts can call it for any
//! tick in any order.

use serde::Serialize;

use cupheat_obs::SeriesPoint;

use crate::error::EngineError;
use crate::trial::Trial;

/// One thermometer reading, formatted for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermometerState {
    /// Thermometer label.
    pub id: String,
    /// Temperature with one decimal, e.g. `"87.3"`.
    pub temperature: String,
}

/// One series truncated to the exported tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesState {
    /// Trial identifier.
    pub id: String,
    /// Display name; the trial identifier.
    pub name: String,
    /// Thermometer the series belongs to.
    pub thermometer: String,
    /// Points sampled at or before the exported tick.
    pub data: Vec<SeriesPoint>,
}

/// Trial description with its truncated series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialState {
    /// Trial identifier, e.g. `Clay-HotBev-ColdAir`.
    pub id: String,
    /// Display name; the trial identifier.
    pub name: String,
    /// One entry per recording thermometer.
    pub series: Vec<SeriesState>,
}

/// What a host needs to show one tick of a trial.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickState {
    /// Exported tick.
    pub ticks: u64,
    /// Cup material, if any.
    pub material_text: Option<String>,
    /// Beverage temperature label or value.
    pub bev_temp_text: Option<String>,
    /// Air temperature label or value.
    pub air_temp_text: String,
    /// Material of the (single) cup.
    pub material0: Option<String>,
    /// Nominal starting temperature reported for the cup material.
    pub material0_initial_temperature: f64,
    /// Beverage starting temperature.
    pub liquid_initial_temperature: Option<f64>,
    /// Air starting temperature.
    pub air_initial_temperature: f64,
    /// Thermometer readings from the exported snapshot.
    pub thermometers: Vec<ThermometerState>,
    /// Trial and series data.
    pub trial: TrialState,
    /// Time axis position to highlight, in minutes.
    pub show_tooltip_on_x: f64,
    /// Whether the last sampling window has been reached.
    pub is_trial_completed: bool,
}

/// Export snapshot `tick` of `trial`, highlighting the same tick.
///
/// # Errors
///
/// [`EngineError::TickOutOfRange`] if `tick >= trial.len()`.
pub fn export_tick_state(trial: &Trial, tick: u64) -> Result<TickState, EngineError> {
    export_tick_state_highlighting(trial, tick, tick)
}

/// Export snapshot `data_tick`, placing the highlight at `highlight_tick`.
///
/// Series data and completion follow `data_tick`; thermometer readings
/// and the highlight follow `highlight_tick`. Replaying a completed trial
/// passes the last sampled tick as `data_tick` to show the whole series
/// while highlighting the tick being shown.
pub fn export_tick_state_highlighting(
    trial: &Trial,
    data_tick: u64,
    highlight_tick: u64,
) -> Result<TickState, EngineError> {
    // Both ticks must exist.
    trial.try_snapshot(data_tick)?;
    let readings = trial.readings_at(highlight_tick)?;

    let plan = trial.plan();
    let id = trial.id().to_string();
    let keep = plan.points_through(data_tick);
    let series = trial
        .series()
        .iter()
        .map(|s| SeriesState {
            id: id.clone(),
            name: id.clone(),
            thermometer: s.label.clone(),
            data: s.head(keep).to_vec(),
        })
        .collect();

    let params = trial.params();
    Ok(TickState {
        ticks: highlight_tick,
        material_text: params.material.clone(),
        bev_temp_text: params.liquid_text(),
        air_temp_text: params.air_text(),
        material0: params.material.clone(),
        material0_initial_temperature: trial.cup().nominal_material_temperature,
        liquid_initial_temperature: params.liquid_temperature,
        air_initial_temperature: params.air_temperature,
        thermometers: readings
            .iter()
            .map(|r| ThermometerState {
                id: r.label.clone(),
                temperature: r.display_temperature(),
            })
            .collect(),
        trial: TrialState {
            id: id.clone(),
            name: id,
            series,
        },
        show_tooltip_on_x: plan.minutes_at(highlight_tick),
        is_trial_completed: data_tick >= plan.max_ticks.saturating_sub(plan.sample_interval),
    })
}
