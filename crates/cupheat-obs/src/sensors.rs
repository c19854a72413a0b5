//! The thermometer set attached to a trial.

use tracing::debug;

use cupheat_core::{TemperatureField, TickId};
use cupheat_space::Lattice;

use crate::error::ObsError;
use crate::plan::SamplingPlan;
use crate::series::{Series, SeriesPoint};
use crate::thermometer::{Reading, Thermometer, ThermometerSpec};

/// Thermometers resolved against a lattice, plus their recorded series.
#[derive(Clone, Debug, PartialEq)]
pub struct Sensors {
    plan: SamplingPlan,
    thermometers: Vec<Thermometer>,
    /// `series_slot[i]` is the index into `series` for thermometer `i`.
    series_slot: Vec<Option<usize>>,
    series: Vec<Series>,
    required_cells: usize,
}

impl Sensors {
    /// Place `specs` on `lattice`.
    ///
    /// # Errors
    ///
    /// [`ObsError::InvalidPlan`] for an unusable plan,
    /// [`ObsError::ThermometerOutOfBounds`] for a misplaced thermometer,
    /// [`ObsError::DuplicateLabel`] when two thermometers share a label.
    pub fn new(
        lattice: &Lattice,
        specs: Vec<ThermometerSpec>,
        plan: SamplingPlan,
    ) -> Result<Self, ObsError> {
        plan.validate()?;
        let mut thermometers = Vec::with_capacity(specs.len());
        let mut series_slot = Vec::with_capacity(specs.len());
        let mut series = Vec::new();
        for spec in specs {
            if thermometers
                .iter()
                .any(|t: &Thermometer| t.label() == spec.label)
            {
                return Err(ObsError::DuplicateLabel { label: spec.label });
            }
            let Some(index) = lattice.index_of(spec.coord) else {
                return Err(ObsError::ThermometerOutOfBounds {
                    label: spec.label,
                    coord: spec.coord,
                });
            };
            if spec.records_series {
                series_slot.push(Some(series.len()));
                series.push(Series::new(spec.label.clone()));
            } else {
                series_slot.push(None);
            }
            thermometers.push(Thermometer::new(spec, index));
        }
        Ok(Self {
            plan,
            thermometers,
            series_slot,
            series,
            required_cells: lattice.cell_count(),
        })
    }

    /// The reference beverage and air thermometers with the reference plan.
    pub fn reference(lattice: &Lattice) -> Result<Self, ObsError> {
        Self::new(lattice, ThermometerSpec::reference(), SamplingPlan::reference())
    }

    /// Read every thermometer and record series points if `tick` is a
    /// sample tick.
    ///
    /// `tick` is the number of ticks completed before the step that
    /// produced `field`, so the first call (tick 0) records time 0.
    pub fn sample<F>(&mut self, field: &F, tick: TickId) -> Result<Vec<Reading>, ObsError>
    where
        F: TemperatureField + ?Sized,
    {
        self.check_field(field)?;
        let temps = field.temperatures();
        let record = self.plan.is_sample_tick(tick.0);
        let time = self.plan.minutes_at(tick.0);
        let mut readings = Vec::with_capacity(self.thermometers.len());
        for (t, slot) in self.thermometers.iter_mut().zip(&self.series_slot) {
            let temperature = temps[t.index()];
            readings.push(t.record(temperature));
            if let (true, Some(slot)) = (record, *slot) {
                self.series[slot].push(SeriesPoint::new(time, temperature));
                debug!(tick = tick.0, time, temperature, label = t.label(), "series sample");
            }
        }
        Ok(readings)
    }

    /// Read every thermometer without recording anything.
    pub fn read<F>(&self, field: &F) -> Result<Vec<Reading>, ObsError>
    where
        F: TemperatureField + ?Sized,
    {
        self.check_field(field)?;
        let temps = field.temperatures();
        Ok(self
            .thermometers
            .iter()
            .map(|t| Reading {
                label: t.label().to_string(),
                coord: t.spec().coord,
                temperature: temps[t.index()],
            })
            .collect())
    }

    /// Sampling plan in force.
    pub fn plan(&self) -> &SamplingPlan {
        &self.plan
    }

    /// Placed thermometers, in construction order.
    pub fn thermometers(&self) -> &[Thermometer] {
        &self.thermometers
    }

    /// Recorded series, one per recording thermometer.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Series recorded by the thermometer labelled `label`.
    pub fn series_for(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Consume the sensors, keeping only the series.
    pub fn into_series(self) -> Vec<Series> {
        self.series
    }

    fn check_field<F: TemperatureField + ?Sized>(&self, field: &F) -> Result<(), ObsError> {
        let actual = field.temperatures().len();
        if actual < self.required_cells {
            return Err(ObsError::FieldTooSmall {
                required: self.required_cells,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupheat_core::{Coord, GridSpec};
    use cupheat_test_utils::MockField;

    fn lattice() -> Lattice {
        Lattice::from_spec(&GridSpec::reference()).unwrap()
    }

    fn field_with(beverage: f64, air: f64) -> MockField {
        let l = lattice();
        let mut f = MockField::filled(l.cell_count(), 0.0);
        f.set(l.index_of(Coord::new(0, -1)).unwrap(), beverage);
        f.set(l.index_of(Coord::new(0, 7)).unwrap(), air);
        f
    }

    #[test]
    fn samples_every_thirtieth_tick() {
        let mut s = Sensors::reference(&lattice()).unwrap();
        for tick in 0..61 {
            let r = s
                .sample(&field_with(90.0 - tick as f64 * 0.1, 5.0), TickId(tick))
                .unwrap();
            assert_eq!(r.len(), 2);
        }
        let bev = s.series_for("beverage").unwrap();
        assert_eq!(bev.len(), 3);
        assert_eq!(bev.points[0], SeriesPoint::new(0.0, 90.0));
        assert!((bev.points[1].time - 2.0).abs() < 1e-12);
        assert!((bev.points[2].temperature - 84.0).abs() < 1e-9);
        assert!(s.series_for("air").is_none());
    }

    #[test]
    fn last_temperature_tracks_every_tick() {
        let mut s = Sensors::reference(&lattice()).unwrap();
        s.sample(&field_with(70.0, 10.0), TickId(7)).unwrap();
        assert_eq!(s.thermometers()[0].last_temperature(), Some(70.0));
        assert_eq!(s.thermometers()[1].last_temperature(), Some(10.0));
        assert!(s.series()[0].is_empty());
    }

    #[test]
    fn read_does_not_record() {
        let s = Sensors::reference(&lattice()).unwrap();
        let r = s.read(&field_with(61.0, 9.0)).unwrap();
        assert_eq!(r[0].temperature, 61.0);
        assert_eq!(r[1].temperature, 9.0);
        assert!(s.series()[0].is_empty());
        assert_eq!(s.thermometers()[0].last_temperature(), None);
    }

    #[test]
    fn misplaced_thermometer_rejected() {
        let specs = vec![ThermometerSpec::new("far", Coord::new(0, 40), true)];
        assert_eq!(
            Sensors::new(&lattice(), specs, SamplingPlan::reference()),
            Err(ObsError::ThermometerOutOfBounds {
                label: "far".into(),
                coord: Coord::new(0, 40)
            })
        );
    }

    #[test]
    fn duplicate_labels_rejected() {
        let specs = vec![
            ThermometerSpec::new("a", Coord::new(0, 0), true),
            ThermometerSpec::new("a", Coord::new(1, 0), false),
        ];
        assert!(matches!(
            Sensors::new(&lattice(), specs, SamplingPlan::reference()),
            Err(ObsError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn short_field_rejected() {
        let mut s = Sensors::reference(&lattice()).unwrap();
        assert_eq!(
            s.sample(&MockField::filled(10, 0.0), TickId(0)),
            Err(ObsError::FieldTooSmall {
                required: 651,
                actual: 10
            })
        );
    }
}
