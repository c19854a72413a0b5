//! The per-tick heat-flow update.
//!
//! For each cell `c` in visitation order, with in-bounds neighbours `n`
//! taken north, east, south, west:
//!
//! ```text
//! energy = Σ flow_speed * min(K_n, K_c) / update_rate * (T_n - T_c) / temperature_range
//! T_c   <- clamp(T_c + flow_speed * energy, temperature_min, temperature_max)
//! ```
//!
//! `flow_speed` appears in both lines. The write is immediate, so the
//! result depends on the visitation order.

use std::fmt;

use tracing::debug;

use cupheat_core::{GridSpec, TemperatureField};
use cupheat_space::{Lattice, Neighbours};
use cupheat_world::Grid;

use crate::error::DiffusionError;
use crate::order::{Shuffled, VisitOrder};

/// Advances a [`Grid`] by one tick of in-place diffusion.
///
/// Neighbour lists are computed once at build time. Constructed via
/// [`DiffusionStepper::builder`].
pub struct DiffusionStepper {
    flow_speed: f64,
    update_rate: f64,
    temperature_range: f64,
    temperature_min: f64,
    temperature_max: f64,
    lattice: Lattice,
    neighbours: Vec<Neighbours>,
    order_buf: Vec<usize>,
    order: Box<dyn VisitOrder>,
}

/// Builder for [`DiffusionStepper`].
///
/// Required field: `spec`.
pub struct DiffusionStepperBuilder {
    spec: Option<GridSpec>,
    order: Option<Box<dyn VisitOrder>>,
}

impl DiffusionStepper {
    /// Create a new builder.
    pub fn builder() -> DiffusionStepperBuilder {
        DiffusionStepperBuilder {
            spec: None,
            order: None,
        }
    }

    /// Run one tick over `grid`.
    ///
    /// # Errors
    ///
    /// [`DiffusionError::GridMismatch`] if `grid` has different bounds from
    /// the `GridSpec` this stepper was built with; [`DiffusionError::InvalidOrder`]
    /// if the order source fails. The grid is untouched on error.
    pub fn step(&mut self, grid: &mut Grid) -> Result<(), DiffusionError> {
        if grid.lattice() != &self.lattice {
            return Err(DiffusionError::GridMismatch {
                expected: self.lattice.cell_count(),
                actual: grid.cell_count(),
            });
        }
        self.order.fill(&mut self.order_buf)?;

        let (temps, conds) = grid.temperatures_mut();
        for &c in &self.order_buf {
            let t_c = temps[c];
            let k_c = conds[c];
            let mut energy = 0.0;
            for &n in &self.neighbours[c] {
                let coupling = conds[n].min(k_c);
                energy += self.flow_speed * coupling / self.update_rate * (temps[n] - t_c)
                    / self.temperature_range;
            }
            temps[c] = (t_c + self.flow_speed * energy)
                .clamp(self.temperature_min, self.temperature_max);
        }
        Ok(())
    }

    /// Seed of the visitation order, if it is random.
    pub fn seed(&self) -> Option<u64> {
        self.order.seed()
    }

    /// Number of cells this stepper expects.
    pub fn cell_count(&self) -> usize {
        self.neighbours.len()
    }
}

impl fmt::Debug for DiffusionStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffusionStepper")
            .field("flow_speed", &self.flow_speed)
            .field("update_rate", &self.update_rate)
            .field("cells", &self.neighbours.len())
            .field("seed", &self.order.seed())
            .finish_non_exhaustive()
    }
}

impl DiffusionStepperBuilder {
    /// Set the grid configuration (required).
    pub fn spec(mut self, spec: GridSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    /// Set the visitation order source (default: entropy-seeded [`Shuffled`]).
    pub fn order(mut self, order: impl VisitOrder + 'static) -> Self {
        self.order = Some(Box::new(order));
        self
    }

    /// Shorthand for `.order(Shuffled::seeded(seed))`.
    pub fn seed(self, seed: u64) -> Self {
        self.order(Shuffled::seeded(seed))
    }

    /// Build the stepper, validating configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `spec` is missing or fails
    /// [`GridSpec::validate`].
    pub fn build(self) -> Result<DiffusionStepper, String> {
        let spec = self.spec.ok_or_else(|| "spec is required".to_string())?;
        spec.validate().map_err(|e| e.to_string())?;
        let lattice = Lattice::from_spec(&spec).map_err(|e| e.to_string())?;
        let neighbours = lattice.neighbour_table();
        let order = self
            .order
            .unwrap_or_else(|| Box::new(Shuffled::from_entropy()));

        debug!(
            cells = neighbours.len(),
            seed = ?order.seed(),
            "diffusion stepper ready"
        );
        Ok(DiffusionStepper {
            flow_speed: spec.flow_speed,
            update_rate: spec.update_rate,
            temperature_range: spec.temperature_range(),
            temperature_min: spec.temperature_min,
            temperature_max: spec.temperature_max,
            order_buf: vec![0; neighbours.len()],
            lattice,
            neighbours,
            order,
        })
    }
}
