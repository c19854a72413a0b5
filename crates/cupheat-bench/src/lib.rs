//! Benchmark profiles and utilities for the cupheat diffusion engine.
//!
//! Provides pre-built [`TrialConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: the 21x31 reference cup (651 cells)
//! - [`stress_profile`]: 101x151 grid (~15K cells) with a scaled-up cup
//! - [`trial_matrix`]: every material and label combination

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cupheat_core::{Coord, GridSpec};
use cupheat_engine::{TemperatureLabel, TrialConfig, TrialParams};
use cupheat_world::{CupSpec, MaterialCatalog};

/// The reference cup experiment with a fixed seed.
pub fn reference_profile(seed: u64) -> TrialConfig {
    TrialConfig::reference().with_seed(seed)
}

/// A 101x151 grid with a 61x61 cup and 15-cell walls.
///
/// Same constants and tick budget as [`reference_profile`] at roughly
/// 23x the cell count.
pub fn stress_profile(seed: u64) -> TrialConfig {
    let mut config = TrialConfig::reference().with_seed(seed);
    config.spec = GridSpec {
        min_x: -50,
        max_x: 50,
        min_y: -75,
        max_y: 75,
        ..GridSpec::reference()
    };
    config.cup = CupSpec {
        x: -30,
        y: -40,
        width: 61,
        height: 61,
        wall_thickness: 15,
        ..CupSpec::reference()
    };
    for t in &mut config.thermometers {
        t.coord = match t.label.as_str() {
            "beverage" => Coord::new(0, -10),
            _ => Coord::new(0, 35),
        };
    }
    config
}

/// Aluminum cup, hot beverage, cold air.
pub fn reference_params() -> TrialParams {
    TrialParams::labelled("Aluminum", TemperatureLabel::Hot, TemperatureLabel::Cold)
}

/// One labelled trial per material, beverage label and air label.
pub fn trial_matrix(catalog: &MaterialCatalog) -> Vec<TrialParams> {
    let mut out = Vec::new();
    for material in catalog.materials.names() {
        for bev in TemperatureLabel::ALL {
            for air in TemperatureLabel::ALL {
                out.push(TrialParams::labelled(material, bev, air));
            }
        }
    }
    out
}
