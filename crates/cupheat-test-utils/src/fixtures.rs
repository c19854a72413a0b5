//! Ready-made grids and specs.

use cupheat_core::{Coord, GridSpec};
use cupheat_world::{Grid, WorldBuilder};

/// Reference spec shrunk to `width × height` cells anchored at the origin.
pub fn small_spec(width: i32, height: i32) -> GridSpec {
    GridSpec {
        min_x: 0,
        max_x: width - 1,
        min_y: 0,
        max_y: height - 1,
        ..GridSpec::reference()
    }
}

/// Reference cup world: Aluminum cup, 90 °C water, 5 °C air.
pub fn aluminum_hot_cold() -> Grid {
    reference_world("Aluminum", 90.0, 5.0)
}

/// Reference cup world with the given material and temperatures.
pub fn reference_world(material: &str, beverage: f64, air: f64) -> Grid {
    WorldBuilder::reference()
        .build_world(Some(material), Some(beverage), air)
        .unwrap()
}

/// Uniform air grid at `temperature`.
pub fn uniform(spec: GridSpec, temperature: f64) -> Grid {
    Grid::uniform(spec, temperature, 100.0).unwrap()
}

/// Uniform air grid at `background` with one cell at `peak`.
pub fn hot_spot(spec: GridSpec, at: Coord, background: f64, peak: f64) -> Grid {
    let mut g = uniform(spec, background);
    g.set_temperature(at, peak).unwrap();
    g
}
