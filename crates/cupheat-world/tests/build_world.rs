use cupheat_core::{CellKind, Coord, TemperatureField};
use cupheat_world::{CupSpec, MaterialCatalog, WorldBuilder};
use proptest::prelude::*;

const MATERIALS: [&str; 6] = ["Aluminum", "Wood", "Styrofoam", "Clay", "Glass", "Plastic"];

proptest! {
    #[test]
    fn stamped_regions_match_cup_layout(
        m in 0usize..MATERIALS.len(),
        bev in 0.0f64..=100.0,
        air in 0.0f64..=100.0,
    ) {
        let builder = WorldBuilder::reference();
        let grid = builder.build_world(Some(MATERIALS[m]), Some(bev), air).unwrap();
        let layout = CupSpec::reference().layout(grid.lattice()).unwrap();
        let wall_k = MaterialCatalog::reference().material(MATERIALS[m]).unwrap();

        for cell in grid.cells() {
            if layout.liquid.contains(cell.coord) {
                prop_assert_eq!(cell.kind, CellKind::Liquid);
                prop_assert_eq!(cell.temperature, bev);
                prop_assert_eq!(cell.conductivity, 100.0);
            } else if layout.outer.contains(cell.coord) {
                prop_assert_eq!(cell.kind, CellKind::Wall);
                prop_assert_eq!(cell.temperature, air);
                prop_assert_eq!(cell.conductivity, wall_k);
            } else {
                prop_assert_eq!(cell.kind, CellKind::Air);
                prop_assert_eq!(cell.temperature, air);
                prop_assert_eq!(cell.conductivity, 100.0);
            }
        }
    }
}

#[test]
fn thermometer_sites_sit_in_liquid_and_air() {
    let grid = WorldBuilder::reference()
        .build_world(Some("Clay"), Some(90.0), 5.0)
        .unwrap();
    assert_eq!(grid.cell(Coord::new(0, -1)).unwrap().kind, CellKind::Liquid);
    assert_eq!(grid.cell(Coord::new(0, 7)).unwrap().kind, CellKind::Air);
    assert_eq!(grid.cell_count(), 651);
}
