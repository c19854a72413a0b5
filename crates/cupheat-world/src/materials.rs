//! Name → conductivity tables for cup materials and liquids.

use indexmap::IndexMap;

use cupheat_core::WorldError;

/// Conductivity of ambient air.
pub const AIR_CONDUCTIVITY: f64 = 100.0;

/// Ordered mapping from a display name to a thermal conductivity.
///
/// Insertion order is preserved so listings come out in the order the
/// entries were registered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConductivityTable {
    entries: IndexMap<String, f64>,
}

impl ConductivityTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an entry. Returns the previous conductivity.
    pub fn insert(&mut self, name: impl Into<String>, conductivity: f64) -> Option<f64> {
        self.entries.insert(name.into(), conductivity)
    }

    /// Conductivity for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ConductivityTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(n, k)| (n.into(), k)).collect(),
        }
    }
}

/// Every conductivity the world builder may need.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialCatalog {
    /// Cup wall materials.
    pub materials: ConductivityTable,
    /// Beverages.
    pub liquids: ConductivityTable,
    /// Conductivity assigned to every air cell.
    pub air: f64,
}

impl MaterialCatalog {
    /// The six cup materials and the single liquid of the cup experiment.
    pub fn reference() -> Self {
        Self {
            materials: [
                ("Aluminum", 200.0),
                ("Wood", 10.0),
                ("Styrofoam", 1.0),
                ("Clay", 20.0),
                ("Glass", 40.0),
                ("Plastic", 20.0),
            ]
            .into_iter()
            .collect(),
            liquids: [("Water", 100.0)].into_iter().collect(),
            air: AIR_CONDUCTIVITY,
        }
    }

    /// Conductivity of a cup material.
    pub fn material(&self, name: &str) -> Result<f64, WorldError> {
        self.materials
            .get(name)
            .ok_or_else(|| WorldError::UnknownMaterial { name: name.into() })
    }

    /// Conductivity of a liquid.
    pub fn liquid(&self, name: &str) -> Result<f64, WorldError> {
        self.liquids
            .get(name)
            .ok_or_else(|| WorldError::UnknownLiquid { name: name.into() })
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_conductivities() {
        let cat = MaterialCatalog::reference();
        assert_eq!(cat.material("Aluminum"), Ok(200.0));
        assert_eq!(cat.material("Styrofoam"), Ok(1.0));
        assert_eq!(cat.material("Clay"), cat.material("Plastic"));
        assert_eq!(cat.liquid("Water"), Ok(100.0));
        assert_eq!(cat.air, 100.0);
    }

    #[test]
    fn names_keep_insertion_order() {
        let cat = MaterialCatalog::reference();
        let names: Vec<&str> = cat.materials.names().collect();
        assert_eq!(
            names,
            ["Aluminum", "Wood", "Styrofoam", "Clay", "Glass", "Plastic"]
        );
    }

    #[test]
    fn unknown_names_are_errors() {
        let cat = MaterialCatalog::reference();
        assert_eq!(
            cat.material("aluminum"),
            Err(WorldError::UnknownMaterial {
                name: "aluminum".into()
            })
        );
        assert!(matches!(
            cat.liquid("Coffee"),
            Err(WorldError::UnknownLiquid { .. })
        ));
    }

    #[test]
    fn insert_replaces() {
        let mut t = ConductivityTable::new();
        assert!(t.is_empty());
        assert_eq!(t.insert("Copper", 400.0), None);
        assert_eq!(t.insert("Copper", 385.0), Some(400.0));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("Copper"), Some(385.0));
    }
}
