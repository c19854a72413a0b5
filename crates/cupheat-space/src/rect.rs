//! Axis-aligned integer rectangles.

use cupheat_core::Coord;

use crate::error::SpaceError;
use crate::lattice::Lattice;

/// Half-open rectangle `[x, x + width) × [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Extent along x.
    pub width: i32,
    /// Extent along y.
    pub height: i32,
}

impl Rect {
    /// Construct a rectangle, rejecting non-positive extents.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, SpaceError> {
        if width <= 0 || height <= 0 {
            return Err(SpaceError::InvalidRect {
                reason: format!("extent {width}x{height} must be positive"),
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Top-left corner.
    pub fn origin(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Bottom-right corner (inclusive).
    pub fn far_corner(&self) -> Coord {
        Coord::new(self.x + self.width - 1, self.y + self.height - 1)
    }

    /// Shrink by `margin` on all four sides.
    ///
    /// Fails when nothing would remain, i.e. `2 * margin >= extent` on
    /// either axis.
    pub fn inset(&self, margin: i32) -> Result<Self, SpaceError> {
        if margin < 0 {
            return Err(SpaceError::InvalidRect {
                reason: format!("inset margin {margin} is negative"),
            });
        }
        Self::new(
            self.x + margin,
            self.y + margin,
            self.width - 2 * margin,
            self.height - 2 * margin,
        )
        .map_err(|_| SpaceError::InvalidRect {
            reason: format!(
                "inset of {margin} leaves no interior in a {}x{} rectangle",
                self.width, self.height
            ),
        })
    }

    /// Whether `coord` lies inside the rectangle.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.x
            && coord.x < self.x + self.width
            && coord.y >= self.y
            && coord.y < self.y + self.height
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every coordinate inside the rectangle, column by column.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *self;
        (x..x + width).flat_map(move |cx| (y..y + height).map(move |cy| Coord::new(cx, cy)))
    }

    /// Check that both corners lie within `lattice`.
    ///
    /// Reports the first corner found outside.
    pub fn check_within(&self, lattice: &Lattice) -> Result<(), SpaceError> {
        lattice.try_index(self.origin())?;
        lattice.try_index(self.far_corner())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cup_interior() {
        let cup = Rect::new(-6, -8, 13, 13).unwrap();
        let inner = cup.inset(3).unwrap();
        assert_eq!(inner, Rect::new(-3, -5, 7, 7).unwrap());
        assert_eq!(cup.far_corner(), Coord::new(6, 4));
        assert_eq!(inner.far_corner(), Coord::new(3, 1));
        assert_eq!(inner.area(), 49);
        assert_eq!(inner.coords().count(), 49);
    }

    #[test]
    fn inset_that_consumes_everything_fails() {
        let r = Rect::new(0, 0, 6, 10).unwrap();
        assert!(r.inset(2).is_ok());
        assert!(matches!(r.inset(3), Err(SpaceError::InvalidRect { .. })));
        assert!(r.inset(-1).is_err());
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0, 0, 2, 2).unwrap();
        assert!(r.contains(Coord::new(1, 1)));
        assert!(!r.contains(Coord::new(2, 1)));
        assert!(!r.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn check_within_reports_far_corner() {
        let l = Lattice::new(-10, 10, -15, 15).unwrap();
        assert!(Rect::new(-6, -8, 13, 13).unwrap().check_within(&l).is_ok());
        let err = Rect::new(5, 0, 13, 2).unwrap().check_within(&l).unwrap_err();
        assert!(matches!(
            err,
            SpaceError::CoordOutOfBounds { coord, .. } if coord == Coord::new(17, 1)
        ));
    }
}
