use cupheat_core::Coord;
use cupheat_space::{Lattice, Rect};

#[test]
fn degree_counts_follow_position() {
    let l = Lattice::new(-10, 10, -15, 15).unwrap();
    let degree = |x, y| l.neighbours(l.index_of(Coord::new(x, y)).unwrap()).len();

    assert_eq!(degree(0, 0), 4);
    assert_eq!(degree(-10, 0), 3);
    assert_eq!(degree(10, 0), 3);
    assert_eq!(degree(0, -15), 3);
    assert_eq!(degree(0, 15), 3);
    assert_eq!(degree(-10, -15), 2);
    assert_eq!(degree(10, 15), 2);
}

#[test]
fn total_edge_endpoints_match_grid_shape() {
    let l = Lattice::new(0, 3, 0, 2).unwrap();
    let endpoints: usize = l.neighbour_table().iter().map(|n| n.len()).sum();
    // 4 columns x 3 rows: 3*3 horizontal + 4*2 vertical edges, each counted twice.
    assert_eq!(endpoints, 2 * (3 * 3 + 4 * 2));
}

#[test]
fn one_wide_strip_never_wraps() {
    let l = Lattice::new(0, 0, 0, 4).unwrap();
    assert_eq!(l.neighbours(0).as_slice(), &[1]);
    assert_eq!(l.neighbours(4).as_slice(), &[3]);
    assert_eq!(l.neighbours(2).as_slice(), &[1, 3]);
}

#[test]
fn rect_coords_all_resolve_inside_lattice() {
    let l = Lattice::new(-10, 10, -15, 15).unwrap();
    let cup = Rect::new(-6, -8, 13, 13).unwrap();
    cup.check_within(&l).unwrap();
    assert!(cup.coords().all(|c| l.contains(c)));
}
