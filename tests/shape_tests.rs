//! Shape transform and library tests

use proptest::prelude::*;
use tetris_art::core::{ShapeError, ShapeLibrary, ShapeMatrix};
use tetris_art::types::Rotation;

fn matrix(rows: &[&[u8]]) -> ShapeMatrix {
    ShapeMatrix::from_rows(rows).unwrap()
}

fn arb_matrix() -> impl Strategy<Value = ShapeMatrix> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u8..2, cols), rows)
            .prop_map(|rows| ShapeMatrix::from_rows(&rows).unwrap())
    })
}

proptest! {
    #[test]
    fn rotation_has_period_four(m in arb_matrix()) {
        prop_assert_eq!(m.rotate().rotate().rotate().rotate(), m);
    }

    #[test]
    fn trim_is_idempotent(m in arb_matrix()) {
        let once = m.trim();
        prop_assert_eq!(once.trim(), once);
    }

    #[test]
    fn trim_keeps_every_filled_cell(m in arb_matrix()) {
        prop_assert_eq!(m.trim().filled_count(), m.filled_count());
    }

    #[test]
    fn active_shape_has_filled_borders(index in 0usize..7, turns in 0u32..8) {
        let library = ShapeLibrary::builtin();
        let shape = library.get(index).unwrap().active(Rotation::new(turns));
        let last_row = shape.rows() - 1;
        let last_col = shape.cols() - 1;
        prop_assert!((0..shape.cols()).any(|c| shape.is_filled(0, c)));
        prop_assert!((0..shape.cols()).any(|c| shape.is_filled(last_row, c)));
        prop_assert!((0..shape.rows()).any(|r| shape.is_filled(r, 0)));
        prop_assert!((0..shape.rows()).any(|r| shape.is_filled(r, last_col)));
    }
}

#[test]
fn test_rotate_clockwise() {
    // J: [[1,0,0],[1,1,1]] turned clockwise is [[1,1],[1,0],[1,0]]
    let j = matrix(&[&[1, 0, 0], &[1, 1, 1]]);
    assert_eq!(j.rotate(), matrix(&[&[1, 1], &[1, 0], &[1, 0]]));
}

#[test]
fn test_trim_strips_empty_border() {
    let padded = matrix(&[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 0, 1, 0], &[0, 0, 0, 0]]);
    assert_eq!(padded.trim(), matrix(&[&[1, 1], &[0, 1]]));
}

#[test]
fn test_trim_keeps_interior_gaps() {
    let gap = matrix(&[&[1, 0, 1]]);
    assert_eq!(gap.trim(), gap);
}

#[test]
fn test_i_piece_rotations() {
    let library = ShapeLibrary::builtin();
    let i = library.lookup("I").unwrap();

    assert_eq!(i.active(Rotation::new(0)), &matrix(&[&[1, 1, 1, 1]]));
    assert_eq!(i.active(Rotation::new(1)), &matrix(&[&[1], &[1], &[1], &[1]]));
    assert_eq!(i.active(Rotation::new(4)), i.active(Rotation::new(0)));
}

#[test]
fn test_builtin_registry_order() {
    let names: Vec<&str> = ShapeLibrary::builtin().names().collect();
    assert_eq!(names, ["I", "O", "T", "S", "Z", "J", "L"]);
}

#[test]
fn test_unknown_shape() {
    let library = ShapeLibrary::builtin();
    assert_eq!(
        library.lookup("X").err(),
        Some(ShapeError::UnknownShape("X".to_string()))
    );
    // Lookup is case-sensitive.
    assert!(library.lookup("i").is_err());
}

#[test]
fn test_custom_library_accepts_larger_shapes() {
    let library = ShapeLibrary::new([("plus", vec![[0u8, 1, 0], [1, 1, 1], [0, 1, 0]])]).unwrap();
    let plus = library.lookup("plus").unwrap();
    assert_eq!(plus.base().filled_count(), 5);
    assert_eq!(plus.active(Rotation::new(1)), plus.base());
}
