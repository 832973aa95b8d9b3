// File: crates/dotplan-core/tests/grid.rs
// Purpose: Dot grid sequences, mirroring, signed indexing and geometry validation.

use dotplan_core::error::Axis;
use dotplan_core::grid::step_sequence;
use dotplan_core::types::{A5_HEIGHT, A5_WIDTH};
use dotplan_core::{mm, Cell, DotGrid, LayoutError, PageGeometry};

const EPS: f32 = 1e-2;

#[test]
fn a5_grid_has_41_rows_and_27_columns() {
    let geometry = PageGeometry::a5_journal();
    let grid = DotGrid::new(&geometry, false);
    // floor((210 - 2*5) / 5) + 1
    assert_eq!(grid.row_count(), 41);
    // floor((148 - 13 - 5) / 5) + 1
    assert_eq!(grid.column_count(), 27);
    assert_eq!(grid.dots().count(), 41 * 27);
}

#[test]
fn sequences_strictly_increase_within_margins() {
    let geometries = [
        PageGeometry::a5_journal(),
        PageGeometry::new(mm(100.0), mm(150.0), mm(7.0), mm(9.0), mm(4.0), mm(0.3)).unwrap(),
        PageGeometry::new(mm(210.0), mm(297.0), mm(4.0), mm(20.0), mm(20.0), mm(0.2)).unwrap(),
    ];
    for geometry in geometries {
        let min_margin = geometry.left_margin().min(geometry.right_margin());
        for mirror in [false, true] {
            let grid = DotGrid::new(&geometry, mirror);
            assert!(grid.columns().windows(2).all(|w| w[0] < w[1]));
            assert!(grid.rows().windows(2).all(|w| w[0] < w[1]));
            for &x in grid.columns() {
                assert!(x >= min_margin - EPS && x <= geometry.width() - min_margin + EPS, "column {x} outside margins");
            }
            for &y in grid.rows() {
                assert!(y >= geometry.spacing() - EPS && y <= geometry.height() - geometry.spacing() + EPS);
            }
        }
    }
}

#[test]
fn mirrored_columns_reflect_about_page_center() {
    let geometry = PageGeometry::a5_journal();
    let plain = DotGrid::new(&geometry, false);
    let mirrored = DotGrid::new(&geometry, true);
    assert!(mirrored.is_mirrored());
    assert_eq!(plain.column_count(), mirrored.column_count());

    let reflected: Vec<f32> = plain.columns().iter().rev().map(|x| geometry.width() - x).collect();
    for (got, want) in mirrored.columns().iter().zip(&reflected) {
        assert!((got - want).abs() < EPS, "mirrored column {got} vs reflected {want}");
    }
    // Rows do not depend on the margins.
    assert_eq!(plain.rows(), mirrored.rows());
}

#[test]
fn negative_indices_count_from_the_end() {
    let grid = DotGrid::new(&PageGeometry::a5_journal(), false);
    let n = grid.column_count() as isize;
    assert_eq!(grid.column(-1).unwrap(), grid.columns()[grid.column_count() - 1]);
    assert_eq!(grid.column(-3).unwrap(), grid.column(n - 3).unwrap());
    assert_eq!(grid.row(-2).unwrap(), grid.rows()[grid.row_count() - 2]);
    assert!((grid.column(0).unwrap() - mm(13.0)).abs() < EPS);
    assert!((grid.column(-1).unwrap() - (A5_WIDTH - mm(5.0))).abs() < EPS);
    assert!((grid.row(-1).unwrap() - (A5_HEIGHT - mm(5.0))).abs() < EPS);

    let origin = grid.cell_origin(Cell::new(1, -2)).unwrap();
    assert_eq!(origin.x, grid.column(1).unwrap());
    assert_eq!(origin.y, grid.row(-2).unwrap());
    let below = grid.cell_origin(Cell::new(1, -2).down(1)).unwrap();
    assert!((origin.y - below.y - grid.spacing()).abs() < EPS);
}

#[test]
fn out_of_range_index_is_an_error() {
    let grid = DotGrid::new(&PageGeometry::a5_journal(), false);
    assert_eq!(
        grid.column(27),
        Err(LayoutError::IndexOutOfRange { axis: Axis::Column, index: 27, len: 27 })
    );
    assert_eq!(
        grid.column(-28),
        Err(LayoutError::IndexOutOfRange { axis: Axis::Column, index: -28, len: 27 })
    );
    assert!(matches!(grid.row(41), Err(LayoutError::IndexOutOfRange { axis: Axis::Row, .. })));
    assert!(grid.cell_origin(Cell::new(0, 99)).is_err());
}

#[test]
fn invalid_geometry_fails_at_construction() {
    let bad = [
        PageGeometry::new(A5_WIDTH, A5_HEIGHT, 0.0, mm(13.0), mm(5.0), 0.5),
        PageGeometry::new(A5_WIDTH, A5_HEIGHT, -mm(5.0), mm(13.0), mm(5.0), 0.5),
        PageGeometry::new(A5_WIDTH, A5_HEIGHT, mm(5.0), mm(80.0), mm(80.0), 0.5),
        PageGeometry::new(A5_WIDTH, A5_HEIGHT, mm(5.0), -1.0, mm(5.0), 0.5),
        PageGeometry::new(A5_WIDTH, mm(10.0), mm(5.0), mm(13.0), mm(5.0), 0.5),
        PageGeometry::new(f32::NAN, A5_HEIGHT, mm(5.0), mm(13.0), mm(5.0), 0.5),
    ];
    for result in bad {
        assert!(matches!(result, Err(LayoutError::InvalidGeometry(_))), "{result:?}");
    }
}

#[test]
fn step_sequence_keeps_exact_end_and_drops_remainder() {
    let exact = step_sequence(mm(5.0), mm(205.0), mm(5.0));
    assert_eq!(exact.len(), 41);
    let partial = step_sequence(0.0, 10.5, 2.0);
    assert_eq!(partial, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert!(step_sequence(10.0, 0.0, 1.0).is_empty());
    assert!(step_sequence(0.0, 10.0, 0.0).is_empty());
}

#[test]
fn offset_cell_steps_right_and_down_without_wrapping() {
    let grid = DotGrid::new(&PageGeometry::a5_journal(), false);
    assert_eq!(grid.offset_cell(Cell::new(0, -2), 6, 4).unwrap(), Cell::new(6, 35));
    assert_eq!(grid.offset_cell(Cell::new(-1, 0), 0, 0).unwrap(), Cell::new(26, 0));
    assert_eq!(
        grid.offset_cell(Cell::new(0, 3), 0, 5),
        Err(LayoutError::IndexOutOfRange { axis: Axis::Row, index: -2, len: 41 })
    );
    assert_eq!(
        grid.offset_cell(Cell::new(-2, 10), 2, 0),
        Err(LayoutError::IndexOutOfRange { axis: Axis::Column, index: 27, len: 27 })
    );
}

#[test]
fn nearest_row_and_column_snap_to_the_grid() {
    let grid = DotGrid::new(&PageGeometry::a5_journal(), false);
    assert_eq!(grid.row_near(mm(200.0)).unwrap(), 39);
    assert_eq!(grid.row_near(mm(36.9)).unwrap(), 6);
    assert_eq!(grid.column_near(mm(13.0)).unwrap(), 0);
    assert_eq!(grid.column_near(mm(57.6)).unwrap(), 9);
    assert_eq!(
        grid.row_near(mm(-20.0)),
        Err(LayoutError::IndexOutOfRange { axis: Axis::Row, index: -5, len: 41 })
    );
    assert!(grid.column_near(mm(150.0)).is_err());
}
