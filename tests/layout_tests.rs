use polar_chart::ChartError;
use polar_chart::core::{Bounds, LegendPlacement, Point, layout};

#[test]
fn forced_columns_with_automatic_legend() {
    let grid = layout(7, None, Some(3), LegendPlacement::Auto).expect("layout");
    assert_eq!(grid.rows, 3);
    assert_eq!(grid.columns, 3);
    assert_eq!(grid.legend_cell, Some(Point::new(2.0, 2.0)));
}

#[test]
fn square_surface_gives_square_grid() {
    let grid = layout(7, Some(1.0), None, LegendPlacement::Auto).expect("layout");
    assert_eq!((grid.rows, grid.columns), (3, 3));
}

#[test]
fn wide_surface_gets_fewer_rows() {
    let grid = layout(5, Some(2.0), None, LegendPlacement::Disabled).expect("layout");
    assert_eq!((grid.rows, grid.columns), (2, 3));
    assert_eq!(grid.legend_cell, None);
}

#[test]
fn half_row_counts_round_to_even() {
    // 24 charts plus the legend over aspect 4 gives sqrt(6.25) = 2.5 rows.
    let grid = layout(24, Some(4.0), None, LegendPlacement::Auto).expect("layout");
    assert_eq!((grid.rows, grid.columns), (2, 13));
}

#[test]
fn unknown_aspect_defaults_to_square() {
    let known = layout(10, Some(1.0), None, LegendPlacement::Auto).expect("layout");
    let unknown = layout(10, None, None, LegendPlacement::Auto).expect("layout");
    assert_eq!(known, unknown);
}

#[test]
fn zero_columns_is_an_invalid_value() {
    let err = layout(4, None, Some(0), LegendPlacement::Auto).expect_err("columns = 0");
    assert!(matches!(
        err,
        ChartError::InvalidArgumentValue { ref argument, .. } if argument == "columns"
    ));
}

#[test]
fn non_positive_aspect_is_an_invalid_value() {
    let err = layout(4, Some(0.0), None, LegendPlacement::Auto).expect_err("aspect = 0");
    assert!(matches!(err, ChartError::InvalidArgumentValue { .. }));
}

#[test]
fn single_chart_without_legend_uses_one_cell() {
    let grid = layout(1, None, None, LegendPlacement::Disabled).expect("layout");
    assert_eq!((grid.rows, grid.columns), (1, 1));
    assert_eq!(grid.cell_center(0), Point::new(0.0, 0.0));
}

#[test]
fn cells_are_filled_row_major() {
    let grid = layout(5, None, Some(2), LegendPlacement::Disabled).expect("layout");
    let centers: Vec<Point> = grid.item_centers(5).map(|(_, center)| center).collect();
    assert_eq!(
        centers,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 2.0),
        ]
    );
}

#[test]
fn bounds_enclose_every_cell() {
    let grid = layout(4, None, Some(2), LegendPlacement::Disabled).expect("layout");
    assert_eq!(
        grid.bounds(),
        Bounds {
            x_min: -0.5,
            x_max: 1.5,
            y_min: -0.5,
            y_max: 1.5,
        }
    );
}

#[test]
fn explicit_legend_extends_bounds_without_reserving_a_cell() {
    let placement = LegendPlacement::At(Point::new(-1.0, 3.0));
    let grid = layout(4, None, Some(2), placement).expect("layout");

    assert_eq!((grid.rows, grid.columns), (2, 2));
    assert_eq!(grid.legend_cell, Some(Point::new(-1.0, 3.0)));
    assert_eq!(
        grid.bounds(),
        Bounds {
            x_min: -1.5,
            x_max: 1.5,
            y_min: -0.5,
            y_max: 3.5,
        }
    );
}
