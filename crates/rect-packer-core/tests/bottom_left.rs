use rect_packer_core::config::PackOrder;
use rect_packer_core::model::Rectangle;
use rect_packer_core::solver::{BottomLeftSolver, Solver};

#[test]
fn places_rectangles_at_first_free_row_major_position() {
    let rects = vec![Rectangle::new(1, 2, 2), Rectangle::new(2, 2, 2)];
    let mut solver = BottomLeftSolver::new(4, 2).expect("4x2 is a valid container");
    let success = solver.pack(&rects, PackOrder::Decreasing).expect("non-empty input");

    assert!(success);
    let placed = solver.placed();
    assert_eq!(placed[0].x, 0);
    assert_eq!(placed[0].y, 0);
    assert_eq!(placed[1].x, 2);
    assert_eq!(placed[1].y, 0);
}

#[test]
fn reports_failure_when_no_position_fits() {
    let rects = vec![Rectangle::new(1, 3, 3), Rectangle::new(2, 3, 3)];
    let mut solver = BottomLeftSolver::new(3, 3).expect("3x3 is a valid container");
    let success = solver.pack(&rects, PackOrder::Decreasing).expect("non-empty input");

    assert!(!success);
    assert!(solver.placed().is_empty());
}
