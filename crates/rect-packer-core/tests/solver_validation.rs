use rect_packer_core::config::PackOrder;
use rect_packer_core::error::RectPackerError;
use rect_packer_core::model::Rectangle;
use rect_packer_core::solver::{BottomLeftSolver, KorfDfsSolver, PrpDfsSolver, Solver};

#[test]
fn zero_width_container_is_rejected() {
    let result = BottomLeftSolver::new(0, 10);
    match result {
        Err(RectPackerError::InvalidDimensions { width, height }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 10);
        }
        _ => panic!("Expected InvalidDimensions error"),
    }
}

#[test]
fn zero_height_container_is_rejected() {
    let result = KorfDfsSolver::new(10, 0);
    match result {
        Err(RectPackerError::InvalidDimensions { width, height }) => {
            assert_eq!(width, 10);
            assert_eq!(height, 0);
        }
        _ => panic!("Expected InvalidDimensions error"),
    }
}

#[test]
fn empty_rectangle_list_is_rejected() {
    let mut solver = PrpDfsSolver::new(3, 3).expect("3x3 is a valid container");
    let rects: Vec<Rectangle> = Vec::new();

    let result = solver.pack(&rects, PackOrder::None);
    match result {
        Err(RectPackerError::Empty) => {}
        _ => panic!("Expected Empty error"),
    }
}
