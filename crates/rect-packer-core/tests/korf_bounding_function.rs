use rect_packer_core::config::PackOrder;
use rect_packer_core::model::Rectangle;
use rect_packer_core::solver::{KorfDfsSolver, Solver};

#[test]
fn two_2x2_squares_cannot_share_a_3x3_container() {
    // Area sums to exactly 9, but no arrangement of two 2x2 squares and a
    // 1x1 square avoids overlap inside a 3x3 container: the Martello-Toth
    // bound should prune this before the search exhausts every position.
    let rects = vec![
        Rectangle::new(1, 2, 2),
        Rectangle::new(2, 2, 2),
        Rectangle::new(3, 1, 1),
    ];

    let mut solver = KorfDfsSolver::new(3, 3).expect("3x3 is a valid container");
    let success = solver.pack(&rects, PackOrder::Decreasing).expect("non-empty input");

    assert!(!success, "two 2x2 squares do not fit in a 3x3 container");
    assert!(
        solver.stats.bound_prunes > 0 || solver.stats.area_prunes > 0,
        "infeasibility should be caught by a pruning rule, not just exhaustive search"
    );
}
