use rect_packer_core::config::PackOrder;
use rect_packer_core::model::Rectangle;
use rect_packer_core::solver::{PrpDfsSolver, Solver};

#[test]
fn trivial_2x2_splits_into_two_1x2_strips() {
    let rects = vec![Rectangle::new(1, 1, 2), Rectangle::new(2, 1, 2)];

    let mut solver = PrpDfsSolver::new(2, 2).expect("2x2 is a valid container");
    let success = solver.pack(&rects, PackOrder::None).expect("non-empty input");

    assert!(success, "two 1x2 strips must tile a 2x2 container exactly");
    let placed = solver.placed();
    assert_eq!(placed.len(), 2);
    assert!(
        !placed[0].overlaps(&placed[1]),
        "placed strips must not overlap"
    );
    for p in placed {
        assert_eq!(p.width, 1);
        assert_eq!(p.height, 2);
        assert_eq!(p.y, 0);
    }
}

#[test]
fn mismatched_area_fails_without_exploring() {
    // Areas sum to 11, not 9: the 3x3 container cannot be tiled at all.
    let rects = vec![
        Rectangle::new(1, 2, 2),
        Rectangle::new(2, 2, 2),
        Rectangle::new(3, 1, 1),
        Rectangle::new(4, 1, 1),
        Rectangle::new(5, 1, 1),
    ];

    let mut solver = PrpDfsSolver::new(3, 3).expect("3x3 is a valid container");
    let success = solver.pack(&rects, PackOrder::Decreasing).expect("non-empty input");

    assert!(!success);
    assert!(solver.placed().is_empty());
    assert_eq!(
        solver.stats.explored_nodes, 0,
        "an area mismatch must be rejected before any node is explored"
    );
}
