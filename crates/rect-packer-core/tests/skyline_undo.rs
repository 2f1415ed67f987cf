use rect_packer_core::model::PlacedRect;
use rect_packer_core::skyline::Skyline;

#[test]
fn undo_restores_initial_profile() {
    let mut sky = Skyline::new(10, 10);
    let initial: Vec<_> = sky.segments().to_vec();

    let placed = PlacedRect {
        id: 1,
        x: 2,
        y: 0,
        width: 3,
        height: 4,
    };
    sky.apply(&placed);
    assert_ne!(sky.segments(), initial.as_slice());

    sky.undo();
    assert_eq!(
        sky.segments(),
        initial.as_slice(),
        "undo must restore the exact pre-apply segment sequence"
    );
}

#[test]
fn narrowest_valley_prefers_smallest_width() {
    let mut sky = Skyline::new(10, 5);
    sky.apply(&PlacedRect {
        id: 1,
        x: 0,
        y: 0,
        width: 6,
        height: 2,
    });
    // Segments are now [(0,6,2), (6,4,0)]; the (6,4,0) segment is a valley
    // of width 4, narrower than nothing else, so it must be chosen.
    let valley = sky.narrowest_valley().expect("skyline is not filled");
    assert_eq!(valley.x, 6);
    assert_eq!(valley.width, 4);
    assert_eq!(valley.height, 0);
}

#[test]
fn is_filled_once_profile_reaches_container_height() {
    let mut sky = Skyline::new(4, 3);
    sky.apply(&PlacedRect {
        id: 1,
        x: 0,
        y: 0,
        width: 4,
        height: 3,
    });
    assert!(sky.is_filled());
    assert!(sky.narrowest_valley().is_none());
}
