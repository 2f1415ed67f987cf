use rect_packer_core::generator::PrpGenerator;

#[test]
fn generated_instance_tiles_its_container_exactly() {
    let gen = PrpGenerator::new(20, 15, 20, 42, 2, 0.2).expect("generator should accept these parameters");
    assert!(
        gen.verify_partition(),
        "guillotine cuts must always sum to the container's area without overlap"
    );
    assert_eq!(gen.container(), (20, 15));
}

#[test]
fn same_seed_produces_the_same_instance() {
    let a = PrpGenerator::new(20, 15, 20, 42, 2, 0.2).unwrap();
    let b = PrpGenerator::new(20, 15, 20, 42, 2, 0.2).unwrap();
    assert_eq!(a.rectangles(), b.rectangles());
}

#[test]
fn rejects_unreachable_piece_counts() {
    let result = PrpGenerator::new(4, 4, 100, 1, 2, 0.2);
    assert!(
        result.is_err(),
        "16 units of area cannot hold 100 pieces of minimum size 2x2"
    );
}
