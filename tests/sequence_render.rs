//! End-to-end sequence rendering against an on-disk glyph source.

mod common;

use numgen::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn loaded_store(dir: &std::path::Path) -> GlyphStore {
    common::write_glyph_source(dir, 2);
    GlyphStore::load(dir).unwrap()
}

#[test]
fn renders_shape_dtype_and_range() {
    let dir = tempfile::tempdir().unwrap();
    let store = loaded_store(dir.path());
    let compositor = SequenceCompositor::new(&store);
    let mut rng = SmallRng::seed_from_u64(1);

    let spacing = SpacingRange::new(2, 5).unwrap();
    let image: ndarray::Array2<f32> = compositor.render(&[1, 2, 3], spacing, 50, &mut rng).unwrap();

    assert_eq!(image.dim(), (28, 50));
    let min = image.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = image.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert!(min >= 0.0);
    assert!(max <= 1.0);
}

#[test]
fn empty_sequence_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = loaded_store(dir.path());
    let compositor = SequenceCompositor::new(&store);
    let mut rng = SmallRng::seed_from_u64(1);

    let spacing = SpacingRange::new(2, 5).unwrap();
    let err = compositor.render(&[], spacing, 50, &mut rng).unwrap_err();
    assert!(matches!(err, NumGenError::InvalidInput { .. }));
}

#[test]
fn out_of_range_digit_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = loaded_store(dir.path());
    let compositor = SequenceCompositor::new(&store);
    let mut rng = SmallRng::seed_from_u64(1);

    let spacing = SpacingRange::new(2, 5).unwrap();
    let err = compositor
        .render(&[1, 1, 12], spacing, 50, &mut rng)
        .unwrap_err();
    assert!(matches!(err, NumGenError::InvalidInput { .. }));
}

#[test]
fn degenerate_spacing_range_is_rejected() {
    assert!(SpacingRange::new(2, 2).is_err());
    assert!(SpacingRange::new(7, 3).is_err());
}

#[test]
fn missing_glyph_source_is_a_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GlyphStore::load(&dir.path().join("nowhere")).unwrap_err();
    assert!(matches!(err, NumGenError::DataLoad { .. }));
}

#[test]
fn repeat_loads_serve_the_same_collection() {
    let dir = tempfile::tempdir().unwrap();
    common::write_glyph_source(dir.path(), 3);

    let first = GlyphStore::load(dir.path()).unwrap();
    let second = GlyphStore::load(dir.path()).unwrap();
    assert_eq!(first.len(), 30);
    assert_eq!(first.len(), second.len());
    for digit in 0u8..10 {
        assert_eq!(first.class_len(digit), 3);
    }
}
