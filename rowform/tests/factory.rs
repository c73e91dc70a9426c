//! Tests for row id factories.

use std::collections::HashSet;

use rowform::factory::RowFactory;
use uuid::Uuid;

#[test]
fn test_sequential_counts_from_zero() {
    let factory = RowFactory::sequential("row-");
    assert_eq!(factory.generate(), "row-0");
    assert_eq!(factory.generate(), "row-1");
}

#[test]
fn test_sequential_clones_share_counter() {
    let factory = RowFactory::sequential("");
    let clone = factory.clone();
    assert_eq!(factory.generate(), "0");
    assert_eq!(clone.generate(), "1");
}

#[test]
fn test_separate_factories_count_independently() {
    let first = RowFactory::sequential("a");
    let second = RowFactory::sequential("b");
    assert_eq!(first.generate(), "a0");
    assert_eq!(second.generate(), "b0");
}

#[test]
fn test_uuid_ids_are_unique_and_parse() {
    let factory = RowFactory::uuid();
    let ids: HashSet<String> = (0..16).map(|_| factory.generate()).collect();
    assert_eq!(ids.len(), 16);
    for id in &ids {
        assert!(Uuid::parse_str(id).is_ok());
    }
}

#[test]
fn test_custom_closure() {
    let factory = RowFactory::new(|| 7u32);
    assert_eq!(factory.generate(), 7);
    assert!(format!("{:?}", factory).contains("RowFactory"));
}
