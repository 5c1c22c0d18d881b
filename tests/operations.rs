//! Scenario tests for the positional operations and cursor passes.

use stout_list::{StoutList, StoutListError};
use test_case::test_case;

#[test_case(0)]
#[test_case(1)]
#[test_case(3)]
#[test_case(7)]
fn rejects_invalid_node_size(node_size: usize) {
    assert_eq!(
        StoutList::<i32>::with_node_size(node_size).unwrap_err(),
        StoutListError::InvalidNodeSize(node_size)
    );
}

#[test_case(2)]
#[test_case(4)]
#[test_case(10)]
fn accepts_positive_even_node_size(node_size: usize) {
    let list = StoutList::<i32>::with_node_size(node_size).unwrap();
    assert_eq!(list.node_size(), node_size);
}

#[test_case(2; "node size 2")]
#[test_case(4; "node size 4")]
#[test_case(8; "node size 8")]
fn front_removal_drains_in_order(node_size: usize) {
    let mut list = StoutList::with_node_size(node_size).unwrap();
    for i in 0..50 {
        list.push_back(i);
    }
    for expected in 0..50 {
        assert_eq!(list.remove(0).unwrap(), expected);
    }
    assert!(list.is_empty());
}

#[test_case(2; "node size 2")]
#[test_case(4; "node size 4")]
#[test_case(6; "node size 6")]
fn sort_across_node_sizes(node_size: usize) {
    let mut list = StoutList::with_node_size(node_size).unwrap();
    list.extend((0..25).rev());
    list.sort();
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        (0..25).collect::<Vec<_>>()
    );

    list.sort_reverse();
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        (0..25).rev().collect::<Vec<_>>()
    );
}

#[test_case(2)]
#[test_case(4)]
fn duplicate_report_is_node_scoped(node_size: usize) {
    let mut list = StoutList::with_node_size(node_size).unwrap();
    // First append opens a node and is new; the node then fills with
    // duplicates, each reported as seen; the append that opens the next
    // node is reported new again.
    assert!(list.push_back(7));
    for _ in 1..node_size {
        assert!(!list.push_back(7));
    }
    assert!(list.push_back(7));
    assert_eq!(list.len(), node_size + 1);
}

#[test]
fn mixed_workload_matches_vec_model() {
    let mut list = StoutList::with_node_size(4).unwrap();
    let mut model: Vec<u32> = Vec::new();
    let mut seed: u32 = 0x9e37_79b9;
    for i in 0..300u32 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        list.push_back(i);
        model.push(i);
        if seed % 3 == 0 && !model.is_empty() {
            let at = (seed as usize) % model.len();
            assert_eq!(list.remove(at).unwrap(), model.remove(at));
        }
        assert_eq!(list.len(), model.len());
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);
}

#[test]
fn cursor_pass_removing_odd_elements() {
    let mut list: StoutList<i32> = (0..20).collect();
    let mut cursor = list.cursor_start_mut();
    while cursor.has_next() {
        let value = *cursor.move_next().unwrap();
        if value % 2 == 1 {
            cursor.remove().unwrap();
        }
    }
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        (0..20).filter(|v| v % 2 == 0).collect::<Vec<_>>()
    );
}

#[test]
fn cursor_backward_pass_removing_even_elements() {
    let mut list: StoutList<i32> = (0..20).collect();
    let mut cursor = list.cursor_mut(list.len()).unwrap();
    while cursor.has_prev() {
        let value = *cursor.move_prev().unwrap();
        if value % 2 == 0 {
            cursor.remove().unwrap();
        }
    }
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        (0..20).filter(|v| v % 2 == 1).collect::<Vec<_>>()
    );
}

#[test]
fn cursor_pass_rewriting_elements() {
    let mut list: StoutList<i32> = (0..10).collect();
    let mut cursor = list.cursor_start_mut();
    while cursor.has_next() {
        let value = *cursor.move_next().unwrap();
        cursor.set(value * 2).unwrap();
    }
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        (0..10).map(|v| v * 2).collect::<Vec<_>>()
    );
}

#[test]
fn cursor_interleaved_insert_and_move() {
    // Double every element by inserting a copy before it.
    let mut list: StoutList<i32> = (0..6).collect();
    let mut cursor = list.cursor_start_mut();
    while cursor.has_next() {
        let value = *cursor.move_next().unwrap();
        cursor.insert(value);
    }
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5]
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_preserves_structure() {
    let mut list: StoutList<i32> = (0..10).collect();
    list.remove(0).unwrap();
    let json = serde_json::to_string(&list).unwrap();
    let back: StoutList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
    assert_eq!(back.structure(), list.structure());
    assert_eq!(back.node_size(), list.node_size());
}
