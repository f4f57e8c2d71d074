// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

fn on_item(group: &str, index: usize, edge: Edge) -> DropTarget {
    DropTarget::Item { group_title: group.into(), index, edge }
}

fn on_group(group: &str) -> DropTarget {
    DropTarget::Group { group_title: group.into() }
}

fn move_to(d: &mut Dashboard, id: &str, target: DropTarget) -> Outcome {
    apply(d, DashboardAction::Move { id: ItemId::new(id), target })
}

#[parameterized(
    down_past_two = { "0", 2, Edge::Bottom, &["1", "2", "0", "3"] },
    down_above_third = { "0", 3, Edge::Top, &["1", "2", "0", "3"] },
    to_the_end = { "0", 3, Edge::Bottom, &["1", "2", "3", "0"] },
    up_to_the_top = { "3", 0, Edge::Top, &["3", "0", "1", "2"] },
    up_below_first = { "3", 0, Edge::Bottom, &["0", "3", "1", "2"] },
)]
fn same_group_moves_correct_the_index(id: &str, index: usize, edge: Edge, expected: &[&str]) {
    let mut d = dashboard(&[("A", &["0", "1", "2", "3"])]);
    assert!(move_to(&mut d, id, on_item("A", index, edge)).is_changed());
    assert_eq!(ids(&d, "A"), expected);
}

#[parameterized(
    onto_itself_top = { 1, Edge::Top },
    onto_itself_bottom = { 1, Edge::Bottom },
    below_previous = { 0, Edge::Bottom },
    above_next = { 2, Edge::Top },
)]
fn drops_next_to_the_source_are_noops(index: usize, edge: Edge) {
    let mut d = dashboard(&[("A", &["0", "1", "2", "3"])]);
    assert_eq!(move_to(&mut d, "1", on_item("A", index, edge)), Outcome::Unchanged(Reason::SamePosition));
    assert_eq!(ids(&d, "A"), ["0", "1", "2", "3"]);
}

#[test]
fn dropping_on_own_group_is_a_noop() {
    let mut d = dashboard(&[("A", &["0", "1"])]);
    assert_eq!(move_to(&mut d, "0", on_group("A")), Outcome::Unchanged(Reason::SamePosition));
}

#[test]
fn cross_group_move_can_empty_the_source() {
    let mut d = dashboard(&[("A", &["x"]), ("B", &["y"])]);
    let outcome = move_to(&mut d, "x", on_item("B", 0, Edge::Top));
    assert_eq!(outcome, Outcome::Changed(Change::ItemMoved { id: ItemId::new("x"), group: "B".into(), index: 0 }));
    assert!(ids(&d, "A").is_empty());
    assert_eq!(ids(&d, "B"), ["x", "y"]);
    // The emptied group stays
    assert_eq!(d.groups().len(), 2);
}

#[test]
fn cross_group_drop_on_group_appends() {
    let mut d = dashboard(&[("A", &["x"]), ("B", &["y", "z"])]);
    assert!(move_to(&mut d, "x", on_group("B")).is_changed());
    assert_eq!(ids(&d, "B"), ["y", "z", "x"]);
}

#[test]
fn unknown_source_or_target() {
    let mut d = dashboard(&[("A", &["x"])]);
    assert_eq!(move_to(&mut d, "nope", on_group("A")), Outcome::Unchanged(Reason::UnknownItem(ItemId::new("nope"))));
    assert_eq!(move_to(&mut d, "x", on_group("Z")), Outcome::Unchanged(Reason::UnknownGroup("Z".into())));
    assert_eq!(
        move_to(&mut d, "x", on_item("A", 5, Edge::Top)),
        Outcome::Unchanged(Reason::IndexOutOfRange { group: "A".into(), index: 5 })
    );
}

#[test]
fn check_move_does_not_mutate() {
    let d = dashboard(&[("A", &["0", "1"]), ("B", &[])]);
    assert_eq!(d.check_move(&ItemId::new("0"), &on_group("B")), Ok(()));
    assert_eq!(d.check_move(&ItemId::new("0"), &on_item("A", 0, Edge::Bottom)), Err(Reason::SamePosition));
    assert_eq!(ids(&d, "A"), ["0", "1"]);
}

fn arb_target() -> impl Strategy<Value = DropTarget> {
    let group = prop_oneof![Just("A"), Just("B")];
    prop_oneof![
        group.clone().prop_map(on_group),
        (group, 0usize..5, prop_oneof![Just(Edge::Top), Just(Edge::Bottom)])
            .prop_map(|(g, index, edge)| on_item(g, index, edge)),
    ]
}

proptest! {
    #[test]
    fn moves_conserve_items(moves in prop::collection::vec((0usize..6, arb_target()), 1..20)) {
        let mut d = dashboard(&[("A", &["0", "1", "2"]), ("B", &["3", "4", "5"])]);
        for (source, target) in moves {
            let before = d.groups().to_vec();
            let outcome = move_to(&mut d, &source.to_string(), target);
            if !outcome.is_changed() {
                prop_assert_eq!(d.groups(), before.as_slice());
            }
        }
        let mut all: Vec<String> = d.items().map(|i| i.id.to_string()).collect();
        all.sort();
        prop_assert_eq!(all, vec!["0", "1", "2", "3", "4", "5"]);
    }
}
