// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::store::MemoryStore;
use dxw_dashboard::{DashboardAction, JOB_MONITOR};

fn registry() -> Arc<AppRegistry> {
    Arc::new(AppRegistry::builtin())
}

#[test]
fn icons_are_not_persisted() {
    let mut dashboard = Dashboard::new(registry());
    dashboard.apply(DashboardAction::add_item(JOB_MONITOR)).unwrap();
    let json = to_json(dashboard.groups()).unwrap();
    assert_eq!(
        json,
        r#"[{"title":"Group 1","extended":true,"items":[{"title":"Job Monitor","id":"Job Monitor0","type":"Job Monitor"}]}]"#
    );
}

#[test]
fn loading_reattaches_icons() {
    let json = r#"[{"title":"Jobs","extended":false,"items":[{"title":"Mine","id":"m1","type":"Job Monitor"}]}]"#;
    let dashboard = from_json(registry(), json).unwrap();
    let item = dashboard.item("m1").unwrap();
    assert_eq!(item.icon, "monitor");
    assert!(!dashboard.group("Jobs").unwrap().extended);
}

#[test]
fn unknown_type_fails_to_load() {
    let json = r#"[{"title":"Jobs","extended":true,"items":[{"title":"x","id":"x","type":"Nope"}]}]"#;
    let err = from_json(registry(), json).unwrap_err();
    assert!(matches!(err, LayoutError::Dashboard(DashboardError::Registry(_))));
}

#[test]
fn malformed_layout_is_a_json_error() {
    assert!(matches!(from_json(registry(), "{"), Err(LayoutError::Json(_))));
}

#[test]
fn save_then_load() {
    let store = MemoryStore::new();
    assert!(load(&store, registry()).unwrap().is_none());

    let mut dashboard = Dashboard::new(registry());
    dashboard.apply(DashboardAction::add_item(JOB_MONITOR)).unwrap();
    dashboard.apply(DashboardAction::AddGroup).unwrap();
    save(&store, &dashboard).unwrap();

    let loaded = load(&store, registry()).unwrap().unwrap();
    assert_eq!(loaded.groups(), dashboard.groups());
}

#[test]
fn counter_is_saved_next_to_the_layout() {
    let store = MemoryStore::new();
    let mut dashboard = Dashboard::new(registry());
    dashboard.apply(DashboardAction::add_item(JOB_MONITOR)).unwrap();
    dashboard.apply(DashboardAction::add_item(JOB_MONITOR)).unwrap();
    save(&store, &dashboard).unwrap();
    assert_eq!(store.get(ITEM_SEQ_KEY).unwrap().as_deref(), Some("2"));

    // Layout alone would restart the counter at the item count.
    store.set(LAYOUT_KEY, r#"[{"title":"Group 1","extended":true,"items":[]}]"#).unwrap();
    let loaded = load(&store, registry()).unwrap().unwrap();
    assert_eq!(loaded.next_seq(), 2);
}

#[test]
fn stale_counter_never_moves_ids_backwards() {
    let store = MemoryStore::new();
    let mut dashboard = Dashboard::new(registry());
    for _ in 0..3 {
        dashboard.apply(DashboardAction::add_item(JOB_MONITOR)).unwrap();
    }
    save(&store, &dashboard).unwrap();
    store.set(ITEM_SEQ_KEY, "1").unwrap();
    assert_eq!(load(&store, registry()).unwrap().unwrap().next_seq(), 3);
}

#[test]
fn malformed_counter_is_a_json_error() {
    let store = MemoryStore::new();
    store.set(LAYOUT_KEY, "[]").unwrap();
    store.set(ITEM_SEQ_KEY, "many").unwrap();
    assert!(matches!(load(&store, registry()), Err(LayoutError::Json(_))));
}
