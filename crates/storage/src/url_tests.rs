// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dxw_dashboard::{DashboardItem, ItemId};
use proptest::prelude::*;
use serde_json::json;

fn sample() -> SharedDashboard {
    let mut group = DashboardGroup::new("Jobs");
    group.items.push(DashboardItem {
        title: "Job Monitor".into(),
        id: ItemId::new("Job Monitor0"),
        app_type: "Job Monitor".into(),
        icon: String::new(),
    });
    let mut states = IndexMap::new();
    states.insert("Job Monitor0".to_string(), json!({"filters": [], "pagination": {"pageIndex": 2, "pageSize": 50}}));
    SharedDashboard { layout: vec![group], states }
}

#[test]
fn encoded_text_is_url_safe() {
    let encoded = encode(&sample()).unwrap();
    assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'), "{encoded}");
    assert_eq!(decode(&encoded).unwrap(), sample());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let encoded = encode(&sample()).unwrap();
    assert_eq!(decode(&format!("  {encoded}\n")).unwrap(), sample());
}

#[test]
fn empty_states_are_omitted() {
    let shared = SharedDashboard { layout: Vec::new(), states: IndexMap::new() };
    let encoded = encode(&shared).unwrap();
    assert_eq!(decode(&encoded).unwrap(), shared);
}

#[test]
fn invalid_base64_is_rejected() {
    assert!(matches!(decode("not base64!"), Err(CodecError::Base64(_))));
}

#[test]
fn garbage_after_base64_is_rejected() {
    let encoded = URL_SAFE_NO_PAD.encode(b"definitely not zstd");
    assert!(matches!(decode(&encoded), Err(CodecError::Compression(_))));
}

#[test]
fn valid_zstd_with_bad_json_is_rejected() {
    let compressed = zstd::encode_all(&b"[1, 2"[..], 3).unwrap();
    let encoded = URL_SAFE_NO_PAD.encode(compressed);
    assert!(matches!(decode(&encoded), Err(CodecError::Json(_))));
}

#[test]
fn oversized_payload_is_rejected() {
    let big = vec![b' '; (MAX_DECODED_BYTES + 10) as usize];
    let encoded = URL_SAFE_NO_PAD.encode(zstd::encode_all(big.as_slice(), 3).unwrap());
    assert!(matches!(decode(&encoded), Err(CodecError::TooLarge)));
}

proptest! {
    #[test]
    fn titles_survive_the_codec(titles in prop::collection::vec("[ -~]{1,20}", 0..6)) {
        let layout = titles.iter().map(|t| DashboardGroup::new(t.as_str())).collect::<Vec<_>>();
        let shared = SharedDashboard { layout, states: IndexMap::new() };
        prop_assert_eq!(decode(&encode(&shared).unwrap()).unwrap(), shared);
    }
}
