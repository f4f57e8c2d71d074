// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound payloads for the job search endpoint.
//!
//! Wire format: JSON body `{search, sort}` plus `page`/`per_page` query parameters

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod search;
mod snapshot;
mod wire;

pub use search::{compile, compile_free_text, SearchBody, SearchParam, SearchQuery, SortDirection, SortSpec};
pub use snapshot::DataSnapshot;
pub use wire::{decode, encode, ProtocolError};
