// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dxw-core: filter vocabulary shared by the DiracX Web client engine

pub mod macros;

pub mod category;
pub mod clock;
pub mod column;
pub mod filter;
pub mod id;
pub mod monitor;
pub mod operator;
pub mod value;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::CategoryType;
pub use clock::{Clock, FakeClock, SystemClock};
pub use column::{find_column, Column};
pub use filter::{same_conditions, Filter, FilterError, FilterId, FilterValue};
pub use id::{FilterIdGen, MAX_FILTER_ID};
pub use monitor::{job_columns, ColumnPinning, JobMonitorState, Pagination};
pub use operator::{display_from_internal, internal_from_display, ops_for, Operator, OperatorError};
pub use value::{validate_literal, validate_value, RelativeWindow, TimeUnit, ValueError};
