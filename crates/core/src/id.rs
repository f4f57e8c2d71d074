// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier types and generators

use crate::clock::Clock;
use crate::filter::FilterId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Define a newtype ID wrapper around `SmolStr`.
///
/// Generates `new()`, `as_str()`, `Display`, `From<String>`, `From<&str>`,
/// `PartialEq<str>`, `PartialEq<&str>`, `Borrow<str>`, and `Deref`
/// implementations. Ids are assigned by their owner, never generated here.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct ItemId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub smol_str::SmolStr);

        impl $name {
            pub fn new(id: impl Into<smol_str::SmolStr>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Largest integer a JSON number carries exactly in the web client (2^53 - 1).
pub const MAX_FILTER_ID: u64 = (1 << 53) - 1;

/// Hands out filter ids from the clock's epoch milliseconds.
///
/// Two filters created within the same millisecond still get distinct ids:
/// every id is strictly greater than the previous one. Clones share state.
#[derive(Clone)]
pub struct FilterIdGen<C: Clock> {
    clock: C,
    last: Arc<Mutex<u64>>,
}

impl<C: Clock> FilterIdGen<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last: Arc::new(Mutex::new(0)) }
    }

    pub fn next(&self) -> FilterId {
        let mut last = self.last.lock();
        let id = self.clock.epoch_ms().max(last.saturating_add(1));
        *last = id;
        FilterId(id)
    }

    /// Make sure future ids are above every id in `seen`.
    ///
    /// Ids past [`MAX_FILTER_ID`] only come from hand-edited state. They do
    /// not raise the floor; fresh ids stay below them, so they cannot
    /// collide either.
    pub fn observe(&self, seen: impl IntoIterator<Item = FilterId>) {
        let mut last = self.last.lock();
        for id in seen {
            if id.0 > MAX_FILTER_ID {
                tracing::warn!(id = id.0, "ignoring out-of-range filter id");
                continue;
            }
            *last = (*last).max(id.0);
        }
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
