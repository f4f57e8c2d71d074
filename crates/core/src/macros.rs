// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Small declarative macros shared by the dxw crates.

/// `Display` for a fieldless enum, one lowercase word per variant.
///
/// ```ignore
/// dxw_core::simple_display! {
///     Edge {
///         Top => "top",
///         Bottom => "bottom",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant => $str, )+
                })
            }
        }
    };
}

/// Chainable `self`-consuming setters, expanded inside an `impl` block.
///
/// Fields under `option` are `Option<T>` and are set to `Some`.
///
/// ```ignore
/// impl Column {
///     dxw_core::setters! {
///         into { label: String }
///         option { kind: CategoryType }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into { $( $field:ident : $ty:ty ),* $(,)? })?
        $(option { $( $opt:ident : $opt_ty:ty ),* $(,)? })?
    ) => {
        $($(
            pub fn $field(mut self, v: impl Into<$ty>) -> Self {
                self.$field = v.into();
                self
            }
        )*)?
        $($(
            pub fn $opt(mut self, v: impl Into<$opt_ty>) -> Self {
                self.$opt = Some(v.into());
                self
            }
        )*)?
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;
