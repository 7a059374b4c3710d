//! Recurrences evaluated by the [`DpEngine`](crate::engine::DpEngine).
//!
//! Each module implements [`Recurrence`](crate::traits::Recurrence) for one
//! scoring problem and carries a bottom-up `tabulate()` used as an
//! independent reference:
//! - [`lcs`]  : DNA global-alignment score as longest common subsequence length.
//! - [`fold`] : RNA maximum non-crossing base pairing (bifurcating interval DP).

pub mod fold;
pub mod lcs;
