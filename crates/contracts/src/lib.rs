//! Shared contracts for the sales analytics dashboard.
//!
//! Everything in this crate is plain data and pure functions: the dashboard
//! view models, the selection state and the derivations that turn a selection
//! plus a dataset into render-ready values. No rendering, no I/O.

pub mod dashboards;
pub mod shared;
