//! Reporting and plotting for Tangent solvers.
//!
//! This crate turns a Newton run into something a person can read: an
//! iteration table, a one-line summary, and (with the `plot` feature)
//! interactive plots. It also provides capability traits so observers can be
//! written once and reused across solver event types.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//! - [`table`] — Text table of an iteration trace
//! - [`summary`] — Root formatting and termination messages
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] and the `newton_plots` helpers for
//!   visualizing solver behavior via egui. This feature adds dependencies on
//!   `eframe` and `egui_plot`.
//!
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod summary;
pub mod table;
pub mod traits;

#[cfg(feature = "plot")]
pub mod newton_plots;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{Panel, PlotObserver, Plottable, ShowConfig, Style, show_panels};

pub use summary::{format_root, format_trimmed, termination_message};
pub use table::IterationTable;
