//! # keepbest-cli
//!
//! Console side of the harness: the colored per-problem status stream, the
//! end-of-run summary, and shell completion.

pub mod completion;
pub mod logger;
pub mod output;
pub mod presenter;
pub mod ui;

pub use logger::{TaskLogger, PALETTE};
pub use presenter::SummaryPresenter;
