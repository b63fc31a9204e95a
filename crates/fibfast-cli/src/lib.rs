//! # fibfast-cli
//!
//! Output formatting, result presenters and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{presenter_for, JsonPresenter, OutputFormat, ResultPresenter, TextPresenter};
