//! # bmicalc-cli
//!
//! Presentation layer: result view, text and gauge formatting, presenters,
//! the form session, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod session;
pub mod ui;
pub mod view;

pub use presenter::{CLIResultPresenter, JsonResultPresenter};
pub use session::FormSession;
pub use view::ResultView;
