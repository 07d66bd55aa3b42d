//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use nodevm::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Switched node version to 18.16.0 successfully");
//! assert!(ui.has_success("18.16.0"));
//! ```

pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, NodevmTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain line of output. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Display one installed version, marked when it is the active one.
    /// Always shown.
    fn version_row(&mut self, label: &str, active: bool);

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
///
/// The outcome is reported through [`UserInterface`] after the spinner is
/// cleared, so it reaches the terminal even when no spinner was drawn.
pub trait SpinnerHandle {
    /// Stop the spinner and remove it from the terminal.
    fn finish_and_clear(&mut self);
}
