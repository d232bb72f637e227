//! Presentation interfaces.

use crate::calculator::{Assessment, BmiError};

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a valid assessment.
    fn present_assessment(&self, assessment: &Assessment, details: bool);

    /// Tell the user that no result could be produced.
    fn present_invalid(&self, error: &BmiError);

    /// Return the display to its initial empty state.
    fn present_reset(&self);
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_assessment(&self, _assessment: &Assessment, _details: bool) {}
    fn present_invalid(&self, _error: &BmiError) {}
    fn present_reset(&self) {}
}
