//! Results reported back to the host after a spin request.

use core::fmt;

use crate::ticket::Ticket;

/// Why a spin request was turned down. Rejections never change state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpinRejection {
    /// Every prize has been drawn.
    Exhausted,
    /// No paid ticket is left to draw from.
    EmptyPool,
    /// A spin animation is still running.
    AlreadySpinning,
}

impl SpinRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinRejection::Exhausted => "exhausted",
            SpinRejection::EmptyPool => "empty-pool",
            SpinRejection::AlreadySpinning => "already-spinning",
        }
    }

    /// Short notice suitable for a toast.
    pub fn notice(&self) -> &'static str {
        match self {
            SpinRejection::Exhausted => "All prizes have been drawn",
            SpinRejection::EmptyPool => "There are no paid tickets left to draw",
            SpinRejection::AlreadySpinning => "The wheel is already spinning",
        }
    }
}

impl fmt::Display for SpinRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinOutcome {
    pub accepted: bool,
    pub reason: Option<SpinRejection>,
}

impl SpinOutcome {
    pub const ACCEPTED: Self = Self {
        accepted: true,
        reason: None,
    };

    pub const fn rejected(reason: SpinRejection) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
        }
    }
}

/// One recorded draw result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Winner {
    pub ticket: Ticket,
    pub prize_index: u32,
}
