//! Error types for the draw engine and its collaborators.
//!
//! Spin requests never fail with an error: a refused spin is a normal
//! [`SpinOutcome`](raffle_abi::SpinOutcome). The types here cover opening a
//! session from a store, configuration values and presentation effects.

use core::fmt;

use raffle_abi::{RaffleId, TicketNumber};

/// Persistence collaborator failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownRaffle { raffle: RaffleId },
    UnknownTicket { raffle: RaffleId, number: TicketNumber },
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRaffle { raffle } => write!(f, "raffle {} does not exist", raffle),
            Self::UnknownTicket { raffle, number } => {
                write!(f, "raffle {} has no ticket #{}", raffle, number)
            }
            Self::Backend(msg) => write!(f, "store backend failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T = ()> = Result<T, StoreError>;

/// Draw engine failure outside of spin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    Store(StoreError),
    InvalidOption { key: String, value: String },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{}", err),
            Self::InvalidOption { key, value } => {
                write!(f, "invalid value {:?} for option {}", value, key)
            }
        }
    }
}

impl std::error::Error for DrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidOption { .. } => None,
        }
    }
}

impl From<StoreError> for DrawError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

pub type DrawResult<T = ()> = Result<T, DrawError>;

/// Presentation effect failure. Logged and dropped, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    SoundUnavailable,
    PlaybackFailed(String),
    ConfettiUnavailable,
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoundUnavailable => write!(f, "audio output unavailable"),
            Self::PlaybackFailed(msg) => write!(f, "sound playback failed: {}", msg),
            Self::ConfettiUnavailable => write!(f, "confetti effect unavailable"),
        }
    }
}

impl std::error::Error for EffectError {}

pub type EffectResult = Result<(), EffectError>;
