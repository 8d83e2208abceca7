//! Raffle draw ABI types
//!
//! Canonical definitions for everything shared between the draw engine, the
//! rasterizer and the persistence collaborator: tickets, prizes, spin
//! outcomes, colors and the closed appearance tables.
//!
//! The crate is `no_std` + `alloc` so the same types can back an offline
//! per-browser store as well as a hosted service.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod draw;
pub mod outcome;
pub mod palette;
pub mod prize;
pub mod ticket;

pub use draw::{Canvas, Color32};
pub use outcome::{SpinOutcome, SpinRejection, Winner};
pub use palette::{ColorScheme, FontSpec, FontStyle, PointerStyle};
pub use prize::{Prize, PrizeBoard};
pub use ticket::{RaffleId, Ticket, TicketNumber, TicketStatus};
