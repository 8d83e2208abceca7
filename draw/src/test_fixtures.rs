//! Builders shared by the scenario tests.

use core::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use raffle_abi::{Ticket, TicketStatus, Winner};

use crate::entropy::CryptoEntropy;
use crate::session::{DrawSession, TickOutcome};

pub(crate) fn paid_tickets(numbers: impl IntoIterator<Item = u32>) -> Vec<Ticket> {
    numbers
        .into_iter()
        .map(|n| Ticket::paid(n, &format!("Buyer {n}")))
        .collect()
}

pub(crate) fn ticket(number: u32, status: TicketStatus) -> Ticket {
    Ticket {
        number,
        status,
        ..Ticket::default()
    }
}

pub(crate) fn seeded(seed: u64) -> CryptoEntropy<StdRng> {
    CryptoEntropy::new(StdRng::seed_from_u64(seed))
}

/// Drive the in-flight spin to completion with explicit timestamps.
pub(crate) fn finish_spin(session: &mut DrawSession, start: Duration) -> Option<Winner> {
    let end = start + session.config().spin_duration();
    session.tick(start);
    match session.tick(end) {
        TickOutcome::Settled(winner) => Some(winner),
        _ => None,
    }
}

/// Spin and settle once; `None` when the spin was rejected.
pub(crate) fn draw_once(session: &mut DrawSession) -> Option<Winner> {
    if !session.spin().accepted {
        return None;
    }
    finish_spin(session, Duration::ZERO)
}
