//! Eligible pool derivation.

use std::collections::HashSet;

use raffle_abi::Ticket;

/// Paid tickets in source order, one entry per ticket number.
///
/// A number listed twice among the paid tickets keeps its first occurrence.
pub fn eligible_pool(tickets: &[Ticket]) -> Vec<Ticket> {
    let mut seen = HashSet::with_capacity(tickets.len());
    tickets
        .iter()
        .filter(|ticket| ticket.is_draw_eligible())
        .filter(|ticket| seen.insert(ticket.number))
        .cloned()
        .collect()
}
