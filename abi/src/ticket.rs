//! Tickets as handed out by the persistence collaborator.

use alloc::string::String;
use core::fmt;

/// Identifier of a raffle in the backing store.
pub type RaffleId = u64;

/// Ticket number, unique within a raffle, in `1..=number_count`.
pub type TicketNumber = u32;

/// Sale/payment status of a ticket.
///
/// Transitions are driven by the surrounding application, never by the draw
/// engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    #[default]
    Unsold,
    SoldUnpaid,
    SoldPaid,
}

impl TicketStatus {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("unsold") {
            Some(TicketStatus::Unsold)
        } else if value.eq_ignore_ascii_case("sold-unpaid") {
            Some(TicketStatus::SoldUnpaid)
        } else if value.eq_ignore_ascii_case("sold-paid") {
            Some(TicketStatus::SoldPaid)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Unsold => "unsold",
            TicketStatus::SoldUnpaid => "sold-unpaid",
            TicketStatus::SoldPaid => "sold-paid",
        }
    }

    /// Only fully paid tickets take part in a draw.
    #[inline]
    pub fn is_draw_eligible(&self) -> bool {
        matches!(self, TicketStatus::SoldPaid)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ticket {
    pub number: TicketNumber,
    pub status: TicketStatus,
    pub buyer_name: Option<String>,
    pub buyer_phone: Option<String>,
}

impl Ticket {
    pub const fn unsold(number: TicketNumber) -> Self {
        Self {
            number,
            status: TicketStatus::Unsold,
            buyer_name: None,
            buyer_phone: None,
        }
    }

    pub fn paid(number: TicketNumber, buyer_name: &str) -> Self {
        Self {
            number,
            status: TicketStatus::SoldPaid,
            buyer_name: Some(String::from(buyer_name)),
            buyer_phone: None,
        }
    }

    #[inline]
    pub fn is_draw_eligible(&self) -> bool {
        self.status.is_draw_eligible()
    }

    /// Buyer name with blank values treated as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.buyer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in [
            TicketStatus::Unsold,
            TicketStatus::SoldUnpaid,
            TicketStatus::SoldPaid,
        ] {
            assert_eq!(TicketStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TicketStatus::parse("SOLD-PAID"), Some(TicketStatus::SoldPaid));
        assert_eq!(TicketStatus::parse("paid"), None);
    }

    #[test]
    fn test_only_paid_is_eligible() {
        assert!(!TicketStatus::Unsold.is_draw_eligible());
        assert!(!TicketStatus::SoldUnpaid.is_draw_eligible());
        assert!(TicketStatus::SoldPaid.is_draw_eligible());
    }

    #[test]
    fn test_blank_buyer_name_is_absent() {
        let mut ticket = Ticket::paid(4, "   ");
        assert_eq!(ticket.display_name(), None);
        ticket.buyer_name = Some(String::from(" Ana "));
        assert_eq!(ticket.display_name(), Some("Ana"));
    }
}
