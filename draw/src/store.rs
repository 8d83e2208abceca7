//! Persistence collaborator seam and the local offline store.

use std::collections::BTreeMap;
use std::sync::Arc;

use raffle_abi::{Prize, RaffleId, Ticket, TicketNumber, TicketStatus};
use raffle_lib::klog_debug;

use crate::error::{StoreError, StoreResult};

/// Buyer/payment change for one ticket. The number never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub status: TicketStatus,
    pub buyer_name: Option<String>,
    pub buyer_phone: Option<String>,
}

impl TicketUpdate {
    pub fn paid(buyer_name: &str) -> Self {
        Self {
            status: TicketStatus::SoldPaid,
            buyer_name: Some(String::from(buyer_name)),
            buyer_phone: None,
        }
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.buyer_phone = Some(String::from(phone));
        self
    }
}

/// Where tickets and prizes come from. Local or remote, the engine only
/// reads snapshots through this trait.
pub trait TicketStore {
    fn list_tickets(&self, raffle: RaffleId) -> StoreResult<Vec<Ticket>>;

    fn list_prizes(&self, raffle: RaffleId) -> StoreResult<Vec<Prize>>;

    fn ticket(&self, raffle: RaffleId, number: TicketNumber) -> StoreResult<Ticket>;

    fn update_ticket(
        &mut self,
        raffle: RaffleId,
        number: TicketNumber,
        update: TicketUpdate,
    ) -> StoreResult<Ticket>;

    /// Extension point for durable draw results. Stores that keep draws
    /// ephemeral leave this as a no-op.
    fn record_winner(
        &mut self,
        _raffle: RaffleId,
        _prize_index: u32,
        _number: TicketNumber,
    ) -> StoreResult {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RaffleTables {
    tickets: Vec<Ticket>,
    prizes: Vec<Prize>,
    winners: Vec<(u32, TicketNumber)>,
}

/// In-memory store, one table set per raffle.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raffles: BTreeMap<RaffleId, RaffleTables>,
    next_id: RaffleId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// New raffle with tickets `1..=number_count`, all unsold.
    pub fn create_raffle(&mut self, number_count: u32) -> RaffleId {
        self.next_id += 1;
        let raffle = self.next_id;
        let tables = RaffleTables {
            tickets: (1..=number_count).map(Ticket::unsold).collect(),
            ..RaffleTables::default()
        };
        self.raffles.insert(raffle, tables);
        klog_debug!("store: raffle {} created with {} numbers", raffle, number_count);
        raffle
    }

    /// Adds or replaces the prize at `position`.
    pub fn add_prize(&mut self, raffle: RaffleId, position: u32, name: &str) -> StoreResult {
        let tables = self.tables_mut(raffle)?;
        tables.prizes.retain(|p| p.position != position);
        tables.prizes.push(Prize::new(position, name));
        tables.prizes.sort_by_key(|p| p.position);
        Ok(())
    }

    pub fn recorded_winners(&self, raffle: RaffleId) -> StoreResult<Vec<(u32, TicketNumber)>> {
        Ok(self.tables(raffle)?.winners.clone())
    }

    fn tables(&self, raffle: RaffleId) -> StoreResult<&RaffleTables> {
        self.raffles
            .get(&raffle)
            .ok_or(StoreError::UnknownRaffle { raffle })
    }

    fn tables_mut(&mut self, raffle: RaffleId) -> StoreResult<&mut RaffleTables> {
        self.raffles
            .get_mut(&raffle)
            .ok_or(StoreError::UnknownRaffle { raffle })
    }
}

impl TicketStore for MemoryStore {
    fn list_tickets(&self, raffle: RaffleId) -> StoreResult<Vec<Ticket>> {
        Ok(self.tables(raffle)?.tickets.clone())
    }

    fn list_prizes(&self, raffle: RaffleId) -> StoreResult<Vec<Prize>> {
        Ok(self.tables(raffle)?.prizes.clone())
    }

    fn ticket(&self, raffle: RaffleId, number: TicketNumber) -> StoreResult<Ticket> {
        self.tables(raffle)?
            .tickets
            .iter()
            .find(|t| t.number == number)
            .cloned()
            .ok_or(StoreError::UnknownTicket { raffle, number })
    }

    fn update_ticket(
        &mut self,
        raffle: RaffleId,
        number: TicketNumber,
        update: TicketUpdate,
    ) -> StoreResult<Ticket> {
        let ticket = self
            .tables_mut(raffle)?
            .tickets
            .iter_mut()
            .find(|t| t.number == number)
            .ok_or(StoreError::UnknownTicket { raffle, number })?;
        ticket.status = update.status;
        ticket.buyer_name = update.buyer_name;
        ticket.buyer_phone = update.buyer_phone;
        Ok(ticket.clone())
    }

    fn record_winner(
        &mut self,
        raffle: RaffleId,
        prize_index: u32,
        number: TicketNumber,
    ) -> StoreResult {
        self.tables_mut(raffle)?.winners.push((prize_index, number));
        Ok(())
    }
}

/// Shared store: the host keeps editing tickets while a view reads them.
impl<S: TicketStore> TicketStore for Arc<spin::Mutex<S>> {
    fn list_tickets(&self, raffle: RaffleId) -> StoreResult<Vec<Ticket>> {
        self.lock().list_tickets(raffle)
    }

    fn list_prizes(&self, raffle: RaffleId) -> StoreResult<Vec<Prize>> {
        self.lock().list_prizes(raffle)
    }

    fn ticket(&self, raffle: RaffleId, number: TicketNumber) -> StoreResult<Ticket> {
        self.lock().ticket(raffle, number)
    }

    fn update_ticket(
        &mut self,
        raffle: RaffleId,
        number: TicketNumber,
        update: TicketUpdate,
    ) -> StoreResult<Ticket> {
        self.lock().update_ticket(raffle, number, update)
    }

    fn record_winner(
        &mut self,
        raffle: RaffleId,
        prize_index: u32,
        number: TicketNumber,
    ) -> StoreResult {
        self.lock().record_winner(raffle, prize_index, number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_raffle_seeds_unsold_numbers() {
        let mut store = MemoryStore::new();
        let raffle = store.create_raffle(5);
        let tickets = store.list_tickets(raffle).unwrap();
        assert_eq!(tickets.len(), 5);
        assert_eq!(tickets[0].number, 1);
        assert_eq!(tickets[4].number, 5);
        assert!(tickets.iter().all(|t| t.status == TicketStatus::Unsold));
    }

    #[test]
    fn test_update_ticket() {
        let mut store = MemoryStore::new();
        let raffle = store.create_raffle(3);
        let updated = store
            .update_ticket(raffle, 2, TicketUpdate::paid("Ana").with_phone("555-0101"))
            .unwrap();
        assert_eq!(updated.status, TicketStatus::SoldPaid);
        assert_eq!(store.ticket(raffle, 2).unwrap(), updated);
        assert_eq!(updated.buyer_phone.as_deref(), Some("555-0101"));
    }

    #[test]
    fn test_unknown_ids() {
        let mut store = MemoryStore::new();
        let raffle = store.create_raffle(2);
        assert_eq!(
            store.list_tickets(raffle + 1),
            Err(StoreError::UnknownRaffle { raffle: raffle + 1 })
        );
        assert_eq!(
            store.update_ticket(raffle, 9, TicketUpdate::default()),
            Err(StoreError::UnknownTicket { raffle, number: 9 })
        );
    }

    #[test]
    fn test_prizes_ordered_and_replaced() {
        let mut store = MemoryStore::new();
        let raffle = store.create_raffle(2);
        store.add_prize(raffle, 2, "Blender").unwrap();
        store.add_prize(raffle, 1, "Bike").unwrap();
        store.add_prize(raffle, 2, "Toaster").unwrap();
        let prizes = store.list_prizes(raffle).unwrap();
        assert_eq!(prizes, vec![Prize::new(1, "Bike"), Prize::new(2, "Toaster")]);
    }

    #[test]
    fn test_shared_store_records_winners() {
        let mut shared = Arc::new(spin::Mutex::new(MemoryStore::new()));
        let raffle = shared.lock().create_raffle(4);
        shared.record_winner(raffle, 1, 3).unwrap();
        assert_eq!(shared.lock().recorded_winners(raffle).unwrap(), vec![(1, 3)]);
    }
}
