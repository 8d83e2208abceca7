//! Host binding for one open wheel.
//!
//! The view owns the session behind a shared lock and hands out
//! [`FrameHandle`]s to the host's per-frame scheduler. A handle keeps only a
//! weak reference plus the session generation it was issued for, so frames
//! that fire after the view closed or restarted stop without touching state.

use core::time::Duration;
use std::sync::{Arc, Weak};

use raffle_abi::{PrizeBoard, RaffleId, SpinOutcome};
use raffle_lib::{klog_debug, klog_warn};

use crate::config::VisualConfig;
use crate::error::DrawResult;
use crate::render_model::RenderModel;
use crate::session::{DrawSession, TickOutcome};
use crate::store::TicketStore;

/// Tells the host scheduler whether to request another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

struct ViewState<S> {
    store: S,
    raffle: RaffleId,
    session: DrawSession,
    visual: VisualConfig,
}

pub struct WheelView<S: TicketStore> {
    state: Arc<spin::Mutex<ViewState<S>>>,
}

impl<S: TicketStore> WheelView<S> {
    pub fn open(store: S, raffle: RaffleId, visual: VisualConfig) -> DrawResult<Self> {
        Self::open_with(store, raffle, visual, |session| session)
    }

    /// Open with a hook to adjust the fresh session (config, effects).
    pub fn open_with(
        store: S,
        raffle: RaffleId,
        visual: VisualConfig,
        configure: impl FnOnce(DrawSession) -> DrawSession,
    ) -> DrawResult<Self> {
        let tickets = store.list_tickets(raffle)?;
        let prizes = PrizeBoard::from_prizes(store.list_prizes(raffle)?);
        let session = configure(DrawSession::with_prizes(&tickets, prizes));
        klog_debug!("view: raffle {} opened", raffle);
        Ok(Self {
            state: Arc::new(spin::Mutex::new(ViewState {
                store,
                raffle,
                session,
                visual,
            })),
        })
    }

    pub fn spin(&self) -> SpinOutcome {
        self.state.lock().session.spin()
    }

    /// Handle for the current session generation. Request one after an
    /// accepted spin and call it once per display frame.
    pub fn frame_handle(&self) -> FrameHandle<S> {
        let generation = self.state.lock().session.generation();
        FrameHandle {
            state: Arc::downgrade(&self.state),
            generation,
        }
    }

    /// Re-read tickets and prizes and start over. On a store failure the
    /// current session is left as it was.
    pub fn restart(&self) -> DrawResult {
        let mut state = self.state.lock();
        let tickets = state.store.list_tickets(state.raffle)?;
        let prizes = PrizeBoard::from_prizes(state.store.list_prizes(state.raffle)?);
        state.session.restart_with_prizes(&tickets, prizes);
        Ok(())
    }

    pub fn set_visual(&self, visual: VisualConfig) {
        self.state.lock().visual = visual;
    }

    pub fn render_model(&self) -> RenderModel {
        let state = self.state.lock();
        RenderModel::build(&state.session, &state.visual)
    }

    /// Runs `f` with the view locked; `f` must not call back into the view.
    pub fn with_session<R>(&self, f: impl FnOnce(&DrawSession) -> R) -> R {
        f(&self.state.lock().session)
    }

    /// Runs `f` with the view locked; `f` must not call back into the view.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.state.lock().store)
    }
}

impl<S: TicketStore> Drop for WheelView<S> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.session.cancel_spin() {
            klog_debug!("view: raffle {} closed mid-spin", state.raffle);
        }
    }
}

pub struct FrameHandle<S> {
    state: Weak<spin::Mutex<ViewState<S>>>,
    generation: u64,
}

impl<S: TicketStore> FrameHandle<S> {
    pub fn on_frame(&self, now: Duration) -> FrameControl {
        let Some(state) = self.state.upgrade() else {
            return FrameControl::Stop;
        };
        let mut guard = state.lock();
        let state = &mut *guard;
        if state.session.generation() != self.generation {
            return FrameControl::Stop;
        }

        match state.session.tick(now) {
            TickOutcome::Idle => FrameControl::Stop,
            TickOutcome::Animating { .. } => FrameControl::Continue,
            TickOutcome::Settled(winner) => {
                if state.session.config().persist_winners {
                    if let Err(err) = state.store.record_winner(
                        state.raffle,
                        winner.prize_index,
                        winner.ticket.number,
                    ) {
                        klog_warn!("view: winner for prize {} not saved: {}", winner.prize_index, err);
                    }
                }
                FrameControl::Stop
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawConfig;
    use crate::store::{MemoryStore, TicketUpdate};

    fn store_with_paid(count: u32, paid: &[u32]) -> (Arc<spin::Mutex<MemoryStore>>, RaffleId) {
        let store = Arc::new(spin::Mutex::new(MemoryStore::new()));
        let raffle = {
            let mut store = store.lock();
            let raffle = store.create_raffle(count);
            for &n in paid {
                store
                    .update_ticket(raffle, n, TicketUpdate::paid("Ana"))
                    .unwrap();
            }
            store.add_prize(raffle, 1, "Bike").unwrap();
            store.add_prize(raffle, 2, "Radio").unwrap();
            raffle
        };
        (store, raffle)
    }

    fn drive(handle: &FrameHandle<Arc<spin::Mutex<MemoryStore>>>) -> FrameControl {
        assert_eq!(handle.on_frame(Duration::ZERO), FrameControl::Continue);
        assert_eq!(handle.on_frame(Duration::from_millis(100)), FrameControl::Continue);
        handle.on_frame(Duration::from_secs(30))
    }

    #[test]
    fn test_open_reads_store() {
        let (store, raffle) = store_with_paid(10, &[2, 4, 6]);
        let view = WheelView::open(store, raffle, VisualConfig::default()).unwrap();
        view.with_session(|s| {
            assert_eq!(s.pool().len(), 3);
            assert_eq!(s.prize_count(), 2);
        });
        assert_eq!(view.render_model().segments.len(), 3);
    }

    #[test]
    fn test_open_unknown_raffle_fails() {
        let store = MemoryStore::new();
        assert!(WheelView::open(store, 42, VisualConfig::default()).is_err());
    }

    #[test]
    fn test_frames_settle_spin() {
        let (store, raffle) = store_with_paid(4, &[1, 2, 3]);
        let view = WheelView::open(store, raffle, VisualConfig::default()).unwrap();
        assert!(view.spin().accepted);
        let handle = view.frame_handle();
        assert_eq!(drive(&handle), FrameControl::Stop);
        view.with_session(|s| {
            assert_eq!(s.winners().len(), 1);
            assert_eq!(s.pool().len(), 2);
        });
        assert!(view.render_model().banner.is_some());
    }

    #[test]
    fn test_frames_after_close_stop() {
        let (store, raffle) = store_with_paid(4, &[1, 2, 3]);
        let view = WheelView::open(store.clone(), raffle, VisualConfig::default()).unwrap();
        view.spin();
        let handle = view.frame_handle();
        assert_eq!(handle.on_frame(Duration::ZERO), FrameControl::Continue);
        drop(view);
        assert_eq!(handle.on_frame(Duration::from_secs(30)), FrameControl::Stop);
    }

    #[test]
    fn test_frames_after_restart_stop() {
        let (store, raffle) = store_with_paid(4, &[1, 2, 3]);
        let view = WheelView::open(store.clone(), raffle, VisualConfig::default()).unwrap();
        view.spin();
        let stale = view.frame_handle();
        assert_eq!(stale.on_frame(Duration::ZERO), FrameControl::Continue);

        store
            .lock()
            .update_ticket(raffle, 4, TicketUpdate::paid("Luis"))
            .unwrap();
        view.restart().unwrap();

        assert_eq!(stale.on_frame(Duration::from_secs(30)), FrameControl::Stop);
        view.with_session(|s| {
            assert!(s.winners().is_empty());
            assert_eq!(s.pool().len(), 4);
            assert!(!s.is_spinning());
        });
    }

    #[test]
    fn test_winners_persist_only_when_enabled() {
        let (store, raffle) = store_with_paid(4, &[1, 2, 3]);
        let view = WheelView::open(store.clone(), raffle, VisualConfig::default()).unwrap();
        view.spin();
        drive(&view.frame_handle());
        assert!(store.lock().recorded_winners(raffle).unwrap().is_empty());
        drop(view);

        let view = WheelView::open_with(store.clone(), raffle, VisualConfig::default(), |s| {
            s.with_config(DrawConfig {
                persist_winners: true,
                ..DrawConfig::default()
            })
        })
        .unwrap();
        view.spin();
        drive(&view.frame_handle());
        let recorded = store.lock().recorded_winners(raffle).unwrap();
        let winner = view.with_session(|s| s.winners()[0].clone());
        assert_eq!(recorded, vec![(1, winner.ticket.number)]);
    }
}
