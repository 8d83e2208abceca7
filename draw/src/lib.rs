//! Raffle draw engine.
//!
//! Selection without replacement over the paid tickets of a raffle, the
//! wheel animation that presents each draw, and the host binding that keeps
//! frame callbacks safe across teardown.

pub mod animation;
pub mod config;
pub mod effects;
pub mod eligibility;
pub mod entropy;
pub mod error;
pub mod render_model;
pub mod session;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_fixtures;

pub use config::{DisplayFlags, DrawConfig, EffectFlags, SpinSpeed, VisualConfig};
pub use effects::{EffectSink, NullEffects, SoundCue};
pub use eligibility::eligible_pool;
pub use entropy::{CryptoEntropy, EntropySource};
pub use error::{DrawError, DrawResult, EffectError, EffectResult, StoreError, StoreResult};
pub use render_model::{POINTER_ANGLE, RenderModel, Segment};
pub use session::{DrawSession, TickOutcome, WinnerBanner};
pub use store::{MemoryStore, TicketStore, TicketUpdate};
pub use view::{FrameControl, FrameHandle, WheelView};

use raffle_abi::{SpinOutcome, Ticket};

/// Open a draw over the paid tickets of `tickets`.
pub fn start_session(tickets: &[Ticket], prize_count: u32) -> DrawSession {
    DrawSession::new(tickets, prize_count)
}

pub fn spin(session: &mut DrawSession) -> SpinOutcome {
    session.spin()
}

/// Reset `session` against a fresh ticket snapshot.
pub fn restart(session: &mut DrawSession, tickets: &[Ticket]) {
    session.restart(tickets);
}

pub fn get_render_model(session: &DrawSession, visual: &VisualConfig) -> RenderModel {
    RenderModel::build(session, visual)
}
