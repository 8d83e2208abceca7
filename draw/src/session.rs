//! The draw controller.
//!
//! A [`DrawSession`] owns the eligible pool, the prize cursor and the winner
//! list of one open wheel. [`DrawSession::spin`] picks a winner up front but
//! only commits it when the animation settles in [`DrawSession::tick`]; a
//! cancelled or restarted spin leaves no trace.

use core::time::Duration;

use raffle_abi::{
    Prize, PrizeBoard, SpinOutcome, SpinRejection, Ticket, TicketNumber, Winner,
};
use raffle_lib::{klog_debug, klog_error, klog_info, klog_set_level};

use crate::animation::{
    AnimationPhase, FrameStep, SpinAnimation, SpinPlan, normalize_rotation,
};
use crate::config::DrawConfig;
use crate::effects::{EffectSink, Effects};
use crate::eligibility::eligible_pool;
use crate::entropy::{CryptoEntropy, EntropySource};

/// Announcement for the most recent settled spin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerBanner {
    pub prize_index: u32,
    /// Present when the session was opened with a prize list.
    pub prize_name: Option<String>,
    pub ticket_number: TicketNumber,
    pub buyer_name: Option<String>,
}

impl WinnerBanner {
    pub fn headline(&self) -> String {
        let prize = match &self.prize_name {
            Some(name) => format!("Prize {}: {}", self.prize_index, name),
            None => format!("Prize {}", self.prize_index),
        };
        match &self.buyer_name {
            Some(buyer) => format!("{} - #{} {}", prize, self.ticket_number, buyer),
            None => format!("{} - #{}", prize, self.ticket_number),
        }
    }
}

/// Result of driving the session by one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// No spin in flight.
    Idle,
    Animating { progress: f64 },
    /// The spin finished on this frame and its winner was committed.
    Settled(Winner),
}

pub struct DrawSession {
    pool: Vec<Ticket>,
    prizes: PrizeBoard,
    current_prize_index: u32,
    winners: Vec<Winner>,
    rotation_angle: f64,
    animation: SpinAnimation,
    last_banner: Option<WinnerBanner>,
    config: DrawConfig,
    entropy: Box<dyn EntropySource>,
    effects: Effects,
    generation: u64,
}

impl DrawSession {
    /// Session over the paid tickets of `tickets` with `prize_count`
    /// unnamed prizes.
    pub fn new(tickets: &[Ticket], prize_count: u32) -> Self {
        Self::with_prizes(tickets, PrizeBoard::with_count(prize_count))
    }

    pub fn with_prizes(tickets: &[Ticket], prizes: PrizeBoard) -> Self {
        let config = DrawConfig::default();
        let pool = eligible_pool(tickets);
        klog_info!(
            "draw: session start, pool {} tickets, {} prizes",
            pool.len(),
            prizes.count()
        );
        Self {
            pool,
            prizes,
            current_prize_index: 1,
            winners: Vec::new(),
            rotation_angle: 0.0,
            animation: SpinAnimation::new(),
            last_banner: None,
            effects: Effects::new(config.effects, Box::new(crate::effects::NullEffects)),
            config,
            entropy: Box::new(CryptoEntropy::system()),
            generation: 0,
        }
    }

    pub fn with_config(mut self, config: DrawConfig) -> Self {
        if let Some(level) = config.log_level {
            klog_set_level(level);
        }
        self.effects.set_flags(config.effects);
        self.config = config;
        self
    }

    pub fn with_entropy<E: EntropySource + 'static>(mut self, entropy: E) -> Self {
        self.entropy = Box::new(entropy);
        self
    }

    pub fn with_effects(mut self, sink: Box<dyn EffectSink>) -> Self {
        self.effects.replace_sink(sink);
        self
    }

    fn rejection(&self) -> Option<SpinRejection> {
        if self.animation.is_running() {
            Some(SpinRejection::AlreadySpinning)
        } else if self.current_prize_index > self.prizes.count() {
            Some(SpinRejection::Exhausted)
        } else if self.pool.is_empty() {
            Some(SpinRejection::EmptyPool)
        } else {
            None
        }
    }

    /// Start one draw. The winner is chosen now and committed when the
    /// animation settles.
    pub fn spin(&mut self) -> SpinOutcome {
        if let Some(reason) = self.rejection() {
            klog_debug!("draw: spin rejected: {}", reason);
            return SpinOutcome::rejected(reason);
        }

        let pool_len = self.pool.len();
        let winner_index = self.entropy.pick_index(pool_len);
        self.rotation_angle = normalize_rotation(self.rotation_angle);
        self.animation.start(SpinPlan::new(
            winner_index,
            pool_len,
            self.rotation_angle,
            self.config.full_rotations,
            self.config.spin_duration(),
        ));
        klog_debug!(
            "draw: spin accepted, pool {}, prize {}",
            pool_len,
            self.current_prize_index
        );
        self.effects.spin_started();
        SpinOutcome::ACCEPTED
    }

    /// Advance the animation to `now`, a monotonic timestamp.
    pub fn tick(&mut self, now: Duration) -> TickOutcome {
        match self.animation.advance(now) {
            FrameStep::Still => TickOutcome::Idle,
            FrameStep::Moving { angle, progress } => {
                self.rotation_angle = angle;
                TickOutcome::Animating { progress }
            }
            FrameStep::Finished {
                angle,
                winner_index,
            } => {
                self.rotation_angle = angle;
                match self.settle(winner_index) {
                    Some(winner) => TickOutcome::Settled(winner),
                    None => TickOutcome::Idle,
                }
            }
        }
    }

    fn settle(&mut self, winner_index: usize) -> Option<Winner> {
        if winner_index >= self.pool.len() {
            klog_error!(
                "draw: winner index {} outside pool of {}",
                winner_index,
                self.pool.len()
            );
            return None;
        }

        let ticket = self.pool.remove(winner_index);
        let prize_index = self.current_prize_index;
        self.last_banner = Some(WinnerBanner {
            prize_index,
            prize_name: self.prizes.at_position(prize_index).map(|p| p.name.clone()),
            ticket_number: ticket.number,
            buyer_name: ticket.display_name().map(String::from),
        });
        let winner = Winner {
            ticket,
            prize_index,
        };
        self.winners.push(winner.clone());
        self.current_prize_index += 1;
        klog_info!(
            "draw: prize {} goes to ticket #{}",
            prize_index,
            winner.ticket.number
        );
        self.effects.spin_settled();
        Some(winner)
    }

    /// Abort an in-flight spin. Nothing is recorded; the wheel stays where
    /// the last frame left it.
    pub fn cancel_spin(&mut self) -> bool {
        let cancelled = self.animation.cancel();
        if cancelled {
            klog_debug!("draw: spin cancelled at {:.3} rad", self.rotation_angle);
        }
        cancelled
    }

    /// Throw away all draw state and rebuild the pool from `tickets`.
    pub fn restart(&mut self, tickets: &[Ticket]) {
        let prizes = core::mem::take(&mut self.prizes);
        self.restart_with_prizes(tickets, prizes);
    }

    pub fn restart_with_prizes(&mut self, tickets: &[Ticket], prizes: PrizeBoard) {
        self.cancel_spin();
        self.animation.reset();
        self.pool = eligible_pool(tickets);
        self.prizes = prizes;
        self.current_prize_index = 1;
        self.winners.clear();
        self.rotation_angle = 0.0;
        self.last_banner = None;
        self.generation = self.generation.wrapping_add(1);
        klog_info!(
            "draw: session restart, pool {} tickets, {} prizes",
            self.pool.len(),
            self.prizes.count()
        );
    }

    pub fn pool(&self) -> &[Ticket] {
        &self.pool
    }

    pub fn prizes(&self) -> &PrizeBoard {
        &self.prizes
    }

    pub fn prize_count(&self) -> u32 {
        self.prizes.count()
    }

    pub fn current_prize_index(&self) -> u32 {
        self.current_prize_index
    }

    /// Prize the next spin draws for, when named.
    pub fn current_prize(&self) -> Option<&Prize> {
        self.prizes.at_position(self.current_prize_index)
    }

    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    /// Current wheel rotation in radians. It only decreases while a spin
    /// animates, but each accepted spin first folds it into `(-2π, 0]` by
    /// whole turns, so the value can jump up between spins. Hosts that
    /// interpolate across spins should compare it modulo `2π`.
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.animation.is_running()
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_prize_index > self.prizes.count() || self.pool.is_empty()
    }

    pub fn animation_phase(&self) -> &AnimationPhase {
        self.animation.phase()
    }

    pub fn last_banner(&self) -> Option<&WinnerBanner> {
        self.last_banner.as_ref()
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Bumped on every restart; frame callbacks from before a restart see a
    /// different value and stop.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
