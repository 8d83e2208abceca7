//! Wheel rasterizer for the raffle draw engine.
//!
//! Turns a [`raffle_draw::RenderModel`] into drawing calls on a
//! [`WheelBackend`]. Any [`raffle_abi::Canvas`] can back it through
//! [`CanvasBackend`].

pub mod backend;
pub mod error;
pub mod wheel;

pub use backend::{CanvasBackend, TextRun, WheelBackend};
pub use error::{VideoError, VideoResult};
pub use wheel::{render_wheel, render_winner_banner, text_width_px};
