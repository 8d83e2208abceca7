#![no_std]
#![forbid(unsafe_code)]

pub mod canvas_ops;
pub mod draw_buffer;

pub use draw_buffer::{BYTES_PER_PIXEL, DrawBuffer};
