//! Shared runtime helpers for the raffle draw workspace: logging, option
//! parsing and label text.

pub mod config;
pub mod klog;
pub mod string;

pub use klog::{
    KlogLevel, klog_get_level, klog_register_backend, klog_reset_backend, klog_set_level,
};
pub use string::{LABEL_MAX_CHARS, segment_label, truncate_chars};
