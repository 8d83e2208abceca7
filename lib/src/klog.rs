//! Logging subsystem.
//!
//! All log output funnels through a single **backend** function pointer.
//! Until a host registers one, lines go to standard error with a level tag.
//! A host embedding the draw engine (a UI shell, a test) registers its own
//! backend to route lines into its console or to capture them.
//!
//! # Backend contract
//!
//! The backend receives the level and the pre-formatted arguments for a
//! **single log line** and is responsible for writing the text and a
//! trailing newline without interleaving with other lines.
//!
//! # Registration
//!
//! ```ignore
//! raffle_lib::klog::klog_register_backend(my_backend_fn);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicPtr, AtomicU8, Ordering};
use std::io::Write;

// ---------------------------------------------------------------------------
// Log levels
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("error") {
            Some(KlogLevel::Error)
        } else if value.eq_ignore_ascii_case("warn") {
            Some(KlogLevel::Warn)
        } else if value.eq_ignore_ascii_case("info") {
            Some(KlogLevel::Info)
        } else if value.eq_ignore_ascii_case("debug") {
            Some(KlogLevel::Debug)
        } else if value.eq_ignore_ascii_case("trace") {
            Some(KlogLevel::Trace)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KlogLevel::Error => "ERROR",
            KlogLevel::Warn => "WARN",
            KlogLevel::Info => "INFO",
            KlogLevel::Debug => "DEBUG",
            KlogLevel::Trace => "TRACE",
        }
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Info as u8);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Backend dispatch
// ---------------------------------------------------------------------------

/// Signature of a klog backend. Must append the trailing newline itself.
pub type KlogBackend = fn(KlogLevel, fmt::Arguments<'_>);

/// Stored as a raw pointer; `null` means "use the stderr fallback".
static BACKEND: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

fn stderr_backend(level: KlogLevel, args: fmt::Arguments<'_>) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "[{}] {}", level.as_str(), args);
}

#[inline]
fn dispatch(level: KlogLevel, args: fmt::Arguments<'_>) {
    let ptr = BACKEND.load(Ordering::Acquire);
    if ptr.is_null() {
        stderr_backend(level, args);
    } else {
        // SAFETY: `klog_register_backend` only stores valid `KlogBackend` fn
        // pointers, which have the same size as `*mut ()`.
        let backend: KlogBackend = unsafe { core::mem::transmute(ptr) };
        backend(level, args);
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Replace the stderr fallback with `backend`.
pub fn klog_register_backend(backend: KlogBackend) {
    BACKEND.store(backend as *mut (), Ordering::Release);
}

/// Go back to the stderr fallback.
pub fn klog_reset_backend() {
    BACKEND.store(core::ptr::null_mut(), Ordering::Release);
}

pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}

/// Emit a formatted log line at the given level.
///
/// Callers should **not** include a trailing newline.
pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    dispatch(level, args);
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::klog::log_args($level, ::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Trace, ::core::format_args!($($arg)*))
    };
}
