//! Runtime configuration of the precondition checks done at the intersection entry points.
//!
//! The checks are only compiled in with the `precondition_checks` feature, the mode then decides what happens on a violation.

use core::{
    fmt,
    sync::atomic::{AtomicU8, AtomicU32, Ordering},
};
use cfg_if::cfg_if;
use kestrel_logging::LogCategory;
use crate::*;

const LOG_CAT : LogCategory = LogCategory::new_with_sub("Math", "Config");

/// Default tolerance used when checking if a direction has unit length
pub const DEFAULT_UNIT_EPSILON : f32 = 1e-4;

/// What to do when an input violates a precondition
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum PreconditionMode {
    /// Don't check anything
    #[default]
    Ignore,
    /// Log a warning and continue
    Warn,
    /// Panic
    Panic,
}

impl PreconditionMode {
    /// Get the mode from its name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ignore" => Some(PreconditionMode::Ignore),
            "warn"   => Some(PreconditionMode::Warn),
            "panic"  => Some(PreconditionMode::Panic),
            _        => None,
        }
    }

    fn from_u8(val: u8) -> Self {
        match val {
            1 => PreconditionMode::Warn,
            2 => PreconditionMode::Panic,
            _ => PreconditionMode::Ignore,
        }
    }
}

impl fmt::Display for PreconditionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreconditionMode::Ignore => f.write_str("ignore"),
            PreconditionMode::Warn   => f.write_str("warn"),
            PreconditionMode::Panic  => f.write_str("panic"),
        }
    }
}

static PRECONDITION_MODE : AtomicU8 = AtomicU8::new(PreconditionMode::Ignore as u8);
static UNIT_EPSILON_BITS : AtomicU32 = AtomicU32::new(DEFAULT_UNIT_EPSILON.to_bits());

/// Set the precondition mode
pub fn set_precondition_mode(mode: PreconditionMode) {
    PRECONDITION_MODE.store(mode as u8, Ordering::Relaxed);
}

/// Get the precondition mode
pub fn precondition_mode() -> PreconditionMode {
    PreconditionMode::from_u8(PRECONDITION_MODE.load(Ordering::Relaxed))
}

/// Set the max difference of a squared direction length from 1, negative values are stored as their absolute value
pub fn set_unit_epsilon(epsilon: f32) {
    UNIT_EPSILON_BITS.store(epsilon.abs().to_bits(), Ordering::Relaxed);
}

/// Get the unit length tolerance
pub fn unit_epsilon() -> f32 {
    f32::from_bits(UNIT_EPSILON_BITS.load(Ordering::Relaxed))
}

/// Check that a direction with the squared length `len_sq` is unit length, within the configured tolerance
pub fn check_unit_direction(name: &'static str, len_sq: f32) -> Result<()> {
    if len_sq.is_close_to(1.0, unit_epsilon()) {
        Ok(())
    } else {
        Err(Error::NonUnitDirection(name, len_sq.sqrt()))
    }
}

cfg_if!{
    if #[cfg(feature = "precondition_checks")] {
        /// Apply the current precondition mode to a unit direction check
        #[inline]
        pub(crate) fn enforce_unit_direction(name: &'static str, len_sq: f32) {
            match precondition_mode() {
                PreconditionMode::Ignore => {},
                PreconditionMode::Warn => if let Err(err) = check_unit_direction(name, len_sq) {
                    kestrel_logging::log_warning!(LOG_CAT, "{err}");
                },
                PreconditionMode::Panic => if let Err(err) = check_unit_direction(name, len_sq) {
                    panic!("{err}");
                },
            }
        }
    } else {
        #[inline(always)]
        pub(crate) fn enforce_unit_direction(_name: &'static str, _len_sq: f32) {}
    }
}
