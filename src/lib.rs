//! Kestrel, a small-dimension geometry kernel
//!
//! The math itself lives in [`math`], this crate ties it together with the [`logging`] and loads the [`Settings`] for both.

pub use kestrel_math as math;
pub use kestrel_logging as logging;

mod settings;
pub use settings::*;
