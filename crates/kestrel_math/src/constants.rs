//! Common math constants, in single precision

/// pi
pub const PI : f32 = core::f32::consts::PI;
/// 2 * pi
pub const TWO_PI : f32 = core::f32::consts::TAU;
/// pi / 2
pub const HALF_PI : f32 = core::f32::consts::FRAC_PI_2;
/// pi / 4
pub const QUARTER_PI : f32 = core::f32::consts::FRAC_PI_4;

/// pi / 180
pub const DEG_TO_RAD : f32 = PI / 180.0;
/// 180 / pi
pub const RAD_TO_DEG : f32 = 180.0 / PI;
