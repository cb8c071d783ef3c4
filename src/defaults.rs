//! Fixed path parameters and size-class multipliers

/// Hemi-arcs are circular, so the ellipse is never rotated.
pub const X_AXIS_ROTATION: u8 = 0;
/// A semicircle never needs the large arc.
pub const LARGE_ARC_FLAG: u8 = 0;
pub const HALF_UNIT: f64 = 0.5;
pub const FULL_UNIT: f64 = 1.0;
