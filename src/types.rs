//! Value types for tile geometry.
//!
//! Everything here is `Copy` and carries no lifecycle: a tile is described by
//! where it sits ([`GridCell`]), how big it is ([`SizeClass`]) and how its
//! hemi-arcs are oriented ([`Axis`], [`OffsetSide`]).

use std::fmt;

use glam::DVec2;
use thiserror::Error;

use crate::defaults;

/// Classification of a rejected numeric input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is zero when non-zero required
    #[error("value is zero")]
    Zero,
    /// Value is negative when positive required
    #[error("value is negative")]
    Negative,
}

/// Accept any finite value.
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Accept a finite, strictly positive value.
#[inline]
pub fn positive(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Axis along which a hemisphere's flat edge lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other axis.
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Unit vector pointing along this axis (SVG convention, Y-down).
    pub fn unit(self) -> DVec2 {
        match self {
            Axis::X => DVec2::X,
            Axis::Y => DVec2::Y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Which half of the unit square the arc's flat edge sits in, measured along
/// the perpendicular axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetSide {
    Pos,
    Neg,
}

impl OffsetSide {
    /// Boolean operand of the sweep/shift algebra.
    ///
    /// The flag is raised for [`OffsetSide::Neg`]. With this mapping a
    /// `Pos` arc along X gets its flat edge through the middle of the square
    /// and sweeps clockwise, e.g. `M 1 6 A 5 5 0 0 1 11 6 Z` for a 10-unit
    /// square at (1, 1).
    #[inline]
    pub fn flag(self) -> bool {
        matches!(self, OffsetSide::Neg)
    }
}

impl From<bool> for OffsetSide {
    fn from(flag: bool) -> Self {
        if flag { OffsetSide::Neg } else { OffsetSide::Pos }
    }
}

impl fmt::Display for OffsetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetSide::Pos => write!(f, "pos"),
            OffsetSide::Neg => write!(f, "neg"),
        }
    }
}

/// Top-left corner of a unit square, in the caller's length units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridCell {
    pub x: f64,
    pub y: f64,
}

impl GridCell {
    pub fn new(x: f64, y: f64) -> Self {
        GridCell { x, y }
    }

    /// Create a cell with validation (rejects NaN/infinite coordinates)
    pub fn try_new(x: f64, y: f64) -> Result<Self, NumericError> {
        Ok(GridCell {
            x: finite(x)?,
            y: finite(y)?,
        })
    }

    pub fn origin(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for GridCell {
    fn from((x, y): (f64, f64)) -> Self {
        GridCell { x, y }
    }
}

/// Size class of a tile relative to the base cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Half,
    Full,
}

impl SizeClass {
    pub fn multiplier(self) -> f64 {
        match self {
            SizeClass::Half => defaults::HALF_UNIT,
            SizeClass::Full => defaults::FULL_UNIT,
        }
    }

    /// Edge length of the square a tile of this class occupies.
    pub fn edge(self, unit_px: f64) -> f64 {
        unit_px * self.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_accepts_any_real() {
        assert_eq!(finite(0.0), Ok(0.0));
        assert_eq!(finite(-3.5), Ok(-3.5));
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert_eq!(finite(f64::NAN), Err(NumericError::NaN));
        assert_eq!(finite(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(finite(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert_eq!(positive(0.0), Err(NumericError::Zero));
        assert_eq!(positive(-0.0), Err(NumericError::Zero));
        assert_eq!(positive(-1.0), Err(NumericError::Negative));
        assert_eq!(positive(f64::NAN), Err(NumericError::NaN));
        assert_eq!(positive(2.0), Ok(2.0));
    }

    #[test]
    fn perpendicular_swaps_axes() {
        assert_eq!(Axis::X.perpendicular(), Axis::Y);
        assert_eq!(Axis::Y.perpendicular(), Axis::X);
    }

    #[test]
    fn axis_unit_vectors() {
        assert_eq!(Axis::X.unit(), DVec2::new(1.0, 0.0));
        assert_eq!(Axis::Y.unit(), DVec2::new(0.0, 1.0));
    }

    #[test]
    fn offset_flag_is_raised_for_neg() {
        assert!(OffsetSide::Neg.flag());
        assert!(!OffsetSide::Pos.flag());
        assert_eq!(OffsetSide::from(true), OffsetSide::Neg);
        assert_eq!(OffsetSide::from(false), OffsetSide::Pos);
    }

    #[test]
    fn grid_cell_try_new_rejects_non_finite() {
        assert_eq!(GridCell::try_new(f64::NAN, 0.0), Err(NumericError::NaN));
        assert_eq!(
            GridCell::try_new(0.0, f64::INFINITY),
            Err(NumericError::Infinite)
        );
        assert_eq!(GridCell::try_new(1.0, 2.0), Ok(GridCell::new(1.0, 2.0)));
    }

    #[test]
    fn size_class_edges() {
        for unit_px in [1.0, 10.0, 37.5, 600.0] {
            assert_eq!(SizeClass::Half.edge(unit_px), unit_px / 2.0);
            assert_eq!(SizeClass::Full.edge(unit_px), unit_px);
        }
    }
}
