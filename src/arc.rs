//! Hemi-arc path construction.
//!
//! A hemi-arc is a semicircle whose flat edge (the chord) runs along one axis
//! of a unit square. Three parameters pick which of the possible semicircles
//! is drawn:
//!
//! - **axis**: the chord runs along X or Y
//! - **offset**: which half of the square the chord sits in
//! - **invert**: mirror the arc relative to its non-inverted counterpart
//!
//! # Orientation algebra
//!
//! Let `o = offset.flag()` and `i = invert`. The sweep flag is
//!
//! - X axis: `!o ^ i`
//! - Y axis: `!o == i`
//!
//! and the chord is pushed along the perpendicular axis by `r` when `o`
//! holds, and by another `r` when `i == o`. The two pushes stack:
//!
//! | offset | invert | shift | sweep X | sweep Y |
//! |--------|--------|-------|---------|---------|
//! | Pos    | false  | r     | 1       | 0       |
//! | Pos    | true   | 0     | 0       | 1       |
//! | Neg    | false  | r     | 0       | 1       |
//! | Neg    | true   | 2r    | 1       | 0       |
//!
//! This table is the visual-consistency contract between mirrored tiles; it
//! is tested case by case rather than derived.

use std::fmt;

use glam::DVec2;

use crate::defaults;
use crate::errors::BauhausError;
use crate::log::debug;
use crate::types::{positive, Axis, GridCell, NumericError, OffsetSide};

/// Sweep flag for an arc with the given orientation.
pub fn sweep_flag(axis: Axis, offset: OffsetSide, invert: bool) -> bool {
    let o = offset.flag();
    match axis {
        Axis::X => !o ^ invert,
        Axis::Y => !o == invert,
    }
}

/// Distance the chord is pushed along the perpendicular axis: `0`, `r` or `2r`.
///
/// Reporting only; [`ArcSpec::new`] applies the two pushes one at a time.
pub fn perpendicular_shift(unit_size: f64, offset: OffsetSide, invert: bool) -> f64 {
    let r = unit_size / 2.0;
    let o = offset.flag();
    let mut shift = 0.0;
    if o {
        shift += r;
    }
    if invert == o {
        shift += r;
    }
    shift
}

/// Add `by` to the single coordinate of `point` that lies along `axis`.
fn nudge(point: &mut DVec2, axis: Axis, by: f64) {
    match axis {
        Axis::X => point.x += by,
        Axis::Y => point.y += by,
    }
}

/// One SVG elliptical-arc segment, closed back to its start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub start: DVec2,
    pub end: DVec2,
    pub radius: f64,
    pub sweep: bool,
}

impl ArcSpec {
    /// Lay out the hemi-arc for a unit square at `cell`.
    ///
    /// The end point is extended along `axis` first, then each triggered
    /// shift adds `r` to the perpendicular coordinate of both points in turn.
    /// The coordinate along `axis` of the start point is never touched.
    ///
    /// Fails with [`BauhausError::InvalidGeometry`] when `unit_size` is not
    /// strictly positive, or when a coordinate is NaN/infinite going in or
    /// coming out. Nothing is clamped.
    pub fn new(
        cell: GridCell,
        unit_size: f64,
        axis: Axis,
        offset: OffsetSide,
        invert: bool,
    ) -> Result<Self, BauhausError> {
        let unit_size = positive(unit_size).map_err(BauhausError::geometry("unit size"))?;
        let cell = GridCell::try_new(cell.x, cell.y).map_err(BauhausError::geometry("grid cell"))?;

        let radius = unit_size / 2.0;
        let mut start = cell.origin();
        let mut end = start;
        nudge(&mut end, axis, unit_size);

        let o = offset.flag();
        let across = axis.perpendicular();
        if o {
            nudge(&mut start, across, radius);
            nudge(&mut end, across, radius);
        }
        if invert == o {
            nudge(&mut start, across, radius);
            nudge(&mut end, across, radius);
        }

        if !(start.is_finite() && end.is_finite()) {
            return Err(BauhausError::InvalidGeometry {
                what: "arc endpoint",
                source: NumericError::Infinite,
            });
        }

        let sweep = sweep_flag(axis, offset, invert);

        debug!(
            %axis, %offset, invert,
            start = ?start, end = ?end, radius, sweep,
            "hemi-arc"
        );

        Ok(ArcSpec {
            start,
            end,
            radius,
            sweep,
        })
    }

    /// Vector from start to end; always `unit_size` along the chord axis.
    pub fn chord(&self) -> DVec2 {
        self.end - self.start
    }

    /// How far the chord sits from `cell` along `axis`'s perpendicular.
    pub fn perpendicular_shift(&self, cell: GridCell, axis: Axis) -> f64 {
        (self.start - cell.origin()).dot(axis.perpendicular().unit())
    }

    /// SVG path data: `M x y A r r 0 0 sweep x y Z`.
    pub fn to_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArcSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} A {} {} {} {} {} {} {} Z",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            defaults::X_AXIS_ROTATION,
            defaults::LARGE_ARC_FLAG,
            u8::from(self.sweep),
            self.end.x,
            self.end.y,
        )
    }
}

/// Build the closed SVG path for one hemi-arc.
///
/// ```
/// use bauhaus::{build_arc_path, Axis, OffsetSide};
///
/// let path = build_arc_path(1.0, 1.0, 10.0, Axis::X, OffsetSide::Pos, false).unwrap();
/// assert_eq!(path, "M 1 6 A 5 5 0 0 1 11 6 Z");
/// ```
pub fn build_arc_path(
    x_idx: f64,
    y_idx: f64,
    unit_size: f64,
    axis: Axis,
    offset: OffsetSide,
    invert: bool,
) -> Result<String, BauhausError> {
    ArcSpec::new(GridCell::new(x_idx, y_idx), unit_size, axis, offset, invert)
        .map(|arc| arc.to_path())
}
