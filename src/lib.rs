//! Hemispherical-arc tile geometry for Bauhaus-style SVG artwork.
//!
//! A tile sits on a grid cell and is drawn as one or more closed
//! semicircular paths. [`build_arc_path`] turns a cell, a size and an
//! orientation into SVG path data; the variants in [`units`] compose those
//! arcs into fixed motifs.
//!
//! ```
//! use bauhaus::{Unit, VariantKind};
//!
//! let tile = VariantKind::HalfXPos.at((1.0, 1.0), 20.0);
//! assert_eq!(tile.width(), 10.0);
//! assert_eq!(tile.draw().unwrap(), ["M 1 6 A 5 5 0 0 1 11 6 Z"]);
//! ```
//!
//! Document assembly, colors and file output belong to the caller.

pub mod arc;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod types;
pub mod units;

pub use arc::{build_arc_path, perpendicular_shift, sweep_flag, ArcSpec};
pub use errors::BauhausError;
pub use types::{Axis, GridCell, NumericError, OffsetSide, SizeClass};
pub use units::{
    Circle, FullXInv, HalfXNeg, HalfXPos, HalfYNeg, HalfYPos, Unit, UnitVariant, VariantKind,
};
