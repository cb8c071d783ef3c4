//! Tile variants.
//!
//! Each variant is a fixed composition of hemi-arcs placed at a grid cell.
//! The set is closed: new motifs are new variants, never runtime parameters
//! on an existing one.

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use crate::arc::build_arc_path;
use crate::errors::BauhausError;
use crate::log::{debug, warn};
use crate::types::{Axis, GridCell, OffsetSide, SizeClass};

/// Common behavior for all tile variants
#[enum_dispatch]
pub trait Unit {
    /// Tag identifying the variant
    fn kind(&self) -> VariantKind;

    /// Top-left corner of the tile
    fn cell(&self) -> GridCell;

    /// Base cell size the tile was declared with
    fn unit_px(&self) -> f64;

    fn size_class(&self) -> SizeClass {
        self.kind().size_class()
    }

    /// Edge length of the square the tile occupies
    fn width(&self) -> f64 {
        self.size_class().edge(self.unit_px())
    }

    /// Path strings for the tile, in drawing order
    fn draw(&self) -> Result<Vec<String>, BauhausError>;
}

/// One hemi-arc spanning the whole tile.
fn hemi(
    unit: &impl Unit,
    axis: Axis,
    offset: OffsetSide,
    invert: bool,
) -> Result<String, BauhausError> {
    let cell = unit.cell();
    build_arc_path(cell.x, cell.y, unit.width(), axis, offset, invert)
}

macro_rules! tile {
    ($(#[$meta:meta])* $name:ident, |$this:ident| $draw:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            pub cell: GridCell,
            pub unit_px: f64,
        }

        impl $name {
            pub fn new(cell: impl Into<GridCell>, unit_px: f64) -> Self {
                Self {
                    cell: cell.into(),
                    unit_px,
                }
            }
        }

        impl Unit for $name {
            fn kind(&self) -> VariantKind {
                VariantKind::$name
            }

            fn cell(&self) -> GridCell {
                self.cell
            }

            fn unit_px(&self) -> f64 {
                self.unit_px
            }

            fn draw(&self) -> Result<Vec<String>, BauhausError> {
                let $this = self;
                $draw
            }
        }
    };
}

tile!(
    /// Half-size semicircle on a horizontal chord, filling the lower half.
    HalfXNeg,
    |this| Ok(vec![hemi(this, Axis::X, OffsetSide::Neg, false)?])
);

tile!(
    /// Half-size semicircle on a horizontal chord, filling the upper half.
    HalfXPos,
    |this| Ok(vec![hemi(this, Axis::X, OffsetSide::Pos, false)?])
);

tile!(
    /// Half-size semicircle on a vertical chord.
    HalfYNeg,
    |this| Ok(vec![hemi(this, Axis::Y, OffsetSide::Neg, false)?])
);

tile!(
    /// Half-size semicircle on a vertical chord, mirrored from [`HalfYNeg`].
    HalfYPos,
    |this| Ok(vec![hemi(this, Axis::Y, OffsetSide::Pos, false)?])
);

tile!(
    /// Full-size tile drawn as the same X/Neg hemi-arc twice; both paths are identical.
    FullXInv,
    |this| {
        Ok(vec![
            hemi(this, Axis::X, OffsetSide::Neg, false)?,
            hemi(this, Axis::X, OffsetSide::Neg, false)?,
        ])
    }
);

tile!(
    /// Reserved full-size circle. Has no composition yet.
    Circle,
    |this| {
        warn!(cell = ?this.cell, "circle tiles cannot be drawn yet");
        Err(BauhausError::UnsupportedVariant {
            variant: this.kind().name(),
        })
    }
);

/// A placed tile of any variant
#[enum_dispatch(Unit)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitVariant {
    HalfXNeg,
    HalfXPos,
    HalfYNeg,
    HalfYPos,
    FullXInv,
    Circle,
}

/// Variant tag without a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    HalfXNeg,
    HalfXPos,
    HalfYNeg,
    HalfYPos,
    FullXInv,
    Circle,
}

impl VariantKind {
    pub const ALL: [VariantKind; 6] = [
        VariantKind::HalfXNeg,
        VariantKind::HalfXPos,
        VariantKind::HalfYNeg,
        VariantKind::HalfYPos,
        VariantKind::FullXInv,
        VariantKind::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VariantKind::HalfXNeg => "half-x-neg",
            VariantKind::HalfXPos => "half-x-pos",
            VariantKind::HalfYNeg => "half-y-neg",
            VariantKind::HalfYPos => "half-y-pos",
            VariantKind::FullXInv => "full-x-inv",
            VariantKind::Circle => "circle",
        }
    }

    pub fn size_class(self) -> SizeClass {
        match self {
            VariantKind::HalfXNeg
            | VariantKind::HalfXPos
            | VariantKind::HalfYNeg
            | VariantKind::HalfYPos => SizeClass::Half,
            VariantKind::FullXInv | VariantKind::Circle => SizeClass::Full,
        }
    }

    /// Place a tile of this kind at `cell`.
    pub fn at(self, cell: impl Into<GridCell>, unit_px: f64) -> UnitVariant {
        let cell = cell.into();
        debug!(kind = self.name(), x = cell.x, y = cell.y, unit_px, "placing tile");
        match self {
            VariantKind::HalfXNeg => HalfXNeg::new(cell, unit_px).into(),
            VariantKind::HalfXPos => HalfXPos::new(cell, unit_px).into(),
            VariantKind::HalfYNeg => HalfYNeg::new(cell, unit_px).into(),
            VariantKind::HalfYPos => HalfYPos::new(cell, unit_px).into(),
            VariantKind::FullXInv => FullXInv::new(cell, unit_px).into(),
            VariantKind::Circle => Circle::new(cell, unit_px).into(),
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantKind {
    type Err = BauhausError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BauhausError::UnknownVariant { name: s.to_string() })
    }
}
