//! Error types with diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building arcs or drawing tiles
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum BauhausError {
    #[error("invalid geometry: {what} ({source})")]
    #[diagnostic(
        code(bauhaus::geometry::invalid),
        help("unit sizes must be finite and greater than zero; coordinates must be finite")
    )]
    InvalidGeometry {
        what: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("unsupported variant: {variant}")]
    #[diagnostic(
        code(bauhaus::unit::unsupported),
        help("this tile variant has no arc composition yet")
    )]
    UnsupportedVariant { variant: &'static str },

    #[error("unknown variant: {name}")]
    #[diagnostic(
        code(bauhaus::unit::unknown),
        help("expected one of: half-x-neg, half-x-pos, half-y-neg, half-y-pos, full-x-inv, circle")
    )]
    UnknownVariant { name: String },
}

impl BauhausError {
    pub(crate) fn geometry(what: &'static str) -> impl FnOnce(NumericError) -> Self {
        move |source| BauhausError::InvalidGeometry { what, source }
    }
}
