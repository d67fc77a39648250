//! Layout configuration errors.

use thiserror::Error;

/// A [`LayoutConfig`](super::LayoutConfig) that cannot produce a consistent layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A sampling range is inverted or not finite.
    #[error("invalid range for {field}: [{min}, {max}]")]
    InvalidRange {
        /// Config field the range belongs to.
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// A size that must be positive and finite is not.
    #[error("invalid dimension for {field}: {value}")]
    InvalidDimension {
        /// Config field the dimension belongs to.
        field: &'static str,
        value: f32,
    },

    /// A balcony grid extends past the top of its building.
    #[error("{building} balconies reach {top} but the building is {height} tall")]
    BalconiesOverflow {
        building: &'static str,
        top: f32,
        height: f32,
    },

    /// A landmark or surface is off the level it rests on.
    #[error("{object} sits at {base} but must rest on {level}")]
    NotResting {
        object: &'static str,
        base: f32,
        level: f32,
    },

    /// A balcony grid with rows but no columns, or the other way round.
    #[error("{building} balcony grid is {rows}x{columns}")]
    EmptyBalconyGrid {
        building: &'static str,
        rows: usize,
        columns: usize,
    },
}

/// Result type for layout configuration.
pub type LayoutResult<T> = Result<T, LayoutError>;
