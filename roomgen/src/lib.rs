//! Room layout modelling, strict overlap testing and greedy layout repair for rectangular floor plans.

/// Rooms, plots and layouts
pub mod entities;

/// Geometric primitives and the overlap predicate
pub mod geometry;

/// Importing layouts into and exporting layouts out of this library
pub mod io;

/// Greedy pairwise separation of overlapping rooms
pub mod repair;

/// Helper functions which do not belong to any specific module
pub mod util;
