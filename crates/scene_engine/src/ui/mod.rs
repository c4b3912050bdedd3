//! UI support for layout groups

pub mod layout;

pub use layout::{Fitting, LayoutCalculator, LayoutOptions, Orientation, Placement};
