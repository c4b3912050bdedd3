//! Component systems with behaviour beyond their schema

pub mod layout_group;

pub use layout_group::LayoutGroupSystem;
