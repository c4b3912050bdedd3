//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types
//! - Collections and data structures
//! - Logging utilities

pub mod collections;
pub mod logging;
pub mod math;
