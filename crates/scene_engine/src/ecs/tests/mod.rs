//! Scenario tests spanning several scene graph modules

mod clone_integration;
mod reflow_integration;
