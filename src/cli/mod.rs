//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line interface for solving positions
//! and playing interactive games against the engine.

pub mod commands;
pub mod output;
