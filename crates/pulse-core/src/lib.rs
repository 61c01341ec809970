//! # pulse-core
//!
//! Core types for the Pulse live-insights engine.
//!
//! This crate provides the foundational types shared across all Pulse crates:
//! - Closed enums for assistance types, priorities, display modes, insight types
//! - Entity structs for signals, live questions, actions, insights, and feedback
//! - `EnumSet`, the bitset used for enabled phases and insight types
//! - `LiveInsightsSettings`, the user preference snapshot
//! - Threshold bands for classification and tier aggregation
//! - Engine/CLI response types
//! - Cross-cutting error types

pub mod entities;
pub mod enum_set;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod settings;
pub mod thresholds;
