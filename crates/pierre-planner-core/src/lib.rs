// ABOUTME: Core types and constants for the Pierre strength session planner
// ABOUTME: Foundation crate with domain models, error handling, and training constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Planner Core
//!
//! Foundation crate providing shared types and constants for the session planner.
//! This crate is designed to change infrequently so the engine and the facade crate
//! can build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlannerError`
//! - **constants**: Training constants organized by domain (rest, RPE, recovery landmarks)
//! - **models**: Catalog, athlete context, history, periodization, and plan types

/// Unified error handling system with standard error codes
pub mod errors;

/// Training constants organized by domain
pub mod constants;

/// Core data models (catalog entries, athlete context, history, workout plans)
pub mod models;
