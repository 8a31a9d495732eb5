// ABOUTME: Shared test helpers and utilities for planner integration tests
// ABOUTME: Exports the fixture catalog, history builders, and seeded request generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fixtures;
pub mod synthetic_requests;
