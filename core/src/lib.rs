// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Facts API core
//!
//! Aggregates short categorized facts from three independent upstream
//! providers, tolerating partial upstream failure and memoizing results.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Domain model, aggregation services, provider adapters,
//!   and the HTTP presentation layer

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
