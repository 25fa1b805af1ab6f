// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Fact
//!
//! Shared data model for aggregated facts.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Value types exchanged between providers, the aggregator,
//!   and the presentation layer

use serde::{Deserialize, Serialize};

/// A single categorized fact. Immutable once constructed; `category` is
/// guaranteed non-empty by the time a fact reaches a caller (adapters tag
/// facts at construction and the fallback wrapper backstops empty tags).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The fact text
    pub text: String,

    /// Display-cased category label (e.g. "Cats")
    pub category: String,
}

/// An ordered list of facts. No ordering or de-duplication guarantee is
/// made to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactsContainer {
    pub facts: Vec<Fact>,
}

impl FactsContainer {
    pub fn new(facts: Vec<Fact>) -> Self {
        Self { facts }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

/// Normalized category filter for an aggregation request.
///
/// Absent or blank input means no filtering; anything else matches facts
/// by exact, case-insensitive category comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No filter requested
    All,

    /// Retain only facts whose category equals the held (lower-cased) label
    Only(String),
}

impl CategoryFilter {
    /// Parse a raw query value. Empty and whitespace-only strings map to
    /// [`CategoryFilter::All`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !value.trim().is_empty() => {
                Self::Only(value.trim().to_ascii_lowercase())
            }
            _ => Self::All,
        }
    }

    /// Exact, case-insensitive match. No substring or prefix matching.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(filter) => category.eq_ignore_ascii_case(filter),
        }
    }
}
