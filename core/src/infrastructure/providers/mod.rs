// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Provider Adapter Infrastructure - Anti-Corruption Layer Implementations
//
// Each adapter translates between the domain FactsProvider interface and
// one upstream wire format. Differences in response shape and credentials
// are fully encapsulated here and invisible to the aggregator.

pub mod cat;
pub mod dog;
pub mod ninja;
pub mod registry;

pub use registry::ProviderRegistry;
