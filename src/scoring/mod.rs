// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents get their numbers and their order.
//!
//! `core` fuses the keyword and similarity signals into one final score;
//! `ranking` orders by that score and nothing else, leaning on a stable sort
//! to keep the provider's order among ties.

mod core;
pub mod ranking;

pub use core::*;
