// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how symptom matches get their numbers.
//!
//! `core` turns one (input, disease) pair into a score. `ranking` turns a pile
//! of scored diseases into the ordered, normalized top five.

mod core;
pub mod ranking;

pub use self::core::*;
