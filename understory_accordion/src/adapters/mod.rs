// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to other Understory crates.
//!
//! - `sticky`: places sticky panel headers with `understory_sticky`.

pub mod sticky;
