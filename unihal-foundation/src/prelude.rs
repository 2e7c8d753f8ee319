// UniHAL - unihal-foundation
// Module: UniHAL Foundation Prelude
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for unihal-foundation
//!
//! Re-exports the container types, the clock seam, and the error types so a
//! consumer crate can pull in the whole working set with one `use`.

#[cfg(feature = "alloc")]
pub use crate::collections::DynamicArray;
pub use crate::collections::{IndexedRingBuffer, RingBuffer};
pub use crate::filter::{DelayedSwitch, SlewLimiter};
pub use crate::time::{Instant, ManualClock, Monotonic};
pub use unihal_error::{codes, Error, ErrorCategory, Result};
