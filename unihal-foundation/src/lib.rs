// UniHAL - unihal-foundation
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Core containers and signal-conditioning primitives for the UniHAL
//! abstraction layer.
//!
//! The target runtimes behind UniHAL offer no safe, full-featured standard
//! containers: heap behavior differs per board, index arithmetic may be 8 or
//! 16 bits wide, and there is no unwinding. This crate provides the
//! containers the rest of the layer is built on, plus the small
//! signal-conditioning helpers used by the digital/analog input wrappers.
//! It supports three configurations:
//! - `std`: Full standard library support
//! - `no_std` + `alloc`: No standard library but with allocation
//! - `no_std` without `alloc`: Fixed-capacity containers only
//!
//! # Feature Flags
//!
//! - `std` (default): Enables standard library support (implies `alloc`)
//! - `alloc`: Enables `DynamicArray` on `no_std` targets with a heap
//! - `log`: Emits trace records on container reallocation events
//! - `kani`: Formal verification harness support

#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Core library is always available
extern crate core;

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

// Re-export common types from prelude
pub use prelude::*;
// Re-export error related types for convenience
pub use unihal_error::{codes, Error, ErrorCategory};

/// Result type alias for UniHAL operations using `unihal_error::Error`
pub type Result<T> = core::result::Result<T, Error>;

// Core modules - always available in all configurations
/// Sequence and ring containers
pub mod collections;
/// Debounce and slew-rate conditioning for raw input signals
pub mod filter;
/// Monotonic millisecond tick type and clock seam
pub mod time;
