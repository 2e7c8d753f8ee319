// UniHAL - unihal-error
// Module: UniHAL Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! UniHAL error handling library
//!
//! This library provides the error handling system shared by every crate in
//! the UniHAL abstraction layer. It includes error types, numeric error
//! codes, and const helper functions for creating errors without allocating.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! - Memory errors (1000-1099): allocation failures
//! - Capacity errors (1100-1199): size arithmetic overflow, exhausted growth
//! - Bounds errors (1200-1299): indices and amounts past the live range
//! - Parameter errors (1300-1399): invalid arguments
//! - State errors (1400-1499): invalid state, unsupported operations
//!
//! # Usage
//!
//! ```
//! use unihal_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Bounds,
//!     codes::INDEX_OUT_OF_BOUNDS,
//!     "Index past the live range",
//! );
//! assert!(error.is_bounds_error());
//! ```
//!
//! The error type is `Copy` and carries only a category, a code, and a
//! `&'static str` message, so constructing and returning one never
//! allocates. This keeps the type usable on allocation-intolerant targets.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for UniHAL
pub mod codes;
/// Error and error handling types
pub mod errors;

// Modules
pub mod helpers;
pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for UniHAL operations.
///
/// This type alias uses `unihal_error::Error` as the error type and is
/// suitable for `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;

// Re-export additional helpers
pub use helpers::*;
