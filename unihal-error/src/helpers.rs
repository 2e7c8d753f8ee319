// UniHAL - unihal-error
// Module: UniHAL Error Helpers
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.
//!
//! This module provides free helper functions for creating the error values
//! that come up throughout the container and signal-conditioning code.

use crate::{codes, Error, ErrorCategory};

/// Create an allocation failure error
#[must_use]
pub const fn allocation_failed_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Memory, codes::ALLOCATION_FAILED, message)
}

/// Create a capacity overflow error
#[must_use]
pub const fn capacity_overflow_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::CAPACITY_OVERFLOW, message)
}

/// Create an index out of bounds error
#[must_use]
pub const fn index_out_of_bounds_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_BOUNDS, message)
}

/// Create an amount out of bounds error
#[must_use]
pub const fn amount_out_of_bounds_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::AMOUNT_OUT_OF_BOUNDS, message)
}

/// Create an invalid parameter error
#[must_use]
pub const fn invalid_parameter_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Parameter, codes::INVALID_PARAMETER, message)
}

/// Create an invalid state error
#[must_use]
pub const fn invalid_state_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::InvalidState, codes::INVALID_STATE, message)
}
