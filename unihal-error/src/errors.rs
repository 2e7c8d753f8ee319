// UniHAL - unihal-error
// Module: UniHAL Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for UniHAL
//!
//! The error type is deliberately small: a category, a numeric code, and a
//! static message. It is `Copy`, never allocates, and can be created in
//! const contexts, which makes it usable from interrupt-adjacent code.

use core::fmt;

use crate::codes;

/// `Error` categories for UniHAL operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Memory errors (allocation failures)
    Memory    = 1,
    /// Capacity errors (growth arithmetic, exhausted space)
    Capacity  = 2,
    /// Bounds errors (index or amount past the live range)
    Bounds    = 3,
    /// Parameter errors (invalid arguments)
    Parameter = 4,
    /// Runtime errors (general)
    Runtime   = 5,
    /// Invalid state errors
    InvalidState = 6,
    /// Not supported operation errors
    NotSupported = 7,
}

/// UniHAL `Error` type
///
/// This is the main error type for the UniHAL abstraction layer. It provides
/// categorized errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an allocation failure error
    #[must_use]
    pub const fn allocation_failed(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::ALLOCATION_FAILED, message)
    }

    /// Create an error for an allocation request too large to represent
    #[must_use]
    pub const fn allocation_too_large(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::ALLOCATION_TOO_LARGE, message)
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create a capacity arithmetic overflow error
    #[must_use]
    pub const fn capacity_overflow(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_OVERFLOW, message)
    }

    /// Create an index out of bounds error
    #[must_use]
    pub const fn index_out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_BOUNDS, message)
    }

    /// Create an amount out of bounds error
    #[must_use]
    pub const fn amount_out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::AMOUNT_OUT_OF_BOUNDS, message)
    }

    /// Create an invalid parameter error
    #[must_use]
    pub const fn invalid_parameter(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::INVALID_PARAMETER, message)
    }

    /// Create an invalid state error
    #[must_use]
    pub const fn invalid_state(message: &'static str) -> Self {
        Self::new(ErrorCategory::InvalidState, codes::INVALID_STATE, message)
    }

    /// Create a not supported error
    #[must_use]
    pub const fn not_supported(message: &'static str) -> Self {
        Self::new(ErrorCategory::NotSupported, codes::NOT_SUPPORTED, message)
    }

    /// Check if this is a memory error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a parameter error
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        self.category == ErrorCategory::Parameter
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_category_and_code() {
        let error = Error::index_out_of_bounds("Index past the live range");
        let rendered = std::format!("{error}");
        assert_eq!(rendered, "[Bounds][E04B0] Index past the live range");
    }

    #[test]
    fn category_predicates() {
        assert!(Error::allocation_failed("x").is_memory_error());
        assert!(Error::capacity_overflow("x").is_capacity_error());
        assert!(Error::index_out_of_bounds("x").is_bounds_error());
        assert!(Error::invalid_parameter("x").is_parameter_error());
        assert!(!Error::invalid_parameter("x").is_bounds_error());
    }

    #[test]
    fn errors_compare_by_value() {
        let a = Error::capacity_exceeded("full");
        let b = Error::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, "full");
        assert_eq!(a, b);
    }
}
