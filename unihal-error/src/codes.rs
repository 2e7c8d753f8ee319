// UniHAL - unihal-error
// Module: UniHAL Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for UniHAL

// Memory error codes (1000-1099)
/// Allocation request was refused by the allocator
pub const ALLOCATION_FAILED: u16 = 1000;
/// Allocation request exceeds what the allocator can represent
pub const ALLOCATION_TOO_LARGE: u16 = 1001;

// Capacity error codes (1100-1199)
/// Capacity exceeded
pub const CAPACITY_EXCEEDED: u16 = 1100;
/// Capacity arithmetic overflowed the index type
pub const CAPACITY_OVERFLOW: u16 = 1101;

// Bounds error codes (1200-1299)
/// Index past the live element range
pub const INDEX_OUT_OF_BOUNDS: u16 = 1200;
/// Amount larger than the live element count
pub const AMOUNT_OUT_OF_BOUNDS: u16 = 1201;

// Parameter error codes (1300-1399)
/// Invalid argument passed to an operation
pub const INVALID_PARAMETER: u16 = 1300;

// State error codes (1400-1499)
/// Operation called in a state that does not permit it
pub const INVALID_STATE: u16 = 1400;
/// Operation not supported on this target
pub const NOT_SUPPORTED: u16 = 1401;
