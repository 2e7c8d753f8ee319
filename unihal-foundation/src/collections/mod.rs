// UniHAL - unihal-foundation
// Module: Collections - container types
// SW-REQ-ID: REQ_MEM_SAFETY_001, REQ_RESOURCE_001
//
// Copyright (c) 2025 The UniHAL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Container types for the UniHAL abstraction layer.
//!
//! Two families live here:
//!
//! - [`DynamicArray`]: a growable, contiguous, random-access sequence with
//!   amortized-constant append and recoverable allocation failure. Requires
//!   a heap (`alloc` feature).
//! - [`RingBuffer`] / [`IndexedRingBuffer`]: fixed-capacity circular
//!   buffers over inline storage. Zero heap allocation ever, which makes
//!   them safe next to interrupt-adjacent code. The indexed variant adds
//!   head/tail-relative access and arbitrary-position deletion.

#[cfg(feature = "alloc")]
mod dynamic_array;
mod indexed_ring_buffer;
mod ring_buffer;

#[cfg(feature = "alloc")]
pub use dynamic_array::DynamicArray;
pub use indexed_ring_buffer::{IndexedRingBuffer, IndexedRingBufferIter};
pub use ring_buffer::{RingBuffer, RingBufferIter};
