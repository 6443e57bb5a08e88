// Copyright (c) 2024, Pointer Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for pointer-stack.

/// A result type alias for pointer-stack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for pointer-stack.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested cursor index is outside the range of stored items.
    #[error("index out of range: {index} (len: {len})")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of items in the stack at the time of the request.
        len: usize,
    },
}
