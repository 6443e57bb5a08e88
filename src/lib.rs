// Copyright (c) 2024, Pointer Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A generic pointer-tracking stack: an ordered sequence of items plus a movable
//! cursor referencing one of them, with forward/backward navigation, tail
//! insertion and removal, random cursor positioning, and bulk clearing. Useful
//! as a building block for command-line history navigation and undo/redo-style
//! traversal.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod stack;

pub use errors::{Error, Result};
pub use stack::PointerStack;
