// Copyright (c) 2024, Pointer Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A simple example walking a command history backward and forward.
//!
//! Run with `RUST_LOG=trace` to see the stack's trace events.

use pointer_stack::{PointerStack, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut history = PointerStack::from(vec![
        "git status".to_string(),
        "git add -p".to_string(),
        "git commit".to_string(),
    ]);

    println!("most recent: {:?}", history.peek());

    // Walk back to the oldest command, like pressing Up in a shell.
    while let Some(command) = history.move_prev() {
        println!("back:    {command}");
    }

    // And forward again.
    while let Some(command) = history.move_next() {
        println!("forward: {command}");
    }

    // Reposition anywhere, then a new entry snaps the cursor to the tail.
    history.set_pointer(0)?;
    history.push("cargo test".to_string());
    println!("after push, cursor is at {:?}", history.pointer());
    println!("current: {:?}", history.current());

    Ok(())
}
