// Copyright (c) 2024, Pointer Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pointer_stack::PointerStack;

fn bench_push(c: &mut Criterion) {
    c.bench_function("push 1000", |b| {
        b.iter(|| {
            let mut stack = PointerStack::with_capacity(1000);
            for i in 0..1000u32 {
                stack.push(black_box(i));
            }
            stack
        })
    });
}

fn bench_push_pop(c: &mut Criterion) {
    c.bench_function("push/pop 1000", |b| {
        b.iter(|| {
            let mut stack = PointerStack::with_capacity(1000);
            for i in 0..1000u32 {
                stack.push(black_box(i));
            }
            while stack.pop().is_some() {}
            stack
        })
    });
}

fn bench_cursor_sweep(c: &mut Criterion) {
    c.bench_function("cursor sweep 1000", |b| {
        let mut stack: PointerStack<u32> = (0..1000).collect();
        b.iter(|| {
            stack.set_pointer(0).unwrap();
            while stack.move_next().is_some() {}
            black_box(stack.pointer())
        })
    });
}

criterion_group!(benches, bench_push, bench_push_pop, bench_cursor_sweep);
criterion_main!(benches);
