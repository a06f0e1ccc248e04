use std::{hint::black_box, thread, time::Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use crossing_utils::thread::HandoffQueue;

fn same_thread_benchmark(c: &mut Criterion) {
  let queue = HandoffQueue::new();

  c.bench_function("handoff same_thread", |b| {
    b.iter(|| {
      queue.send(black_box(1_u64));
      black_box(queue.receive().unwrap());
    })
  });
}

fn cross_thread_benchmark(c: &mut Criterion) {
  for batch in [1, 100, 10_000] {
    c.bench_function(&format!("handoff cross_thread {}", batch), |b| {
      b.iter_custom(|iters| {
        let queue = HandoffQueue::new();
        let consumer = queue.clone();
        let total = iters * batch;

        let start = Instant::now();
        let handle = thread::spawn(move || {
          for _ in 0..total {
            black_box(consumer.receive().unwrap());
          }
        });
        for i in 0..total {
          queue.send(i);
        }
        handle.join().unwrap();
        start.elapsed()
      })
    });
  }
}

criterion_group!(handoff, same_thread_benchmark, cross_thread_benchmark);
criterion_main!(handoff);
