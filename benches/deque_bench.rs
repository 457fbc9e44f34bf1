use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ringdeq::RingDeque;
use std::collections::VecDeque;

const N: usize = 4095;

fn checked_cycle(c: &mut Criterion) {
    c.bench_function("ring checked cycle", |b| {
        let mut dq = RingDeque::new(N + 1);
        b.iter(|| {
            for i in 0..N {
                dq.push_back(i as u8).unwrap();
            }
            for _ in 0..N {
                black_box(dq.pop_front().unwrap());
            }
        })
    });
}

fn unchecked_cycle(c: &mut Criterion) {
    c.bench_function("ring unchecked cycle", |b| {
        let mut dq = RingDeque::new(N + 1);
        b.iter(|| unsafe {
            for i in 0..N {
                dq.push_back_unchecked(i as u8);
            }
            for _ in 0..N {
                black_box(dq.pop_front_unchecked());
            }
        })
    });
}

fn vecdeque_cycle(c: &mut Criterion) {
    c.bench_function("std vecdeque cycle", |b| {
        let mut dq: VecDeque<u8> = VecDeque::with_capacity(N + 1);
        b.iter(|| {
            for i in 0..N {
                dq.push_back(i as u8);
            }
            for _ in 0..N {
                black_box(dq.pop_front().unwrap());
            }
        })
    });
}

fn peek_scan(c: &mut Criterion) {
    c.bench_function("ring peek scan", |b| {
        let mut dq = RingDeque::new(N + 1);
        // start mid-storage so the scan crosses the boundary
        dq.reset_at((N + 1) / 2);
        for i in 0..N {
            dq.push_back(i as u8).unwrap();
        }
        b.iter(|| {
            let mut acc = 0u32;
            for i in 0..dq.population() {
                acc = acc.wrapping_add(u32::from(dq.peek_front(i).unwrap()));
            }
            black_box(acc)
        })
    });
}

criterion_group!(cycles, checked_cycle, unchecked_cycle, vecdeque_cycle);
criterion_group!(scans, peek_scan);
criterion_main!(cycles, scans);
