use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ringdeq::RingDeque;
use std::sync::mpsc::sync_channel;
use std::thread;

const AMT: usize = 4096;

fn no_contention_ring(c: &mut Criterion) {
    c.bench_function("ring fill drain", |b| {
        let (mut tx, mut rx) = RingDeque::new(AMT + 1).split();
        b.iter(|| {
            for i in 0..AMT {
                tx.push(i as u8).unwrap();
            }
            for _ in 0..AMT {
                black_box(rx.pop().unwrap());
            }
        })
    });
}

fn contention_ring(c: &mut Criterion) {
    c.bench_function("contention ring", |b| {
        b.iter(|| {
            let (mut tx, mut rx) = RingDeque::new(1024).split();

            let t = thread::spawn(move || {
                for i in 0..AMT {
                    while tx.push(i as u8).is_err() {
                        std::hint::spin_loop();
                    }
                }
            });

            for _ in 0..AMT {
                while rx.pop().is_err() {
                    std::hint::spin_loop();
                }
            }

            t.join().unwrap();
        })
    });
}

fn contention_ring_reversed(c: &mut Criterion) {
    c.bench_function("contention ring reversed", |b| {
        b.iter(|| {
            let (mut tx, mut rx) = RingDeque::new(1024).split_rev();

            let t = thread::spawn(move || {
                for i in 0..AMT {
                    while tx.push(i as u8).is_err() {
                        std::hint::spin_loop();
                    }
                }
            });

            for _ in 0..AMT {
                while rx.pop().is_err() {
                    std::hint::spin_loop();
                }
            }

            t.join().unwrap();
        })
    });
}

fn contention_sync_channel(c: &mut Criterion) {
    c.bench_function("contention std sync_channel", |b| {
        b.iter(|| {
            let (tx, rx) = sync_channel::<u8>(1023);

            let t = thread::spawn(move || {
                for i in 0..AMT {
                    tx.send(i as u8).unwrap();
                }
            });

            for _ in 0..AMT {
                rx.recv().unwrap();
            }

            t.join().unwrap();
        })
    });
}

criterion_group!(uncontended, no_contention_ring);
criterion_group!(
    contended,
    contention_ring,
    contention_ring_reversed,
    contention_sync_channel
);
criterion_main!(uncontended, contended);
