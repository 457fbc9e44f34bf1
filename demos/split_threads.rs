use ringdeq::RingDeque;
use std::thread;

fn main() {
    let (mut tx, mut rx) = RingDeque::new(128).split();

    thread::spawn(move || {
        for i in 0..10u8 {
            while tx.push(i).is_err() {
                std::hint::spin_loop();
            }
        }
    });

    let mut seen = 0;
    while seen < 10 {
        match rx.pop() {
            Ok(b) => {
                println!("got = {}", b);
                seen += 1;
            }
            Err(_) => {
                if rx.is_abandoned() && rx.is_empty() {
                    println!("producer dropped");
                    break;
                }
                std::hint::spin_loop();
            }
        }
    }
}
