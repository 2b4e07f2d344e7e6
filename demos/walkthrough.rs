//! # Slot Ring Walkthrough
//!
//! Runs a scripted sequence of writes and reads and prints the buffer after
//! every step, so the cursors and the greyed-out garbage slots can be seen
//! moving around the ring.
//!
//! Run with: `cargo run --example walkthrough`

use slot_ring::{render_state, Config, RingBuffer, Style};

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    slot_ring::init_logging_with(config.log_level);

    let style = Style::from_config(&config);
    let show = |buffer: &RingBuffer| render_state(buffer, style);

    println!("create a new ring buffer with capacity {}:", config.capacity);
    let mut buffer = RingBuffer::new(config.capacity)?;
    println!("{}", show(&buffer));

    println!("\nwrite 3 values:");
    for i in 1..=3 {
        buffer.write(i);
        println!("write {}\t\t{}", i, show(&buffer));
    }

    println!("\nread a value:");
    if let Some(value) = buffer.read() {
        println!("read: {}\t\t{}", value, show(&buffer));
    }

    println!("\nread until empty:");
    drain(&mut buffer, &show);

    println!("\nwrite until full, wrapping around:");
    let mut next = 4;
    while buffer.write(next) {
        println!("write {}\t\t{}", next, show(&buffer));
        next += 1;
    }
    println!("full");

    println!("\nread until empty, wrapping around:");
    drain(&mut buffer, &show);

    Ok(())
}

fn drain(buffer: &mut RingBuffer, show: &dyn Fn(&RingBuffer) -> String) {
    while let Some(value) = buffer.read() {
        println!("read: {}\t\t{}", value, show(buffer));
    }
    println!("empty");
}
