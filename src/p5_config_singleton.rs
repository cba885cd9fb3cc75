//! Pattern 5: Singleton
//! Example: Lazily Constructed Shared Config, Raced by Two Threads
//!
//! Run with: cargo run --bin p5_config_singleton

use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

/// A single, globally accessible instance. `OnceLock` guarantees
/// at-most-one construction even under concurrent first use; the
/// value supplied by the first caller wins and later values are
/// ignored.
struct ConfigStore {
    value: String,
}

impl ConfigStore {
    fn instance(value: &str) -> &'static ConfigStore {
        static INSTANCE: OnceLock<ConfigStore> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            println!("ConfigStore constructed with value '{}'", value);
            ConfigStore {
                value: value.to_string(),
            }
        })
    }

    fn value(&self) -> &str {
        &self.value
    }
}

fn main() {
    println!("=== Two Threads Race for the Instance ===\n");

    thread::scope(|s| {
        s.spawn(|| {
            thread::sleep(Duration::from_millis(100));
            let config = ConfigStore::instance("foo");
            println!("Thread foo sees value: {}", config.value());
        });

        s.spawn(|| {
            thread::sleep(Duration::from_millis(100));
            let config = ConfigStore::instance("bar");
            println!("Thread bar sees value: {}", config.value());
        });
    });

    println!("\n=== Same Instance Everywhere ===");
    let first = ConfigStore::instance("main");
    let second = ConfigStore::instance("later");

    println!("Value after the race: {}", first.value());
    println!("Same instance: {}", std::ptr::eq(first, second));
}
