use std::sync::Arc;

use itlog::{FormatFlags, Level, LevelLogger, Logger, default_logger, set_default_logger};

fn main() {
    set_default_logger(Arc::new(
        LevelLogger::new_console(
            &[FormatFlags::STD, FormatFlags::MICROSECONDS, FormatFlags::SHORT_FILE],
            Level::Info,
        )
        .colored(),
    ));
    default_logger().info("Hello, world from main thread!");

    let handles: Vec<_> = (0..5)
        .map(|i| {
            std::thread::spawn(move || {
                let logger = default_logger();
                for j in 0..3 {
                    logger.debug(&format!("hidden {i}/{j}"));
                    logger.warn(&format!("Hello, world from thread {i} ({j})!"));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    default_logger().fatal("done, exiting is up to main");
}
