//! Pattern 3: Factory Method
//! Example: Logger Creators
//!
//! Run with: cargo run --bin p3_logger_factory

/// The product: loggers format a message and return the finished line.
trait Logger {
    fn log(&self, msg: &str) -> String;
}

struct FileLogger;

impl Logger for FileLogger {
    fn log(&self, msg: &str) -> String {
        format!("[File] {}", msg)
    }
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) -> String {
        format!("[Console] {}", msg)
    }
}

/// The creator declares the factory method and a template method built
/// on top of it. Concrete creators only override the factory method;
/// `log_something` picks up whatever logger they produce.
trait LoggerCreator {
    fn create_logger(&self) -> Box<dyn Logger>;

    fn log_something(&self) -> String {
        let logger = self.create_logger();
        logger.log("Hello world!")
    }
}

struct FileLoggerCreator;

impl LoggerCreator for FileLoggerCreator {
    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(FileLogger)
    }
}

struct ConsoleLoggerCreator;

impl LoggerCreator for ConsoleLoggerCreator {
    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(ConsoleLogger)
    }
}

// The client works with any creator through the trait alone.
fn client_code(creator: &dyn LoggerCreator) {
    println!("{}", creator.log_something());
}

fn main() {
    println!("=== Logging Through Each Creator ===");
    client_code(&FileLoggerCreator);
    client_code(&ConsoleLoggerCreator);

    println!("\n=== Using a Created Logger Directly ===");
    let logger = ConsoleLoggerCreator.create_logger();
    println!("{}", logger.log("A direct message"));
}
