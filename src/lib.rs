//! # Creational Design Patterns in Rust
//!
//! This crate is a catalog of runnable examples for the five classic
//! creational patterns, each as a small standalone program:
//!
//! ## Pattern 1: Abstract Factory
//! - Families of related products behind factory traits
//! - Products of one family collaborate with each other
//! - GUI toolkit variant (Windows/macOS) and furniture shop variant
//!   (Modern/Victorian/ArtDeco)
//!
//! ## Pattern 2: Builder
//! - A director driving interchangeable step builders
//! - Typed error when the director has no builder attached
//! - Consuming fluent builder as the Rust-native contrast
//!
//! ## Pattern 3: Factory Method
//! - Creator traits deferring instantiation to a factory method
//! - Template methods as default trait methods
//! - Logger variant and logistics variant
//!
//! ## Pattern 4: Prototype
//! - Polymorphic duplication with `Clone` behind a trait object
//! - A registry stamping out fresh copies of stored prototypes
//!
//! ## Pattern 5: Singleton
//! - Lazily constructed shared instance with `OnceLock`
//! - Two threads racing for first initialization
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_gui_factory
//! cargo run --bin p1_furniture_shop
//! cargo run --bin p2_sandwich_builder
//! cargo run --bin p3_logger_factory
//! cargo run --bin p3_logistics
//! cargo run --bin p4_shape_prototype
//! cargo run --bin p5_config_singleton
//! ```
