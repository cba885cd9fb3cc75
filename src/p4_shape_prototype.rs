//! Pattern 4: Prototype
//! Example: Cloning Shapes Polymorphically
//!
//! Run with: cargo run --bin p4_shape_prototype

use std::collections::HashMap;

/// Shapes can duplicate themselves without the caller knowing the
/// concrete type. `clone_shape` is the polymorphic counterpart of
/// `Clone::clone`, usable through a trait object.
trait Shape {
    fn clone_shape(&self) -> Box<dyn Shape>;
    fn describe(&self) -> String;
}

#[derive(Clone)]
struct Circle {
    radius: f64,
}

impl Shape for Circle {
    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Circle with radius {}", self.radius)
    }
}

#[derive(Clone)]
struct Rectangle {
    width: f64,
    height: f64,
}

impl Shape for Rectangle {
    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Rectangle {}x{}", self.width, self.height)
    }
}

/// Stores prototype instances by name and stamps out fresh clones
/// on request, so callers never construct shapes from scratch.
#[derive(Default)]
struct ShapeRegistry {
    prototypes: HashMap<String, Box<dyn Shape>>,
}

impl ShapeRegistry {
    fn register(&mut self, name: impl Into<String>, prototype: Box<dyn Shape>) {
        self.prototypes.insert(name.into(), prototype);
    }

    fn create(&self, name: &str) -> Option<Box<dyn Shape>> {
        self.prototypes.get(name).map(|p| p.clone_shape())
    }
}

fn main() {
    println!("=== Cloning Through the Trait ===");
    let original: Box<dyn Shape> = Box::new(Circle { radius: 1.05 });
    let copy = original.clone_shape();

    println!("Original: {}", original.describe());
    println!("Copy:     {}", copy.describe());

    println!("\n=== A Heterogeneous Batch of Clones ===");
    let prototypes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 3.0 }),
        Box::new(Rectangle {
            width: 4.0,
            height: 2.5,
        }),
    ];

    for prototype in &prototypes {
        let clone = prototype.clone_shape();
        println!("Cloned: {}", clone.describe());
    }

    println!("\n=== Prototype Registry ===");
    let mut registry = ShapeRegistry::default();
    registry.register("unit circle", Box::new(Circle { radius: 1.0 }));
    registry.register(
        "card",
        Box::new(Rectangle {
            width: 8.5,
            height: 5.5,
        }),
    );

    for name in ["unit circle", "card", "hexagon"] {
        match registry.create(name) {
            Some(shape) => println!("'{}' -> {}", name, shape.describe()),
            None => println!("'{}' -> no prototype registered", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_preserves_fields() {
        let circle = Circle { radius: 1.05 };
        let copy = circle.clone_shape();
        assert_eq!(copy.describe(), "Circle with radius 1.05");
    }

    #[test]
    fn clones_are_independent_of_the_original() {
        let mut original = Circle { radius: 2.0 };
        let copy = original.clone_shape();

        original.radius = 9.0;
        assert_eq!(copy.describe(), "Circle with radius 2");
        assert_eq!(original.describe(), "Circle with radius 9");
    }

    #[test]
    fn cloning_works_through_a_trait_object() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle { radius: 1.0 }),
            Box::new(Rectangle {
                width: 2.0,
                height: 3.0,
            }),
        ];

        let clones: Vec<Box<dyn Shape>> = shapes.iter().map(|s| s.clone_shape()).collect();
        let descriptions: Vec<String> = clones.iter().map(|c| c.describe()).collect();
        assert_eq!(descriptions, ["Circle with radius 1", "Rectangle 2x3"]);
    }

    #[test]
    fn registry_stamps_out_fresh_copies() {
        let mut registry = ShapeRegistry::default();
        registry.register("circle", Box::new(Circle { radius: 1.5 }));

        let first = registry.create("circle").unwrap();
        let second = registry.create("circle").unwrap();

        assert_eq!(first.describe(), second.describe());
        assert!(registry.create("triangle").is_none());
    }
}
