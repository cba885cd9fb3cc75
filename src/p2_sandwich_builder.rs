//! Pattern 2: Builder
//! Example: Sandwich Shop with a Director and Step Builders
//!
//! Run with: cargo run --bin p2_sandwich_builder

use thiserror::Error;

/// The product: an ordered list of parts, printed in insertion order.
#[derive(Debug, Default)]
struct Sandwich {
    parts: Vec<String>,
}

impl Sandwich {
    fn add_part(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Entry point for the consuming fluent builder below.
    fn custom() -> CustomSandwichBuilder {
        CustomSandwichBuilder::default()
    }
}

#[derive(Error, Debug, PartialEq)]
enum BuildError {
    #[error("no builder attached to the director")]
    NoBuilder,
}

/// Step interface shared by all sandwich builders. The director drives
/// the steps; `take_sandwich` yields the product and resets the builder
/// so it can be reused.
trait SandwichBuilder {
    fn make_bread(&mut self);
    fn make_sauce(&mut self);
    fn make_ingredients(&mut self);
    fn take_sandwich(&mut self) -> Sandwich;
}

#[derive(Default)]
struct VegSandwichBuilder {
    sandwich: Sandwich,
}

impl SandwichBuilder for VegSandwichBuilder {
    fn make_bread(&mut self) {
        self.sandwich.add_part("Non-Gluten Bread");
    }

    fn make_sauce(&mut self) {
        self.sandwich.add_part("Low Calorie Sauce");
    }

    fn make_ingredients(&mut self) {
        self.sandwich.add_part("Low Fat Mozzarella, Tomatoes and Basil");
    }

    fn take_sandwich(&mut self) -> Sandwich {
        std::mem::take(&mut self.sandwich)
    }
}

#[derive(Default)]
struct ChickenBurgerBuilder {
    sandwich: Sandwich,
}

impl SandwichBuilder for ChickenBurgerBuilder {
    fn make_bread(&mut self) {
        self.sandwich.add_part("Sesame Bun");
    }

    fn make_sauce(&mut self) {
        self.sandwich.add_part("Spicy Mayo");
    }

    fn make_ingredients(&mut self) {
        self.sandwich.add_part("Grilled Chicken, Lettuce, Tomato");
    }

    fn take_sandwich(&mut self) -> Sandwich {
        std::mem::take(&mut self.sandwich)
    }
}

#[derive(Default)]
struct BeefBurgerBuilder {
    sandwich: Sandwich,
}

impl SandwichBuilder for BeefBurgerBuilder {
    fn make_bread(&mut self) {
        self.sandwich.add_part("Classic Bun");
    }

    fn make_sauce(&mut self) {
        self.sandwich.add_part("BBQ Sauce");
    }

    fn make_ingredients(&mut self) {
        self.sandwich.add_part("Beef Patty, Cheddar, Pickles, Onion");
    }

    fn take_sandwich(&mut self) -> Sandwich {
        std::mem::take(&mut self.sandwich)
    }
}

/// The director knows the order of construction steps; the attached
/// builder decides what each step means.
#[derive(Default)]
struct Director {
    builder: Option<Box<dyn SandwichBuilder>>,
}

impl Director {
    fn new() -> Self {
        Director::default()
    }

    fn set_builder(&mut self, builder: Box<dyn SandwichBuilder>) {
        self.builder = Some(builder);
    }

    // Bread first, then sauce, then ingredients.
    fn build_sandwich(&mut self) -> Result<(), BuildError> {
        let builder = self.builder.as_mut().ok_or(BuildError::NoBuilder)?;
        builder.make_bread();
        builder.make_sauce();
        builder.make_ingredients();
        Ok(())
    }

    fn take_sandwich(&mut self) -> Result<Sandwich, BuildError> {
        let builder = self.builder.as_mut().ok_or(BuildError::NoBuilder)?;
        Ok(builder.take_sandwich())
    }
}

/// The Rust-native contrast: a consuming fluent builder on the product
/// itself. Each setter takes `self` and returns `self` for chaining;
/// `build` consumes the builder.
#[derive(Default)]
struct CustomSandwichBuilder {
    parts: Vec<String>,
}

impl CustomSandwichBuilder {
    fn bread(mut self, bread: impl Into<String>) -> Self {
        self.parts.push(bread.into());
        self
    }

    fn sauce(mut self, sauce: impl Into<String>) -> Self {
        self.parts.push(sauce.into());
        self
    }

    fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.parts.push(ingredient.into());
        self
    }

    fn build(self) -> Sandwich {
        Sandwich { parts: self.parts }
    }
}

fn print_sandwich(title: &str, sandwich: &Sandwich) {
    println!("{}:", title);
    for part in sandwich.parts() {
        println!("  {}", part);
    }
}

fn build_and_print(director: &mut Director, title: &str) {
    match director
        .build_sandwich()
        .and_then(|_| director.take_sandwich())
    {
        Ok(sandwich) => print_sandwich(title, &sandwich),
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    let mut director = Director::new();

    println!("=== Director-Driven Builds ===\n");

    director.set_builder(Box::new(VegSandwichBuilder::default()));
    build_and_print(&mut director, "Veg Sandwich");

    println!();
    director.set_builder(Box::new(ChickenBurgerBuilder::default()));
    build_and_print(&mut director, "Chicken Burger");

    println!();
    director.set_builder(Box::new(BeefBurgerBuilder::default()));
    build_and_print(&mut director, "Beef Burger");

    println!("\n=== Director Without a Builder ===");
    let mut empty_director = Director::new();
    match empty_director.build_sandwich() {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Expected error: {}", e),
    }

    println!("\n=== Consuming Fluent Builder ===");
    let custom = Sandwich::custom()
        .bread("Rye Bread")
        .sauce("Honey Mustard")
        .ingredient("Smoked Turkey")
        .ingredient("Swiss Cheese")
        .build();
    print_sandwich("Custom Sandwich", &custom);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_with(builder: Box<dyn SandwichBuilder>) -> Sandwich {
        let mut director = Director::new();
        director.set_builder(builder);
        director.build_sandwich().unwrap();
        director.take_sandwich().unwrap()
    }

    #[test]
    fn veg_builder_fixed_menu() {
        let sandwich = build_with(Box::new(VegSandwichBuilder::default()));
        assert_eq!(
            sandwich.parts(),
            [
                "Non-Gluten Bread",
                "Low Calorie Sauce",
                "Low Fat Mozzarella, Tomatoes and Basil",
            ]
        );
    }

    #[test]
    fn chicken_builder_fixed_menu() {
        let sandwich = build_with(Box::new(ChickenBurgerBuilder::default()));
        assert_eq!(
            sandwich.parts(),
            ["Sesame Bun", "Spicy Mayo", "Grilled Chicken, Lettuce, Tomato"]
        );
    }

    #[test]
    fn beef_builder_fixed_menu() {
        let sandwich = build_with(Box::new(BeefBurgerBuilder::default()));
        assert_eq!(
            sandwich.parts(),
            ["Classic Bun", "BBQ Sauce", "Beef Patty, Cheddar, Pickles, Onion"]
        );
    }

    #[test]
    fn director_without_builder_fails() {
        let mut director = Director::new();
        assert_eq!(director.build_sandwich(), Err(BuildError::NoBuilder));
        assert!(director.take_sandwich().is_err());
    }

    #[test]
    fn taking_the_sandwich_resets_the_builder() {
        let mut builder = BeefBurgerBuilder::default();
        builder.make_bread();

        let first = builder.take_sandwich();
        assert_eq!(first.parts(), ["Classic Bun"]);

        // The builder starts over after the product is taken.
        let second = builder.take_sandwich();
        assert!(second.parts().is_empty());
    }

    #[test]
    fn director_reuses_one_builder_per_build() {
        let mut director = Director::new();
        director.set_builder(Box::new(VegSandwichBuilder::default()));

        director.build_sandwich().unwrap();
        let first = director.take_sandwich().unwrap();

        director.build_sandwich().unwrap();
        let second = director.take_sandwich().unwrap();

        // Same menu both times; no parts leak between builds.
        assert_eq!(first.parts(), second.parts());
        assert_eq!(first.parts().len(), 3);
    }

    mod fluent_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fluent_builder_preserves_ingredient_order(
                ingredients in proptest::collection::vec(".*", 0..8)
            ) {
                let mut builder = Sandwich::custom().bread("Rye Bread");
                for ingredient in &ingredients {
                    builder = builder.ingredient(ingredient.clone());
                }
                let sandwich = builder.build();

                prop_assert_eq!(sandwich.parts().len(), ingredients.len() + 1);
                prop_assert_eq!(&sandwich.parts()[1..], &ingredients[..]);
            }
        }
    }
}
