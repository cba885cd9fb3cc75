//! Pattern 1: Abstract Factory
//! Example: Furniture Shop with Three Product Variants
//!
//! Run with: cargo run --bin p1_furniture_shop

// Each distinct product of a product family gets its own base trait.
// All variants of the product implement that trait.

trait Chair {
    fn sit_on(&self) -> String;
}

struct ModernChair;

impl Chair for ModernChair {
    fn sit_on(&self) -> String {
        "You can sit on a MODERN chair".to_string()
    }
}

struct VictorianChair;

impl Chair for VictorianChair {
    fn sit_on(&self) -> String {
        "You can sit on a VICTORIAN chair".to_string()
    }
}

struct ArtDecoChair;

impl Chair for ArtDecoChair {
    fn sit_on(&self) -> String {
        "You can sit on an ARTDECO chair".to_string()
    }
}

// A sofa can collaborate with a chair. The abstract factory makes sure
// that all products it creates are of the same variant and thus compatible.
trait Sofa {
    fn lay_on(&self) -> String;
    fn put_aside(&self, chair: &dyn Chair) -> String;
}

struct ModernSofa;

impl Sofa for ModernSofa {
    fn lay_on(&self) -> String {
        "You can lie on a MODERN sofa".to_string()
    }

    fn put_aside(&self, chair: &dyn Chair) -> String {
        format!("Now you can lie on a Modern sofa, and {}", chair.sit_on())
    }
}

struct VictorianSofa;

impl Sofa for VictorianSofa {
    fn lay_on(&self) -> String {
        "You can lie on a VICTORIAN sofa".to_string()
    }

    fn put_aside(&self, chair: &dyn Chair) -> String {
        format!("Now you can lie on a Victorian sofa, and {}", chair.sit_on())
    }
}

struct ArtDecoSofa;

impl Sofa for ArtDecoSofa {
    fn lay_on(&self) -> String {
        "You can lie on an ARTDECO sofa".to_string()
    }

    fn put_aside(&self, chair: &dyn Chair) -> String {
        format!("Now you can lie on an ArtDeco sofa, and {}", chair.sit_on())
    }
}

trait CoffeeTable {
    fn coffee_on_me(&self) -> String;
    fn sitting_on(&self, sofa: &dyn Sofa) -> String;
}

struct ModernCoffeeTable;

impl CoffeeTable for ModernCoffeeTable {
    fn coffee_on_me(&self) -> String {
        "You're enjoying a cup of coffee on a MODERN coffee table".to_string()
    }

    fn sitting_on(&self, sofa: &dyn Sofa) -> String {
        format!("{}. Enjoy your coffee on a Modern coffee table", sofa.lay_on())
    }
}

struct VictorianCoffeeTable;

impl CoffeeTable for VictorianCoffeeTable {
    fn coffee_on_me(&self) -> String {
        "You're enjoying a cup of coffee on a VICTORIAN coffee table".to_string()
    }

    fn sitting_on(&self, sofa: &dyn Sofa) -> String {
        format!("{}. Enjoy your coffee on a Victorian coffee table", sofa.lay_on())
    }
}

struct ArtDecoCoffeeTable;

impl CoffeeTable for ArtDecoCoffeeTable {
    fn coffee_on_me(&self) -> String {
        "You're enjoying a cup of coffee on an ARTDECO coffee table".to_string()
    }

    fn sitting_on(&self, sofa: &dyn Sofa) -> String {
        format!("{}. Enjoy your coffee on an ArtDeco coffee table", sofa.lay_on())
    }
}

/// The abstract factory returns one of each product, all from the same variant.
trait FurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_sofa(&self) -> Box<dyn Sofa>;
    fn create_coffee_table(&self) -> Box<dyn CoffeeTable>;
}

struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(ModernCoffeeTable)
    }
}

struct VictorianFurnitureFactory;

impl FurnitureFactory for VictorianFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(VictorianCoffeeTable)
    }
}

struct ArtDecoFurnitureFactory;

impl FurnitureFactory for ArtDecoFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ArtDecoChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ArtDecoSofa)
    }

    fn create_coffee_table(&self) -> Box<dyn CoffeeTable> {
        Box::new(ArtDecoCoffeeTable)
    }
}

// The client furnishes a room without knowing which variant it gets.
fn client_code(factory: &dyn FurnitureFactory) {
    let chair = factory.create_chair();
    let sofa = factory.create_sofa();
    let coffee_table = factory.create_coffee_table();

    println!("{}", chair.sit_on());
    println!("{}", sofa.lay_on());
    println!("{}", sofa.put_aside(chair.as_ref()));
    println!("{}", coffee_table.coffee_on_me());
    println!("{}", coffee_table.sitting_on(sofa.as_ref()));
}

fn main() {
    println!("=== Furnishing with the Modern Factory ===");
    client_code(&ModernFurnitureFactory);

    println!("\n=== Furnishing with the Victorian Factory ===");
    client_code(&VictorianFurnitureFactory);

    println!("\n=== Furnishing with the ArtDeco Factory ===");
    client_code(&ArtDecoFurnitureFactory);
}
