//! Pattern 3: Factory Method
//! Example: Logistics Planning
//!
//! Run with: cargo run --bin p3_logistics

/// All concrete transports implement the `deliver` operation.
trait Transport {
    fn deliver(&self) -> String;
}

struct Truck;

impl Transport for Truck {
    fn deliver(&self) -> String {
        "delivering by land in a truck".to_string()
    }
}

struct Ship;

impl Transport for Ship {
    fn deliver(&self) -> String {
        "delivering by sea in a ship".to_string()
    }
}

/// The creator declares the factory method that subtypes override to
/// change the kind of transport. `plan_delivery` is shared planning
/// logic that stays ignorant of the concrete transport.
trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self) -> String {
        let transport = self.create_transport();
        format!("The order is {}", transport.deliver())
    }
}

struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

struct ShipLogistics;

impl Logistics for ShipLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

// The client plans a delivery without knowing which logistics it got.
fn client_code(logistics: &dyn Logistics) {
    println!("{}", logistics.plan_delivery());
}

fn main() {
    println!("=== Planning Deliveries ===");
    let road = RoadLogistics;
    let sea = ShipLogistics;

    println!("{}", road.plan_delivery());
    println!("{}", sea.plan_delivery());

    println!("\n=== Through the Client ===");
    client_code(&road);
    client_code(&sea);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn road_logistics_delivers_by_truck() {
        let transport = RoadLogistics.create_transport();
        assert_eq!(transport.deliver(), "delivering by land in a truck");
    }

    #[test]
    fn ship_logistics_delivers_by_ship() {
        let transport = ShipLogistics.create_transport();
        assert_eq!(transport.deliver(), "delivering by sea in a ship");
    }

    #[test]
    fn plan_delivery_wraps_the_transport() {
        assert_eq!(
            RoadLogistics.plan_delivery(),
            "The order is delivering by land in a truck"
        );
        assert_eq!(
            ShipLogistics.plan_delivery(),
            "The order is delivering by sea in a ship"
        );
    }

    #[test]
    fn logistics_dispatches_through_the_trait() {
        let all: Vec<Box<dyn Logistics>> = vec![Box::new(RoadLogistics), Box::new(ShipLogistics)];
        let plans: Vec<String> = all.iter().map(|l| l.plan_delivery()).collect();

        assert!(plans[0].contains("truck"));
        assert!(plans[1].contains("ship"));
    }
}
