//! # Vehicles
//!
//! `TransportService` depends on the `Vehicle` trait, never on a concrete vehicle.

use tracing::info;

pub trait Vehicle {
    /// Move the vehicle and describe what happened.
    fn travel(&self) -> &'static str;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Car;

#[derive(Debug, Clone, Copy, Default)]
pub struct Bicycle;

impl Vehicle for Car {
    fn travel(&self) -> &'static str {
        "Car is moving"
    }

    fn name(&self) -> &'static str {
        "car"
    }
}

impl Vehicle for Bicycle {
    fn travel(&self) -> &'static str {
        "Bicycle is moving"
    }

    fn name(&self) -> &'static str {
        "bicycle"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransportService;

impl TransportService {
    pub fn new() -> Self {
        Self
    }

    pub fn transport(&self, vehicle: &dyn Vehicle) -> &'static str {
        let line = vehicle.travel();
        info!(vehicle = vehicle.name(), "{}", line);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingVehicle {
        trips: Cell<u32>,
    }

    impl Vehicle for CountingVehicle {
        fn travel(&self) -> &'static str {
            self.trips.set(self.trips.get() + 1);
            "Counting vehicle is moving"
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_transport_dispatches_to_concrete_vehicle() {
        let service = TransportService::new();
        let fleet: Vec<Box<dyn Vehicle>> = vec![Box::new(Car), Box::new(Bicycle)];

        let lines: Vec<&str> = fleet.iter().map(|v| service.transport(&**v)).collect();
        assert_eq!(lines, vec!["Car is moving", "Bicycle is moving"]);
    }

    #[test]
    fn test_transport_calls_travel_once() {
        let vehicle = CountingVehicle { trips: Cell::new(0) };

        assert_eq!(
            TransportService::new().transport(&vehicle),
            "Counting vehicle is moving"
        );
        assert_eq!(vehicle.trips.get(), 1);
    }
}
