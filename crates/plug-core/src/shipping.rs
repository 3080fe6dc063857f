//! # Shipping Roles
//!
//! Narrow capability traits composed selectively by employee roles.
//! Each role implements only the capabilities it actually has.

use tracing::info;

/// Can report on the state of something in transit
pub trait Trackable {
    fn track(&self) -> &'static str;
}

/// Can hand packages over
pub trait Deliverable {
    fn deliver(&self) -> &'static str;
}

/// Can plan routes
pub trait Routable {
    fn route(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryGuy;

#[derive(Debug, Clone, Copy, Default)]
pub struct RoutesSupervisor;

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerSupport;

fn announce(role: &'static str, line: &'static str) -> &'static str {
    info!(role = role, "{}", line);
    line
}

impl Deliverable for DeliveryGuy {
    fn deliver(&self) -> &'static str {
        announce("delivery_guy", "I'm delivering packages.")
    }
}

impl Trackable for RoutesSupervisor {
    fn track(&self) -> &'static str {
        announce("routes_supervisor", "I'm tracking various routes.")
    }
}

impl Routable for RoutesSupervisor {
    fn route(&self) -> &'static str {
        announce("routes_supervisor", "I'm optimizing a route.")
    }
}

impl Trackable for CustomerSupport {
    fn track(&self) -> &'static str {
        announce("customer_support", "I'm tracking the state of a shipped package.")
    }
}

/// Ask every tracker for its report, in order
pub fn track_all(trackers: &[&dyn Trackable]) -> Vec<&'static str> {
    trackers.iter().map(|t| t.track()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_messages() {
        assert_eq!(DeliveryGuy.deliver(), "I'm delivering packages.");
        assert_eq!(RoutesSupervisor.track(), "I'm tracking various routes.");
        assert_eq!(RoutesSupervisor.route(), "I'm optimizing a route.");
        assert_eq!(
            CustomerSupport.track(),
            "I'm tracking the state of a shipped package."
        );
    }

    #[test]
    fn test_track_all_mixes_roles() {
        let supervisor = RoutesSupervisor;
        let support = CustomerSupport;

        let trackers: [&dyn Trackable; 2] = [&supervisor, &support];
        let reports = track_all(&trackers);
        assert_eq!(
            reports,
            vec![
                "I'm tracking various routes.",
                "I'm tracking the state of a shipped package."
            ]
        );
    }
}
