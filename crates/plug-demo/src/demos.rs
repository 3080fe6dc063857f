//! # Demo Runners
//!
//! One runner per strategy family. Each returns what it did so `main` can
//! print it and tests can check it.

use crate::scenario::{AlertScenario, DiscountScenario, PaymentRequest};
use plug_core::{
    Bicycle, BoxedNotificationChannel, Car, CustomerSupport, Deliverable, DeliveryGuy,
    DiscountKind, NotificationService, PaymentDetails, PaymentGatewaySelector, PaymentProcessor,
    PlugError, PlugResult, Routable, RoutesSupervisor, Trackable, TransportService, Vehicle,
};
use plug_gateways::{CreditCardConfig, CreditCardPayment, PayPalConfig, PayPalPayment};
use plug_notify::{EmailNotification, SmsNotification};
use tracing::warn;

/// Result of processing then refunding one payment
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub provider: &'static str,
    pub details: PaymentDetails,
    pub status: &'static str,
    pub refunded: bool,
}

/// Register both gateways, falling back to placeholder credentials when the
/// environment has none (the gateways never use them).
pub fn build_gateways() -> PaymentGatewaySelector {
    let paypal = PayPalPayment::from_env().unwrap_or_else(|e| {
        warn!("{}; using placeholder PayPal credentials", e);
        PayPalPayment::new(PayPalConfig::new("client_id", "client_secret"))
    });

    let credit_card = CreditCardPayment::from_env().unwrap_or_else(|e| {
        warn!("{}; using placeholder card credentials", e);
        CreditCardPayment::new(CreditCardConfig::new("merchant_id", "api_key"))
    });

    PaymentGatewaySelector::new("paypal")
        .with_gateway(Box::new(paypal))
        .with_gateway(Box::new(credit_card))
}

/// Process every requested payment, then refund each one
pub fn run_payments(
    selector: &mut PaymentGatewaySelector,
    requests: &[PaymentRequest],
) -> PlugResult<Vec<PaymentOutcome>> {
    let mut processed = Vec::with_capacity(requests.len());

    for request in requests {
        if !selector.has_provider(&request.gateway) {
            warn!(
                "Unknown gateway {}, using {}",
                request.gateway,
                selector.default_provider()
            );
        }
        let gateway = selector
            .get_or_default_mut(Some(request.gateway.as_str()))
            .ok_or_else(|| PlugError::unknown_strategy("gateway", request.gateway.as_str()))?;

        let details = gateway.process_payment(request.amount, &request.currency);
        processed.push((gateway.provider_name(), details));
    }

    let outcomes = processed
        .into_iter()
        .map(|(provider, details)| {
            let gateway = selector.get(provider);
            let refunded = gateway.map_or(false, |g| g.refund(&details.transaction_id));
            let status = gateway.map_or(plug_core::PROCESSING_STATUS, |g| {
                g.get_status(&details.transaction_id)
            });
            PaymentOutcome {
                provider,
                details,
                status,
                refunded,
            }
        })
        .collect();

    Ok(outcomes)
}

/// Charge the scenario amount under each listed discount, swapping the
/// processor's strategy between runs
pub fn run_discounts(scenario: &DiscountScenario) -> Vec<(DiscountKind, f64)> {
    let mut processor = PaymentProcessor::from(DiscountKind::None);

    scenario
        .strategies
        .iter()
        .map(|kind| {
            processor.set_strategy(kind.into_strategy());
            (*kind, processor.process_payment(scenario.amount))
        })
        .collect()
}

/// Every capability of every shipping role, in declaration order
pub fn run_shipping() -> Vec<&'static str> {
    let supervisor = RoutesSupervisor;
    vec![
        DeliveryGuy.deliver(),
        supervisor.track(),
        supervisor.route(),
        CustomerSupport.track(),
    ]
}

pub fn run_vehicles() -> Vec<&'static str> {
    let service = TransportService::new();
    let fleet: [&dyn Vehicle; 2] = [&Car, &Bicycle];
    fleet.iter().map(|v| service.transport(*v)).collect()
}

/// Send the alert by email, then switch the service to SMS and send again.
///
/// Channels without configuration are skipped.
pub async fn run_notifications(alert: &AlertScenario) -> Vec<(&'static str, bool)> {
    let mut channels: Vec<(BoxedNotificationChannel, &str)> = Vec::new();

    match EmailNotification::from_env() {
        Ok(email) => channels.push((Box::new(email), alert.email_to.as_str())),
        Err(e) => warn!("Skipping email channel: {}", e),
    }
    match SmsNotification::from_env() {
        Ok(sms) => channels.push((Box::new(sms), alert.sms_to.as_str())),
        Err(e) => warn!("Skipping SMS channel: {}", e),
    }

    send_through(channels, &alert.message).await
}

/// Drive one `NotificationService` through `channels` in order
pub async fn send_through(
    channels: Vec<(BoxedNotificationChannel, &str)>,
    message: &str,
) -> Vec<(&'static str, bool)> {
    let mut results = Vec::with_capacity(channels.len());
    let mut channels = channels.into_iter();

    let Some((first, recipient)) = channels.next() else {
        warn!("No notification channel configured");
        return results;
    };
    let mut service = NotificationService::new(first);
    let sent = service.send_alert(message, recipient).await;
    results.push((service.channel_name(), sent));

    for (channel, recipient) in channels {
        service.change_notification_method(channel);
        let sent = service.send_alert(message, recipient).await;
        results.push((service.channel_name(), sent));
    }

    results
}
