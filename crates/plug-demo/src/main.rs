//! # plug-demo
//!
//! ```bash
//! # Optional: real channels
//! export SMTP_SERVER=smtp.gmail.com SMTP_USERNAME=... SMTP_PASSWORD=...
//! export SMS_ACCOUNT_SID=AC... SMS_AUTH_TOKEN=... SMS_FROM_NUMBER=+1...
//!
//! plug-demo
//! ```

use plug_core::PaymentDetails;
use plug_demo::demos;
use plug_demo::{load_scenario, DemoConfig, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    init_tracing(config.log_format);

    print_banner();

    let scenario = load_scenario(config.scenario_path.as_deref())?;
    info!(
        "Scenario: {} payments, {} discounts",
        scenario.payments.len(),
        scenario.discount.strategies.len()
    );

    println!("== Payments");
    let mut gateways = demos::build_gateways();
    info!("Payment gateways: {:?}", gateways.providers());
    for outcome in demos::run_payments(&mut gateways, &scenario.payments)? {
        println!("{} payment:\n{}", outcome.provider, render(&outcome.details)?);
        println!(
            "  status={} refunded={}",
            outcome.status, outcome.refunded
        );
    }

    println!("\n== Discounts");
    for (kind, total) in demos::run_discounts(&scenario.discount) {
        println!("{:<9} ${:.2}", kind.as_str(), total);
    }

    println!("\n== Shipping roles");
    for line in demos::run_shipping() {
        println!("{}", line);
    }

    println!("\n== Vehicles");
    for line in demos::run_vehicles() {
        println!("{}", line);
    }

    println!("\n== Notifications");
    let results = demos::run_notifications(&scenario.alert).await;
    if results.is_empty() {
        println!("no channels configured");
    }
    for (channel, sent) in results {
        println!("{:<6} sent={}", channel, sent);
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}

fn render(details: &PaymentDetails) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(details)?)
}

fn print_banner() {
    println!(
        r#"
  Pluggable strategies demo
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
