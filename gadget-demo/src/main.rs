use anyhow::{Context, Result};
use gadget_demo::app_config::{Config, ReportFormat};
use gadget_demo::{PurchaseFixture, PurchaseReport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gadget_demo=info,gadget_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Rendering {:?} report for {}", config.report.format, config.report.highlight);

    let fixture = PurchaseFixture::build().context("Failed to build purchase fixture")?;
    let highlighted = fixture
        .get(&config.report.highlight)
        .with_context(|| format!("Unknown purchase to highlight: {}", config.report.highlight))?;

    let report = PurchaseReport::new(&fixture.purchases, &config.report.highlight, highlighted);
    let output = match config.report.format {
        ReportFormat::Text => report.render_text(),
        ReportFormat::Json => report.render_json()?,
    };
    println!("{}", output);

    tracing::info!(total = report.total_price, "Report rendered");
    Ok(())
}
