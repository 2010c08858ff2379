use dotenv::dotenv;
use mu_settings::Settings;
use tracing::error;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // --- Tracing ---
    let app_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let global_filter = Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target("mu_", app_level)
        .with_target("hyper", LevelFilter::OFF)
        .with_target("reqwest", LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(global_filter)
        .try_init()?;

    // --- Settings ---
    let settings = match Settings::load_from_env() {
        Ok(settings) => settings,
        Err(err) => {
            error!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    let report = mu_poster::run(&settings).await?;
    tracing::info!(
        "{}: {} change(s), {} delivered",
        settings.codename,
        report.changes.len(),
        report
            .deliveries
            .iter()
            .filter(|d| **d == mu_telegram::Delivery::Sent)
            .count()
    );
    Ok(())
}
