//! Update poster pipeline.
//!
//! One [`Poster::run`] rotates the stored snapshots, fetches the four tracker
//! feeds, keeps the configured device's entries, diffs them against the
//! previous run and announces every change. Everything runs sequentially.

use anyhow::{Context, Result};
use mu_feed::{DeviceRegistry, FeedSource, HttpSource, RollbackClassifier};
use mu_models::{Category, UpdateEntry};
use mu_settings::Settings;
use mu_storage::SnapshotStore;
use mu_telegram::{Delivery, MessageTransport, Publisher, TelegramBot, format_message};
use tracing::{debug, info};

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Categories whose snapshot from the last run served as the baseline.
    pub rotated: Vec<Category>,
    /// Changed entries in category order, then feed order.
    pub changes: Vec<UpdateEntry>,
    /// One delivery per change, in the same order.
    pub deliveries: Vec<Delivery>,
}

pub struct Poster<'a> {
    settings: &'a Settings,
    store: SnapshotStore,
    feeds: &'a dyn FeedSource,
    registry: &'a dyn DeviceRegistry,
    transport: &'a dyn MessageTransport,
}

impl<'a> Poster<'a> {
    pub fn new(
        settings: &'a Settings,
        feeds: &'a dyn FeedSource,
        registry: &'a dyn DeviceRegistry,
        transport: &'a dyn MessageTransport,
    ) -> Self {
        Self {
            settings,
            store: SnapshotStore::new(&settings.storage_path),
            feeds,
            registry,
            transport,
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let mut report = RunReport {
            rotated: self
                .store
                .rotate()
                .context("Failed to rotate stored snapshots")?,
            ..Default::default()
        };

        let mut snapshots = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let entries = self
                .feeds
                .fetch_feed(category)
                .await
                .with_context(|| format!("Failed to load {} feed", category))?;
            let total = entries.len();
            let entries: Vec<UpdateEntry> = entries
                .into_iter()
                .filter(|e| e.matches_codename(&self.settings.codename))
                .collect();
            debug!(
                "{}: kept {} of {} entries for {}",
                category,
                entries.len(),
                total,
                self.settings.codename
            );
            snapshots.push((category, entries));
        }

        for (category, entries) in &snapshots {
            self.store.write(*category, entries)?;
            report
                .changes
                .extend(self.store.diff(*category, self.settings.diff_strategy)?);
        }

        if report.changes.is_empty() {
            info!("No new updates found!");
        } else {
            let classifier = RollbackClassifier::new(self.registry, &self.settings.codename);
            let publisher =
                Publisher::new(self.transport, &self.settings.channel, &self.settings.codename);
            for update in &report.changes {
                let rolled_back = classifier
                    .is_rolled_back(update)
                    .await
                    .context("Failed to check rollback status")?;
                let message = format_message(update, rolled_back);
                let delivery = publisher
                    .publish(&message)
                    .await
                    .context("Failed to post update")?;
                report.deliveries.push(delivery);
            }
        }

        self.store
            .clear()
            .context("Failed to clear previous snapshots")?;
        Ok(report)
    }
}

/// Runs the pipeline against the live tracker, registry and Telegram endpoints.
pub async fn run(settings: &Settings) -> Result<RunReport> {
    let source = HttpSource::new(
        settings.endpoints.feeds.clone(),
        settings.endpoints.registry.clone(),
    )?;
    let bot = TelegramBot::new(&settings.endpoints.telegram, &settings.bot_token)?;
    Poster::new(settings, &source, &source, &bot).run().await
}
