use crate::config::{GoalieConfig, SummaryPolicy, VersionMatch};
use crate::errors::GoalieError;
use crate::notify::{
    Dispatcher, FlavorCatalog, HipChatSink, LogSink, MessageFormatter, NotificationSink, RandomFlavor,
};
use crate::persistence::{CacheStore, YamlCacheStore};
use crate::sources::{CrashSource, HockeyClient, ItunesLookup, VersionLookup};
use crate::tracking::ThresholdTable;

/// Everything one run needs, built once per invocation.
pub struct RunContext {
    pub app_id: String,
    pub per_page: u32,
    pub symbolicated: bool,
    pub thresholds: ThresholdTable,
    pub summary_policy: SummaryPolicy,
    pub version_match: VersionMatch,
    pub source: Box<dyn CrashSource>,
    /// `None` disables version gating entirely.
    pub version_lookup: Option<Box<dyn VersionLookup>>,
    pub store: Box<dyn CacheStore>,
    pub dispatcher: Dispatcher,
    /// Dry runs leave the stored cache untouched.
    pub persist: bool,
}

impl RunContext {
    pub async fn from_config(config: &GoalieConfig, dry_run: bool) -> Result<Self, GoalieError> {
        let source_cfg = &config.crash_source;
        let thresholds = ThresholdTable::new(config.thresholds.clone())?;

        let version_lookup = config.version_gate.as_ref().map(|gate| {
            Box::new(ItunesLookup::new(&gate.base_url, &gate.itunes_app_id)) as Box<dyn VersionLookup>
        });
        let version_match = config
            .version_gate
            .as_ref()
            .map(|gate| gate.match_policy)
            .unwrap_or_default();

        let catalog = FlavorCatalog::load(config.flavor_path.as_deref()).await?;
        let formatter = MessageFormatter::new(
            &source_cfg.base_url,
            &source_cfg.app_id,
            catalog,
            Box::new(RandomFlavor),
        );
        let sink: Box<dyn NotificationSink> = if dry_run {
            Box::new(LogSink)
        } else {
            Box::new(HipChatSink::new(
                &config.notifier.base_url,
                &config.notifier.room_id,
                &config.notifier.room_token,
            ))
        };

        Ok(Self {
            app_id: source_cfg.app_id.clone(),
            per_page: source_cfg.per_page,
            symbolicated: source_cfg.symbolicated,
            thresholds,
            summary_policy: config.summary,
            version_match,
            source: Box::new(HockeyClient::new(&source_cfg.base_url, &source_cfg.sdk_token)),
            version_lookup,
            store: Box::new(YamlCacheStore::new(&config.cache_path)),
            dispatcher: Dispatcher::new(formatter, sink),
            persist: !dry_run,
        })
    }
}
