pub mod config;
pub mod metadata;
pub mod metrics;
pub mod search;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, BackendConfig, BackendKind, Config,
    ConfigError, PreferencesConfig, SearchTimingConfig,
};
pub use metadata::{
    EpisodeDetails, MediaLibrary, MetadataError, MovieDetails, SeasonDetails, ShowTitles,
};
pub use search::{
    Candidate, ContentKind, Indexer, JackettClient, QualityRule, RawCandidate, SearchBackend,
    SearchEngine, SearchError, SearchMode, SearchOptions, TagRule,
};
