pub mod config;
pub mod converter;
pub mod dispatcher;
pub mod media;
pub mod process;
pub mod report;
pub mod stitcher;
pub mod testing;
pub mod timestamp;

pub use config::{
    load_config, load_config_from_str, load_layered_config, validate_config, Config, ConfigError,
    ConvertConfig, StitchConfig, TimeConfig, ToolsConfig,
};
pub use converter::{create_converter, Converter, ConverterBackend, ConverterError, TargetFormat};
pub use dispatcher::{ConversionDispatcher, DispatchConfig, DispatchError};
pub use media::{
    classify, discover, DiscoveryError, DiscoveryFilter, MediaItem, OrderingRule, PathKind,
};
pub use report::{ItemOutcome, OutcomeStatus, RunReporter, RunSummary, TracingReporter};
pub use stitcher::{MagickStitcher, StitchDirection, StitchError, StitchPlanner, Stitcher};
pub use timestamp::{
    parse_base_datetime, ExiftoolWriter, MetadataWriter, TimestampAssigner, TimestampError,
    TimestampPlan,
};
