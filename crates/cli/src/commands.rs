//! Subcommand handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use fxphoto_core::converter::ConverterConfig;
use fxphoto_core::{
    classify, create_converter, discover, parse_base_datetime, Config, ConversionDispatcher,
    DiscoveryFilter, DispatchConfig, ExiftoolWriter, MagickStitcher, MediaItem, MetadataWriter,
    OrderingRule, PathKind, RunReporter, RunSummary, StitchPlanner, Stitcher, TimestampAssigner,
    TimestampPlan, TracingReporter,
};

use crate::cli::{AppendArgs, ConvertArgs, TimeArgs};
use crate::validated;

pub async fn convert(mut config: Config, args: ConvertArgs, json: bool) -> Result<()> {
    if let Some(threads) = args.threads {
        config.convert.threads = Some(threads);
    }
    if let Some(format) = args.format {
        config.convert.target_format = format;
    }
    if let Some(backend) = args.backend {
        config.convert.backend = backend;
    }
    if args.keep_originals {
        config.convert.preserve_originals = true;
    }
    let config = validated(config)?;

    let filter = DiscoveryFilter::new(&config.convert.extensions, OrderingRule::Name);
    let Some((_, items)) = discover_items(&args.path, &filter)? else {
        return finish(RunSummary::new("convert", 0), json);
    };

    let converter =
        create_converter(&ConverterConfig::from_tools(config.convert.backend, &config.tools));
    converter
        .validate()
        .await
        .with_context(|| format!("Converter {} is not available", converter.name()))?;
    if !converter
        .supported_output_formats()
        .contains(&config.convert.target_format)
    {
        bail!(
            "Converter {} cannot produce {}",
            converter.name(),
            config.convert.target_format
        );
    }

    let dispatcher = ConversionDispatcher::new(
        DispatchConfig::from(&config.convert),
        converter,
        reporter(),
    )
    .context("Failed to create conversion dispatcher")?;

    let summary = dispatcher
        .convert_all(items, config.convert.target_format)
        .await;
    finish(summary, json)
}

pub async fn time(mut config: Config, args: TimeArgs, json: bool) -> Result<()> {
    if let Some(step) = args.step {
        config.time.step_secs = step;
    }
    if let Some(order) = args.order {
        config.time.ordering = order;
    }
    let config = validated(config)?;

    let base = parse_base_datetime(&args.datetime)?;
    let filter = DiscoveryFilter::new(&config.time.extensions, config.time.ordering);
    let Some((kind, items)) = discover_items(&args.path, &filter)? else {
        return finish(RunSummary::new("time", 0), json);
    };

    // a single file gets exactly the base timestamp
    let plan = match kind {
        PathKind::SingleFile(_) => TimestampPlan::single(base),
        PathKind::Directory(_) => TimestampPlan::new(base, config.time.step_secs)?,
    };

    let writer: Arc<dyn MetadataWriter> = Arc::new(ExiftoolWriter::from_tools(&config.tools));
    writer
        .validate()
        .await
        .with_context(|| format!("Metadata writer {} is not available", writer.name()))?;

    let summary = TimestampAssigner::new(writer, reporter())
        .assign(items, &plan)
        .await?;
    finish(summary, json)
}

pub async fn append(mut config: Config, args: AppendArgs, json: bool) -> Result<()> {
    if let Some(direction) = args.direction {
        config.stitch.direction = direction;
    }
    let config = validated(config)?;

    let converter =
        create_converter(&ConverterConfig::from_tools(config.convert.backend, &config.tools));
    let stitcher: Arc<dyn Stitcher> = Arc::new(MagickStitcher::from_tools(&config.tools));
    stitcher
        .validate()
        .await
        .with_context(|| format!("Stitcher {} is not available", stitcher.name()))?;

    let planner = StitchPlanner::new(converter, stitcher, config.stitch.resolved_fallback_dir());
    let output = planner
        .stitch_images(&args.images, config.stitch.direction)
        .await
        .context("Failed to stitch images")?;

    info!("Saved stitched image to {}", output.display());
    if json {
        println!("{}", serde_json::json!({ "output": output }));
    } else {
        println!("{}", output.display());
    }
    Ok(())
}

/// Classifies and discovers. `None` means nothing eligible was found.
fn discover_items(
    path: &Path,
    filter: &DiscoveryFilter,
) -> Result<Option<(PathKind, Vec<MediaItem>)>> {
    let kind = classify(path)?;
    let items = discover(&kind, filter);
    if items.is_empty() {
        warn!("No images found at {}", kind.path().display());
        return Ok(None);
    }
    Ok(Some((kind, items)))
}

fn reporter() -> Arc<dyn RunReporter> {
    Arc::new(TracingReporter)
}

/// Prints the summary. Per-item failures do not change the exit status.
fn finish(summary: RunSummary, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", summary);
    for failure in &summary.failures {
        println!("  {}: {}", failure.path.display(), failure.message);
    }
    Ok(())
}
