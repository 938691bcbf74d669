use anyhow::Context;
use clap::Parser;
use log::info;
use pixelsort::config::{PipelineConfig, load_config};
use pixelsort::core_modules::utils::image_helper::image_helper::{
    derive_output_path, load, save, select_output_format,
};
use pixelsort::{CombinerRegistry, ParallelPipeline, PixelSortPipeline, SortOrder};
use std::path::PathBuf;
use std::sync::Arc;

/// Sorts every pixel of an image by brightness.
#[derive(Parser, Debug)]
#[command(name = "pixelsort", version, about)]
struct Args {
    /// Image to sort (PNG, JPEG, GIF or TIFF).
    #[arg(required_unless_present = "list_combiners")]
    input: Option<PathBuf>,
    /// Where to write the result. Its extension is replaced to match the output format.
    /// Defaults to `<input>_sorted.<ext>` next to the input.
    output: Option<PathBuf>,
    /// JSON file with pipeline settings. Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Name of the combiner that scores pixels (see --list-combiners).
    #[arg(short, long)]
    combiner: Option<String>,
    /// Put the darkest pixels first.
    #[arg(long)]
    ascending: bool,
    /// Score pixels on all CPUs.
    #[arg(long)]
    parallel: bool,
    /// Quality for JPEG output (1-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: Option<u8>,
    /// Print the available combiners and exit.
    #[arg(long)]
    list_combiners: bool,
}

impl Args {
    fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(combiner) = &self.combiner {
            config.combiner = combiner.clone();
        }
        if self.ascending {
            config.order = SortOrder::Ascending;
        }
        if self.parallel {
            config.parallel = true;
        }
        if let Some(quality) = self.jpeg_quality {
            config.jpeg_quality = quality;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let registry = CombinerRegistry::with_defaults();

    if args.list_combiners {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = args.pipeline_config()?;
    let input = args.input.as_deref().context("No input image given")?;

    let loaded = load(input).with_context(|| format!("Failed to load {}", input.display()))?;
    let (width, height) = loaded.image.dimensions();

    info!("Image metadata:");
    info!("    File:   {}", input.display());
    info!("    Format: {:?}", loaded.format);
    info!("    Width:  {width:>5}");
    info!("    Height: {height:>5}");
    info!("    Pixels: {:>9}", u64::from(width) * u64::from(height));

    let sorted = if config.parallel {
        let pipeline = ParallelPipeline::from_config(&config, &registry)?;
        info!("Sorting {:?} with {:?}", pipeline.order(), pipeline.combiner().name());
        info!("Scoring on {} workers", pipeline.workers());
        pipeline.run(Arc::new(loaded.image)).await?
    } else {
        let pipeline = PixelSortPipeline::from_config(&config, &registry)?;
        info!("Sorting {:?} with {:?}", pipeline.order(), pipeline.combiner().name());
        pipeline.run(&loaded.image)
    };

    let format = select_output_format(loaded.format);
    let output = derive_output_path(input, args.output.as_deref(), format);
    info!("Output format is {format:?}");
    info!("Output will be written to: {}", output.display());

    save(&output, &sorted, format, config.jpeg_quality)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}
