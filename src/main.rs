use clap::Parser;
use hdr_grading::io::config::Config;
use hdr_grading::io::image::save_noise_tile;
use hdr_grading::io::table::write_kernel_table;
use hdr_grading::ssao::SAMPLING_TABLE_VERSION;
use hdr_grading::{Color, GradingError};
use log::{error, info};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Bakes SSAO kernel/noise tables and previews color grading.
#[derive(Parser, Debug)]
#[command(name = "ssao-bake")]
#[command(about = "Bake SSAO sampling tables and preview color grading")]
struct Cli {
    /// Config file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Override the kernel sample count
    #[arg(short, long)]
    samples: Option<usize>,

    /// Write the 4x4 noise tile as PNG
    #[arg(long, value_name = "PATH")]
    noise_image: Option<String>,

    /// Write the kernel constants as text
    #[arg(long, value_name = "PATH")]
    kernel_table: Option<String>,

    /// Grade one linear HDR color and print the display result
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    probe: Option<Vec<f32>>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GradingError> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path);
            Config::load(path)?
        }
        None => {
            info!("Using default settings");
            Config::default()
        }
    };

    if let Some(samples) = cli.samples {
        config.ssao.samples = samples;
    }
    if cli.noise_image.is_some() {
        config.output.noise_image = cli.noise_image;
    }
    if cli.kernel_table.is_some() {
        config.output.kernel_table = cli.kernel_table;
    }

    if let Some(rgb) = &cli.probe {
        let input = Color::new(rgb[0], rgb[1], rgb[2]);
        let graded = config.grading.grade(input);
        println!(
            "{:.4} {:.4} {:.4} -> {:.4} {:.4} {:.4}",
            input.x, input.y, input.z, graded.x, graded.y, graded.z
        );
    }

    let tables = config.ssao.build_tables()?;
    info!(
        "Built SSAO tables v{}: {} kernel samples, seeds {}/{}",
        SAMPLING_TABLE_VERSION,
        tables.kernel.len(),
        config.ssao.kernel_seed,
        config.ssao.noise_seed
    );

    match &config.output.kernel_table {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_kernel_table(&tables, &mut writer)?;
            writer.flush()?;
            info!("Wrote kernel table to {}", path);
        }
        None => write_kernel_table(&tables, std::io::stdout().lock())?,
    }

    if let Some(path) = &config.output.noise_image {
        save_noise_tile(&tables, path)?;
    }

    Ok(())
}
