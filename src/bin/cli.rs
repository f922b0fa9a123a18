use anyhow::Context;
use avatar_crop::config::{self, CropJob};
use avatar_crop::{AVATAR_BOUNDS, image_handler};
use clap::{Parser, Subcommand};
use image::GenericImageView;
use std::path::PathBuf;

/// Cut the avatar out of a portfolio screenshot.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Screenshot to crop
    #[arg(short, long, global = true, env = config::SOURCE_ENV, default_value = config::DEFAULT_SOURCE)]
    input: PathBuf,
    /// Where to write the avatar; the extension picks the format
    #[arg(short, long, global = true, env = config::DESTINATION_ENV, default_value = config::DEFAULT_DESTINATION)]
    output: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crop the input and save the avatar (the default)
    Crop,
    /// Print the input size and the region that would be cropped, without writing
    Inspect,
}

fn main() -> anyhow::Result<()> {
    // a missing .env is fine
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Crop) {
        Commands::Crop => {
            let job = CropJob::new(cli.input, cli.output);
            match job.run() {
                Ok(report) => {
                    println!("Successfully saved avatar to {}", report.destination.display())
                }
                Err(e) => println!("Error: {e}"),
            }
        }

        Commands::Inspect => {
            let image = image_handler::load_image(&cli.input)
                .with_context(|| format!("cannot inspect {}", cli.input.display()))?;
            let (width, height) = image.dimensions();
            let region = AVATAR_BOUNDS
                .to_pixels(width, height)
                .context("avatar bounds do not fit this image")?;
            println!(
                "{}: {width}x{height}, avatar region {region}",
                cli.input.display()
            );
        }
    }

    Ok(())
}
