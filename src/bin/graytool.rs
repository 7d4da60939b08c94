use clap::{Parser, Subcommand};
use grayscope::{Raster, energy_ratio, equalize, laplacian, spectrum};
use image::GrayImage;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "graytool", version, about = "grayscope CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the energy-ratio blur metric for an image
    Blur {
        #[arg(long)]
        image: PathBuf,
    },
    /// Save the centered log-amplitude spectrum as a grayscale image
    Spectrum {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Save the absolute Laplacian response as a grayscale image
    Laplacian {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Save the histogram-equalized image
    Equalize {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Blur { image } => {
            let raster = load_grayscale(&image)?;
            let ratio = energy_ratio(&raster)?;
            println!("{}: energy ratio = {:.6}", image.display(), ratio);
        }
        Command::Spectrum { image, out } => {
            let raster = load_grayscale(&image)?;
            let spec = spectrum(&raster)?;
            save_normalized(&out, spec.width(), spec.height(), spec.amplitude.as_slice())?;
            println!("Wrote amplitude spectrum to {}", out.display());
        }
        Command::Laplacian { image, out } => {
            let raster = load_grayscale(&image)?;
            let edges = laplacian(&raster)?;
            let magnitudes: Vec<f64> = edges.as_slice().iter().map(|v| v.abs()).collect();
            save_normalized(&out, edges.width(), edges.height(), &magnitudes)?;
            println!("Wrote Laplacian response to {}", out.display());
        }
        Command::Equalize { image, out } => {
            let raster = load_grayscale(&image)?;
            let equalized = equalize(&raster)?;
            let (w, h) = (equalized.width() as u32, equalized.height() as u32);
            let img = GrayImage::from_raw(w, h, equalized.into_raw())
                .ok_or("equalized raster did not fit its dimensions")?;
            img.save(&out)?;
            println!("Wrote equalized image to {}", out.display());
        }
    }
    Ok(())
}

fn load_grayscale(path: &Path) -> Result<Raster, Box<dyn Error>> {
    let img = image::open(path)?.into_luma8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    Ok(Raster::grayscale(width, height, img.into_raw())?)
}

/// Rescale an f64 grid to the full 8-bit range and save it as a PNG
fn save_normalized(
    path: &Path,
    width: usize,
    height: usize,
    values: &[f64],
) -> Result<(), Box<dyn Error>> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    let bytes: Vec<u8> = values
        .iter()
        .map(|&v| (((v - min) / span) * 255.0).round() as u8)
        .collect();
    let img = GrayImage::from_raw(width as u32, height as u32, bytes)
        .ok_or("output grid did not fit its dimensions")?;
    img.save(path)?;
    Ok(())
}
