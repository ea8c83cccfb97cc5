//! Planetgen CLI - procedural planet surface generator.
//!
//! Generate a planet's height and color maps from a seed and a handful of
//! noise, crater and texture-blend parameters.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

use planetgen::export::{export_maps_png, PngExportOptions};
use planetgen::pipeline::{generate, GenerationParameters};
use planetgen::terrain::CraterPolicy;
use planetgen::texture::PixelBuffer;

/// Procedural planet surface generator.
#[derive(Parser)]
#[command(name = "planetgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a planet color map and height map.
    Generate {
        /// Seed for reproducible generation. Defaults to the system clock.
        #[arg(short, long)]
        seed: Option<String>,

        /// Output width in pixels.
        #[arg(short = 'W', long, default_value = "1024")]
        width: u32,

        /// Output height in pixels.
        #[arg(short = 'H', long, default_value = "512")]
        height: u32,

        /// Base noise scale (first octave frequency = scale / 100).
        #[arg(long, default_value = "50.0")]
        scale: f64,

        /// Number of noise octaves (1-16).
        #[arg(long, default_value = "4")]
        octaves: u32,

        /// Crater density (profile policy places floor(crater_scale * 50) craters).
        #[arg(long, default_value = "1.0")]
        crater_scale: f64,

        /// Crater depth factor.
        #[arg(long, default_value = "0.3")]
        crater_strength: f64,

        /// Crater impositing algorithm.
        #[arg(long, default_value = "profile")]
        crater_policy: CraterPolicyArg,

        /// Latitude compression factor (1.0 = uncompressed equirectangular).
        #[arg(long, default_value = "0.65")]
        lat_stretch: f64,

        /// Base (low-altitude) texture image. A neutral gray is used if omitted.
        #[arg(long)]
        base_texture: Option<PathBuf>,

        /// High-altitude texture image. Omitting it disables altitude blending.
        #[arg(long)]
        high_texture: Option<PathBuf>,

        /// Center of the altitude blend ramp, in [0, 1].
        #[arg(long, default_value = "0.6")]
        blend_altitude: f64,

        /// Half-width of the altitude blend ramp, in [0, 1].
        #[arg(long, default_value = "0.1")]
        blend_smoothness: f64,

        /// Texture repeat factor across the sphere.
        #[arg(long, default_value = "1.0")]
        texture_world_scale: f64,

        /// Strength of the noise-driven texture perturbation.
        #[arg(long, default_value = "2.0")]
        perturb_strength: f64,

        /// Strength of the slope-based diffuse shading.
        #[arg(long, default_value = "1.0")]
        shading_strength: f64,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "planet")]
        name: String,
    },

    /// Print buffer sizes for a given output resolution.
    Info {
        /// Output width in pixels.
        #[arg(short = 'W', long, default_value = "1024")]
        width: u32,

        /// Output height in pixels.
        #[arg(short = 'H', long, default_value = "512")]
        height: u32,
    },
}

/// CLI-facing crater policy names.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CraterPolicyArg {
    /// Inverted-noise craters (soft dimples).
    Noise,
    /// Explicit crater field with rim bulges.
    Profile,
}

impl From<CraterPolicyArg> for CraterPolicy {
    fn from(arg: CraterPolicyArg) -> Self {
        match arg {
            CraterPolicyArg::Noise => CraterPolicy::Noise,
            CraterPolicyArg::Profile => CraterPolicy::Profile,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            seed,
            width,
            height,
            scale,
            octaves,
            crater_scale,
            crater_strength,
            crater_policy,
            lat_stretch,
            base_texture,
            high_texture,
            blend_altitude,
            blend_smoothness,
            texture_world_scale,
            perturb_strength,
            shading_strength,
            output,
            name,
        } => run_generate(RunArgs {
            seed,
            width,
            height,
            scale,
            octaves,
            crater_scale,
            crater_strength,
            crater_policy,
            lat_stretch,
            base_texture,
            high_texture,
            blend_altitude,
            blend_smoothness,
            texture_world_scale,
            perturb_strength,
            shading_strength,
            output,
            name,
        }),
        Commands::Info { width, height } => run_info(width, height),
    }
}

struct RunArgs {
    seed: Option<String>,
    width: u32,
    height: u32,
    scale: f64,
    octaves: u32,
    crater_scale: f64,
    crater_strength: f64,
    crater_policy: CraterPolicyArg,
    lat_stretch: f64,
    base_texture: Option<PathBuf>,
    high_texture: Option<PathBuf>,
    blend_altitude: f64,
    blend_smoothness: f64,
    texture_world_scale: f64,
    perturb_strength: f64,
    shading_strength: f64,
    output: PathBuf,
    name: String,
}

fn run_generate(args: RunArgs) {
    // Validate parameters
    if args.width < 16 || args.width > 8192 || args.height < 16 || args.height > 8192 {
        eprintln!("Error: Width and height must be between 16 and 8192");
        std::process::exit(1);
    }

    if args.octaves < 1 || args.octaves > 16 {
        eprintln!("Error: Octaves must be between 1 and 16");
        std::process::exit(1);
    }

    if args.scale <= 0.0 {
        eprintln!("Error: Scale must be positive");
        std::process::exit(1);
    }

    // Generate seed if not provided
    let seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
            .to_string()
    });

    println!("Planetgen - Procedural Planet Surface Generator");
    println!("===============================================");
    println!("Resolution: {}x{}", args.width, args.height);
    println!("Seed: {}", seed);
    println!("Crater policy: {:?}", args.crater_policy);
    println!("Output: {}", args.output.display());

    let base_texture = match &args.base_texture {
        Some(path) => load_texture(path),
        None => {
            println!("Base texture: neutral gray (none supplied)");
            PixelBuffer::neutral()
        }
    };
    let high_texture = args.high_texture.as_ref().map(|path| load_texture(path));
    if high_texture.is_none() {
        println!("High texture: none (altitude blending disabled)");
    }

    let params = GenerationParameters {
        seed,
        width: args.width,
        height: args.height,
        scale: args.scale,
        octaves: args.octaves,
        crater_scale: args.crater_scale,
        crater_strength: args.crater_strength,
        crater_policy: args.crater_policy.into(),
        lat_stretch: args.lat_stretch,
        base_texture,
        high_texture,
        blend_altitude: args.blend_altitude,
        blend_smoothness: args.blend_smoothness,
        texture_world_scale: args.texture_world_scale,
        perturb_strength: args.perturb_strength,
        shading_strength: args.shading_strength,
    };

    println!("\nGenerating...");
    let start = Instant::now();

    let maps = match generate(&params) {
        Ok(maps) => maps,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Generation completed in {:.2?}", start.elapsed());

    if let Err(e) = export_maps_png(&maps, &args.output, &args.name, &PngExportOptions::default()) {
        eprintln!("Error: Export failed: {}", e);
        std::process::exit(1);
    }

    println!(
        "Wrote {}_colormap.png and {}_heightmap.png to {}",
        args.name,
        args.name,
        args.output.display()
    );
}

fn run_info(width: u32, height: u32) {
    let pixels = width as u64 * height as u64;
    println!("Planetgen buffer sizes for {}x{}", width, height);
    println!("  Height field: {} bytes (f32)", pixels * 4);
    println!("  Color map:    {} bytes (RGBA8)", pixels * 4);
    println!("  Height map:   {} bytes (RGBA8)", pixels * 4);
}

/// Loads an image file into an RGBA pixel buffer, exiting on failure.
fn load_texture(path: &Path) -> PixelBuffer {
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("Error: Failed to load texture {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let (width, height) = img.dimensions();
    match PixelBuffer::new(width, height, img.into_raw()) {
        Ok(buffer) => {
            println!("Loaded texture {} ({}x{})", path.display(), width, height);
            buffer
        }
        Err(e) => {
            eprintln!("Error: Texture {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
