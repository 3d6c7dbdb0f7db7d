use clap::{Parser, Subcommand};
use pulselattice_render::{RenderView, Renderer, TextRenderer};
use pulselattice_scene::{SceneComposer, SceneParams};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pulselattice-cli", about = "Headless pulse lattice operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Compose one frame of the scene and print it as text
    Compose {
        /// Lattice size per axis
        #[arg(long, default_value = "3")]
        boxes: u32,
        /// Number of point lights
        #[arg(long, default_value = "4")]
        lights: u32,
        /// Light intensity
        #[arg(long, default_value = "40")]
        light_intensity: u32,
        /// Light ring radius
        #[arg(long, default_value = "6")]
        light_distance: u32,
        /// Elapsed scene time in seconds (drives the pulse)
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Disable the pulse (spheres sit at rest)
        #[arg(long)]
        no_pulse: bool,
        /// Seed for sphere color assignment
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Print the effective parameters as JSON instead of the scene
        #[arg(long)]
        json: bool,
    },
    /// Print a table of pulse phase samples
    Phase {
        /// Number of samples
        #[arg(short, long, default_value = "16")]
        samples: u32,
        /// Time step between samples in seconds
        #[arg(long, default_value = "0.5")]
        step: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("pulselattice-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", pulselattice_render::crate_info());
            println!(
                "defaults: {}",
                serde_json::to_string(&SceneParams::default())?
            );
        }
        Commands::Compose {
            boxes,
            lights,
            light_intensity,
            light_distance,
            time,
            no_pulse,
            seed,
            json,
        } => {
            let params = SceneParams {
                rotate_cube: false,
                pulse_spheres: !no_pulse,
                boxes,
                lights,
                light_intensity,
                light_distance,
            }
            .clamped();

            if json {
                println!("{}", serde_json::to_string_pretty(&params)?);
                return Ok(());
            }

            let mut composer = SceneComposer::new(seed);
            let scene = composer.advance(params, time, 0.0);
            let output = TextRenderer::new().render(&scene, &RenderView::default());
            print!("{output}");
        }
        Commands::Phase { samples, step } => {
            println!("{:>8}  {:>8}", "t", "phase");
            for n in 0..samples {
                let t = n as f32 * step;
                println!("{t:>8.3}  {:>8.4}", pulselattice_core::phase(t));
            }
        }
    }

    Ok(())
}
