//! orthosole CLI - generate insole preview meshes from the terminal.
//!
//! Reads shape parameters from flags or a TOML file, runs the geometry
//! pipeline, and either prints mesh statistics or writes a Wavefront
//! OBJ dump for external viewers.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use orthosole::{generate, InsoleParams};

mod obj;

#[derive(Parser)]
#[command(name = "orthosole")]
#[command(about = "Parametric orthotic-insole preview mesh generator", long_about = None)]
struct Cli {
    /// Footprint width in mm
    #[arg(long)]
    width: Option<f64>,

    /// Footprint length in mm, heel to toe
    #[arg(long)]
    length: Option<f64>,

    /// Solid thickness in mm
    #[arg(long)]
    thickness: Option<f64>,

    /// Sculpt the detailed top-surface relief
    #[arg(long)]
    relief: bool,

    /// TOML parameter file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a Wavefront OBJ dump to this path instead of printing stats
    #[arg(long)]
    obj: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let params = resolve_params(&cli)?;

    let mesh = generate(&params)?;

    match &cli.obj {
        Some(path) => {
            let text = obj::to_obj(&mesh);
            fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => print_stats(&params, &mesh),
    }

    Ok(())
}

/// Merge the optional config file with command-line flags.
fn resolve_params(cli: &Cli) -> Result<InsoleParams> {
    let mut params = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str::<InsoleParams>(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => {
            let (Some(width), Some(length), Some(thickness)) =
                (cli.width, cli.length, cli.thickness)
            else {
                bail!("--width, --length and --thickness are required without --config");
            };
            InsoleParams::new(width, length, thickness, cli.relief)
        }
    };

    if let Some(width) = cli.width {
        params.dimensions.width = width;
    }
    if let Some(length) = cli.length {
        params.dimensions.length = length;
    }
    if let Some(thickness) = cli.thickness {
        params.dimensions.thickness = thickness;
    }
    if cli.relief {
        params.detailed_relief = true;
    }

    Ok(params)
}

fn print_stats(params: &InsoleParams, mesh: &orthosole::TriangleMesh) {
    let dims = &params.dimensions;
    println!(
        "insole {} x {} x {} mm, relief: {}",
        dims.width, dims.length, dims.thickness, params.detailed_relief
    );
    println!("  vertices:  {}", mesh.num_vertices());
    println!("  triangles: {}", mesh.num_triangles());

    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for i in 0..mesh.num_vertices() {
        let p = mesh.position(i);
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }
    println!(
        "  bounds:    [{:.2}, {:.2}, {:.2}] .. [{:.2}, {:.2}, {:.2}]",
        min[0], min[1], min[2], max[0], max[1], max[2]
    );
}
