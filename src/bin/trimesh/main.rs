//! trimesh CLI - mesh inspection command-line tool.
//!
//! Usage: trimesh <COMMAND> <INPUT> [OUTPUT]
//!
//! Run `trimesh --help` for available commands.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use trimesh::io;
use trimesh::mesh::TriMesh;

#[derive(Parser)]
#[command(name = "trimesh")]
#[command(author, version, about = "Triangle mesh inspection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Extract the wireframe edge set as an OBJ polyline file
    Wireframe {
        /// Input mesh file
        input: PathBuf,

        /// Output OBJ file (`v` and `l` lines)
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => cmd_info(&input)?,
        Commands::Wireframe { input, output } => cmd_wireframe(&input, &output)?,
    }

    Ok(())
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mesh: TriMesh = io::load(input)?;
    let elapsed = start.elapsed();

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Faces: {}", mesh.num_faces());
    println!("Wireframe edges: {}", mesh.num_edges());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
        let diag = max - min;
        println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
    }

    if let (Some(center), Some(radius)) = (mesh.centroid(), mesh.bounding_radius()) {
        println!(
            "Centroid: ({:.3}, {:.3}, {:.3}), bounding radius {:.3}",
            center.x, center.y, center.z, radius
        );
    }

    let degenerate = mesh.normals().iter().filter(|n| n.norm() == 0.0).count();
    if degenerate > 0 {
        println!(
            "Normals: {} per-vertex ({} degenerate, substituted with zero)",
            mesh.normals().len(),
            degenerate
        );
    } else {
        println!("Normals: {} per-vertex, all unit length", mesh.normals().len());
    }

    println!("Loaded in {:.2?}", elapsed);

    Ok(())
}

fn cmd_wireframe(input: &PathBuf, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mesh: TriMesh = io::load(input)?;

    println!(
        "Loaded: {} vertices, {} faces, {} edges",
        mesh.num_vertices(),
        mesh.num_faces(),
        mesh.num_edges()
    );

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for edge in mesh.edge_indices().chunks_exact(2) {
        // OBJ line elements use 1-based indices
        writeln!(writer, "l {} {}", edge[0] + 1, edge[1] + 1)?;
    }
    writer.flush()?;

    println!("Saved: {}", output.display());

    Ok(())
}
