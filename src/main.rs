use clap::Parser;
use exifmap::store::ConflictDecision;
use exifmap::{ExifmapError, LocationStore, Marker, gps, reader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scan photos for embedded GPS positions and collect them as named map
/// markers.
#[derive(Parser, Debug)]
#[command(name = "exifmap", version, about)]
struct Args {
    /// Image files to scan
    files: Vec<PathBuf>,

    /// Saved-locations file to update with the scanned positions. Loaded
    /// first when it already exists; scanned markers replace same-named
    /// duplicates.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), ExifmapError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut store = match &args.output {
        Some(path) if path.exists() => LocationStore::load(path)?,
        _ => LocationStore::new(),
    };

    let mut located = 0usize;
    for path in &args.files {
        let tags = match std::fs::read(path) {
            Ok(bytes) => match reader::tags_from_bytes(&bytes) {
                Ok(tags) => tags,
                Err(error) => {
                    eprintln!("=> {} - unreadable Exif: {error}", path.display());
                    continue;
                }
            },
            Err(error) => {
                eprintln!("=> {} - {error}", path.display());
                continue;
            }
        };

        match gps::get_gps_fix(&tags) {
            Some(fix) => {
                located += 1;
                println!(
                    "=> {} @ {}, {}",
                    path.display(),
                    fix.coordinate.latitude,
                    fix.coordinate.longitude
                );
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                store.insert_or_replace(Marker::from_fix(fix, name), ConflictDecision::Replace);
            }
            None => println!("=> {} - no GPS data found", path.display()),
        }
    }

    println!("=> {located}/{} images with a location", args.files.len());

    if let Some(path) = &args.output {
        store.save(path)?;
        println!("=> saved {} location(s) to {}", store.len(), path.display());
    }

    Ok(())
}
