use std::path::{Path, PathBuf};

use clap::Parser;

/// Update the robot config from trajectory initial positions.
#[derive(Debug, Parser)]
#[command(
    name = "cf-config-sync",
    version,
    about = "Read initial positions from a trajectory JSON and update allCrazyflies.yaml"
)]
pub struct Cli {
    /// Trajectory JSON file; keys look like `robot_1`, `robot_2`, ...
    pub trajectory_json: PathBuf,

    /// Per-id overrides, e.g. `id=3,ch=80,ty=large` or
    /// `id=3,ty=large/id=5,ch=100`. May be repeated.
    #[arg(long = "set", value_name = "SPEC")]
    pub sets: Vec<String>,

    /// Config document path; defaults to ../launch/allCrazyflies.yaml next to
    /// the executable.
    #[arg(long = "yaml", value_name = "PATH")]
    pub yaml: Option<PathBuf>,

    /// Keep entries whose id is absent from the trajectory JSON.
    #[arg(long)]
    pub keep_missing: bool,

    /// Print the merged document instead of writing it back.
    #[arg(long)]
    pub dry_run: bool,

    /// Invoke /desktop/sh/chooser.sh after a successful run (best effort).
    #[arg(long)]
    pub run_chooser: bool,
}

impl Cli {
    /// Resolve the document path: explicit `--yaml`, or the fixed location
    /// relative to the executable's directory.
    pub fn document_path(&self) -> PathBuf {
        if let Some(path) = &self.yaml {
            return path.clone();
        }
        let relative = Path::new("..").join("launch").join("allCrazyflies.yaml");
        match std::env::current_exe() {
            Ok(exe) => match exe.parent() {
                Some(dir) => dir.join(relative),
                None => relative,
            },
            Err(_) => relative,
        }
    }
}
