use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use orbit::{Object, OrbitMap};
use tree::OrphanPolicy;

pub mod count;
pub mod orbit;
pub mod tree;

/// Identifier every hierarchy is anchored at unless told otherwise.
pub const DEFAULT_ROOT: &str = "COM";

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    MalformedLine(String),
    Cycle(Vec<Object>),
    Orphan(Object),
    DuplicateOrbiter(Object, Object, Object),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O Error: {}", ioe),
            Error::MalformedLine(s) => write!(
                f,
                "Invalid orbit specification({}), expect a ')' in it.",
                s
            ),
            Error::Cycle(path) => write!(f, "Found orbit cycle({}).", path.join(" -> ")),
            Error::Orphan(obj) => write!(
                f,
                "Object({}) orbits nothing but isn't the root, its orbiters can't be reached.",
                obj
            ),
            Error::DuplicateOrbiter(orbiter, orbited, new_orbited) => write!(
                f,
                "Object({}) already orbits {}, can't orbit {} too.",
                orbiter, orbited, new_orbited
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Object the whole orbit map is anchored at.
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: String,
    /// Drop orbits unreachable from the root instead of failing.
    #[arg(long)]
    pub ignore_orphans: bool,
}

impl CLIArgs {
    pub fn orphan_policy(&self) -> OrphanPolicy {
        if self.ignore_orphans {
            OrphanPolicy::Ignore
        } else {
            OrphanPolicy::Reject
        }
    }
}

/// Log to stderr, so stdout only carries the answer. Filtered by `RUST_LOG`, `warn` by default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

pub fn read_orbit_map<P: AsRef<Path>>(path: P) -> Result<OrbitMap, Error> {
    let file = File::open(&path).map_err(Error::IOError)?;
    let mut reader = BufReader::new(file);
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::IOError)?;
    let map = OrbitMap::from_str(&text)?;

    debug!(
        path = %path.as_ref().display(),
        orbits = map.len(),
        "read orbit map"
    );
    Ok(map)
}
