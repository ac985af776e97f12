use anyhow::{Context, Result};
use clap::Parser;
use orbit_map::{tree::OrbitTree, CLIArgs};

#[derive(Debug, Parser)]
struct Part2Args {
    #[command(flatten)]
    common: CLIArgs,
    /// Object to start the transfers from.
    #[arg(long, default_value = "YOU")]
    from: String,
    /// Object to reach.
    #[arg(long, default_value = "SAN")]
    to: String,
}

fn main() -> Result<()> {
    orbit_map::init_logging();
    let args = Part2Args::parse();
    let input_path = &args.common.input_path;
    let map = orbit_map::read_orbit_map(input_path).with_context(|| {
        format!(
            "Failed to read orbit map from given file({}).",
            input_path.display()
        )
    })?;
    let tree = OrbitTree::build(&map, &args.common.root, args.common.orphan_policy())
        .with_context(|| {
            format!(
                "Failed to build orbit tree around {} from given file({}).",
                args.common.root,
                input_path.display()
            )
        })?;

    let transfer_n = tree
        .transfer_count(&args.from, &args.to)
        .with_context(|| {
            format!(
                "Target objects({} and {}) not found in given orbits.",
                args.from, args.to
            )
        })?;
    println!(
        "The minimum number of orbital transfers required to move from the object {} is orbiting to the object {} is orbiting is {}",
        args.from, args.to, transfer_n
    );

    Ok(())
}
