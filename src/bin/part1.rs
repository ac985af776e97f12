use anyhow::{Context, Result};
use clap::Parser;
use orbit_map::{count, tree::OrbitTree, CLIArgs};

fn main() -> Result<()> {
    orbit_map::init_logging();
    let args = CLIArgs::parse();
    let map = orbit_map::read_orbit_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read orbit map from given file({}).",
            args.input_path.display()
        )
    })?;
    let tree = OrbitTree::build(&map, &args.root, args.orphan_policy()).with_context(|| {
        format!(
            "Failed to build orbit tree around {} from given file({}).",
            args.root,
            args.input_path.display()
        )
    })?;

    let total_orbits = count::total_orbits(&tree, count::DIRECT_ORBIT_DEPTH);
    println!(
        "The total number of direct and indirect orbits is {}",
        total_orbits
    );

    Ok(())
}
