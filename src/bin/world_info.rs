//! Print the header and tree statistics of a saved world
//!
//! Usage: world-info <dir> <name> [config.toml]

use anyhow::{bail, Context, Result};
use hearth_world::persistence::{self, DirectoryStorage, WorldStorage};
use hearth_world::{DefaultNodeFactory, WorldConfig};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        bail!("usage: {} <dir> <name> [config.toml]", args[0]);
    }
    let (dir, name) = (&args[1], &args[2]);

    let config = match args.get(3) {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };

    let storage = DirectoryStorage::new(dir);
    let header = {
        let mut reader = storage
            .open(name)
            .with_context(|| format!("opening {}", storage.path_for(name).display()))?;
        persistence::read_header(&mut reader)?
    };

    println!("World file: {}", storage.path_for(name).display());
    println!("  version:      {}", header.version);
    println!("  global shift: {}", header.global_shift);
    println!("  leaf shift:   {}", header.leaf_shift);

    if header.leaf_shift != config.leaf_shift {
        log::warn!(
            "[world-info] file leaf shift {} differs from configured {}, using the file's",
            header.leaf_shift,
            config.leaf_shift
        );
    }

    let world = persistence::load(
        &storage,
        name,
        DefaultNodeFactory::new(header.leaf_shift),
        config.trailing_chunk,
    )?;
    let stats = world.stats();

    println!("Tree (side {}):", world.side());
    println!("  normal nodes: {}", stats.normal_nodes);
    println!("  leaves:       {} ({} empty)", stats.leaves, stats.empty_leaves);
    println!("  max depth:    {}", stats.max_depth);
    println!("  memory:       {:.2} MB", stats.memory_usage_mb());

    Ok(())
}
