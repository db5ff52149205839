//! Game Position Inspector
//!
//! Walks a dispute game tree and logs every position's coordinates.
//! Optional first argument: path to a JSON `GameConfig`.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use game_position::{GameConfig, MoveKind, Position, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => GameConfig::default(),
    };

    info!("Game Position v{}", VERSION);
    info!("Max Depth: {} ({} trace steps)", config.max_depth(), config.leaf_count());

    dump_tree(&config)?;
    demo_moves(&config)?;

    Ok(())
}

/// Deepest level the tree dump logs.
const MAX_DUMP_DEPTH: u32 = 10;

/// Log positions near the root in breadth-first (gindex) order.
///
/// Levels below `MAX_DUMP_DEPTH` are skipped. Returns the number of
/// positions logged.
fn dump_tree(config: &GameConfig) -> anyhow::Result<u64> {
    info!("=== Tree ===");
    let depth = config.max_depth().min(MAX_DUMP_DEPTH);
    if depth < config.max_depth() {
        info!(
            "Dumping depths 0..={} only, skipping {} deeper levels",
            depth,
            config.max_depth() - depth
        );
    }
    let last = Position::try_new(depth, (1u64 << depth) - 1)?;
    for gindex in 1..=last.to_gindex() {
        Position::from_gindex(gindex)?.print(config.max_depth());
    }
    Ok(last.to_gindex())
}

/// Alternate attack and defend from the root until the leaves.
fn demo_moves(config: &GameConfig) -> anyhow::Result<()> {
    info!("=== Moves ===");
    let mut position = Position::root();
    let mut next = MoveKind::Attack;
    while position.depth() < config.max_depth() {
        let target = next.apply(position)?;
        info!(
            "{} {} -> {} (trace index {})",
            next,
            position,
            target,
            config.trace_index(&target)?
        );
        position = target;
        next = if next.is_attack() { MoveKind::Defend } else { MoveKind::Attack };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_tree_covers_small_trees() {
        let config = GameConfig::new(3).unwrap();
        assert_eq!(dump_tree(&config).unwrap(), 15);
    }

    #[test]
    fn test_dump_tree_is_capped() {
        let capped = (1u64 << (MAX_DUMP_DEPTH + 1)) - 1;
        assert_eq!(dump_tree(&GameConfig::new(MAX_DUMP_DEPTH).unwrap()).unwrap(), capped);
        assert_eq!(dump_tree(&GameConfig::new(63).unwrap()).unwrap(), capped);
    }

    #[test]
    fn test_demo_moves_reaches_leaves() {
        assert!(demo_moves(&GameConfig::new(63).unwrap()).is_ok());
    }
}
