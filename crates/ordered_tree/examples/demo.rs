//! Walks through the `OrderedTree` API on a handful of random keys.
//!
//! `DEMO_COUNT` and `DEMO_SEED` override the number of keys and the RNG seed.

use std::env;
use std::fmt::Display;

use log::{info, warn};
use ordered_tree::{OrderedTree, TreeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

struct DemoConfig {
    count: usize,
    key_bound: u32,
    range: (u32, u32),
    seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 10,
            key_bound: 1000,
            range: (0, 100),
            seed: None,
        }
    }
}

impl DemoConfig {
    fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(count) = read_var("DEMO_COUNT") {
            config.count = count;
        }
        config.seed = read_var("DEMO_SEED");
        config
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => bench::default_rng(),
        }
    }
}

fn read_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        warn!("ignoring {name}={raw:?}: not a number");
    }
    parsed
}

fn join<'a, K: Display + 'a>(keys: impl IntoIterator<Item = &'a K>) -> String {
    keys.into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), TreeError> {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let config = DemoConfig::from_env();
    let mut rng = config.rng();
    let mut tree = OrderedTree::new();

    let inserted: Vec<u32> = (0..config.count)
        .map(|_| rng.random_range(0..config.key_bound))
        .collect();
    for &key in &inserted {
        tree.insert(key);
    }
    info!("inserted {} keys, {} distinct", inserted.len(), tree.len());

    println!("Insertion order: {}", join(&inserted));
    println!("Size: {}", tree.len());
    println!("isEmpty: {}", tree.is_empty());
    println!("Height: {}", tree.height());
    println!("Min: {}", tree.min()?);
    println!("Max: {}", tree.max()?);
    println!("Keys: {}", join(tree.keys()));

    let (low, high) = config.range;
    println!(
        "Keys in range [{low}...{high}]: {}",
        join(tree.keys_in_range(&low, &high))
    );

    tree.delete_max()?;
    tree.delete_min()?;
    println!("After removing max. and min. : {}", join(tree.keys()));

    if let Err(v) = tree.check_invariants() {
        warn!("tree is inconsistent: {v}");
    }
    Ok(())
}
