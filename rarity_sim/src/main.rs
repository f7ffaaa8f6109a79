//! rarity_sim - Command-line simulator for rarity rolls and buff sets

mod simulation;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rarity_core::config::load_rarity_config;
use rarity_core::{default_config, ItemRoll, RarityConfig, RarityEngine};
use simulation::{Distribution, TierRow};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rarity_sim")]
#[command(about = "Roll item rarities and inspect the buffs they grant")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rarity config file (bundled defaults when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active rarity table with selection chances
    Tiers,
    /// Roll rarities and buffs for a material
    Roll {
        /// Material id, e.g. DIAMOND_SWORD
        material: String,
        /// Force a tier instead of rolling one
        #[arg(short, long)]
        tier: Option<String>,
        /// Number of items to roll
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print each roll as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample tier assignment and compare against expected chances
    Distribution {
        /// Material id, e.g. NETHERITE_HELMET
        material: String,
        /// Number of draws
        #[arg(short = 'n', long, default_value_t = 100_000)]
        samples: usize,
        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let engine = RarityEngine::from_config(&config);

    match cli.command {
        Commands::Tiers => print_tiers(&engine),
        Commands::Roll {
            material,
            tier,
            count,
            seed,
            json,
        } => {
            let forced = tier
                .as_deref()
                .map(|name| {
                    engine
                        .table()
                        .parse(name)
                        .map(|t| t.id)
                        .with_context(|| format!("invalid rarity '{}'; valid rarities: Common, Uncommon, Rare, Epic, Mythic", name))
                })
                .transpose()?;
            let mut rng = make_rng(seed);

            for _ in 0..count {
                let roll = match forced {
                    Some(id) => Some(engine.apply_tier(&material, id, &mut rng)),
                    None => engine.roll(&material, &mut rng),
                };
                match roll {
                    Some(roll) if json => println!("{}", serde_json::to_string(&roll)?),
                    Some(roll) => print_roll(&engine, &roll),
                    None => {
                        println!("{} does not take a rarity", material);
                        break;
                    }
                }
            }
        }
        Commands::Distribution { material, samples, seed } => {
            let mut rng = make_rng(seed);
            let Some(dist) = Distribution::run(&engine, &material, samples, &mut rng) else {
                println!("{} does not take a rarity", material);
                return Ok(());
            };
            println!(
                "{} ({:?}, valuable: {}) over {} draws",
                material.to_ascii_uppercase(),
                dist.category,
                dist.is_valuable,
                dist.samples
            );
            println!("{:<10} {:>9} {:>9} {:>9}", "Tier", "Count", "Observed", "Expected");
            for row in dist.rows() {
                println!(
                    "{:<10} {:>9} {:>8.3}% {:>8.3}%",
                    row.display_name,
                    row.count,
                    row.observed * 100.0,
                    row.expected * 100.0
                );
            }
            println!("chi-square (4 dof): {:.3}", dist.chi_square());
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .init();
}

fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<RarityConfig> {
    match path {
        Some(path) => {
            let config = load_rarity_config(path)
                .with_context(|| format!("loading rarity config from '{}'", path.display()))?;
            log::info!("loaded rarity config from {}", path.display());
            Ok(config)
        }
        None => Ok(default_config()),
    }
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn print_tiers(engine: &RarityEngine) {
    println!(
        "{:<10} {:<12} {:>8} {:>6} {:>9} {:>9} {:>14} {:>4}",
        "Tier", "Color", "Weight", "Mult", "Normal", "Valuable", "Strike", "XP"
    );
    for row in TierRow::table(engine) {
        println!(
            "{:<10} {:<12} {:>8.2} {:>6.2} {:>8.3}% {:>8.3}% {:>14} {:>4}",
            row.display_name,
            row.color_tag,
            row.weight,
            row.multiplier,
            row.normal_chance * 100.0,
            row.valuable_chance * 100.0,
            row.strike
                .map(|(chance, factor)| format!("{:.0}% x{}", chance * 100.0, factor))
                .unwrap_or_else(|| "-".to_string()),
            format!("+{}", row.bonus_experience)
        );
    }
}

fn print_roll(engine: &RarityEngine, roll: &ItemRoll) {
    let tier = engine.table().tier(roll.tier);
    println!("{} [{}] {:?}", roll.material, tier.display_name, roll.category);

    for (attribute, value) in &roll.buffs.attribute_deltas {
        println!("  {:?}: {:+.3}", attribute, value);
    }
    for enchant in &roll.buffs.bonus_enchantments {
        println!("  {} {}", enchant.kind, roman(enchant.level));
    }
    for tag in &roll.buffs.lore_tags {
        println!("  \"{}\"", tag);
    }
    println!("  \"{}\"", tier.lore_line());
}

fn roman(level: u32) -> &'static str {
    match level {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        _ => "?",
    }
}
