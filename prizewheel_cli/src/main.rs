use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prizewheel_core::{
    order_slots, spin, verify_seeded_spin, Presenter, ProvablyFairDraw, RandomSource, SeededDraw,
    ThreadRandom, Wheel,
};
use prizewheel_shared::{SpinMessage, WheelDocument};

#[derive(Parser)]
#[command(name = "prizewheel-cli", about = "Spin and check prize wheels offline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Wheel definition (JSON). Defaults to the built-in demo wheel
    #[arg(long, global = true, env = "PRIZEWHEEL_WHEEL")]
    wheel: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spin once and print the message the presenting side receives
    Spin {
        /// Test-only: derive the draw from SHA-256 of this seed
        #[arg(long, conflicts_with = "server_seed")]
        seed: Option<String>,
        /// Provably-fair draw: HMAC key, revealed after the spin
        #[arg(long, requires = "client_seed")]
        server_seed: Option<String>,
        #[arg(long)]
        client_seed: Option<String>,
        #[arg(long, default_value_t = 0)]
        nonce: u64,
    },
    /// Resolve the display index for a spin message (inline JSON or a file)
    Present { message: String },
    /// Run many spins, report hit counts and check presenter alignment
    Simulate {
        #[arg(long, default_value_t = 10_000)]
        spins: u64,
        /// Use seeded draws `<prefix>-<n>` instead of the thread RNG
        #[arg(long)]
        seed_prefix: Option<String>,
    },
    /// Replay a seeded spin and check the reported slot
    Verify { seed: String, message: String },
}

fn load_wheel(path: Option<&Path>) -> anyhow::Result<Wheel> {
    let Some(path) = path else {
        return Ok(Wheel::demo());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading wheel {}", path.display()))?;
    let doc: WheelDocument = serde_json::from_str(&raw)
        .with_context(|| format!("parsing wheel {}", path.display()))?;
    Ok(Wheel::from(doc))
}

fn load_message(arg: &str) -> anyhow::Result<SpinMessage> {
    let raw = if Path::new(arg).is_file() {
        std::fs::read_to_string(arg).with_context(|| format!("reading message {arg}"))?
    } else {
        arg.to_string()
    };
    serde_json::from_str(&raw).context("parsing spin message")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let wheel = load_wheel(cli.wheel.as_deref())?;

    match cli.command {
        Commands::Spin {
            seed,
            server_seed,
            client_seed,
            nonce,
        } => {
            let source: Box<dyn RandomSource> = match (seed, server_seed, client_seed) {
                (Some(seed), _, _) => Box::new(SeededDraw::new(seed)),
                (None, Some(server), Some(client)) => {
                    let draw = ProvablyFairDraw::new(server, client, nonce);
                    info!(server_seed_hash = %draw.server_seed_hash_hex(), nonce, "provably-fair draw");
                    Box::new(draw)
                }
                _ => Box::new(ThreadRandom),
            };
            let selection = spin(&wheel, source.as_ref())?;
            info!(draw = selection.draw, index = selection.index, "spin complete");
            println!("{}", serde_json::to_string_pretty(&selection.to_message())?);
        }
        Commands::Present { message } => {
            let message = load_message(&message)?;
            let presenter = Presenter::new(&wheel.slots)?;
            let resolution = presenter.resolve_or_fallback(&message)?;
            if resolution.degraded {
                warn!(slot_id = %message.slot_id, "presenting from reported index");
            }
            println!(
                "index={} slot={} degraded={}",
                resolution.index, presenter.ordered()[resolution.index].id, resolution.degraded
            );
        }
        Commands::Simulate { spins, seed_prefix } => {
            let ordered = order_slots(&wheel.slots);
            let mut presenting = wheel.slots.clone();
            presenting.reverse();
            let presenter = Presenter::new(&presenting)?;

            let mut hits = vec![0u64; ordered.len()];
            let mut misaligned = 0u64;
            for n in 0..spins {
                let selection = match &seed_prefix {
                    Some(prefix) => spin(&wheel, &SeededDraw::new(format!("{prefix}-{n}")))?,
                    None => spin(&wheel, &ThreadRandom)?,
                };
                hits[selection.index] += 1;
                let resolved = presenter.resolve(&selection.to_message())?;
                if resolved != selection.index {
                    misaligned += 1;
                }
            }

            println!("{:<20} {:>8} {:>10} {:>10}", "slot", "weight", "hits", "share");
            for (slot, count) in ordered.iter().zip(&hits) {
                let share = if spins == 0 {
                    0.0
                } else {
                    *count as f64 / spins as f64 * 100.0
                };
                println!(
                    "{:<20} {:>8.2} {:>10} {:>9.2}%",
                    slot.id, slot.weight, count, share
                );
            }
            if misaligned > 0 {
                bail!("{misaligned} of {spins} spins resolved to a different index");
            }
            info!(spins, "presenter aligned on every spin");
        }
        Commands::Verify { seed, message } => {
            let message = load_message(&message)?;
            let ok = verify_seeded_spin(&wheel, &SeededDraw::new(seed), &message)?;
            if !ok {
                bail!("slot {} does not match the seeded replay", message.slot_id);
            }
            println!("verified slot {}", message.slot_id);
        }
    }

    Ok(())
}
