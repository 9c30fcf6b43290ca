use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

use bijection::{Bimap, Overwritten};

/// Look up and edit a two-way registry file
///
/// The registry holds one `key = value` pair per line; keys and values must
/// each be unique.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,

    /// Registry file
    #[clap(short, long)]
    input: PathBuf,

    /// Save changes back to the registry file
    #[clap(short, long)]
    write: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value for a key
    Get { key: String },

    /// Print the key for a value
    GetByValue { value: String },

    /// Print every pair, in file order
    List,

    /// Add a pair, evicting any pairs which share its key or value
    Set { key: String, value: String },

    /// Remove the pair with the given key
    Delete { key: String },

    /// Remove the pair with the given value
    DeleteByValue { value: String },
}

type Registry = Bimap<String, String>;

fn print_evicted(out: Overwritten<String, String>) {
    let pairs = match out {
        Overwritten::Neither | Overwritten::Pair(..) => vec![],
        Overwritten::Key(k, v) | Overwritten::Value(k, v) => vec![(k, v)],
        Overwritten::Both(a, b) => vec![a, b],
    };
    for (k, v) in pairs {
        println!("evicted {k} = {v}");
    }
}

/// Applies the command, returning `true` if the registry was modified
fn run(registry: &mut Registry, cmd: Command) -> Result<bool> {
    let changed = match cmd {
        Command::Get { key } => {
            let Some(value) = registry.get(&key) else {
                bail!("no such key `{key}`");
            };
            println!("{value}");
            false
        }
        Command::GetByValue { value } => {
            let Some(key) = registry.get_by_value(&value) else {
                bail!("no such value `{value}`");
            };
            println!("{key}");
            false
        }
        Command::List => {
            registry.for_each(|value, key, _| println!("{key} = {value}"));
            false
        }
        Command::Set { key, value } => {
            // Refuse pairs that would make the registry unreadable
            Registry::from([(key.clone(), value.clone())])
                .to_text(std::io::sink())?;
            print_evicted(registry.insert(key, value));
            true
        }
        Command::Delete { key } => {
            let removed = registry.delete(&key);
            if !removed {
                warn!("key `{key}` is not present");
            }
            removed
        }
        Command::DeleteByValue { value } => {
            let removed = registry.delete_by_value(&value);
            if !removed {
                warn!("value `{value}` is not present");
            }
            removed
        }
    };
    Ok(changed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let now = Instant::now();
    let args = Args::parse();
    let file = std::fs::File::open(&args.input)?;
    let mut registry = Registry::from_text(file)?;
    info!(
        "Loaded {} pairs from {:?} in {:?}",
        registry.len(),
        args.input,
        now.elapsed()
    );

    let changed = run(&mut registry, args.cmd)?;
    if changed {
        // Render first, so the file is never truncated by a failed write
        let mut text = vec![];
        registry.to_text(&mut text)?;
        if args.write {
            std::fs::write(&args.input, &text)?;
            info!("Saved {} pairs to {:?}", registry.len(), args.input);
        } else {
            std::io::stdout().lock().write_all(&text)?;
        }
    }
    Ok(())
}
