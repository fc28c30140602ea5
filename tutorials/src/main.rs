mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use merkle_storage::RocksDbStore;
use merkle_tree::MerkleTree;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "merkle_tool={log_level},merkle_tree={log_level},merkle_storage={log_level}"
        ))
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store = RocksDbStore::open(&cli.db)
        .with_context(|| format!("cannot open database at {}", cli.db.display()))?;
    let mut tree = MerkleTree::new(&store, cli.name.as_str(), cli.depth)
        .unwrap()
        .with_context(|| format!("cannot open tree {}", cli.name))?;

    match cli.command {
        Commands::Root => {
            println!("root  {}", hex::encode(tree.root()));
            println!("depth {}", tree.depth());
        }
        Commands::Update { index, value } => {
            let value = hex::decode(&value).context("value must be hex")?;
            let ctx = tree.update_element(index, &value);
            info!(
                seeks = ctx.cost.seek_count,
                written = ctx.cost.storage_written_bytes,
                "leaf updated"
            );
            let root = ctx.value?;
            store.flush()?;
            println!("{}", hex::encode(root));
        }
        Commands::Path { index, encoded } => {
            let path = tree.hash_path(index).unwrap()?;
            if encoded {
                println!("{}", hex::encode(path.encode_to_vec()?));
            } else {
                for (level, (left, right)) in path.pairs().iter().enumerate() {
                    println!("{level:>2} {} {}", hex::encode(left), hex::encode(right));
                }
            }
        }
        Commands::Verify { index, value } => {
            let value = hex::decode(&value).context("value must be hex")?;
            let path = tree.hash_path(index).unwrap()?;
            match path.verify(&tree.root(), index, &value) {
                Ok(()) => println!("ok"),
                Err(e) => {
                    println!("mismatch: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
