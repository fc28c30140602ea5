use std::path::PathBuf;

use clap::{Parser, Subcommand};
use merkle_tree::DEFAULT_DEPTH;

#[derive(Parser)]
#[command(name = "merkle-tool")]
#[command(about = "Inspect and update a Merkle tree stored in RocksDB")]
#[command(version)]
pub struct Cli {
    /// Database directory, created if missing
    #[arg(long, default_value = "./merkle-storage")]
    pub db: PathBuf,

    /// Name the tree's metadata is stored under
    #[arg(long, default_value = "default")]
    pub name: String,

    /// Depth used when the tree does not exist yet
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the root and depth, creating the tree if needed
    Root,
    /// Set a leaf and print the new root
    Update {
        index: u64,
        /// Leaf value as hex, at most 64 bytes, zero-padded to 64
        value: String,
    },
    /// Print the hash path of a leaf, leaf-adjacent pair first
    Path {
        index: u64,
        /// Print the bincode encoding as one hex string instead
        #[arg(long)]
        encoded: bool,
    },
    /// Check that a leaf holds a value under the current root
    Verify {
        index: u64,
        /// Leaf value as hex, at most 64 bytes, zero-padded to 64
        value: String,
    },
}
