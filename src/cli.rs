use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "textbook-collections",
    about = "Prints demonstrations of textbook data structures",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[command(flatten)]
    pub options: DemoOptions,
}

#[derive(Args, Clone, Copy)]
pub struct DemoOptions {
    /// Number of elements each demonstration works with.
    #[arg(long, short, global = true, default_value_t = 16)]
    pub size: usize,
    /// Seed for shuffling demonstration input.
    #[arg(long, global = true, default_value_t = 42)]
    pub seed: u64,
    /// Log every structural change, (rehashes, rotations and evictions). Overrides RUST_LOG.
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hash table with separate chaining.
    Hash,
    /// Singly linked list and its two-pointer algorithms.
    Singly,
    /// Arena-backed doubly linked list.
    Doubly,
    /// Unbalanced binary search tree and its traversals.
    Bst,
    /// Self-balancing AVL tree.
    Avl,
    /// Prefix tree of words.
    Trie,
    /// Least recently used cache.
    Lru,
    /// Every demonstration in turn.
    All,
}
