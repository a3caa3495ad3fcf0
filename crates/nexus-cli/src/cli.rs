use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nexus",
    about = "nexus — event-sourced store of files and weighted connections",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the collection file
    #[arg(long, global = true, default_value = "collection.json")]
    pub file: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty collection file
    Init(InitArgs),
    /// Add a file to the store
    Add(AddArgs),
    /// Connect two store items with a strength in (0, 1)
    Connect(ConnectArgs),
    /// Remove an item or connection by identity
    Remove(RemoveArgs),
    /// Print a collection, the event log, or the whole state
    Show(ShowArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing collection file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Path of the file to add
    pub path: String,
}

#[derive(Args)]
pub struct ConnectArgs {
    /// Identity of the first endpoint (ns-…)
    pub a: String,
    /// Identity of the second endpoint (ns-…)
    pub b: String,
    /// Connection strength, strictly between 0 and 1
    pub strength: f32,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Identity of the record to remove (ns-… or nc-…)
    pub identity: String,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(default_value = "state")]
    pub what: ShowTarget,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum ShowTarget {
    State,
    Store,
    Connections,
    Log,
}
