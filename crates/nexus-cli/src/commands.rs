use anyhow::{bail, Context};
use colored::Colorize;

use nexus_ledger::State;
use nexus_store::JsonFileStore;
use nexus_types::{RecordId, RecordKind};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&cli.file);
    match cli.command {
        Command::Init(args) => cmd_init(&store, args),
        Command::Add(args) => cmd_add(&store, args),
        Command::Connect(args) => cmd_connect(&store, args),
        Command::Remove(args) => cmd_remove(&store, args),
        Command::Show(args) => cmd_show(&store, args),
    }
}

fn load(store: &JsonFileStore) -> anyhow::Result<State> {
    store.load_or_default().with_context(|| {
        format!("cannot load collection from {}", store.path().display())
    })
}

fn save(store: &JsonFileStore, state: &State) -> anyhow::Result<()> {
    store.save(state).with_context(|| {
        format!("cannot save collection to {}", store.path().display())
    })
}

fn cmd_init(store: &JsonFileStore, args: InitArgs) -> anyhow::Result<()> {
    if store.exists() && !args.force {
        bail!(
            "collection file {} already exists (use --force to overwrite)",
            store.path().display()
        );
    }
    save(store, &State::new())?;
    println!(
        "{} Initialized empty collection in {}",
        "✓".green().bold(),
        store.path().display().to_string().bold()
    );
    Ok(())
}

fn cmd_add(store: &JsonFileStore, args: AddArgs) -> anyhow::Result<()> {
    let mut state = load(store)?;
    let identity = state
        .add_item(&args.path)
        .with_context(|| format!("cannot add {}", args.path))?;
    save(store, &state)?;

    println!("{} Added {}", "✓".green().bold(), args.path.bold());
    println!("  Identity: {}", identity.to_string().yellow());
    if let Some((_, item)) = state.search_store(&identity) {
        println!("  Checksum: {}", item.checksum.cyan());
    }
    Ok(())
}

fn cmd_connect(store: &JsonFileStore, args: ConnectArgs) -> anyhow::Result<()> {
    let a = RecordId::parse(&args.a).context("invalid first endpoint identity")?;
    let b = RecordId::parse(&args.b).context("invalid second endpoint identity")?;

    let mut state = load(store)?;
    let identity = state
        .add_connection(&a, &b, args.strength)
        .context("cannot create connection")?;
    save(store, &state)?;

    println!(
        "{} Connected {} {} {}",
        "✓".green().bold(),
        a.short_id().yellow(),
        "↔".dimmed(),
        b.short_id().yellow()
    );
    println!("  Identity: {}", identity.to_string().yellow());
    println!("  Strength: {:.6}", args.strength);
    Ok(())
}

fn cmd_remove(store: &JsonFileStore, args: RemoveArgs) -> anyhow::Result<()> {
    let identity = RecordId::parse(&args.identity).context("invalid identity")?;

    let mut state = load(store)?;
    match identity.kind() {
        Some(RecordKind::Store) => state
            .delete_item(&identity)
            .context("cannot remove store item")?,
        Some(RecordKind::Connection) => state
            .delete_connection(&identity)
            .context("cannot remove connection")?,
        _ => bail!("only store items (ns-) and connections (nc-) can be removed"),
    }
    save(store, &state)?;

    println!("{} Removed {}", "✓".green().bold(), identity.to_string().yellow());
    Ok(())
}

fn cmd_show(store: &JsonFileStore, args: ShowArgs) -> anyhow::Result<()> {
    let state = load(store)?;
    let rendered = match args.what {
        ShowTarget::State => state.render_state(),
        ShowTarget::Store => state.render_store(),
        ShowTarget::Connections => state.render_connections(),
        ShowTarget::Log => state.render_event_log(),
    }
    .context("cannot render collection")?;
    println!("{rendered}");
    Ok(())
}
