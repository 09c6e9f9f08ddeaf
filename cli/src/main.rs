mod grid;
mod sink;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use easy_widget_core::{
    ConfigOverrides, EntryProvider, FileSharedStore, WidgetConfig, WidgetView,
};
use log::debug;

use crate::sink::StdoutSink;
use crate::tui::app::App;

#[derive(Parser)]
#[command(name = "easy-widget")]
#[command(about = "Monthly activity heatmap and start/stop control", long_about = None)]
struct Cli {
    /// Directory holding the shared store files (<namespace>.json)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,
    /// Host bundle identifier the shared namespace is derived from
    #[arg(long, global = true)]
    bundle_id: Option<String>,
    /// First column of the week (sun, mon, ...)
    #[arg(long, global = true)]
    first_weekday: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the widget in the terminal (default)
    Show,
    /// Print the current entry as JSON
    Entry {
        /// Print the whole timeline handed to the scheduler
        #[arg(long)]
        timeline: bool,
    },
    /// Print every heatmap cell
    Grid,
    /// Print the shared namespace in use
    Namespace,
    /// Emit the start/stop deep link
    Link,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = WidgetConfig::resolve(ConfigOverrides {
        store_dir: cli.store_dir,
        bundle_id: cli.bundle_id,
        first_weekday: cli.first_weekday,
    });
    let namespace = config.namespace();
    debug!("store {} namespace {}", config.store_dir.display(), namespace);

    let store = FileSharedStore::new(&config.store_dir);
    let provider = EntryProvider::new(store, namespace);
    let mut sink = StdoutSink;

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {
            let app = App::new(provider, config.first_weekday);
            tui::run(app, &mut sink)?;
        }
        Commands::Entry { timeline } => {
            let now = chrono::Local::now();
            let json = if timeline {
                serde_json::to_string_pretty(&provider.timeline(now))?
            } else {
                serde_json::to_string_pretty(&provider.snapshot(now))?
            };
            println!("{}", json);
        }
        Commands::Grid => {
            let entry = provider.current();
            let view = WidgetView::from_entry(&entry, config.first_weekday);
            grid::show_grid(&view, entry.stats.year, entry.stats.month);
        }
        Commands::Namespace => {
            println!("{}", provider.namespace());
        }
        Commands::Link => {
            let entry = provider.current();
            WidgetView::from_entry(&entry, config.first_weekday).activate(&mut sink)?;
        }
    }
    Ok(())
}
