use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_audit_command, handle_delete_command, handle_list_command, handle_load_command,
    handle_report_command, handle_save_command, handle_search_command, handle_total_command,
    ReportCommands, SearchCommands, Session,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::models::ExpenseOrder;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Track personal expenses from the command line",
    long_about = "Records dated, categorized expenses in a plain-text ledger file, \
                  searches them by date, category or amount, and reports totals."
)]
struct Cli {
    /// Working ledger file name (inside the data directory)
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        /// Category
        category: String,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List {
        /// Sort by date or amount instead of insertion order
        #[arg(short, long)]
        sort: Option<ExpenseOrder>,
    },

    /// Delete an expense by its index (as shown by `list`)
    #[command(alias = "rm")]
    Delete {
        /// Zero-based index
        #[arg(allow_hyphen_values = true)]
        index: i64,
    },

    /// Show the total of all expenses
    Total,

    /// Search expenses
    #[command(subcommand)]
    Search(SearchCommands),

    /// Reports and totals
    #[command(subcommand)]
    Report(ReportCommands),

    /// Save the working ledger to a file (.txt or .csv)
    Save {
        /// File name
        filename: String,
    },

    /// Replace the working ledger with the contents of a file (.txt or .csv)
    Load {
        /// File name
        filename: String,
    },

    /// Show current configuration and paths
    Config,

    /// Show the audit log
    Audit {
        /// Only show the most recent N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Tracker - personal expense ledger");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Config => print_config(&paths, &settings),
        Commands::Audit { limit } => handle_audit_command(&paths, limit)?,
        command => run_ledger_command(command, paths, settings, cli.file.as_deref())?,
    }

    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Default file:  {}", settings.default_file);
    println!("  Audit enabled: {}", settings.audit_enabled);
    println!("  List order:    {:?}", settings.list_order);
}

fn run_ledger_command(
    command: Commands,
    paths: TrackerPaths,
    settings: Settings,
    file: Option<&str>,
) -> Result<()> {
    let mut session = Session::open(paths, settings, file)?;
    for diagnostic in session.take_diagnostics() {
        eprintln!("Warning: {}", diagnostic);
    }

    match command {
        Commands::Add {
            date,
            amount,
            category,
        } => handle_add_command(&mut session, &date, amount, &category)?,
        Commands::List { sort } => handle_list_command(&session, sort)?,
        Commands::Delete { index } => handle_delete_command(&mut session, index)?,
        Commands::Total => handle_total_command(&session)?,
        Commands::Search(cmd) => handle_search_command(&session, cmd)?,
        Commands::Report(cmd) => handle_report_command(&session, cmd)?,
        Commands::Save { filename } => handle_save_command(&mut session, &filename)?,
        Commands::Load { filename } => handle_load_command(&mut session, &filename)?,
        Commands::Config => print_config(session.paths(), session.settings()),
        Commands::Audit { limit } => handle_audit_command(session.paths(), limit)?,
    }

    Ok(())
}
