use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use recordbook::apps::{grades, inventory};
use recordbook::logging::init_tracing;
use recordbook::{
    EntityId, FinanceApp, HealthSystemApp, InventoryApp, StudentResultProcessor, WarehouseManager,
};

/// Small record-keeping demos over typed in-memory repositories
#[derive(Parser, Debug)]
#[command(name = "recordbook")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process and apply sample transactions to a savings account
    Finance,

    /// List patients and one patient's prescriptions
    Health {
        #[arg(long, default_value_t = 1)]
        patient_id: EntityId,
    },

    /// Save sample inventory to JSON, then reload it in a fresh session
    Inventory {
        #[arg(long, default_value = inventory::DEFAULT_DATA_FILE)]
        data_file: PathBuf,
    },

    /// Turn an id,name,score file into a grade report
    Grades {
        #[arg(long, default_value = grades::DEFAULT_INPUT_FILE)]
        input: PathBuf,

        #[arg(long, default_value = grades::DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },

    /// Stock tracking with duplicate / missing / negative quantity checks
    Warehouse,

    /// Run every demo with default paths
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Finance => run_finance(&mut out)?,
        Command::Health { patient_id } => run_health(&mut out, patient_id)?,
        Command::Inventory { data_file } => run_inventory(&mut out, data_file)?,
        Command::Grades { input, output } => run_grades(&mut out, input, output)?,
        Command::Warehouse => run_warehouse(&mut out)?,
        Command::All => {
            run_finance(&mut out)?;
            run_health(&mut out, 1)?;
            run_inventory(&mut out, PathBuf::from(inventory::DEFAULT_DATA_FILE))?;
            run_grades(
                &mut out,
                PathBuf::from(grades::DEFAULT_INPUT_FILE),
                PathBuf::from(grades::DEFAULT_REPORT_FILE),
            )?;
            run_warehouse(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn banner<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n{}", title)?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    Ok(())
}

fn run_finance<W: Write>(out: &mut W) -> Result<()> {
    banner(out, "💰 Finance Management")?;
    FinanceApp::default().run(out)
}

fn run_health<W: Write>(out: &mut W, patient_id: EntityId) -> Result<()> {
    banner(out, "🏥 Healthcare System")?;
    HealthSystemApp::new().run(out, patient_id)
}

fn run_inventory<W: Write>(out: &mut W, data_file: PathBuf) -> Result<()> {
    banner(out, "📦 Inventory Management")?;
    InventoryApp::run(&data_file, out)
}

fn run_grades<W: Write>(out: &mut W, input: PathBuf, output: PathBuf) -> Result<()> {
    banner(out, "🎓 School Grading")?;
    StudentResultProcessor::new().run(&input, &output, out)?;
    Ok(())
}

fn run_warehouse<W: Write>(out: &mut W) -> Result<()> {
    banner(out, "🏭 Warehouse Inventory")?;
    WarehouseManager::new().run(out)
}
