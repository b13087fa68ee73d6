use clap::{Parser, Subcommand};
use tracing::{Level, info};

use address_record::{AddressRecord, Field, Result, record};

#[derive(Parser)]
#[command(name = "address-record")]
#[command(about = "Inspect and edit postal address records stored as JSON", long_about = None)]
struct Cli {
    /// Diagnostic verbosity on stderr: error, warn, info, debug or trace.
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new record, optionally pre-filled with key=value assignments.
    New {
        #[arg(short = 'o', long)]
        out: String,

        assignments: Vec<String>,
    },

    /// Print a record as JSON, or a single field's value.
    Show {
        #[arg(short = 'i', long)]
        input: String,

        #[arg(long)]
        field: Option<Field>,
    },

    /// Unset and assign fields, then write the record back.
    Set {
        #[arg(short = 'i', long)]
        input: String,

        /// Defaults to overwriting the input file.
        #[arg(short = 'o', long)]
        out: Option<String>,

        #[arg(long)]
        unset: Vec<Field>,

        assignments: Vec<String>,
    },
}

fn init_logging(level: Level) {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {}", e);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.cmd {
        Commands::New { out, assignments } => {
            let mut rec = AddressRecord::new();
            record::apply_assignments(&mut rec, &assignments)?;
            record::write_record_file(&out, &rec)?;
            info!(path = %out, "created record");
        }
        Commands::Show { input, field } => {
            let rec = record::read_record_file(&input)?;
            if rec.is_empty() {
                info!(path = %input, "record has no fields set");
            }
            match record::show_text(&rec, field)? {
                Some(text) => println!("{}", text),
                None => info!(field = ?field, "field is unset"),
            }
        }
        Commands::Set {
            input,
            out,
            unset,
            assignments,
        } => {
            let out = record::edit_record_file(&input, out.as_deref(), &unset, &assignments)?;
            info!(path = %out, "updated record");
        }
    }

    Ok(())
}
