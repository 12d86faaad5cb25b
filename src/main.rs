use clap::{Args, Parser, Subcommand};
use district_scout::dataset;
use district_scout::error::AppError;
use district_scout::ranking::selection::select;
use district_scout::ranking::{Priority, SelectionResult};
use district_scout::server::{self, ServeOverrides};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "District Scout",
    about = "Rank city districts by weighted living priorities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank districts from a CSV snapshot and print the winner
    Rank(RankArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct RankArgs {
    /// Path to the district dataset CSV
    #[arg(long)]
    data: PathBuf,
    /// First priority (weight 0.7), e.g. "Cheapest"
    #[arg(long, value_parser = parse_priority)]
    first: Priority,
    /// Second priority (weight 0.3), e.g. "Safest"
    #[arg(long, value_parser = parse_priority)]
    second: Priority,
    /// Print every row of the winning district with its composite score
    #[arg(long)]
    show_rows: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => {
            server::run(ServeOverrides {
                host: args.host,
                port: args.port,
            })
            .await
        }
        Command::Rank(args) => run_rank(args),
    }
}

fn parse_priority(raw: &str) -> Result<Priority, String> {
    Priority::from_label(raw).map_err(|err| {
        let options: Vec<&str> = Priority::ordered()
            .into_iter()
            .map(Priority::label)
            .collect();
        format!("{err}; choose one of: {}", options.join(", "))
    })
}

fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        data,
        first,
        second,
        show_rows,
    } = args;

    let rows = dataset::load_from_path(data)?;
    let result = select(rows, first, second)?;
    render_selection(&result, first, second, show_rows);

    Ok(())
}

fn render_selection(result: &SelectionResult, first: Priority, second: Priority, show_rows: bool) {
    println!("Best district: {}", result.district);
    println!(
        "Priorities: {} (0.7), {} (0.3)",
        first.label(),
        second.label()
    );

    println!("\nAverages");
    println!("- Rent price: {:.2}", result.avg_cost);
    println!("- Crimes: {}", result.avg_crime);
    println!("- Flat area: {:.2}", result.avg_area);
    println!("- Heating price: {:.2}", result.avg_heating_price);

    println!("\nLocation: {}", result.cc_distance_label());

    if result.pros.is_empty() {
        println!("\nPros: none");
    } else {
        println!("\nPros");
        for pro in &result.pros {
            println!("- {pro}");
        }
    }

    if result.cons.is_empty() {
        println!("\nCons: none");
    } else {
        println!("\nCons");
        for con in &result.cons {
            println!("- {con}");
        }
    }

    if show_rows {
        println!("\nRows of {}", result.district);
        for scored in &result.rows {
            println!(
                "- score {:.2} | price {:.2} | area {:.2} | modern {} | old {}",
                scored.final_score,
                scored.row.avg_price,
                scored.row.avg_area,
                scored.row.modern_count,
                scored.row.old_count
            );
        }
    }
}
