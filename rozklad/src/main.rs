use clap::Parser;
use prettytable::{Table, row};
use tracing_subscriber::EnvFilter;

use rozklad::options::{Cli, QueryOptions};
use rozklad::query::TimetableQuery;
use rozklad::timetable::TimetableResult;
use rozklad::transport::{HttpTransport, TransportConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let local = chrono::Local::now();

    let options = match QueryOptions::resolve(
        cli,
        std::env::var("DEPARTURE_STATION").ok(),
        std::env::var("TARGET_STATION").ok(),
        local.date_naive(),
        local.time(),
    ) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let transport = match HttpTransport::new(TransportConfig::default()) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("failed to create HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let query = TimetableQuery::new(transport);
    match query.run(&options).await {
        Ok(result) => print_timetable(&options, &result),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn print_timetable(options: &QueryOptions, result: &TimetableResult) {
    println!("DATE: {}", options.date);
    println!("FROM: {} TO: {}", options.from, options.to);

    let mut table = Table::new();
    table.add_row(row![b->"Departure", b->"Arrival", b->"Train"]);

    for entry in &result.rows {
        table.add_row(row![
            entry.departure.format("%H:%M"),
            entry.arrival.format("%H:%M"),
            entry.train
        ]);
    }

    table.printstd();
}
