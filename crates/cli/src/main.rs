//! # Ferrous Responder
//!
//! Resolution front for a DNS pipeline: answer cache with TTL aging and
//! SERVFAIL failover to fallback servers.

mod bootstrap;

use anyhow::Context;
use bootstrap::{build_pipeline, init_logging, load_config};
use clap::{Parser, Subcommand};
use ferrous_responder_application::ports::AnswerCache;
use ferrous_responder_domain::CliOverrides;
use ferrous_responder_infrastructure::dns::CaptureWriter;
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::{Name, RecordType};
use std::str::FromStr;
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-responder")]
#[command(version = "0.1.0")]
#[command(about = "DNS answer cache with SERVFAIL failover")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Cache capacity override (0 = unbounded)
    #[arg(long)]
    max_entries: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate the configuration, then exit
    Check,
    /// Resolve a name twice through the pipeline, showing the cached TTLs
    Probe {
        /// Name to resolve
        #[arg(short, long)]
        name: String,

        /// Record type
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level,
        max_entries: cli.max_entries,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    match cli.command {
        Command::Check => {
            let pipeline = build_pipeline(&config)?;
            println!("upstream {}", config.upstream.server);
            for server in pipeline.failover.servers().iter() {
                println!("fallback {}", server);
            }
            println!("configuration OK");
        }
        Command::Probe { name, record_type } => {
            let pipeline = build_pipeline(&config)?;
            let _sweeper = pipeline.start_sweeper(&config);

            let request = probe_query(&name, &record_type)?;
            for round in 1..=2 {
                let mut writer = CaptureWriter::new();
                pipeline.handler.serve_dns(&request, &mut writer).await;

                let response = writer
                    .into_last()
                    .context("pipeline produced no response")?;
                print_response(round, &response);
            }

            info!(
                cache_size = pipeline.cache.len(),
                hit_rate = pipeline.cache.metrics().hit_rate(),
                "Probe finished"
            );
        }
    }

    Ok(())
}

fn probe_query(name: &str, record_type: &str) -> anyhow::Result<Message> {
    let name = Name::from_str(name).with_context(|| format!("invalid name '{}'", name))?;
    let record_type = RecordType::from_str(&record_type.to_uppercase())
        .with_context(|| format!("invalid record type '{}'", record_type))?;

    let mut request = Message::new();
    request
        .set_id(fastrand::u16(..))
        .set_recursion_desired(true)
        .add_query(Query::query(name, record_type));

    Ok(request)
}

fn print_response(round: u32, response: &Message) {
    println!(
        ";; round {} rcode {} answers {}",
        round,
        response.response_code(),
        response.answers().len()
    );
    for record in response.answers() {
        println!(
            "{}\t{}\t{}\t{}",
            record.name(),
            record.ttl(),
            record.record_type(),
            record
                .data()
                .map(|data| data.to_string())
                .unwrap_or_default()
        );
    }
}
