use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use stubdns_domain::CliOverrides;
use stubdns_infrastructure::dns::Resolver;
use tracing::{debug, info, warn};

mod bootstrap;

#[derive(Parser, Debug)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "stubdns - send one DNS query over UDP and print the decoded reply")]
struct Cli {
    /// DNS name(s) to resolve
    #[arg(value_name = "NAME", required = true)]
    names: Vec<String>,

    /// Upstream DNS server/resolver [default: 8.8.8.8]
    #[arg(short = 's', long, value_name = "IP")]
    server: Option<String>,

    /// Upstream DNS port [default: 53]
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// DNS record type (A, AAAA, CNAME, MX, NS, PTR, SOA, TXT, ANY) [default: A]
    #[arg(short = 't', long, value_name = "TYPE")]
    rtype: Option<String>,

    /// Send a non-recursive query
    #[arg(long)]
    no_recursion: bool,

    /// Receive timeout in seconds [default: 2]
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error) [default: warn]
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server: self.server.clone(),
            port: self.port,
            timeout_secs: self.timeout,
            record_type: self.rtype.clone(),
            recursion_desired: self.no_recursion.then_some(false),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    // Help, version and usage errors all end here: clap prints its own
    // output and the process exits cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.overrides())?;

    bootstrap::init_logging(&config);

    if let Err(e) = bootstrap::install_interrupt_handler() {
        warn!(error = %e, "Failed to install SIGINT handler");
    }

    info!("Starting stubdns v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    let server = config.resolver.server;
    let mut resolver = Resolver::new(config.resolver).context("Failed to open UDP socket")?;

    let response = resolver
        .query(&cli.names)
        .with_context(|| format!("Query to {} failed", server))?;

    println!("{}", response);
    Ok(())
}
