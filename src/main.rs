use clap::Parser;
use numwatch::lookup::LookupPipeline;
use numwatch::mapgen::{self, DEFAULT_MAP_PATH};
use std::path::PathBuf;

/// numwatch v0.3 — Phone Number Lookup Engine
///
/// Resolves a phone number to its country, carrier, timezone, currency,
/// and approximate coordinates, with an optional single-marker map.
///
/// Examples:
///   numwatch +919876543210
///   numwatch --number "+16502530000" --map
///   numwatch +442079460000 --map --map-out /tmp/here.html
///   numwatch --serve --port 8080
#[derive(Parser)]
#[command(name = "numwatch", version, about, long_about = None)]
struct Cli {
    /// Phone number (positional). Example: numwatch +919876543210
    #[arg(index = 1, allow_hyphen_values = true)]
    number_positional: Option<String>,

    /// Phone number (named). Example: --number "+16502530000"
    #[arg(long, allow_hyphen_values = true)]
    number: Option<String>,

    /// Write the map artifact for the looked-up coordinates.
    #[arg(long, short = 'm')]
    map: bool,

    /// Map artifact path.
    #[arg(long, default_value = DEFAULT_MAP_PATH)]
    map_out: PathBuf,

    /// Run the web form instead of a one-shot lookup.
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for --serve.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap_or_else(|e| {
                eprintln!("Error: Cannot start runtime: {}", e);
                std::process::exit(1);
            });
        runtime.block_on(numwatch::server::start(&cli.host, cli.port, cli.map_out));
        return;
    }

    // ── One-shot lookup ─────────────────────────────────────────

    let number = cli
        .number
        .as_deref()
        .or(cli.number_positional.as_deref())
        .unwrap_or_else(|| {
            eprintln!("Error: No phone number specified.");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  numwatch +919876543210");
            eprintln!("  numwatch --number \"+16502530000\" --map");
            eprintln!("  numwatch --serve --port 8080");
            std::process::exit(1);
        });

    let pipeline = LookupPipeline::new();
    let result = pipeline.lookup(number).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // Banner to stderr
    eprintln!("  {}", result.display_block());

    // ── Map artifact ────────────────────────────────────────────

    if cli.map {
        match mapgen::write_map(result.coordinates.as_ref(), &cli.map_out) {
            Ok(()) => eprintln!("  \u{1F5FA}\u{FE0F}  Map written to {}", cli.map_out.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // JSON to stdout
    println!("{}", serde_json::to_string_pretty(&result.report()).unwrap());
}
