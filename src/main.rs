use capture_chess::config::{ConsoleConfig, CoordinateStyle};
use capture_chess::console::Console;
use capture_chess::view::GlyphStyle;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "capture-chess")]
#[command(about = "Two-player chess where capturing the king wins")]
struct Cli {
    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    ascii: bool,
    /// Do not mark the picked-up piece and its destinations
    #[arg(long)]
    no_highlights: bool,
    /// Board labels: "algebraic" (a-h / 1-8) or "grid" (row,col indices)
    #[arg(long, default_value = "algebraic")]
    coords: CoordinateStyle,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn console_config(cli: &Cli) -> ConsoleConfig {
    ConsoleConfig {
        glyphs: if cli.ascii { GlyphStyle::Ascii } else { GlyphStyle::Unicode },
        show_highlights: !cli.no_highlights,
        coordinates: cli.coords,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut console = Console::new(console_config(&cli));
    console.run()
}
