use clap::{Parser, Subcommand};

// ///////////// //
// CLI interface //
// ///////////// //

/// printer-info - Periodically reads status, media and supply levels from IPP printers and publishes them to a MQTT server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Commands {
    /// Polls the printers and publishes their information (default).
    #[default]
    Monitor,
    /// Queries the printers once and prints their information as JSON.
    Show,
    /// Dumps the raw IPP printer attributes to stdout.
    Dump,
}
