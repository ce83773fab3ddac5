use clap::Parser;

/// Arguments for the migrate command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Migrate using the default paths:\n    artmap migrate\n\n\
                  Check the mapping without copying:\n    artmap migrate --dry-run\n\n\
                  Migrate with custom paths:\n    artmap migrate --map map.json --input art --output nft")]
pub struct MigrateArgs {
    /// Validate and show what would be copied without copying
    #[arg(long)]
    pub dry_run: bool,
}
