use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive medal board (default)")]
    Tui,

    #[command(about = "List countries sorted by name with their medal counts")]
    List,

    #[command(about = "Add a country (new countries always start with zero medals)")]
    Add {
        /// Country name
        name: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true, help = "Seed gold count (accepted, not sent)")]
        gold: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true, help = "Seed silver count (accepted, not sent)")]
        silver: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true, help = "Seed bronze count (accepted, not sent)")]
        bronze: i64,
    },

    #[command(about = "Delete a country by id")]
    Delete {
        /// Server-assigned country id
        id: u64,
    },

    #[command(about = "Print the total number of medals across all countries")]
    Total,

    #[command(about = "Show the medal catalog")]
    Medals,

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml to the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
