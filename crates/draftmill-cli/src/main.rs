mod campaigns;
mod feeds;
mod tick;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "draftmill")]
#[command(about = "draftmill campaign and content pipeline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one scheduler tick now: every due campaign generates content.
    Tick,
    /// Manage campaigns.
    Campaigns {
        #[command(subcommand)]
        command: CampaignCommands,
    },
    /// Seed the feed registry from the feeds YAML file.
    SeedFeeds,
    /// Probe the generation backend with a short prompt.
    TestConnection,
}

#[derive(Debug, Subcommand)]
enum CampaignCommands {
    /// List all campaigns.
    List,
    /// Create a new campaign.
    Create {
        #[arg(long)]
        name: String,
        /// One of: general, news, video, podcast.
        #[arg(long = "type")]
        campaign_type: String,
        /// Comma-separated keyword list; the first is the primary keyword.
        #[arg(long)]
        keywords: String,
        /// One of: every_15_minutes, every_30_minutes, hourly, daily.
        #[arg(long, default_value = "daily")]
        frequency: String,
        /// Settings JSON object, e.g. '{"word_count": 1200}'.
        #[arg(long, default_value = "{}")]
        settings: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = draftmill_core::load_app_config()?;

    match cli.command {
        Commands::Tick => tick::run(&config).await,
        Commands::Campaigns { command } => match command {
            CampaignCommands::List => campaigns::list(&config).await,
            CampaignCommands::Create {
                name,
                campaign_type,
                keywords,
                frequency,
                settings,
            } => {
                campaigns::create(&config, &name, &campaign_type, &keywords, &frequency, &settings)
                    .await
            }
        },
        Commands::SeedFeeds => feeds::seed(&config).await,
        Commands::TestConnection => tick::test_connection(&config).await,
    }
}
