use chirp::{App, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "config.toml")]
    config_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an application-only bearer token and print it
    Token,
    /// Fetch a user timeline as raw JSON
    Timeline {
        /// Username of the user whose timeline will be fetched
        #[arg(long)]
        screen_name: String,
        /// Number of tweets to return
        #[arg(long, default_value_t = 10)]
        count: u32,
        /// Whether to exclude replies
        #[arg(long)]
        exclude_replies: bool,
        /// Whether to include retweets
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        include_rts: bool,
    },
    /// Run a tweet search and print the raw JSON result
    Search {
        /// Raw query string including the leading `?`, already
        /// percent-encoded, e.g. "?q=%23FNO"
        #[arg(long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config_path).await?;
    let app = App::new(config);
    match cli.command {
        Command::Token => app.token().await?,
        Command::Timeline {
            screen_name,
            count,
            exclude_replies,
            include_rts,
        } => {
            app.timeline(&screen_name, count, exclude_replies, include_rts)
                .await?
        }
        Command::Search { query } => app.search(&query).await?,
    }
    Ok(())
}

async fn load_config(path: PathBuf) -> anyhow::Result<Config> {
    let buf = fs::read_to_string(path).await?;
    let config: Config = toml::from_str(&buf)?;
    Ok(config)
}
