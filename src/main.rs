use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudcue_activities::FileStorage;
use cloudcue_ui::{views, Frontend};

mod commands;

#[derive(Parser)]
#[command(name = "cloudcue")]
#[command(about = "CloudCue - weather-aware ideas for things to do", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the forecast and nearby activities for a city
    Search {
        /// City name, e.g. North Vancouver
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Only show activities carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Save an activity from the results to favorites (repeatable)
        #[arg(long, value_name = "ID")]
        save: Vec<String>,
    },
    /// Open a route such as /activities?city=Vancouver, /favorites or /help
    Open {
        route: String,

        #[arg(long)]
        tag: Option<String>,
    },
    /// List saved favorites
    Favorites {
        #[arg(long)]
        tag: Option<String>,

        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// How CloudCue works
    Guide,
    /// Show where configuration and favorites live, and check the settings
    Config,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Remove a favorite by id
    Remove { id: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    cloudcue_core::init()?;

    // Reported before the app starts so invalid settings are listed, not fatal.
    if let Some(Commands::Config) = cli.command {
        let config = cloudcue_core::Config::load()?;
        let ok = commands::config::show(&config);
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let mut app = cloudcue_core::App::new()?;
    let mut frontend = Frontend::from_config(app.config(), FileStorage::new(app.data_dir()));

    let ok = match cli.command {
        None => {
            println!("{}", views::render_home());
            true
        }
        Some(Commands::Search { city, tag, save }) => {
            commands::search::run(&mut frontend, &city.join(" "), tag.as_deref(), &save).await?
        }
        Some(Commands::Open { route, tag }) => {
            commands::open::run(&frontend, &route, tag.as_deref()).await
        }
        Some(Commands::Favorites { tag, action }) => match action {
            None => commands::favorites::list(&frontend, tag.as_deref()),
            Some(FavoritesAction::Remove { id }) => commands::favorites::remove(&mut frontend, &id),
        },
        Some(Commands::Guide) => {
            println!("{}", views::render_help());
            true
        }
        Some(Commands::Config) => commands::config::show(app.config()),
    };

    app.shutdown()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
