use anyhow::Result;
use clap::Parser;
use sporemods::commands;
use sporemods::config::Config;

/// sporemods - Spore mod browser
///
/// Discover Spore mods published as GitHub repositories tagged `spore-mod`.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding rate limits.
///
/// Examples:
///   sporemods search              # List every mod
///   sporemods search galaxy       # Search mods mentioning "galaxy"
#[derive(Parser, Debug)]
#[command(author, version = env!("SPOREMODS_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", env = "SPOREMODS_API_URL", value_name = "URL", global = true)]
    api_url: Option<String>,

    /// User-Agent contact string sent with every request
    #[arg(
        long = "user-agent",
        env = "SPOREMODS_USER_AGENT",
        value_name = "CONTACT",
        global = true
    )]
    user_agent: Option<String>,

    /// GitHub token used to raise the rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Search for mods
    Search(SearchArgs),

    /// Show the mod in a repository
    Show(RepoArgs),

    /// Print the README of a mod repository
    Readme(RepoArgs),
}

#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Search terms; GitHub search qualifiers are allowed
    #[arg(value_name = "TERM")]
    terms: Vec<String>,
}

#[derive(clap::Args, Debug)]
struct RepoArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    repo: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.api_url, cli.user_agent, cli.token);

    match cli.command {
        Commands::Search(args) => commands::search(&config, &args.terms).await?,
        Commands::Show(args) => commands::show(&config, &args.repo).await?,
        Commands::Readme(args) => commands::readme(&config, &args.repo).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_search_without_terms() {
        let cli = Cli::try_parse_from(["sporemods", "search"]).unwrap();
        match cli.command {
            Commands::Search(args) => assert!(args.terms.is_empty()),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_terms() {
        let cli = Cli::try_parse_from(["sporemods", "search", "galaxy", "creature"]).unwrap();
        match cli.command {
            Commands::Search(args) => assert_eq!(args.terms, vec!["galaxy", "creature"]),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_global_api_url() {
        let cli = Cli::try_parse_from([
            "sporemods",
            "show",
            "owner/repo",
            "--api-url",
            "http://localhost:1234",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:1234"));
        match cli.command {
            Commands::Show(args) => assert_eq!(args.repo, "owner/repo"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["sporemods"]).is_err());
    }
}
