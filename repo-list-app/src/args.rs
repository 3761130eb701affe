use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Write the repositories of a GitHub organization to a JSON file")]
pub struct Args {
    #[clap(
        short = 'o',
        long = "org",
        help = "GitHub organization",
        env = "REPO_LIST_ORG",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub org: String,

    #[clap(
        short = 't',
        long = "token",
        help = "GitHub REST API token",
        env = "REPO_LIST_GITHUB_TOKEN",
        hide_env_values = true
    )]
    pub github_token: String,

    #[clap(
        short = 'f',
        long = "output",
        help = "Output file",
        env = "REPO_LIST_OUTPUT",
        default_value = "repo_list.json"
    )]
    pub output_path: PathBuf,

    #[clap(
        long = "api-url",
        help = "GitHub REST API base URL",
        env = "REPO_LIST_API_URL",
        default_value = "https://api.github.com/"
    )]
    pub api_url: String,
}
