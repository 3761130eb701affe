mod args;

use crate::args::Args;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use repo_list_lib::{export_org_repos, GitHubClient};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let github = GitHubClient::new(args.api_url.as_str(), &args.github_token)?;

    let count = export_org_repos(&github, &args.org, &args.output_path).await?;

    println!(
        "Wrote {} repositories of {} to {}",
        count.to_string().yellow(),
        args.org.yellow(),
        args.output_path.display()
    );

    Ok(())
}
