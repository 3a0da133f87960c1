use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use topo_order_commits::LOG_ENV_VAR;
use topo_order_commits::areas::repository::Repository;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "topo-order-commits",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Print the commits of a git repository in topological order",
    long_about = "Reads the local branches and loose commit objects of the repository \
    enclosing PATH (or the current directory) and prints every commit reachable from \
    a branch, descendants first. Runs of commits that form a parent chain stay together; \
    a jump to an unrelated commit is marked with `<parents>=`, a blank line and `=<children>`.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Directory to start repository discovery from")]
    path: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let start = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let stdout = std::io::BufWriter::new(std::io::stdout());
    let repository = Repository::discover(&start, Box::new(stdout))?;

    repository.topo_order_commits()
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        if !std::io::stderr().is_terminal() {
            colored::control::set_override(false);
        }
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
