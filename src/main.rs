use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use follow_branch::areas::repository::Repository;
use follow_branch::artifacts::walk::walker::EndMatch;
use is_terminal::IsTerminal;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "follow-branch",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Trace a branch back through merges and list the merge heads to skip",
    long_about = "Walks back from STARTING_COMMIT to ENDING_COMMIT along BRANCH_NAME. \
    At every merge the parent that continues the branch is chosen from the merge message; \
    the other parent is recorded as a discarded head. The commits on the branch are printed \
    one per line, followed by the discarded heads, ready to pass to `git bisect good`.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

ARGUMENTS:
{positionals}

OPTIONS:
{options}
"
)]
struct Cli {
    #[arg(index = 1, help = "The branch tip to start walking from")]
    starting_commit: String,
    #[arg(
        index = 2,
        help = "The ancestor to walk back to, matched as a prefix of commit ids"
    )]
    ending_commit: String,
    #[arg(
        index = 3,
        help = "The branch name as it appears in merge messages when this branch is merged in"
    )]
    branch_name: String,
    #[arg(
        short = 'C',
        long = "repo",
        help = "Run as if started in this directory (defaults to the current directory)"
    )]
    repo: Option<String>,
    #[arg(
        long,
        help = "Stop only at the exact commit ENDING_COMMIT resolves to, not at any id it prefixes"
    )]
    exact_end: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let path = match &cli.repo {
        Some(path) => path.clone(),
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };
    let repository = Repository::new(&path, Box::new(std::io::stdout()))?;

    let end_match = if cli.exact_end {
        EndMatch::Exact
    } else {
        EndMatch::Prefix
    };

    repository.follow_branch(
        &cli.starting_commit,
        &cli.ending_commit,
        &cli.branch_name,
        end_match,
    )?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
