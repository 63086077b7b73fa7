use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use grit::areas::repository::Repository;
use grit::error::UserError;

#[derive(Parser)]
#[command(
    name = "grit",
    version = "0.1.0",
    about = "A simple version-control engine",
    long_about = "This is a small version-control engine for a single flat directory. \
    It keeps full snapshots of tracked files in a content-addressed store, \
    supports branching and three-way merges, and never talks to a network.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory, \
        with a single empty initial commit on the master branch."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command snapshots the current content of a file and stages it. \
        Staging the version already in the current commit unstages the file instead."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staging index",
        long_about = "This command creates a new commit from the staged additions and removals, \
        advances the current branch to it and clears the staging index."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "rm",
        about = "Unstage a file or stage it for removal",
        long_about = "This command unstages a file if it is staged. If the file is tracked in \
        the current commit it is also staged for removal and deleted from the working directory."
    )]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(
        name = "log",
        about = "Show the history of the current branch",
        long_about = "This command walks first-parent links from the current commit back to the \
        initial commit and prints each commit along the way."
    )]
    Log,
    #[command(
        name = "global-log",
        about = "Show every commit in the repository",
        long_about = "This command prints every commit ever made, in no particular order, \
        including commits no branch points at anymore."
    )]
    GlobalLog,
    #[command(
        name = "find",
        about = "List commit IDs by exact message",
        long_about = "This command prints the IDs of all commits whose message matches the \
        given one exactly, one per line."
    )]
    Find {
        #[arg(index = 1, help = "The commit message to search for")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show branches, staged files and workspace changes",
        long_about = "This command displays the branches, the staged additions and removals, \
        unstaged modifications and untracked files."
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Restore files or switch branches",
        long_about = "This command has three forms: `checkout -- <file>` restores a file from \
        the current commit, `checkout <commit id> -- <file>` restores it from the given commit, \
        and `checkout <branch>` switches to another branch."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to, or a commit ID prefix")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(
        name = "branch",
        about = "Create a branch pointing at the current commit",
        long_about = "This command creates a new branch pointing at the current commit. \
        It does not switch to the new branch."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(
        name = "rm-branch",
        about = "Delete a branch pointer",
        long_about = "This command deletes a branch pointer. The commits it pointed at are \
        kept and remain reachable by ID."
    )]
    RmBranch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch to another commit",
        long_about = "This command checks out the files of the given commit and moves the \
        current branch pointer to it, clearing the staging index."
    )]
    Reset {
        #[arg(index = 1, help = "The commit ID or a unique prefix of one")]
        commit: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current one",
        long_about = "This command merges the given branch into the current one, creating a \
        two-parent commit, fast-forwarding, or reporting that nothing needs to happen."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge in")]
        branch: String,
    },
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return report_usage_error(error),
    };

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    if let Err(error) = dispatch(&cli.command, &repository) {
        // user mistakes print one line and exit cleanly, everything else
        // aborts with the full error chain
        match error.downcast::<UserError>() {
            Ok(user_error) => println!("{user_error}"),
            Err(error) => return Err(error),
        }
    }

    Ok(())
}

fn dispatch(command: &Commands, repository: &Repository) -> Result<()> {
    if !matches!(command, Commands::Init) {
        repository.ensure_initialized()?;
    }

    match command {
        Commands::Init => repository.init(),
        Commands::Add { file } => repository.add(file),
        Commands::Commit { message } => repository.commit(message.as_deref().unwrap_or("")),
        Commands::Rm { file } => repository.rm(file),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(message),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(None, file),
            (Some(prefix), Some(file)) => repository.checkout_file(Some(prefix), file),
            (Some(branch), None) => repository.checkout_branch(branch),
            (None, None) => Err(UserError::IncorrectOperands.into()),
        },
        Commands::Branch { name } => repository.branch(name),
        Commands::RmBranch { name } => repository.rm_branch(name),
        Commands::Reset { commit } => repository.reset(commit),
        Commands::Merge { branch } => repository.merge(branch),
    }
}

fn report_usage_error(error: clap::Error) -> Result<()> {
    let message = match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            error.print()?;
            return Ok(());
        }
        ErrorKind::InvalidSubcommand => UserError::UnknownCommand,
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            UserError::MissingCommand
        }
        _ => UserError::IncorrectOperands,
    };

    println!("{message}");
    Ok(())
}
