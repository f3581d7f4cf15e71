use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_semver::cli::{run_bump, BumpArgs};
use git_semver::config;
use git_semver::git::Git2Repository;
use git_semver::ui;
use git_semver::VersionParser;

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    version,
    about = "Compute the next semantic version from a version string or git tags"
)]
struct Args {
    #[arg(short = 'v', long = "version-string", help = "Version string to use")]
    version_string: Option<String>,

    #[arg(long, help = "Increment major version")]
    major: bool,

    #[arg(long, help = "Increment minor version")]
    minor: bool,

    #[arg(
        long,
        help = "Increment patch version. This is the default if no other increments are set"
    )]
    patch: bool,

    #[arg(long, help = "Prefix to add to the version string")]
    prefix: Option<String>,

    #[arg(long, help = "Suffix to add to the version string")]
    suffix: Option<String>,

    #[arg(
        long = "prefix-sep",
        help = "Separator between prefix and version, used for parsing and output [default: \"\"]"
    )]
    prefix_sep: Option<String>,

    #[arg(
        long = "suffix-sep",
        help = "Separator between version and suffix, used for parsing and output [default: \"-\"]"
    )]
    suffix_sep: Option<String>,

    #[arg(long, help = "Use the latest tag of the git repository as version string")]
    tags: bool,

    #[arg(
        long,
        help = "With --tags, only consider tags suffixed with the current branch and use the branch as suffix"
    )]
    branch: bool,

    #[arg(long, help = "Git directory. Default is the current directory")]
    gitdir: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Fail unless the result is a valid SemVer 2.0 version")]
    strict: bool,

    #[arg(long, help = "Log debug information to stderr")]
    verbose: bool,
}

impl From<Args> for BumpArgs {
    fn from(args: Args) -> Self {
        BumpArgs {
            version: args.version_string,
            use_tags: args.tags,
            restrict_to_branch: args.branch,
            git_dir: args.gitdir,
            major: args.major,
            minor: args.minor,
            patch: args.patch,
            prefix: args.prefix,
            suffix: args.suffix,
            prefix_separator: args.prefix_sep,
            suffix_separator: args.suffix_sep,
            strict: args.strict,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let parser = VersionParser::new()?;

    let bump_args = BumpArgs::from(args);
    let version = run_bump(&bump_args, &config, &parser, |dir: &Path| {
        Git2Repository::open(dir)
    })?;

    ui::write_version(&mut std::io::stdout().lock(), &version)?;
    Ok(())
}
