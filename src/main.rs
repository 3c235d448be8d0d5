//! CLI entry point for doctree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use doctree::{
    Destination, FilterPolicy, IgnoreRule, OutputSink, Preset, Renderer, RunConfig, SortMode,
    StatsCollector, TreeError, TreeStyle, TreeWalker, exit_code, format_stats, parse_ignore_file,
};

#[derive(Parser, Debug)]
#[command(name = "doctree")]
#[command(about = "Generate ASCII/Unicode tree views of directory structures")]
#[command(version)]
struct Args {
    /// Root directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file (.txt or .md); prints to stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Append directory/file counts to the output
    #[arg(long)]
    stats: bool,

    /// Colorize terminal output (never applied to file output)
    #[arg(long)]
    color: bool,

    /// Maximum depth to display (default: unlimited)
    #[arg(short, long, value_name = "N")]
    depth: Option<usize>,

    /// Show only directories
    #[arg(long, conflicts_with = "files_only")]
    dirs_only: bool,

    /// Show only files
    #[arg(long)]
    files_only: bool,

    /// Exclude hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Use preset ignore patterns (can be used multiple times)
    #[arg(short, long, value_name = "PRESET")]
    preset: Vec<Preset>,

    /// Path to an ignore file (gitignore-like format)
    #[arg(short, long, value_name = "FILE")]
    ignore_file: Option<PathBuf>,

    /// Exclude pattern (can be used multiple times)
    #[arg(short, long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Tree drawing style
    #[arg(short, long, value_name = "STYLE", default_value = "ascii")]
    style: TreeStyle,

    /// Sort alphabetically instead of directories first
    #[arg(short, long)]
    alphabetic: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("doctree: {}", e);
        process::exit(exit_code(&e));
    }
}

fn run(args: Args) -> Result<(), TreeError> {
    // Configuration errors surface before any traversal.
    let destination = Destination::resolve(args.output.as_deref())?;

    let mut rules = Vec::new();
    for preset in &args.preset {
        for pattern in preset.patterns() {
            rules.push(IgnoreRule::new(pattern, rules.len()));
        }
    }
    if let Some(ref path) = args.ignore_file {
        rules.extend(parse_ignore_file(path, rules.len())?);
    }
    for pattern in &args.exclude {
        rules.push(IgnoreRule::new(pattern, rules.len()));
    }

    let config = RunConfig {
        root: args.path,
        max_depth: args.depth,
        sort: if args.alphabetic {
            SortMode::Alphabetic
        } else {
            SortMode::DirsFirst
        },
        style: args.style,
        show_stats: args.stats,
        use_color: args.color && destination.is_stdout(),
        destination,
        filter: FilterPolicy::new(rules, args.no_hidden, args.dirs_only, args.files_only),
    };

    let tree = TreeWalker::new(&config).walk()?;

    let mut lines = Renderer::new(&config).render(&tree);
    if config.show_stats {
        lines.extend(format_stats(&StatsCollector::collect(&tree)));
    }

    OutputSink::new(config.destination.clone(), config.use_color).write(&lines)
}
