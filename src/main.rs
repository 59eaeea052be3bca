//! CLI entry point for treeviz

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treeviz::{
    OutputConfig, Result, TreeFormatter, TreeVizError, TreeWalker, WalkerConfig, build_graph,
    render_png, write_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treeviz")]
#[command(
    about = "Display a directory tree in the terminal, save it as JSON, and render it as a PNG graph"
)]
#[command(version)]
struct Args {
    /// Directory to analyze
    path: PathBuf,

    /// Show hidden files and directories
    #[arg(long = "show-hidden")]
    show_hidden: bool,

    /// Maximum depth to explore (no limit by default)
    #[arg(long = "max-depth", value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let directory = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !directory.exists() {
        return Err(TreeVizError::DirectoryNotFound(directory));
    }

    let config = WalkerConfig {
        show_hidden: args.show_hidden,
        max_depth: args.max_depth,
    };
    let tree = TreeWalker::new(config).walk(&directory)?;

    println!("\n📁 Directory Tree: {}\n", directory.display());
    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    formatter.print(&tree)?;

    let json_path = directory.join("directory_tree.json");
    write_json(&tree, &json_path)?;
    println!(
        "\n📄 The directory tree has been saved as '{}'",
        json_path.display()
    );

    let png_path = directory.join("directory_tree.png");
    // The walker names the root by simple name, falling back to the full
    // path for roots without one (e.g. "/")
    let graph = build_graph(&tree, tree.name());
    render_png(&graph, &png_path)?;
    println!(
        "\n🖼️ The tree image has been saved as '{}'",
        png_path.display()
    );

    Ok(())
}
