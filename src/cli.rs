//! CLI: args, output formatting, and run logic.

use crate::finder::{find_unused_files, FindResult, FufOptions, MatchKey};
use clap::Parser;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "fuf")]
#[command(about = "Find source files that are never referenced by name in any target file.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Glob pattern for files whose content is searched (e.g. "dist/**/*.js")
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Glob pattern for candidate files that may be unused (e.g. "assets/**/*")
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Attribute of each source file searched for in targets
    #[arg(short, long = "match", value_name = "KEY", value_enum, default_value_t = MatchKey::Name)]
    pub match_key: MatchKey,

    /// Only exit with code 1 if unused files found; no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the result as JSON: {"unused": [...]}
    #[arg(long)]
    pub json: bool,

    /// Verbose: -v = summary, -vv = per-file scan details (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Plain listing: one indented path per unused file.
pub fn render_plain(result: &FindResult) -> String {
    if result.unused.is_empty() {
        return "No unused files found.\n".to_string();
    }
    let mut out = String::from("Unused files:\n");
    for f in &result.unused {
        out.push_str("  ");
        out.push_str(&f.path);
        out.push('\n');
    }
    out
}

/// Pretty-printed `{"unused": [...]}`.
pub fn render_json(result: &FindResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Run a search and print the outcome. Returns the process exit code:
/// 0 = nothing unused, 1 = unused files found, 2 = error.
pub fn run(args: Args) -> i32 {
    let options = FufOptions::with_match_key(args.match_key);
    let result = match find_unused_files(&args.target, &args.source, &options) {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "search failed");
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    let code = if result.unused.is_empty() { 0 } else { 1 };
    if args.quiet {
        return code;
    }
    if args.json {
        match render_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 2;
            }
        }
    } else {
        print!("{}", render_plain(&result));
    }
    code
}
