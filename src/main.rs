//! tj CLI
//!
//! Reads records from stdin and writes each one, stamped with its time,
//! delta and total, to stdout.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use tj::commands::{display_list, execute_run, validate_args, ListKind, RunArgs};
use tj::utils::config::{DEFAULT_SCALE, DEFAULT_SCALE_FAST, DEFAULT_SCALE_SLOW, DEFAULT_TIME_FORMAT};

/// tj - stamp stdin lines (or JSON values) with time, delta and total
#[derive(Parser, Debug)]
#[command(name = "tj")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output template (Tera syntax) or predefined template name; JSON lines if omitted
    #[arg(short, long, env = "TJ_TEMPLATE")]
    template: Option<String>,

    /// Time format (strftime) or predefined format name
    #[arg(long, visible_alias = "timeformat", env = "TJ_TIME_FORMAT", default_value = DEFAULT_TIME_FORMAT)]
    time_format: String,

    /// Time zone: Local, UTC, or a fixed offset such as +05:30
    #[arg(long, visible_alias = "timezone", default_value = "Local")]
    time_zone: String,

    /// Parse input as a stream of JSON values instead of lines
    #[arg(long, visible_alias = "readjson")]
    read_json: bool,

    /// Reset the stopwatch on records whose match text contains this regex
    #[arg(long, visible_alias = "start")]
    match_regex: Option<String>,

    /// Template producing the match text from each record
    #[arg(long, visible_alias = "match")]
    match_template: Option<String>,

    /// Like --match-template, and also reads the input as JSON values
    #[arg(long = "jsontemplate", conflicts_with = "match_template")]
    json_template: Option<String>,

    /// Template condition; records rendering to `true` reset the stopwatch
    #[arg(long, visible_alias = "condition")]
    match_condition: Option<String>,

    /// Hold records until the next match, then print them with its delta
    #[arg(long, visible_alias = "buffer")]
    match_buffer: bool,

    /// Color scale (hex stops such as "#0F0 -> #F00") or predefined scale name
    #[arg(long, env = "TJ_SCALE", default_value = DEFAULT_SCALE)]
    scale: String,

    /// Delta at or below which the scale's first color is used
    #[arg(long, allow_hyphen_values = true, default_value = DEFAULT_SCALE_FAST)]
    scale_fast: String,

    /// Delta at or above which the scale's last color is used
    #[arg(long, allow_hyphen_values = true, default_value = DEFAULT_SCALE_SLOW)]
    scale_slow: String,

    /// Square the scale position
    #[arg(long)]
    scale_sqr: bool,

    /// Cube the scale position
    #[arg(long)]
    scale_cube: bool,

    /// Take the square root of the scale position
    #[arg(long)]
    scale_sqrt: bool,

    /// Take the cube root of the scale position
    #[arg(long)]
    scale_cubert: bool,

    /// Print a predefined table and exit
    #[arg(long, value_enum)]
    list: Option<ListKind>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stdout carries records only
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Some(kind) = cli.list {
        display_list(kind);
        return Ok(());
    }

    let args = RunArgs {
        template: cli.template,
        time_format: cli.time_format,
        time_zone: cli.time_zone,
        read_json: cli.read_json,
        match_regex: cli.match_regex,
        match_template: cli.match_template,
        json_template: cli.json_template,
        match_condition: cli.match_condition,
        match_buffer: cli.match_buffer,
        scale: cli.scale,
        scale_fast: cli.scale_fast,
        scale_slow: cli.scale_slow,
        scale_sqr: cli.scale_sqr,
        scale_cube: cli.scale_cube,
        scale_sqrt: cli.scale_sqrt,
        scale_cubert: cli.scale_cubert,
    };

    // Validate args first
    let settings = validate_args(&args)?;

    execute_run(&settings)?;

    Ok(())
}
