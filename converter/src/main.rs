//! mobconv CLI - Convert monster JSON exports to per-zone Lua files
//!
//! # Main Commands
//!
//! ```bash
//! mobconv monsters.json              # Same as `mobconv convert monsters.json`
//! mobconv convert monsters.json      # Write output/monsters/<zone id>.lua
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! mobconv normalize monsters.json    # Canonical records as JSON, by zone id
//! mobconv validate monsters.json     # Normalize + validate, no output
//! mobconv format table.json          # Render any JSON document as Lua
//! mobconv zones                      # List the zone table
//! mobconv lookup job "bard"          # Resolve a single alias
//! ```

use clap::{Args, Parser, Subcommand};
use mobconv::logs::{log_error, log_info, log_success, set_console_output};
use mobconv::{
    convert_file, group_by_zone, normalize_all, parse_file, resolve_family, resolve_job,
    resolve_zone, to_lua_source, zone_name, zones, ConvertOptions, FormatOptions, Indent,
    LuaValue, QuoteStyle, ZoneEntry,
};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mobconv", version)]
#[command(about = "Convert monster JSON records into per-zone Lua data files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input JSON file (shorthand for `convert <INPUT>`)
    input: Option<PathBuf>,

    #[command(flatten)]
    format: FormatArgs,

    /// Root directory for converted files
    #[arg(long, global = true, env = "MOBCONV_OUTPUT_ROOT", default_value = "output")]
    output_root: PathBuf,

    /// Don't print progress
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Args)]
struct FormatArgs {
    /// Spaces per nesting level, `tab`, or `none` for compact output
    #[arg(long, global = true, env = "MOBCONV_INDENT", default_value = "2", value_parser = parse_indent)]
    indent: Indent,

    /// Quote strings with `"` instead of `'`
    #[arg(long, global = true, env = "MOBCONV_DOUBLE_QUOTES")]
    double_quotes: bool,
}

impl FormatArgs {
    fn options(&self) -> FormatOptions {
        FormatOptions {
            indent: self.indent.clone(),
            quote: if self.double_quotes {
                QuoteStyle::Double
            } else {
                QuoteStyle::Single
            },
            ..Default::default()
        }
    }
}

fn parse_indent(s: &str) -> Result<Indent, String> {
    match s.trim().to_lowercase().as_str() {
        "none" => Ok(Indent::None),
        "tab" => Ok(Indent::Text("\t".to_string())),
        n => n
            .parse::<usize>()
            .map(Indent::Spaces)
            .map_err(|_| format!("expected a number, `tab` or `none`, got '{}'", s)),
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full conversion: JSON records → one Lua file per zone
    Convert {
        /// Input JSON file (array of monster records)
        input: PathBuf,
    },

    /// Normalize and validate records, output canonical JSON grouped by zone id
    Normalize {
        /// Input JSON file (array of monster records)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Normalize and validate records without writing anything
    Validate {
        /// Input JSON file (array of monster records)
        input: PathBuf,
    },

    /// Render a JSON document as a Lua chunk
    Format {
        /// Input JSON file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List known zones
    Zones,

    /// Resolve a single alias
    Lookup {
        #[command(subcommand)]
        kind: LookupKind,
    },
}

#[derive(Subcommand)]
enum LookupKind {
    /// Job alias, e.g. `bard` or `sam/war`
    Job { alias: String },
    /// Creature family alias, e.g. `goblins`
    Family { alias: String },
    /// Zone name
    Zone { alias: String },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if cli.quiet {
        set_console_output(false);
    }

    let options = ConvertOptions {
        output_root: cli.output_root.clone(),
        format: cli.format.options(),
    };

    let result = match cli.command {
        Some(Commands::Convert { input }) => cmd_convert(&input, &options).await,
        None => match cli.input {
            Some(input) => cmd_convert(&input, &options).await,
            None => Err(mobconv::InputError::MissingPath.into()),
        },

        Some(Commands::Normalize { input, output }) => {
            cmd_normalize(&input, output.as_deref()).await
        }

        Some(Commands::Validate { input }) => cmd_validate(&input).await,

        Some(Commands::Format { input, output }) => {
            cmd_format(&input, &options.format, output.as_deref())
        }

        Some(Commands::Zones) => cmd_zones(),

        Some(Commands::Lookup { kind }) => cmd_lookup(kind),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

async fn cmd_convert(input: &Path, options: &ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    let summary = convert_file(input, options).await?;
    log_info(format!(
        "{} records, {} zone files in {}",
        summary.records,
        summary.files.len(),
        summary.output_dir.display()
    ));
    Ok(())
}

async fn cmd_normalize(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let records = parse_file(input).await?;
    let grouping = group_by_zone(normalize_all(&records)?)?;

    let mut by_zone = Map::new();
    for (zone, bucket) in &grouping.zones {
        let mut monsters = Map::new();
        for (name, monster) in bucket.iter() {
            monsters.insert(name.to_string(), serde_json::to_value(monster)?);
        }
        by_zone.insert(zone.to_string(), Value::Object(monsters));
    }

    let json = serde_json::to_string_pretty(&Value::Object(by_zone))?;
    write_output(&json, output)?;
    Ok(())
}

async fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("Validating {}...", input.display()));

    let records = parse_file(input).await?;
    let normalized = normalize_all(&records)?;

    log_success(format!("All {} records valid", normalized.len()));
    Ok(())
}

fn cmd_format(
    input: &Path,
    options: &FormatOptions,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let document: Value = serde_json::from_str(&content)?;

    let lua = to_lua_source(&LuaValue::from(document), options);
    write_output(&lua, output)?;
    Ok(())
}

fn cmd_zones() -> Result<(), Box<dyn std::error::Error>> {
    for (id, name) in zones() {
        println!("{}\t{}", id, name);
    }
    Ok(())
}

fn cmd_lookup(kind: LookupKind) -> Result<(), Box<dyn std::error::Error>> {
    match kind {
        LookupKind::Job { alias } => match resolve_job(&alias)? {
            Some(job) => println!("{}", job),
            None => println!("(no job)"),
        },
        LookupKind::Family { alias } => match resolve_family(&alias)? {
            Some(family) => println!("{}", family),
            None => println!("(no family)"),
        },
        LookupKind::Zone { alias } => match resolve_zone(&alias)? {
            ZoneEntry::Zone(id) => println!("{}\t{}", id, zone_name(id).unwrap_or("?")),
            ZoneEntry::Ignored => println!("(ignored)"),
        },
    }
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indent() {
        assert_eq!(parse_indent("none").unwrap(), Indent::None);
        assert_eq!(parse_indent("Tab").unwrap(), Indent::Text("\t".to_string()));
        assert_eq!(parse_indent(" 4 ").unwrap(), Indent::Spaces(4));
        assert!(parse_indent("wide").unwrap_err().contains("`tab`"));
    }

    #[test]
    fn test_indent_flag_accepts_tab() {
        let cli = Cli::try_parse_from(["mobconv", "--indent", "tab", "zones"]).unwrap();
        assert_eq!(cli.format.options().indent, Indent::Text("\t".to_string()));
        assert!(Cli::try_parse_from(["mobconv", "--indent", "wide", "zones"]).is_err());
    }
}
