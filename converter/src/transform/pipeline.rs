//! High-level pipeline API for monster JSON to Lua conversion.
//!
//! ```text
//! parse_file ─► normalize_all ─► group_by_zone ─► render_zone ─► write_zone_files
//!   (input)     (normalize +       (zone ids)      (Lua text)     (one file per zone)
//!                validate)
//! ```
//!
//! Every step is fail-fast: the first bad record aborts the run. The pure
//! part ([`convert_records`]) never touches the filesystem; [`convert_file`]
//! adds loading and writing around it.
//!
//! # Example
//!
//! ```rust,ignore
//! use mobconv::pipeline::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = convert_file(Path::new("monsters.json"), &ConvertOptions::default()).await?;
//!     println!("Wrote {} zone files", summary.files.len());
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::error::{ConvertResult, OutputError};
use crate::logs::{log_info, log_success, log_success_indent, log_warning};
use crate::lookup::zone_name;
use crate::lua::{format, FormatOptions};
use crate::models::{RawMonster, ZoneId};
use crate::output::{output_dir, prepare_dir, write_zone_files};
use crate::parser::parse_file;
use crate::validation::validate_monster;

use super::grouper::{group_by_zone, NormalizedRecord, ZoneBucket};
use super::normalize::normalize;

/// Default root directory for converted files.
pub const DEFAULT_OUTPUT_ROOT: &str = "output";

/// Options for the conversion pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Files land in `<output_root>/<input stem>/`.
    pub output_root: PathBuf,
    pub format: FormatOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            format: FormatOptions::default(),
        }
    }
}

/// Rendered contents of one zone file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFile {
    pub zone: ZoneId,
    pub name: &'static str,
    pub monsters: usize,
    pub contents: String,
}

/// In-memory result of converting a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Zone files in ascending zone id order.
    pub files: Vec<ZoneFile>,
    /// Zone labels that were skipped.
    pub ignored: Vec<String>,
}

/// What [`convert_file`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub records: usize,
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub ignored: Vec<String>,
}

/// Normalize and validate every record, stopping at the first failure.
pub fn normalize_all(records: &[RawMonster]) -> ConvertResult<Vec<NormalizedRecord>> {
    records
        .iter()
        .map(|raw| -> ConvertResult<NormalizedRecord> {
            let record = NormalizedRecord {
                zone: raw.zone.clone(),
                name: raw.name.clone(),
                id: raw.record_id(),
                monster: normalize(raw)?,
            };
            validate_monster(&record.record_ref(), &record.monster)?;
            Ok(record)
        })
        .collect()
}

/// Render one bucket as a zone file: a comment line with the zone name,
/// then the Lua chunk. No trailing newline.
pub fn render_zone(zone: ZoneId, bucket: &ZoneBucket, options: &FormatOptions) -> ConvertResult<ZoneFile> {
    let name = zone_name(zone).ok_or(OutputError::MissingZoneName(zone))?;
    let contents = format!("-- {}{}{}", name, options.eol, format(&bucket.to_lua(), options));
    Ok(ZoneFile {
        zone,
        name,
        monsters: bucket.len(),
        contents,
    })
}

/// Convert parsed records into rendered zone files.
pub fn convert_records(records: &[RawMonster], options: &FormatOptions) -> ConvertResult<Conversion> {
    let normalized = normalize_all(records)?;
    let grouping = group_by_zone(normalized)?;

    for zone in &grouping.ignored {
        log_warning(format!("Ignoring invalid zone [{}]", zone));
    }

    let mut files = Vec::with_capacity(grouping.zones.len());
    for (&zone, bucket) in &grouping.zones {
        let file = render_zone(zone, bucket, options)?;
        log_success_indent(format!("Converted {} ({} monsters)", file.name, file.monsters), 1);
        files.push(file);
    }

    Ok(Conversion {
        files,
        ignored: grouping.ignored,
    })
}

/// Convert an input file and write one Lua file per zone.
///
/// The output directory is removed and recreated before anything is
/// written, so a successful run leaves exactly the current zone files.
pub async fn convert_file(input: &Path, options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    log_info(format!("Converting {}...", input.display()));
    let records = parse_file(input).await?;
    if records.is_empty() {
        log_warning("Input contains no monster records");
    } else {
        log_success(format!("Read {} records", records.len()));
    }

    let conversion = convert_records(&records, &options.format)?;

    let dir = output_dir(&options.output_root, input)?;
    prepare_dir(&dir).await?;

    log_info("Saving Lua files...");
    let files = write_zone_files(
        &dir,
        conversion.files.iter().map(|f| (f.zone, f.contents.as_str())),
    )
    .await?;
    log_success("Conversion complete!");

    Ok(ConvertSummary {
        records: records.len(),
        output_dir: dir,
        files,
        ignored: conversion.ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::lua::{Indent, QuoteStyle};
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<RawMonster> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.output_root, PathBuf::from("output"));
        assert_eq!(opts.format.indent, Indent::Spaces(2));
        assert_eq!(opts.format.quote, QuoteStyle::Single);
    }

    #[test]
    fn test_convert_single_record() {
        let input = records(json!([{
            "id": 1,
            "zone": "Valkurm Dunes",
            "name": "Giant Funguar",
            "is_aggressive": 1,
            "drops": "Funguar Spore, *, Leaf",
            "family": "Funguar",
            "job": null
        }]));

        let conversion = convert_records(&input, &FormatOptions::default()).unwrap();
        assert_eq!(conversion.files.len(), 1);

        let file = &conversion.files[0];
        assert_eq!(file.zone, ZoneId(103));
        assert!(file.contents.starts_with("-- Valkurm Dunes\nreturn {\n  ['Giant Funguar'] = {\n"));
        assert!(file.contents.contains("    agro = 1,\n"));
        assert!(file.contents.contains("    drops = {\n      'Funguar Spore',\n      'Leaf',\n    },\n"));
        assert!(file.contents.contains("    family = 'Funguar',\n"));
        assert!(!file.contents.contains("job"));
        assert!(file.contents.ends_with("\n}"));
    }

    #[test]
    fn test_zones_are_ordered_by_id() {
        let input = records(json!([
            { "zone": "Valkurm Dunes", "name": "Bogy" },
            { "zone": "West Ronfaure", "name": "Forest Hare" },
            { "zone": "Unknown", "name": "Wandering Ghost" }
        ]));

        let conversion = convert_records(&input, &FormatOptions::default()).unwrap();
        let zones: Vec<ZoneId> = conversion.files.iter().map(|f| f.zone).collect();
        assert_eq!(zones, vec![ZoneId(100), ZoneId(103)]);
        assert_eq!(conversion.ignored, vec!["Unknown"]);
    }

    #[test]
    fn test_first_error_aborts() {
        let input = records(json!([
            { "zone": "Valkurm Dunes", "name": "Bogy", "family": "not-a-real-family" },
            { "zone": "Nowhere Land", "name": "Forest Hare" }
        ]));

        let err = convert_records(&input, &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Normalize(_)));
    }

    #[test]
    fn test_unknown_zone_aborts() {
        let input = records(json!([{ "zone": "Nowhere Land", "name": "Forest Hare" }]));
        let err = convert_records(&input, &FormatOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Nowhere Land"));
    }

    #[test]
    fn test_normalize_all_keeps_source_identity() {
        let input = records(json!([{ "id": 5, "zone": "Valkurm Dunes", "name": "Bogy" }]));
        let normalized = normalize_all(&input).unwrap();
        assert_eq!(normalized[0].id, Some(5));
        assert_eq!(normalized[0].zone, "Valkurm Dunes");
    }

    #[test]
    fn test_render_zone_compact() {
        let mut bucket = ZoneBucket::new();
        bucket.insert("Bogy", Default::default());
        let options = FormatOptions {
            indent: Indent::None,
            ..Default::default()
        };

        let file = render_zone(ZoneId(103), &bucket, &options).unwrap();
        assert!(file.contents.starts_with("-- Valkurm Dunes\nreturn{Bogy={agro=0,"));
    }

    #[test]
    fn test_render_unnamed_zone_fails() {
        let err = render_zone(ZoneId(9999), &ZoneBucket::new(), &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Output(OutputError::MissingZoneName(ZoneId(9999)))));
    }

    #[tokio::test]
    async fn test_convert_file_writes_zone_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("monsters.json");
        std::fs::write(
            &input,
            r#"[{ "zone": "Valkurm Dunes", "name": "Bogy", "level_min": 40, "level_max": 45 }]"#,
        )
        .unwrap();

        let options = ConvertOptions {
            output_root: dir.path().join("out"),
            ..Default::default()
        };
        let summary = convert_file(&input, &options).await.unwrap();

        assert_eq!(summary.records, 1);
        assert_eq!(summary.output_dir, dir.path().join("out/monsters"));
        assert_eq!(summary.files, vec![dir.path().join("out/monsters/103.lua")]);
        let text = std::fs::read_to_string(&summary.files[0]).unwrap();
        assert!(text.contains("level_min = 40,"));
    }
}
