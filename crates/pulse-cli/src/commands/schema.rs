use std::path::Path;

use pulse_schema::{SchemaError, SchemaRegistry};
use serde_json::{Value, json};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::jsonl::read_records;
use crate::output::output;

/// Handle `pulse schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    if args.list {
        return output(&registry.list(), flags.format);
    }

    let Some(name) = args.name.as_deref() else {
        anyhow::bail!("a schema name is required (see `pulse schema --list`)");
    };
    let Some(schema) = registry.get(name) else {
        anyhow::bail!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        );
    };

    match (&args.validate, flags.format) {
        (Some(path), _) => validate_file(&registry, name, path, flags),
        (None, OutputFormat::Json) => {
            println!("{}", registry.export(name)?);
            Ok(())
        }
        (None, format) => output(schema, format),
    }
}

/// One report row per record; fails if any record is invalid.
fn validate_file(
    registry: &SchemaRegistry,
    name: &str,
    path: &Path,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records: Vec<Value> = read_records(path)?;
    let mut invalid = 0usize;
    let mut report = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let errors = match registry.validate(name, record) {
            Ok(()) => Vec::new(),
            Err(SchemaError::ValidationFailed { errors }) => errors,
            Err(other) => return Err(other.into()),
        };
        if !errors.is_empty() {
            invalid += 1;
        }
        report.push(json!({
            "line": index + 1,
            "valid": errors.is_empty(),
            "errors": errors,
        }));
    }

    output(&report, flags.format)?;
    if invalid > 0 {
        anyhow::bail!("{invalid} of {} records failed '{name}' validation", records.len());
    }
    Ok(())
}
