use std::io::BufRead;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_jsonlines::JsonLinesReader;

/// Read every record of a JSONL file, or of stdin when `path` is `-`.
pub fn read_records<T>(path: &Path) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    if path == Path::new("-") {
        let stdin = std::io::stdin();
        return collect(stdin.lock(), "<stdin>");
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    collect(std::io::BufReader::new(file), &path.display().to_string())
}

fn collect<R, T>(reader: R, source: &str) -> anyhow::Result<Vec<T>>
where
    R: BufRead,
    T: DeserializeOwned,
{
    JsonLinesReader::new(reader)
        .read_all::<T>()
        .enumerate()
        .map(|(index, record)| {
            record.with_context(|| format!("{source}: invalid record on line {}", index + 1))
        })
        .collect()
}
