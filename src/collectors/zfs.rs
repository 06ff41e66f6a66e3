use crate::models::dataset::{is_byte_property, DatasetMap, PropValue};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::Command;
use tracing::{debug, trace, warn};

/// Arguments for `zfs get`: filesystems and volumes, no header, parsable
/// byte counts, tab-separated.
pub const ZFS_GET_ARGS: &[&str] = &[
    "get", "-t", "filesystem,volume", "-Hp",
    "name,quota,used,avail,mountpoint,type",
];

/// Run `zfs get` and return its stdout as lines.
///
/// A non-zero exit status is only logged; whatever the command printed is
/// still returned. Failing to spawn the binary is an error.
pub fn read_zfs_lines(zfs_bin: &str) -> Result<Vec<String>> {
    debug!("running {} {}", zfs_bin, ZFS_GET_ARGS.join(" "));
    let out = Command::new(zfs_bin)
        .args(ZFS_GET_ARGS)
        .output()
        .with_context(|| format!("failed to run `{} get`", zfs_bin))?;

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        warn!(status = %out.status, stderr = %stderr.trim(), "zfs get exited unsuccessfully");
    }

    Ok(split_output(&String::from_utf8_lossy(&out.stdout)))
}

/// Read previously captured `zfs get -Hp` output from a file, or stdin for `-`.
pub fn read_lines_from(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        return read_lines(std::io::stdin().lock())
            .context("failed to read zfs output from stdin");
    }
    let file = File::open(path)
        .with_context(|| format!("failed to read zfs output from {}", path.display()))?;
    read_lines(file)
        .with_context(|| format!("failed to read zfs output from {}", path.display()))
}

/// Read captured output from any reader and split it into lines.
pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(split_output(&text))
}

/// Trim trailing whitespace and split on newlines. Empty text yields `[""]`.
pub fn split_output(text: &str) -> Vec<String> {
    text.trim_end().split('\n').map(str::to_string).collect()
}

/// Build the dataset map from `zfs get -H` lines.
///
/// Lines without exactly four tab-separated fields are dropped. Byte
/// properties that do not parse are stored as 0.
pub fn parse_zfs_lines<S: AsRef<str>>(lines: &[S]) -> DatasetMap {
    let mut map = DatasetMap::new();
    let mut skipped = 0usize;

    for line in lines {
        let line = line.as_ref();
        let f: Vec<&str> = line.split('\t').collect();
        if f.len() != 4 {
            trace!(line, "skipping malformed zfs line");
            skipped += 1;
            continue;
        }
        let (dataset, property, value) = (f[0], f[1], f[2]);

        let value = if is_byte_property(property) {
            PropValue::Bytes(parse_bytes(value))
        } else {
            PropValue::Text(value.to_string())
        };
        map.entry_mut(dataset).insert(property, value);
    }

    debug!(datasets = map.len(), skipped, "parsed zfs output");
    map
}

/// Parse a `-p` byte count; anything that is not a non-negative integer is 0.
pub fn parse_bytes(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}
