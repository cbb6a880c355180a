use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{ResultsError, ResultsResult};

use super::SampleSet;

/// Run directories created by the load generator live under this name.
const LOG_DIR: &str = "logs";
/// Result log filename shape: `phout*.log`.
const LOG_PREFIX: &str = "phout";
const LOG_SUFFIX: &str = ".log";

/// Index of the tag field in a tab-separated result record.
const TAG_FIELD: usize = 1;
/// Index of the latency-in-seconds field. Column position is the contract;
/// units are not inferred from magnitude.
const LATENCY_FIELD: usize = 5;
/// A record must reach past the latency field to be usable.
const MIN_FIELDS: usize = 6;

/// Locates the single result log under `<workdir>/logs/*/phout*.log`.
///
/// # Errors
///
/// Returns `ResultsError::MissingLog` when nothing matches,
/// `ResultsError::AmbiguousLog` when several files match, and
/// `ResultsError::Scan` when a directory cannot be listed.
pub fn discover_result_log(workdir: &Path) -> ResultsResult<PathBuf> {
    let root = workdir.join(LOG_DIR);
    let mut matches = Vec::new();

    let runs = match std::fs::read_dir(&root) {
        Ok(runs) => runs,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ResultsError::MissingLog { root });
        }
        Err(err) => {
            return Err(ResultsError::Scan { root, source: err });
        }
    };
    for run in runs {
        let run = run.map_err(|err| ResultsError::Scan {
            root: root.clone(),
            source: err,
        })?;
        let run_path = run.path();
        if !run_path.is_dir() {
            continue;
        }
        collect_logs(&run_path, &mut matches)?;
    }

    match matches.as_slice() {
        [] => Err(ResultsError::MissingLog { root }),
        [only] => Ok(only.clone()),
        found => Err(ResultsError::AmbiguousLog {
            root,
            count: found.len(),
        }),
    }
}

fn collect_logs(run_path: &Path, matches: &mut Vec<PathBuf>) -> ResultsResult<()> {
    let entries = std::fs::read_dir(run_path).map_err(|err| ResultsError::Scan {
        root: run_path.to_path_buf(),
        source: err,
    })?;
    for entry in entries {
        let entry = entry.map_err(|err| ResultsError::Scan {
            root: run_path.to_path_buf(),
            source: err,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(LOG_PREFIX) && name.ends_with(LOG_SUFFIX) {
            matches.push(entry.path());
        }
    }
    Ok(())
}

/// Streams the result log into a [`SampleSet`].
///
/// Parsing is strict: a non-empty line that does not reach the latency
/// field, or whose latency is not decimal text, aborts with the 1-based
/// line number. Fully empty lines are ignored.
///
/// # Errors
///
/// Returns `ResultsError::ReadFailure` on I/O failure and
/// `ResultsError::MissingFields`/`ResultsError::InvalidLatency` for
/// malformed records.
pub fn read_result_log(path: &Path) -> ResultsResult<SampleSet> {
    let file = File::open(path).map_err(|err| ResultsError::ReadFailure {
        path: path.to_path_buf(),
        source: err,
    })?;
    parse_result_log(BufReader::new(file), path)
}

pub(crate) fn parse_result_log<R: BufRead>(mut reader: R, path: &Path) -> ResultsResult<SampleSet> {
    let mut samples = SampleSet::new();
    let mut line = String::new();
    let mut number: u64 = 0;
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|err| ResultsError::ReadFailure {
                path: path.to_path_buf(),
                source: err,
            })?;
        if read == 0 {
            break;
        }
        number = number.saturating_add(1);
        let record = line.trim_end_matches(['\r', '\n']);
        if record.is_empty() {
            continue;
        }
        let (tag, latency) = parse_record(record, number)?;
        samples.push(tag, latency);
    }
    Ok(samples)
}

fn parse_record(record: &str, number: u64) -> ResultsResult<(&str, f64)> {
    let fields: Vec<&str> = record.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(ResultsError::MissingFields {
            line: number,
            found: fields.len(),
        });
    }
    let tag = fields.get(TAG_FIELD).copied().unwrap_or_default();
    let latency_text = fields.get(LATENCY_FIELD).copied().unwrap_or_default();
    let latency = latency_text
        .parse::<f64>()
        .map_err(|err| ResultsError::InvalidLatency {
            line: number,
            value: latency_text.to_owned(),
            source: err,
        })?;
    Ok((tag, latency))
}
