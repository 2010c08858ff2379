use std::{
    fs::{self, File},
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use walkdir::WalkDir;

/// Lists regular files directly inside `dir_path` whose file name satisfies `keep`.
///
/// A missing directory yields an empty list. Results are sorted.
pub fn list_files<P, F>(dir_path: P, keep: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: Fn(&str) -> bool,
{
    let mut files = vec![];
    let dir_path = dir_path.as_ref();
    if !dir_path.exists() {
        return Ok(files);
    }

    for entry in WalkDir::new(dir_path).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if keep(name) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Write atomically — either fully succeeds or fully fails.
pub fn write<P: AsRef<Path>>(file_path: P, contents: impl AsRef<[u8]>) -> Result<()> {
    let file_path = file_path.as_ref();
    let parent_dir = file_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("File path has no parent directory"))?;

    let temp_path = create_temp_file_path(parent_dir)?;

    fs::write(&temp_path, contents.as_ref())
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    fs::rename(&temp_path, file_path).with_context(|| {
        format!(
            "Failed to move temporary file to final location: {}",
            file_path.display()
        )
    })?;

    Ok(())
}

/// Write atomically, creating all leading directories.
pub fn create_dirs_then_write<P: AsRef<Path>>(
    file_path: P,
    contents: impl AsRef<[u8]>,
) -> Result<()> {
    let file_path = file_path.as_ref();

    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create {}", parent_dir.display()))?;
    }

    write(file_path, contents)
}

/// Serializes `value` as JSON indented by a single space and writes it atomically.
pub fn write_json_pretty<P: AsRef<Path>, T: Serialize + ?Sized>(
    file_path: P,
    value: &T,
) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    create_dirs_then_write(file_path, buf)
}

/// Reads and parses a JSON file, returning `None` when it does not exist.
pub fn read_json_file_opt<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let value: T = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(value))
}

/// Removes a file, treating an already missing file as success.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("Failed to remove {}", path.display())),
    }
}

fn create_temp_file_path(dir: &Path) -> Result<PathBuf> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the unix epoch")?
        .as_nanos();

    let process_id = std::process::id();
    let temp_name = format!(".tmp_{}__{}", process_id, timestamp);

    Ok(dir.join(temp_name))
}
