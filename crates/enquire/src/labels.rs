//! Label sources for the CLI: a plain-text file plus `--label` flags.

use std::path::Path;

use eyre::WrapErr;

/// Read one label per line. Surrounding whitespace is trimmed; blank
/// lines and lines starting with `#` are skipped.
pub fn parse_label_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_labels_file(path: &Path) -> eyre::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read labels file {}", path.display()))?;
    let labels = parse_label_lines(&content);
    tracing::info!(path = %path.display(), count = labels.len(), "loaded labels file");
    Ok(labels)
}

/// File labels first (in file order), then `--label` flags.
pub fn collect_labels(file: Option<&Path>, flags: &[String]) -> eyre::Result<Vec<String>> {
    let mut labels = match file {
        Some(path) => load_labels_file(path)?,
        None => Vec::new(),
    };
    labels.extend(flags.iter().cloned());
    Ok(labels)
}
