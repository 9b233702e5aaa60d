use crate::commands::{query, CmdMessage, CmdResult};
use crate::database::NeoDatabase;
use crate::error::{NeoError, Result};
use crate::filters::Criteria;
use crate::write::{write_results, OutputFormat};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Run a query and write the matches to `path`, CSV or JSON by extension.
pub fn run<'db>(
    db: &'db NeoDatabase,
    criteria: &Criteria,
    max_results: Option<usize>,
    path: &Path,
) -> Result<CmdResult<'db>> {
    // Reject an unknown extension before doing any work.
    let format = OutputFormat::from_path(path)?;
    let found = query::run(db, criteria, max_results)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(NeoError::Io)?;
    }
    let file = File::create(path).map_err(NeoError::Io)?;
    let written = write_results(
        found.approaches.iter().copied(),
        format,
        &mut BufWriter::new(file),
    )?;
    info!(rows = written, path = %path.display(), "wrote results");

    let mut result = CmdResult::default()
        .with_approaches(found.approaches)
        .with_written(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Wrote {} close approach{} to {}",
        written,
        if written == 1 { "" } else { "es" },
        path.display()
    )));
    Ok(result)
}
