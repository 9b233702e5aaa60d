use crate::commands::{CmdMessage, CmdResult};
use crate::database::NeoDatabase;
use crate::error::Result;
use crate::filters::{create_filters, Criteria};
use crate::query::limit;
use tracing::debug;

/// Run a query and collect at most `max_results` matches.
///
/// Invalid criteria fail before any approach is examined. Results are only
/// collected after truncation.
pub fn run<'db>(
    db: &'db NeoDatabase,
    criteria: &Criteria,
    max_results: Option<usize>,
) -> Result<CmdResult<'db>> {
    let filters = create_filters(criteria)?;
    debug!(filters = filters.len(), limit = ?max_results, "running query");

    let approaches = limit(db.query(&filters), max_results).collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default().with_approaches(approaches);
    if result.approaches.is_empty() {
        result.add_message(CmdMessage::info(
            "No close approaches match the given criteria.",
        ));
    }
    Ok(result)
}
