use crate::commands::{CmdMessage, CmdResult, NeoSelector};
use crate::database::NeoDatabase;
use crate::error::Result;

pub fn run<'db>(
    db: &'db NeoDatabase,
    selector: &NeoSelector,
    with_approaches: bool,
) -> Result<CmdResult<'db>> {
    let neo = match selector {
        NeoSelector::Designation(d) => db.get_neo_by_designation(d),
        NeoSelector::Name(n) => db.get_neo_by_name(n),
    };

    let Some(neo) = neo else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "No near-Earth object with {}.",
            selector
        )));
        return Ok(result);
    };

    let mut result = CmdResult::default().with_neo(neo);
    if with_approaches {
        result = result.with_approaches(db.approaches_of(neo).collect());
        if result.approaches.is_empty() {
            result.add_message(CmdMessage::info("No recorded close approaches."));
        }
    }
    Ok(result)
}
