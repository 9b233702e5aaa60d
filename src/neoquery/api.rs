//! # API Facade
//!
//! [`NeoApi`] is the single entry point UI clients use. It owns the linked
//! [`NeoDatabase`] and dispatches to the command layer; it does no printing
//! and holds no business logic of its own.
//!
//! Results borrow from the database, so a `CmdResult` lives no longer than
//! the `NeoApi` that produced it.

use crate::commands;
use crate::database::NeoDatabase;
use crate::error::Result;
use crate::extract::{load_approaches, load_neos};
use crate::filters::Criteria;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NeoSelector};

pub struct NeoApi {
    db: NeoDatabase,
}

impl NeoApi {
    pub fn new(db: NeoDatabase) -> Self {
        Self { db }
    }

    /// Load both data files and link them.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(neo_file: P, cad_file: Q) -> Result<Self> {
        let neos = load_neos(neo_file)?;
        let approaches = load_approaches(cad_file)?;
        Ok(Self::new(NeoDatabase::new(neos, approaches)))
    }

    pub fn database(&self) -> &NeoDatabase {
        &self.db
    }

    pub fn inspect(&self, selector: &NeoSelector, with_approaches: bool) -> Result<CmdResult<'_>> {
        commands::inspect::run(&self.db, selector, with_approaches)
    }

    pub fn query(&self, criteria: &Criteria, limit: Option<usize>) -> Result<CmdResult<'_>> {
        commands::query::run(&self.db, criteria, limit)
    }

    pub fn export(
        &self,
        criteria: &Criteria,
        limit: Option<usize>,
        path: &Path,
    ) -> Result<CmdResult<'_>> {
        commands::export::run(&self.db, criteria, limit, path)
    }
}
