//! Teardown handle returned alongside a freshly opened database

use std::sync::Arc;

use nsdb_core::Result;

use crate::database::Database;

/// Closes the database it was created for
///
/// Consuming `run` means one handle can close at most once. Closing is
/// idempotent anyway, so calling [`Database::close`] directly as well is
/// harmless.
#[derive(Debug)]
#[must_use = "dropping a Teardown does not close the database; call run()"]
pub struct Teardown {
    db: Arc<Database>,
}

impl Teardown {
    pub(crate) fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// The database this handle will close
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Save, sync and close the backing file, then empty the store
    pub fn run(self) -> Result<()> {
        self.db.close()
    }
}
