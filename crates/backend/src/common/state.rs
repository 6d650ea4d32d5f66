use std::sync::Arc;

use crate::db::Repository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    /// Keep the 302-on-duplicate and 500-on-empty-count responses older
    /// clients expect. When off, 409 and `{"length":0}` are used.
    pub legacy_status_codes: bool,
}

impl AppState {
    pub fn new(repo: Repository, legacy_status_codes: bool) -> Self {
        Self {
            repo: Arc::new(repo),
            legacy_status_codes,
        }
    }
}
