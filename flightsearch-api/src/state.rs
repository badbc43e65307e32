use std::sync::{Arc, Mutex, MutexGuard};

use flightsearch_core::{Clock, RequestValidator};

use crate::error::AppError;

pub type SearchValidator = RequestValidator<Box<dyn Clock>>;

/// Shared handler state. The mutex spans evaluation and commit so concurrent
/// searches never interleave.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<Mutex<SearchValidator>>,
}

impl AppState {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            validator: Arc::new(Mutex::new(RequestValidator::with_clock(clock))),
        }
    }

    pub fn lock_validator(&self) -> Result<MutexGuard<'_, SearchValidator>, AppError> {
        self.validator
            .lock()
            .map_err(|_| AppError::InternalServerError("validator lock poisoned".to_string()))
    }
}
