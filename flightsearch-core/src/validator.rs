use crate::clock::{Clock, SystemClock};
use crate::rules::{evaluate, RuleViolation};
use crate::search::{FlightSearchRequest, ValidatedRequest};

/// Validates flight searches and keeps the last one that passed.
///
/// The snapshot is replaced whole on success and left untouched on failure.
/// Callers sharing a validator across threads must hold a lock around
/// [`RequestValidator::validate`].
pub struct RequestValidator<C: Clock = SystemClock> {
    clock: C,
    current: Option<ValidatedRequest>,
}

impl RequestValidator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RequestValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RequestValidator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            current: None,
        }
    }

    /// Accepts or rejects `candidate`, storing it when accepted.
    pub fn validate(&mut self, candidate: &FlightSearchRequest) -> bool {
        self.validate_detailed(candidate).is_ok()
    }

    /// Like [`validate`](Self::validate) but reports the first rule that failed.
    pub fn validate_detailed(
        &mut self,
        candidate: &FlightSearchRequest,
    ) -> Result<&ValidatedRequest, RuleViolation> {
        let today = self.clock.today();
        match evaluate(candidate, today) {
            Ok(validated) => {
                tracing::info!(
                    "Flight search accepted: {} -> {} on {}",
                    validated.departure_airport_code(),
                    validated.destination_airport_code(),
                    validated.departure_date()
                );
                Ok(self.current.insert(validated))
            }
            Err(violation) => {
                tracing::debug!("Flight search rejected at rule {}: {}", violation.rule.number(), violation.reason);
                Err(violation)
            }
        }
    }

    /// The last accepted search, if any.
    pub fn snapshot(&self) -> Option<&ValidatedRequest> {
        self.current.as_ref()
    }

    pub fn departure_date(&self) -> Option<&str> {
        self.current.as_ref().map(ValidatedRequest::departure_date)
    }

    pub fn departure_airport_code(&self) -> Option<&str> {
        self.current.as_ref().map(ValidatedRequest::departure_airport_code)
    }

    pub fn emergency_row_seating(&self) -> Option<bool> {
        self.current.as_ref().map(ValidatedRequest::emergency_row_seating)
    }

    pub fn return_date(&self) -> Option<&str> {
        self.current.as_ref().map(ValidatedRequest::return_date)
    }

    pub fn destination_airport_code(&self) -> Option<&str> {
        self.current.as_ref().map(ValidatedRequest::destination_airport_code)
    }

    pub fn seating_class(&self) -> Option<&str> {
        self.current.as_ref().map(ValidatedRequest::seating_class)
    }

    pub fn adult_passenger_count(&self) -> Option<u32> {
        self.current.as_ref().map(ValidatedRequest::adult_passenger_count)
    }

    pub fn child_passenger_count(&self) -> Option<u32> {
        self.current.as_ref().map(ValidatedRequest::child_passenger_count)
    }

    pub fn infant_passenger_count(&self) -> Option<u32> {
        self.current.as_ref().map(ValidatedRequest::infant_passenger_count)
    }
}
