use serde::{Deserialize, Serialize};

/// A candidate flight search as supplied by the caller.
///
/// Text fields are optional so that missing input reaches the rule checks
/// instead of failing earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSearchRequest {
    pub departure_date: Option<String>, // DD/MM/YYYY
    pub departure_airport_code: Option<String>,
    pub emergency_row_seating: bool,
    pub return_date: Option<String>, // DD/MM/YYYY
    pub destination_airport_code: Option<String>,
    pub seating_class: Option<String>,
    pub adult_passenger_count: u32,
    pub child_passenger_count: u32,
    pub infant_passenger_count: u32,
}

impl FlightSearchRequest {
    pub fn total_passengers(&self) -> u64 {
        u64::from(self.adult_passenger_count)
            + u64::from(self.child_passenger_count)
            + u64::from(self.infant_passenger_count)
    }
}

/// A search that passed every rule. Values are kept exactly as supplied.
///
/// Only produced by [`crate::rules::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRequest {
    pub(crate) departure_date: String,
    pub(crate) departure_airport_code: String,
    pub(crate) emergency_row_seating: bool,
    pub(crate) return_date: String,
    pub(crate) destination_airport_code: String,
    pub(crate) seating_class: String,
    pub(crate) adult_passenger_count: u32,
    pub(crate) child_passenger_count: u32,
    pub(crate) infant_passenger_count: u32,
}

impl ValidatedRequest {
    pub fn departure_date(&self) -> &str {
        &self.departure_date
    }

    pub fn departure_airport_code(&self) -> &str {
        &self.departure_airport_code
    }

    pub fn emergency_row_seating(&self) -> bool {
        self.emergency_row_seating
    }

    pub fn return_date(&self) -> &str {
        &self.return_date
    }

    pub fn destination_airport_code(&self) -> &str {
        &self.destination_airport_code
    }

    pub fn seating_class(&self) -> &str {
        &self.seating_class
    }

    pub fn adult_passenger_count(&self) -> u32 {
        self.adult_passenger_count
    }

    pub fn child_passenger_count(&self) -> u32 {
        self.child_passenger_count
    }

    pub fn infant_passenger_count(&self) -> u32 {
        self.infant_passenger_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"
            {
                "departure_date": "23/11/2030",
                "departure_airport_code": "mel",
                "return_date": "30/11/2030",
                "destination_airport_code": "syd",
                "seating_class": "economy",
                "adult_passenger_count": 2,
                "child_passenger_count": 1
            }
        "#;
        let req: FlightSearchRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(req.departure_airport_code.as_deref(), Some("mel"));
        assert!(!req.emergency_row_seating);
        assert_eq!(req.infant_passenger_count, 0);
        assert_eq!(req.total_passengers(), 3);
    }

    #[test]
    fn test_missing_text_fields_are_none() {
        let req: FlightSearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, FlightSearchRequest::default());
        assert!(req.seating_class.is_none());
    }

    #[test]
    fn test_total_passengers_does_not_overflow() {
        let req = FlightSearchRequest {
            adult_passenger_count: u32::MAX,
            child_passenger_count: u32::MAX,
            infant_passenger_count: u32::MAX,
            ..Default::default()
        };
        assert_eq!(req.total_passengers(), 3 * u64::from(u32::MAX));
    }
}
