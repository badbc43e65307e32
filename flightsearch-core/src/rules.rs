use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{is_known_airport, is_known_seating_class};
use crate::date::parse_travel_date;
use crate::search::{FlightSearchRequest, ValidatedRequest};

pub const MIN_PASSENGERS: u64 = 1;
pub const MAX_PASSENGERS: u64 = 9;
pub const MAX_CHILDREN_PER_ADULT: u64 = 2;
pub const MAX_INFANTS_PER_ADULT: u64 = 1;

/// The search rules, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchRule {
    PassengerTotal,
    ChildSeating,
    InfantSeating,
    ChildrenPerAdult,
    InfantsPerAdult,
    DepartureDateFormat,
    DepartureNotInPast,
    ReturnDateFormat,
    ReturnNotBeforeDeparture,
    SeatingClass,
    EmergencyRowClass,
    AirportCodes,
}

impl SearchRule {
    pub const ALL: [SearchRule; 12] = [
        SearchRule::PassengerTotal,
        SearchRule::ChildSeating,
        SearchRule::InfantSeating,
        SearchRule::ChildrenPerAdult,
        SearchRule::InfantsPerAdult,
        SearchRule::DepartureDateFormat,
        SearchRule::DepartureNotInPast,
        SearchRule::ReturnDateFormat,
        SearchRule::ReturnNotBeforeDeparture,
        SearchRule::SeatingClass,
        SearchRule::EmergencyRowClass,
        SearchRule::AirportCodes,
    ];

    /// 1-based position in the evaluation order.
    pub fn number(self) -> u8 {
        match self {
            SearchRule::PassengerTotal => 1,
            SearchRule::ChildSeating => 2,
            SearchRule::InfantSeating => 3,
            SearchRule::ChildrenPerAdult => 4,
            SearchRule::InfantsPerAdult => 5,
            SearchRule::DepartureDateFormat => 6,
            SearchRule::DepartureNotInPast => 7,
            SearchRule::ReturnDateFormat => 8,
            SearchRule::ReturnNotBeforeDeparture => 9,
            SearchRule::SeatingClass => 10,
            SearchRule::EmergencyRowClass => 11,
            SearchRule::AirportCodes => 12,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SearchRule::PassengerTotal => "between 1 and 9 passengers in total",
            SearchRule::ChildSeating => "children cannot sit in emergency rows or first class",
            SearchRule::InfantSeating => "infants cannot sit in emergency rows or business class",
            SearchRule::ChildrenPerAdult => "at most 2 children per adult",
            SearchRule::InfantsPerAdult => "at most 1 infant per adult",
            SearchRule::DepartureDateFormat => "departure date must be a real DD/MM/YYYY date",
            SearchRule::DepartureNotInPast => "departure date cannot be in the past",
            SearchRule::ReturnDateFormat => "return date must be a real DD/MM/YYYY date",
            SearchRule::ReturnNotBeforeDeparture => "return date cannot be before departure",
            SearchRule::SeatingClass => "seating class must be economy, premium economy, business or first",
            SearchRule::EmergencyRowClass => "emergency row seating is only available in economy",
            SearchRule::AirportCodes => "airports must be two different supported codes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rule {} violated: {reason}", .rule.number())]
pub struct RuleViolation {
    pub rule: SearchRule,
    pub reason: String,
}

impl RuleViolation {
    fn new(rule: SearchRule, reason: impl Into<String>) -> Self {
        Self { rule, reason: reason.into() }
    }
}

pub type RuleResult = Result<ValidatedRequest, RuleViolation>;

/// Runs every rule against `request` in order, stopping at the first failure.
///
/// `today` is the date the departure is compared against. Nothing is stored;
/// on success the returned [`ValidatedRequest`] carries the input verbatim.
pub fn evaluate(request: &FlightSearchRequest, today: NaiveDate) -> RuleResult {
    let adults = u64::from(request.adult_passenger_count);
    let children = u64::from(request.child_passenger_count);
    let infants = u64::from(request.infant_passenger_count);
    let emergency_row = request.emergency_row_seating;
    let seating_class = request.seating_class.as_deref();

    let total = request.total_passengers();
    if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&total) {
        return Err(RuleViolation::new(
            SearchRule::PassengerTotal,
            format!("{} passengers requested", total),
        ));
    }

    // An absent seating class is left for the seating class rule.
    if children > 0 && (emergency_row || seating_class == Some("first")) {
        return Err(RuleViolation::new(
            SearchRule::ChildSeating,
            SearchRule::ChildSeating.description(),
        ));
    }

    if infants > 0 && (emergency_row || seating_class == Some("business")) {
        return Err(RuleViolation::new(
            SearchRule::InfantSeating,
            SearchRule::InfantSeating.description(),
        ));
    }

    if children > adults * MAX_CHILDREN_PER_ADULT {
        return Err(RuleViolation::new(
            SearchRule::ChildrenPerAdult,
            format!("{} children for {} adults", children, adults),
        ));
    }

    if infants > adults * MAX_INFANTS_PER_ADULT {
        return Err(RuleViolation::new(
            SearchRule::InfantsPerAdult,
            format!("{} infants for {} adults", infants, adults),
        ));
    }

    let (departure_text, departure) = dated(&request.departure_date).ok_or_else(|| {
        RuleViolation::new(
            SearchRule::DepartureDateFormat,
            format!("unparseable departure date {:?}", request.departure_date),
        )
    })?;

    if departure < today {
        return Err(RuleViolation::new(
            SearchRule::DepartureNotInPast,
            format!("departure {} is before {}", departure, today),
        ));
    }

    let (return_text, return_date) = dated(&request.return_date).ok_or_else(|| {
        RuleViolation::new(
            SearchRule::ReturnDateFormat,
            format!("unparseable return date {:?}", request.return_date),
        )
    })?;

    if return_date < departure {
        return Err(RuleViolation::new(
            SearchRule::ReturnNotBeforeDeparture,
            format!("return {} is before departure {}", return_date, departure),
        ));
    }

    let seating_class = seating_class
        .filter(|class| is_known_seating_class(class))
        .ok_or_else(|| {
            RuleViolation::new(
                SearchRule::SeatingClass,
                format!("unsupported seating class {:?}", request.seating_class),
            )
        })?;

    // Compared as supplied: "Economy" passes the class rule above but not this one.
    if emergency_row && seating_class != "economy" {
        return Err(RuleViolation::new(
            SearchRule::EmergencyRowClass,
            format!("emergency row requested in {}", seating_class),
        ));
    }

    let (origin, destination) = match (
        request.departure_airport_code.as_deref(),
        request.destination_airport_code.as_deref(),
    ) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => {
            return Err(RuleViolation::new(
                SearchRule::AirportCodes,
                "departure and destination airports are required",
            ))
        }
    };

    if !is_known_airport(origin) || !is_known_airport(destination) {
        return Err(RuleViolation::new(
            SearchRule::AirportCodes,
            format!("unsupported route {} -> {}", origin, destination),
        ));
    }

    if origin.to_lowercase() == destination.to_lowercase() {
        return Err(RuleViolation::new(
            SearchRule::AirportCodes,
            format!("departure and destination are both {}", origin),
        ));
    }

    Ok(ValidatedRequest {
        departure_date: departure_text.to_string(),
        departure_airport_code: origin.to_string(),
        emergency_row_seating: emergency_row,
        return_date: return_text.to_string(),
        destination_airport_code: destination.to_string(),
        seating_class: seating_class.to_string(),
        adult_passenger_count: request.adult_passenger_count,
        child_passenger_count: request.child_passenger_count,
        infant_passenger_count: request.infant_passenger_count,
    })
}

fn dated(field: &Option<String>) -> Option<(&str, NaiveDate)> {
    let text = field.as_deref()?;
    parse_travel_date(Some(text)).map(|date| (text, date))
}
