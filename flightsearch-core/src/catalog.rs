// ============================================================================
// Fixed Search Catalogs
// ============================================================================

/// Airports served by the search, IATA codes in lowercase.
pub const AIRPORT_CODES: [&str; 7] = ["syd", "mel", "lax", "cdg", "del", "pvg", "doh"];

/// Cabin classes in ascending order of service.
pub const SEATING_CLASSES: [&str; 4] = ["economy", "premium economy", "business", "first"];

/// Membership check for an airport code, ignoring case.
pub fn is_known_airport(code: &str) -> bool {
    let code = code.to_lowercase();
    AIRPORT_CODES.contains(&code.as_str())
}

/// Membership check for a seating class, ignoring case.
pub fn is_known_seating_class(class: &str) -> bool {
    let class = class.to_lowercase();
    SEATING_CLASSES.contains(&class.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_lookup_ignores_case() {
        assert!(is_known_airport("mel"));
        assert!(is_known_airport("MEL"));
        assert!(is_known_airport("Doh"));
        assert!(!is_known_airport("xyz"));
        assert!(!is_known_airport(""));
        assert!(!is_known_airport(" syd"));
    }

    #[test]
    fn test_seating_class_lookup() {
        assert!(is_known_seating_class("economy"));
        assert!(is_known_seating_class("Premium Economy"));
        assert!(is_known_seating_class("FIRST"));
        assert!(!is_known_seating_class("luxury"));
        assert!(!is_known_seating_class("premium-economy"));
    }
}
