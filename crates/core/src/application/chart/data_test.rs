//! Unit tests for chart query parsing

#[cfg(test)]
mod tests {
    use super::super::data::parse_query;
    use super::super::*;

    fn query(start: Option<&str>, end: Option<&str>) -> ChartQuery {
        ChartQuery {
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    #[test]
    fn test_parse_open_bounds() {
        let range = parse_query(&query(None, None)).unwrap();
        assert!(range.start.is_none());
        assert!(range.end.is_none());

        let range = parse_query(&query(Some("2024-01-01"), None)).unwrap();
        assert_eq!(range.start.unwrap().to_string(), "2024-01-01");
        assert!(range.end.is_none());
    }

    #[test]
    fn test_parse_both_bounds() {
        let range = parse_query(&query(Some("2024-01-01"), Some("2024-01-31"))).unwrap();
        assert_eq!(range.start.unwrap().to_string(), "2024-01-01");
        assert_eq!(range.end.unwrap().to_string(), "2024-01-31");
    }

    #[test]
    fn test_invalid_start_date_names_field() {
        let err = parse_query(&query(Some("not-a-date"), None)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid startDate format");
    }

    #[test]
    fn test_invalid_end_date_names_field() {
        let err = parse_query(&query(Some("2024-01-01"), Some("01/31/2024"))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid endDate format");
    }

    #[test]
    fn test_rejects_datetime_strings() {
        // Only bare dates are accepted on the wire
        let err = parse_query(&query(Some("2024-01-01T00:00:00Z"), None)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid startDate format");
    }

    #[test]
    fn test_inverted_range_is_not_a_parse_error() {
        let range = parse_query(&query(Some("2024-02-01"), Some("2024-01-01"))).unwrap();
        assert!(range.start.unwrap() > range.end.unwrap());
    }
}
