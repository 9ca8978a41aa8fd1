//! Input validation for search and entry forms
//!
//! Lengths are counted in characters, not bytes.

use chrono::NaiveDate;

use super::types::{CreateEntryRequest, SearchQuery, DATE_FORMAT, MAX_BODY_LEN, MAX_TITLE_LEN};
use crate::error::ValidationError;

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

/// Parse a dropdown value. Empty means "all dates".
pub fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::InvalidDate(s.to_string())),
    }
}

/// Build a [`SearchQuery`] from raw request parameters.
pub fn validate_search(
    query: Option<&str>,
    date: Option<&str>,
    max_query_len: usize,
) -> Result<SearchQuery, ValidationError> {
    let query = match query {
        Some(q) => {
            check_length("query", q, max_query_len)?;
            Some(q.to_string())
        }
        None => None,
    };

    Ok(SearchQuery {
        query,
        date: parse_date(date)?,
    })
}

pub fn validate_entry(request: &CreateEntryRequest) -> Result<(), ValidationError> {
    check_length("title", &request.title, MAX_TITLE_LEN)?;
    check_length("body", &request.body, MAX_BODY_LEN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_at_limit_is_accepted() {
        let q = "a".repeat(100);
        let search = validate_search(Some(&q), None, 100).unwrap();
        assert_eq!(search.query.as_deref(), Some(q.as_str()));
    }

    #[test]
    fn test_query_over_limit_is_rejected() {
        let q = "a".repeat(101);
        let err = validate_search(Some(&q), None, 100).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "query",
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn test_query_length_counts_characters() {
        // 100 Cyrillic letters are 200 bytes
        let q = "я".repeat(100);
        assert!(validate_search(Some(&q), None, 100).is_ok());
    }

    #[test]
    fn test_missing_and_empty_date() {
        assert_eq!(parse_date(None).unwrap(), None);
        assert_eq!(parse_date(Some("")).unwrap(), None);
    }

    #[test]
    fn test_valid_date() {
        let date = parse_date(Some("2024-03-15")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_invalid_date() {
        let err = parse_date(Some("15.03.2024")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("15.03.2024".to_string()));
    }

    #[test]
    fn test_entry_lengths() {
        let ok = CreateEntryRequest {
            title: "t".repeat(200),
            body: "b".repeat(1000),
            date: None,
        };
        assert!(validate_entry(&ok).is_ok());

        let long_title = CreateEntryRequest {
            title: "t".repeat(201),
            ..ok.clone()
        };
        assert!(matches!(
            validate_entry(&long_title),
            Err(ValidationError::TooLong { field: "title", .. })
        ));

        let long_body = CreateEntryRequest {
            body: "b".repeat(1001),
            ..ok
        };
        assert!(matches!(
            validate_entry(&long_body),
            Err(ValidationError::TooLong { field: "body", .. })
        ));
    }

    #[test]
    fn test_empty_title_and_body_are_allowed() {
        let request = CreateEntryRequest {
            title: String::new(),
            body: String::new(),
            date: None,
        };
        assert!(validate_entry(&request).is_ok());
    }
}
