//! Unit tests for error handling

use super::*;
use std::io;

mod companion_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = CompanionError::from(json_error);

        assert!(matches!(error, CompanionError::Json(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = CompanionError::from(io_error);

        assert!(matches!(error, CompanionError::Io(_)));
    }

    #[test]
    fn test_database_error_conversion() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let db_error = conn.execute("SELECT * FROM missing_table", []).unwrap_err();
        let error = CompanionError::from(db_error);

        assert!(matches!(error, CompanionError::Database(_)));
        assert!(error.to_string().starts_with("Database error"));
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = CompanionError::from(header_error);

        assert!(matches!(error, CompanionError::InvalidHeader(_)));
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let error = CompanionError::from(parse_error);

        assert!(matches!(error, CompanionError::InvalidNumber(_)));
    }

    #[test]
    fn test_domain_error_messages() {
        let error = CompanionError::InvalidScoringField {
            field: "points; DROP".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid scoring field: points; DROP");

        let error = CompanionError::LeagueExists {
            espn_league_id: 123456,
            espn_year: 2024,
        };
        assert_eq!(
            error.to_string(),
            "League 123456 (2024) is already registered"
        );

        let error = CompanionError::EspnAuth { status: 401 };
        assert!(error.to_string().contains("401"));

        let error = CompanionError::LeagueNotFound { id: 7 };
        assert_eq!(error.to_string(), "League not found: 7");
    }

    #[test]
    fn test_error_is_debug() {
        let error = CompanionError::TeamNotFound { team_id: 3 };
        let debug = format!("{:?}", error);
        assert!(debug.contains("TeamNotFound"));
    }

    #[test]
    fn test_missing_field_message() {
        let error = CompanionError::MissingField { field: "espn_s2" };
        assert_eq!(error.to_string(), "espn_s2 is required");
    }

    #[test]
    fn test_user_error_messages() {
        let error = CompanionError::LeagueForbidden { id: 4 };
        assert_eq!(error.to_string(), "League 4 belongs to another user");

        let error = CompanionError::UserExists { username: "sam".into() };
        assert_eq!(error.to_string(), "User sam already exists");

        assert_eq!(
            CompanionError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }
}
