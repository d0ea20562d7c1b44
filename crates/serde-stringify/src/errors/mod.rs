use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringifyError {
    #[error("cannot parse {type_name} from {text:?}: {message}")]
    Parse {
        type_name: &'static str,
        text: String,
        message: String,
    },

    #[error("expected a JSON string, found {found}")]
    NotAString { found: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StringifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_names_type_and_input() {
        let err = StringifyError::Parse {
            type_name: "u32",
            text: "abc".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("u32"));
        assert!(msg.contains("\"abc\""));
        assert!(msg.contains("invalid digit"));
    }

    #[test]
    fn not_a_string_display_names_token_kind() {
        let err = StringifyError::NotAString { found: "number" };
        assert_eq!(err.to_string(), "expected a JSON string, found number");
    }

    #[test]
    fn json_errors_convert_via_from() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StringifyError::from(source);
        assert!(matches!(err, StringifyError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
