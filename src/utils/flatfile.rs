use crate::core::library::{LibraryError, LibraryResult};

pub const FIELD_SEPARATOR: char = ',';

// Splits a row into exactly `expected` fields. Fields are not quoted, so any
// extra separator makes the row unreadable.
pub(crate) fn split_record(line: &str, expected: usize) -> LibraryResult<Vec<&str>> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != expected {
        return Err(LibraryError::serialization(
            format!("expected {} fields but found {} in {:?}", expected, fields.len(), line).as_str()));
    }
    Ok(fields)
}

pub(crate) fn parse_number_field(name: &str, value: &str) -> LibraryResult<i64> {
    value.trim().parse::<i64>().map_err(|err| LibraryError::serialization(
        format!("field {} is not a number {:?}: {}", name, value, err).as_str()))
}

// Accepts both `1`/`0` and `true`/`false`.
pub(crate) fn parse_bool_field(name: &str, value: &str) -> LibraryResult<bool> {
    match value.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(LibraryError::serialization(
            format!("field {} is not a boolean {:?}", name, other).as_str())),
    }
}

pub(crate) fn format_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

// Rejects text that would break the row layout when written back.
pub(crate) fn validate_text_field(name: &str, value: &str) -> LibraryResult<()> {
    if value.contains(FIELD_SEPARATOR) || value.contains('\n') || value.contains('\r') {
        return Err(LibraryError::validation(
            format!("{} must not contain '{}' or line breaks", name, FIELD_SEPARATOR).as_str(),
            Some("invalid_field".to_string())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::utils::flatfile::{format_bool, parse_bool_field, parse_number_field, split_record, validate_text_field};

    #[tokio::test]
    async fn test_should_split_record() {
        let fields = split_record("1,Dune,Frank Herbert,Fiction,1", 5).expect("should split");
        assert_eq!(vec!["1", "Dune", "Frank Herbert", "Fiction", "1"], fields);
        assert!(split_record("1,Dune, Part One,Frank Herbert,Fiction,1", 5).is_err());
    }

    #[tokio::test]
    async fn test_should_parse_fields() {
        assert_eq!(42, parse_number_field("id", " 42").expect("number"));
        assert!(parse_number_field("id", "x").is_err());
        assert!(parse_bool_field("available", "1").expect("bool"));
        assert!(!parse_bool_field("available", "false").expect("bool"));
        assert!(parse_bool_field("available", "yes").is_err());
        assert_eq!("1", format_bool(true));
        assert_eq!("0", format_bool(false));
    }

    #[tokio::test]
    async fn test_should_validate_text_field() {
        assert!(validate_text_field("title", "Dune").is_ok());
        assert!(matches!(validate_text_field("title", "Dune, Messiah"), Err(LibraryError::Validation { .. })));
        assert!(validate_text_field("name", "a\nb").is_err());
    }
}
