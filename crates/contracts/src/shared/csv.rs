//! CSV text in the export format: every field double-quoted, embedded
//! quotes doubled, rows joined with a single newline.

/// One quoted CSV field
pub fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Full CSV document from header + data rows
pub fn csv_text(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|field| csv_field(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal parser for a single quoted field, used to check the
    /// escaping round-trips through a standard CSV reading
    fn parse_quoted_field(field: &str) -> String {
        assert!(field.starts_with('"') && field.ends_with('"'));
        field[1..field.len() - 1].replace("\"\"", "\"")
    }

    #[test]
    fn test_plain_fields_are_quoted() {
        assert_eq!(csv_field("Feed purchase"), "\"Feed purchase\"");
    }

    #[test]
    fn test_embedded_quotes_round_trip() {
        let original = "shed \"A\" north";
        let field = csv_field(original);
        assert_eq!(field, "\"shed \"\"A\"\" north\"");
        assert_eq!(parse_quoted_field(&field), original);
    }

    #[test]
    fn test_document_layout() {
        let rows = vec![
            vec!["Date".to_string(), "Amount".to_string()],
            vec!["2024-06-01".to_string(), "150".to_string()],
        ];
        assert_eq!(
            csv_text(&rows),
            "\"Date\",\"Amount\"\n\"2024-06-01\",\"150\""
        );
    }

    #[test]
    fn test_empty_fields_stay_quoted() {
        let rows = vec![vec![String::new(), "x".to_string()]];
        assert_eq!(csv_text(&rows), "\"\",\"x\"");
    }
}
