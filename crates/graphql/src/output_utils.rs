use libgraphql_validation::ValidationError;
use std::path::Path;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Render a validation error as `path:line:col: message`, one line per node
/// the error points at (or a single `path: message` line if it points at
/// none).
pub(crate) fn format_validation_error(
    file_path: &Path,
    error: &ValidationError<'_>,
) -> Vec<String> {
    let locations = error.locations();
    if locations.is_empty() {
        return vec![format!("{}: {}", file_path.display(), error.message())];
    }
    locations
        .iter()
        .map(|pos| format!("{}:{pos}: {}", file_path.display(), error.message()))
        .collect()
}

pub(crate) fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libgraphql_validation::Document;

    #[test]
    fn errors_are_prefixed_with_path_and_position() {
        let doc = Document::parse_executable("{\n  a\n}").expect("parse error");
        let ast_field = doc.operations()
            .next()
            .expect("no operation found")
            .selection_set
            .selections[0]
            .as_node();
        let error = ValidationError::new("Bad field.", vec![ast_field]);

        assert_eq!(
            format_validation_error(Path::new("q.graphql"), &error),
            vec!["q.graphql:2:3: Bad field.".to_string()],
        );
    }

    #[test]
    fn errors_without_nodes_use_the_path_alone() {
        let error = ValidationError::new("Too many errors.", vec![]);

        assert_eq!(
            format_validation_error(Path::new("q.graphql"), &error),
            vec!["q.graphql: Too many errors.".to_string()],
        );
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "file", "files"), "1 file");
        assert_eq!(pluralize(0, "file", "files"), "0 files");
    }
}
