//! Request payloads and their validation.
//!
//! Field-level rules are declared with `validator` derives; cross-field rules
//! are checked by hand. Either way every violation ends up as a
//! [`FieldError`] with a camelCase path, and a request is rejected with the
//! full, path-sorted list.

pub mod game;

use validator::ValidationErrors;

use crate::error::{AppError, FieldError};

pub use game::{parse_game_id, AddGameDto, PlayersDto, UpdateGameDto};

/// Collect field violations reported by `validator` under `prefix`.
pub(crate) fn collect_field_errors(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<FieldError>,
) {
    for (field, violations) in errors.field_errors() {
        let field = camel_case(&field.to_string());
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field,
        };
        for violation in violations.iter() {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value ({})", violation.code));
            out.push(FieldError::new(path.clone(), message));
        }
    }
}

/// `Ok` when nothing was collected, otherwise a validation error with the
/// violations sorted by path.
pub(crate) fn into_result(mut errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        return Ok(());
    }
    errors.sort_by(|a, b| a.path.cmp(&b.path));
    Err(AppError::Validation(errors))
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_fields_become_camel_case() {
        assert_eq!(camel_case("release_year"), "releaseYear");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("base_game_id"), "baseGameId");
    }

    #[test]
    fn errors_are_sorted_by_path() {
        let err = into_result(vec![
            FieldError::new("publisher", "Publisher is required"),
            FieldError::new("name", "Name is required"),
        ])
        .unwrap_err();

        match err {
            AppError::Validation(errors) => {
                let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, vec!["name", "publisher"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_list_is_ok() {
        assert!(into_result(vec![]).is_ok());
    }
}
