use ariadne::{Color, Label, Report, ReportKind, Source};
use ferry::FerryError;

/// Format a FerryError with fancy terminal output using Ariadne
pub fn format_error(error: &FerryError) -> String {
    match error {
        FerryError::Parse(details) | FerryError::Semantic(details) => {
            let mut output = Vec::new();

            let error_type = match error {
                FerryError::Parse(_) => "Parse error",
                _ => "Semantic error",
            };

            let puzzle_line = if details.span.line >= details.puzzle_start_line {
                details.span.line - details.puzzle_start_line + 1
            } else {
                details.span.line
            };

            let enhanced_message = format!(
                "{}: {} (in puzzle '{}' at line {}, file {}:{})",
                error_type,
                details.message,
                details.puzzle_name,
                puzzle_line,
                details.source_id,
                details.span.line
            );

            let mut report =
                Report::build(ReportKind::Error, &details.source_id, details.span.start)
                    .with_message(enhanced_message)
                    .with_label(
                        Label::new((&details.source_id, details.span.start..details.span.end))
                            .with_message("")
                            .with_color(Color::Red),
                    );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        FerryError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        FerryError::MultipleErrors(errors) => {
            let mut result = String::from("Multiple errors occurred:\n\n");
            for error in errors {
                result.push_str(&format_error(error));
                result.push_str("\n\n");
            }
            result
        }
        other => other.to_string(),
    }
}
