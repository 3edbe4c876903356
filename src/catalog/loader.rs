//! CSV parsing for the catalog resource.
//!
//! The source format is fixed: a header row `Item_name,Genres,Score,Type`
//! followed by one record per line. Fields may be double-quoted; a quote
//! inside a quoted field is escaped by doubling (`""`). Embedded newlines
//! inside fields are not part of the format.

use crate::error::LoadError;

use super::Item;

/// Header the catalog resource is required to carry, in column order.
pub const EXPECTED_HEADER: [&str; 4] = ["Item_name", "Genres", "Score", "Type"];

/// Parses the full CSV text into catalog rows.
pub fn parse_csv(text: &str) -> Result<Vec<Item>, LoadError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let header_fields = split_record(header, 1)?;
    if header_fields != EXPECTED_HEADER {
        return Err(LoadError::BadHeader {
            expected: EXPECTED_HEADER.join(","),
            found: header_fields.join(","),
        });
    }

    let mut items = Vec::new();
    for (idx, line) in lines {
        // 1-based line numbers in errors
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(line, line_no)?;
        if fields.len() != EXPECTED_HEADER.len() {
            return Err(LoadError::ColumnCount {
                line: line_no,
                expected: EXPECTED_HEADER.len(),
                found: fields.len(),
            });
        }

        items.push(Item {
            name: fields[0].clone(),
            genre: non_empty(&fields[1]),
            score: parse_score(&fields[2], line_no)?,
            media_type: non_empty(&fields[3]),
        });
    }

    Ok(items)
}

/// An empty score cell is allowed and yields no score; a non-empty cell
/// must parse as a finite number.
fn parse_score(field: &str, line: usize) -> Result<Option<f64>, LoadError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(Some(score)),
        _ => Err(LoadError::BadScore {
            line,
            value: trimmed.to_string(),
        }),
    }
}

fn non_empty(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Splits one CSV record into fields, honoring double-quoted fields and
/// doubled-quote escapes.
fn split_record(line: &str, line_no: usize) -> Result<Vec<String>, LoadError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                // A doubled quote inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(LoadError::UnterminatedQuote { line: line_no });
    }

    fields.push(current);
    Ok(fields)
}
