//! Column resolution for question tables.
//!
//! A [`Schema`] is resolved once from the header row. Building one is the
//! validation boundary: a table without `question` and `correct` columns is
//! rejected here and never reaches the deck builder.

use crate::error::{Error, Result};
use crate::types::{Record, Table, TableRow};

/// Name of the question column.
pub const QUESTION_COLUMN: &str = "question";

/// Name of the correct-answer column.
pub const CORRECT_COLUMN: &str = "correct";

/// Prefix identifying answer-option columns. Matched case-sensitively.
pub const OPTION_PREFIX: &str = "option";

/// Resolved column positions for a question table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    question: usize,
    correct: usize,
    options: Vec<usize>,
}

impl Schema {
    /// Resolve columns from a header row.
    pub fn from_headers(headers: &[String]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let question = find(QUESTION_COLUMN);
        let correct = find(CORRECT_COLUMN);

        let (question, correct) = match (question, correct) {
            (Some(q), Some(c)) => (q, c),
            (q, c) => {
                let mut missing = Vec::new();
                if q.is_none() {
                    missing.push(QUESTION_COLUMN.to_string());
                }
                if c.is_none() {
                    missing.push(CORRECT_COLUMN.to_string());
                }
                return Err(Error::MissingColumns(missing));
            }
        };

        let options: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.starts_with(OPTION_PREFIX))
            .map(|(idx, _)| idx)
            .collect();

        log::debug!(
            "Resolved schema: question={}, correct={}, {} option column(s)",
            question,
            correct,
            options.len()
        );

        Ok(Self {
            question,
            correct,
            options,
        })
    }

    /// Resolve columns from a table's header row.
    pub fn from_table(table: &Table) -> Result<Self> {
        Self::from_headers(&table.headers)
    }

    /// Number of option columns.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Build a record from one row. Missing option cells are skipped.
    pub fn record(&self, row: &TableRow) -> Record {
        Record {
            question: row.get(self.question).unwrap_or_default().to_string(),
            correct: row.get(self.correct).unwrap_or_default().to_string(),
            options: self
                .options
                .iter()
                .filter_map(|&idx| row.get(idx))
                .map(str::to_string)
                .collect(),
        }
    }

    /// Build records for every row, in row order.
    pub fn records(&self, table: &Table) -> Vec<Record> {
        table.rows.iter().map(|row| self.record(row)).collect()
    }
}

/// Validate a table and convert its rows to records.
pub fn records_from_table(table: &Table) -> Result<Vec<Record>> {
    let schema = Schema::from_table(table)?;
    Ok(schema.records(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn row(cells: &[Option<&str>]) -> TableRow {
        TableRow::new(cells.iter().map(|c| c.map(str::to_string)).collect())
    }

    #[test]
    fn test_missing_correct_column() {
        let result = Schema::from_headers(&headers(&["question", "option1", "option2"]));
        match result {
            Err(Error::MissingColumns(missing)) => assert_eq!(missing, vec!["correct"]),
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_both_columns() {
        let result = Schema::from_headers(&headers(&["Question", "Correct"]));
        match result {
            Err(Error::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["question", "correct"])
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_option_columns_in_source_order() {
        let schema = Schema::from_headers(&headers(&[
            "optionB", "question", "notes", "optionA", "correct", "option_c",
        ]))
        .unwrap();
        assert_eq!(schema.option_count(), 3);

        let record = schema.record(&row(&[
            Some("b"),
            Some("Pick one"),
            Some("ignored"),
            Some("a"),
            Some("a"),
            Some("c"),
        ]));
        assert_eq!(record.question, "Pick one");
        assert_eq!(record.correct, "a");
        assert_eq!(record.options, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_option_prefix_is_case_sensitive() {
        let schema =
            Schema::from_headers(&headers(&["question", "Option1", "option2", "correct"]))
                .unwrap();
        assert_eq!(schema.option_count(), 1);
    }

    #[test]
    fn test_blank_option_cells_are_skipped() {
        let schema = Schema::from_headers(&headers(&[
            "question", "option1", "option2", "option3", "correct",
        ]))
        .unwrap();

        let record = schema.record(&row(&[Some("Q"), Some("x"), None, Some("z"), Some("z")]));
        assert_eq!(record.options, vec!["x", "z"]);

        // Short row: trailing option and correct cells are absent.
        let record = schema.record(&row(&[Some("Q"), Some("x")]));
        assert_eq!(record.options, vec!["x"]);
        assert_eq!(record.correct, "");
    }

    #[test]
    fn test_records_from_table_preserves_row_order() {
        let mut table = Table::new(headers(&["question", "correct", "option1"]));
        table.add_row(row(&[Some("first"), Some("a"), Some("a")]));
        table.add_row(row(&[Some("second"), Some("b"), Some("b")]));
        table.add_row(row(&[Some("third"), Some("c"), None]));

        let records = records_from_table(&table).unwrap();
        let questions: Vec<&str> = records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["first", "second", "third"]);
        assert!(records[2].options.is_empty());
    }

    #[test]
    fn test_duplicate_required_column_uses_first() {
        let schema =
            Schema::from_headers(&headers(&["question", "correct", "question"])).unwrap();
        let record = schema.record(&row(&[Some("one"), Some("x"), Some("two")]));
        assert_eq!(record.question, "one");
    }
}
