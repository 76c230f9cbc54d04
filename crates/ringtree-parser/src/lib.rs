//! # Ringtree Parser
//!
//! Reader for Ringtree record tables. A table is comma-separated text whose
//! header row names the columns:
//!
//! | column          | required | meaning                                  |
//! |-----------------|----------|------------------------------------------|
//! | `id`            | yes      | unique identifier                        |
//! | `name`          | yes      | display name (blank falls back to `id`)  |
//! | `type`          | yes      | grouping type                            |
//! | `start`         | yes      | earliest time                            |
//! | `end`           | no       | firm end time                            |
//! | `maxStart`      | no       | latest possible start                    |
//! | `maxEnd`        | no       | latest possible end                      |
//! | `prerequisites` | no       | comma-delimited ids                      |
//! | `icon`          | no       | icon reference                           |
//!
//! ## Usage
//!
//! ```
//! # use ringtree_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "\
//! id,name,type,start,end,prerequisites
//! ownership,Ownership,rust,0,6,
//! borrowck,Borrow checker,rust,6,18,ownership
//! ";
//!
//!     let records = parse(source)?;
//!     assert_eq!(records.len(), 2);
//!     assert_eq!(records[1].prerequisites()[0], "ownership");
//!     Ok(())
//! }
//! ```

pub mod error;
mod records;
mod span;
mod table;

pub use span::Span;
pub use table::{Cell, Row, read_table};

use log::info;

use ringtree_core::record::Record;

use error::{DiagnosticCollector, ParseError};

/// Parse a record table into typed records.
///
/// Runs two passes:
///
/// 1. **Read** - Split the source into rows and cells
/// 2. **Type** - Map columns by header name and coerce values
///
/// Every diagnostic of a pass is collected before failing, so a single call
/// reports all problems in the table.
///
/// # Returns
///
/// - `Ok(records)` - Records in table order; an empty source yields no records
/// - `Err(ParseError)` - One or more rows are malformed
pub fn parse(source: &str) -> Result<Vec<Record>, ParseError> {
    let rows = read_table(source)?;

    let mut diagnostics = DiagnosticCollector::new();
    let records = records::build_records(&rows, &mut diagnostics);
    diagnostics.finish()?;

    info!(records = records.len(); "Record table parsed");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const HEADER: &str = "id,name,type,start,end,maxStart,maxEnd,prerequisites,icon\n";

    fn codes(err: &ParseError) -> Vec<ErrorCode> {
        err.diagnostics().iter().filter_map(|d| d.code()).collect()
    }

    #[test]
    fn test_full_row() {
        let source = format!("{HEADER}b,Borrow,rust,6,18,8,24,\"a, c\",icons/b.svg\n");
        let records = parse(&source).unwrap();
        let record = &records[0];
        assert_eq!(record.id(), "b");
        assert_eq!(record.name(), "Borrow");
        assert_eq!(record.kind(), "rust");
        assert_eq!(record.start(), 6.0);
        assert_eq!(record.end(), Some(18.0));
        assert_eq!(record.max_start(), Some(8.0));
        assert_eq!(record.max_end(), Some(24.0));
        assert_eq!(record.prerequisites().len(), 2);
        assert_eq!(record.prerequisites()[1], "c");
        assert_eq!(record.icon(), Some("icons/b.svg"));
    }

    #[test]
    fn test_optional_cells_may_be_empty() {
        let source = format!("{HEADER}a, ,lang,0,,,,,\n");
        let records = parse(&source).unwrap();
        let record = &records[0];
        assert_eq!(record.name(), "a");
        assert_eq!(record.end(), None);
        assert_eq!(record.icon(), None);
        assert!(record.prerequisites().is_empty());
    }

    #[test]
    fn test_column_order_and_unknown_columns() {
        let source = "start,notes,type,id,name\n3,whatever,t,x,X\n";
        let records = parse(source).unwrap();
        assert_eq!(records[0].id(), "x");
        assert_eq!(records[0].start(), 3.0);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("id,name,type,start\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_required_columns() {
        let err = parse("id,name\na,A\n").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E100, ErrorCode::E100]);
    }

    #[test]
    fn test_duplicate_column() {
        let err = parse("id,name,type,start,id\n").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E102]);
        assert_eq!(err.diagnostics()[0].labels().len(), 2);
    }

    #[test]
    fn test_row_length_mismatch() {
        let err = parse("id,name,type,start\na,A,t\n").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E101]);
    }

    #[test]
    fn test_value_errors_are_collected() {
        let source = "id,name,type,start,end\n,A,t,1,\nb,B,,x,\nc,C,t,2,later\n";
        let err = parse(source).unwrap_err();
        assert_eq!(
            codes(&err),
            vec![
                ErrorCode::E200,
                ErrorCode::E200,
                ErrorCode::E201,
                ErrorCode::E201,
            ]
        );
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let err = parse("id,name,type,start\na,A,t,inf\n").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E201]);
    }

    #[test]
    fn test_duplicate_id() {
        let source = "id,name,type,start\na,A,t,1\nb,B,t,2\na,Again,t,3\n";
        let err = parse(source).unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E202));
        assert_eq!(diag.labels()[1].span().start(), source.find("a,A").unwrap());
    }

    #[test]
    fn test_syntax_errors_stop_before_typing() {
        let err = parse("id,name,type,start\n\"a,A,t,1\n").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E001]);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn quoted_names_survive(name in "[a-zA-Z ,\"]{1,20}", start in -100.0f32..100.0) {
            let quoted = name.replace('"', "\"\"");
            let source = format!("id,name,type,start\nx,\"{quoted}\",t,{start}\n");
            let records = parse(&source).unwrap();
            let expected = if name.trim().is_empty() { "x" } else { name.trim() };
            prop_assert_eq!(records[0].name(), expected);
            prop_assert_eq!(records[0].start(), start);
        }
    }
}
