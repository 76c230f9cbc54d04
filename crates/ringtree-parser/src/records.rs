//! Typing of table rows into [`Record`]s.
//!
//! Columns are matched by header name; unknown columns are ignored. Empty
//! cells mean "absent" for optional columns.

use indexmap::IndexMap;
use log::{debug, trace};

use ringtree_core::record::{Record, split_prerequisites};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
    table::{Cell, Row},
};

/// A recognized table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Column {
    Id,
    Name,
    Type,
    Start,
    End,
    MaxStart,
    MaxEnd,
    Prerequisites,
    Icon,
}

impl Column {
    const REQUIRED: [Column; 4] = [Column::Id, Column::Name, Column::Type, Column::Start];

    fn from_header(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Column::Id),
            "name" => Some(Column::Name),
            "type" => Some(Column::Type),
            "start" => Some(Column::Start),
            "end" => Some(Column::End),
            "maxStart" => Some(Column::MaxStart),
            "maxEnd" => Some(Column::MaxEnd),
            "prerequisites" => Some(Column::Prerequisites),
            "icon" => Some(Column::Icon),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Type => "type",
            Column::Start => "start",
            Column::End => "end",
            Column::MaxStart => "maxStart",
            Column::MaxEnd => "maxEnd",
            Column::Prerequisites => "prerequisites",
            Column::Icon => "icon",
        }
    }
}

/// Column positions resolved from the header row.
struct Header {
    columns: IndexMap<Column, usize>,
    width: usize,
}

impl Header {
    fn resolve(row: &Row, diagnostics: &mut DiagnosticCollector) -> Option<Self> {
        let mut columns = IndexMap::new();
        let mut spans: IndexMap<Column, Span> = IndexMap::new();
        let mut valid = true;

        for (index, cell) in row.cells().iter().enumerate() {
            let name = cell.value().trim();
            let Some(column) = Column::from_header(name) else {
                diagnostics.emit(
                    Diagnostic::warning(format!("unknown column `{name}` is ignored"))
                        .with_label(cell.span(), "unknown column"),
                );
                continue;
            };

            if let Some(first) = spans.get(&column) {
                diagnostics.emit(
                    Diagnostic::error(format!("column `{name}` appears more than once"))
                        .with_code(ErrorCode::E102)
                        .with_label(cell.span(), "duplicate column")
                        .with_secondary_label(*first, "first defined here"),
                );
                valid = false;
                continue;
            }

            spans.insert(column, cell.span());
            columns.insert(column, index);
        }

        for column in Column::REQUIRED {
            if !columns.contains_key(&column) {
                diagnostics.emit(
                    Diagnostic::error(format!("missing required column `{}`", column.as_str()))
                        .with_code(ErrorCode::E100)
                        .with_label(row.span(), "header row")
                        .with_help("the header must name `id`, `name`, `type` and `start`"),
                );
                valid = false;
            }
        }

        valid.then_some(Self {
            columns,
            width: row.cells().len(),
        })
    }

    fn cell<'r>(&self, row: &'r Row, column: Column) -> Option<&'r Cell> {
        self.columns
            .get(&column)
            .and_then(|&index| row.cells().get(index))
    }
}

/// Converts data rows into records.
struct RecordReader<'h> {
    header: &'h Header,
    seen: IndexMap<String, Span>,
}

impl<'h> RecordReader<'h> {
    fn new(header: &'h Header) -> Self {
        Self {
            header,
            seen: IndexMap::new(),
        }
    }

    fn read(&mut self, row: &Row, diagnostics: &mut DiagnosticCollector) -> Option<Record> {
        let found = row.cells().len();
        if found != self.header.width {
            diagnostics.emit(
                Diagnostic::error(format!(
                    "expected {} cells, found {found}",
                    self.header.width
                ))
                .with_code(ErrorCode::E101)
                .with_label(row.span(), ErrorCode::E101.description())
                .with_help("quote values that contain `,`"),
            );
            return None;
        }

        let id_cell = self.required(row, Column::Id, diagnostics);
        let kind = self.required(row, Column::Type, diagnostics);
        let start = self
            .required(row, Column::Start, diagnostics)
            .and_then(|cell| number(cell, Column::Start, diagnostics));
        let end = self.optional_number(row, Column::End, diagnostics);
        let max_start = self.optional_number(row, Column::MaxStart, diagnostics);
        let max_end = self.optional_number(row, Column::MaxEnd, diagnostics);

        let id_cell = id_cell?;
        let id = id_cell.value().trim();
        if let Some(first) = self.seen.get(id) {
            diagnostics.emit(
                Diagnostic::error(format!("duplicate id `{id}`"))
                    .with_code(ErrorCode::E202)
                    .with_label(id_cell.span(), "duplicate id")
                    .with_secondary_label(*first, "first defined here")
                    .with_help("ids must be unique within a table"),
            );
            return None;
        }
        self.seen.insert(id.to_owned(), id_cell.span());

        let name = self
            .text(row, Column::Name)
            .unwrap_or(id)
            .to_owned();

        let mut record = Record::new(id, name, kind?.value().trim(), start?);
        if let Some(end) = end? {
            record = record.with_end(end);
        }
        if let Some(max_start) = max_start? {
            record = record.with_max_start(max_start);
        }
        if let Some(max_end) = max_end? {
            record = record.with_max_end(max_end);
        }
        if let Some(list) = self.text(row, Column::Prerequisites) {
            record = record.with_prerequisite_ids(split_prerequisites(list));
        }
        if let Some(icon) = self.text(row, Column::Icon) {
            record = record.with_icon(icon);
        }

        trace!(record:?; "Read record");
        Some(record)
    }

    /// A required cell with non-blank content.
    fn required<'r>(
        &self,
        row: &'r Row,
        column: Column,
        diagnostics: &mut DiagnosticCollector,
    ) -> Option<&'r Cell> {
        let cell = self.header.cell(row, column)?;
        if cell.value().trim().is_empty() {
            diagnostics.emit(
                Diagnostic::error(format!("missing value for `{}`", column.as_str()))
                    .with_code(ErrorCode::E200)
                    .with_label(cell.span(), "empty cell"),
            );
            return None;
        }
        Some(cell)
    }

    /// Trimmed cell text, or `None` when the column is absent or blank.
    fn text<'r>(&self, row: &'r Row, column: Column) -> Option<&'r str> {
        self.header
            .cell(row, column)
            .map(|cell| cell.value().trim())
            .filter(|text| !text.is_empty())
    }

    /// An optional numeric cell. The outer `None` signals an invalid number.
    fn optional_number(
        &self,
        row: &Row,
        column: Column,
        diagnostics: &mut DiagnosticCollector,
    ) -> Option<Option<f32>> {
        match self.header.cell(row, column) {
            Some(cell) if !cell.value().trim().is_empty() => {
                number(cell, column, diagnostics).map(Some)
            }
            _ => Some(None),
        }
    }
}

fn number(cell: &Cell, column: Column, diagnostics: &mut DiagnosticCollector) -> Option<f32> {
    match cell.value().trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            diagnostics.emit(
                Diagnostic::error(format!("`{}` must be a number", column.as_str()))
                    .with_code(ErrorCode::E201)
                    .with_label(cell.span(), "not a number")
                    .with_help("write times as plain numbers, e.g. `12` or `12.5`"),
            );
            None
        }
    }
}

/// Type every data row of `rows`, whose first entry is the header.
///
/// Rows with errors are reported and dropped; the caller decides whether the
/// collected diagnostics fail the read.
pub(crate) fn build_records(rows: &[Row], diagnostics: &mut DiagnosticCollector) -> Vec<Record> {
    let Some((header_row, data)) = rows.split_first() else {
        return Vec::new();
    };
    let Some(header) = Header::resolve(header_row, diagnostics) else {
        return Vec::new();
    };

    let mut reader = RecordReader::new(&header);
    let records: Vec<Record> = data
        .iter()
        .filter_map(|row| reader.read(row, diagnostics))
        .collect();

    debug!(records = records.len(), columns = header.columns.len(); "Typed record table");
    records
}
