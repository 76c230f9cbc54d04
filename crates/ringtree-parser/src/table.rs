//! Tokenizer for comma-separated record tables.
//!
//! The public entry point is [`read_table`], which splits source text into
//! rows of [`Cell`]s. Quoted fields may contain separators, line breaks and
//! doubled quotes (`""`). Blank lines are skipped. Every row that fails to
//! read produces a diagnostic and reading resumes at the next line, so one
//! pass reports all syntax errors.

use winnow::{
    Parser as _,
    ascii::{line_ending, space0},
    combinator::{alt, cut_err, eof, peek, preceded, repeat, separated, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{none_of, one_of, take_till},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Rich diagnostic information for table syntax errors.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TableDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<'a, O> = ModalResult<O, ContextError<TableDiagnostic>>;

/// A single field of a table row, with surrounding quotes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    value: String,
    span: Span,
}

impl Cell {
    fn new(value: String, span: Span) -> Self {
        Self { value, span }
    }

    /// The unquoted text of the cell, without trimming.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Source span of the cell, including quotes.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// One line of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    span: Span,
}

impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Parse a quoted field: `"..."` with `""` standing for a literal quote.
///
/// Commits after the opening quote; the closing quote must be followed by a
/// separator or a line end.
fn quoted_field<'a>(input: &mut Input<'a>) -> IResult<'a, String> {
    let start = input.current_token_start();

    let content = repeat(0.., alt(("\"\"".value('"'), none_of('"')))).fold(
        String::new,
        |mut acc, ch| {
            acc.push(ch);
            acc
        },
    );

    let value = preceded(
        '"',
        cut_err(terminated(content, '"')).context(TableDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated quoted field",
            help: Some("add a closing `\"`"),
            start,
        }),
    )
    .parse_next(input)?;

    cut_err(peek(alt((one_of([',', '\n', '\r']).void(), eof.void()))))
        .context(TableDiagnostic {
            code: ErrorCode::E002,
            message: "unexpected character after quoted field",
            help: Some("put a `,` after the closing quote, or double inner quotes as `\"\"`"),
            start,
        })
        .parse_next(input)?;

    Ok(value)
}

/// Parse an unquoted field up to the next separator or line end.
fn bare_field<'a>(input: &mut Input<'a>) -> IResult<'a, String> {
    take_till(0.., [',', '\n', '\r'])
        .map(str::to_owned)
        .parse_next(input)
}

/// Parse a single cell with position tracking
fn cell<'a>(input: &mut Input<'a>) -> IResult<'a, Cell> {
    let start = input.current_token_start();
    let value = alt((quoted_field, bare_field)).parse_next(input)?;
    let end = input.current_token_start();
    Ok(Cell::new(value, Span::new(start..end)))
}

/// Parse a line holding only spaces and tabs.
fn blank_line<'a>(input: &mut Input<'a>) -> IResult<'a, ()> {
    (space0, alt((line_ending, eof))).void().parse_next(input)
}

/// Parse a row of cells and its line terminator.
fn row<'a>(input: &mut Input<'a>) -> IResult<'a, Row> {
    let start = input.current_token_start();
    let cells: Vec<Cell> = separated(1.., cell, ',').parse_next(input)?;
    let end = input.current_token_start();
    alt((line_ending, eof)).void().parse_next(input)?;

    Ok(Row {
        cells,
        span: Span::new(start..end),
    })
}

/// Skip to the start of the next line.
fn skip_line(input: &mut Input<'_>) {
    let skipped: IResult<'_, ()> = (take_till(0.., '\n'), alt(("\n", eof)))
        .void()
        .parse_next(input);
    if skipped.is_err() && !input.is_empty() {
        input.next_token();
    }
}

/// Reader that accumulates rows and diagnostics.
struct TableReader {
    rows: Vec<Row>,
    diagnostics: DiagnosticCollector,
}

impl TableReader {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn read(&mut self, mut input: Input<'_>) {
        while !input.is_empty() {
            let checkpoint = input.checkpoint();
            if blank_line(&mut input).is_ok() {
                continue;
            }
            input.reset(&checkpoint);

            match row(&mut input) {
                Ok(row) => self.rows.push(row),
                Err(e) => {
                    let error_pos = input.current_token_start();
                    self.diagnostics.emit(Self::convert_err_mode(e, error_pos));
                    skip_line(&mut input);
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<Row>, ParseError> {
        self.diagnostics.finish().map(|()| self.rows)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Falls back to E002 (unexpected character) if no diagnostic context is
    /// attached to the error.
    fn convert_err_mode(err: ErrMode<ContextError<TableDiagnostic>>, error_pos: usize) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(TableDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos);

            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("unexpected character")
            .with_code(ErrorCode::E002)
            .with_label(span, ErrorCode::E002.description())
    }
}

/// Split a table source into rows, collecting every syntax error.
///
/// # Returns
///
/// - `Ok(rows)` - All rows read successfully; blank lines are omitted
/// - `Err(ParseError)` - One or more rows failed to read
pub fn read_table(source: &str) -> Result<Vec<Row>, ParseError> {
    let mut reader = TableReader::new();
    reader.read(LocatingSlice::new(source));
    reader.finish()
}
