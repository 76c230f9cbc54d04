//! The typed input row consumed by the layout engine.
//!
//! A [`Record`] is one entity as it arrives from a data source: firm and fuzzy
//! time bounds, a grouping type, and the identifiers of its prerequisites.

use crate::identifier::Id;

/// One entity of a timeline tree before layout.
///
/// # Examples
///
/// ```
/// # use ringtree_core::record::Record;
/// let record = Record::new("borrowck", "Borrow checker", "rust", 6.0)
///     .with_end(18.0)
///     .with_max_end(24.0)
///     .with_prerequisites("ownership, lifetimes");
///
/// assert_eq!(record.actual_end(), 24.0);
/// assert_eq!(record.prerequisites().len(), 2);
/// assert_eq!(record.prerequisites()[1], "lifetimes");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: Id,
    name: String,
    kind: String,
    start: f32,
    end: Option<f32>,
    max_start: Option<f32>,
    max_end: Option<f32>,
    prerequisites: Vec<Id>,
    icon: Option<String>,
}

impl Record {
    /// Creates a record with only its required fields.
    pub fn new(id: &str, name: impl Into<String>, kind: impl Into<String>, start: f32) -> Self {
        Self {
            id: Id::new(id),
            name: name.into(),
            kind: kind.into(),
            start,
            end: None,
            max_start: None,
            max_end: None,
            prerequisites: Vec::new(),
            icon: None,
        }
    }

    pub fn with_end(mut self, end: f32) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_max_start(mut self, max_start: f32) -> Self {
        self.max_start = Some(max_start);
        self
    }

    pub fn with_max_end(mut self, max_end: f32) -> Self {
        self.max_end = Some(max_end);
        self
    }

    /// Sets the prerequisites from a comma-delimited id list.
    ///
    /// Whitespace around ids is trimmed and empty entries are skipped.
    pub fn with_prerequisites(mut self, list: &str) -> Self {
        self.prerequisites = split_prerequisites(list);
        self
    }

    pub fn with_prerequisite_ids(mut self, ids: Vec<Id>) -> Self {
        self.prerequisites = ids;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grouping type of the record.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> Option<f32> {
        self.end
    }

    /// Latest possible start; marks a fuzzy onset when set.
    pub fn max_start(&self) -> Option<f32> {
        self.max_start
    }

    /// Latest possible end; marks a fuzzy completion when set.
    pub fn max_end(&self) -> Option<f32> {
        self.max_end
    }

    pub fn prerequisites(&self) -> &[Id] {
        &self.prerequisites
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// The last known time of the record: `max_end ?? end ?? max_start ?? start`.
    pub fn actual_end(&self) -> f32 {
        self.max_end
            .or(self.end)
            .or(self.max_start)
            .unwrap_or(self.start)
    }
}

/// Splits a comma-delimited prerequisite list into identifiers.
pub fn split_prerequisites(list: &str) -> Vec<Id> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(Id::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_end_fallbacks() {
        let base = Record::new("a", "A", "t", 3.0);
        assert_eq!(base.actual_end(), 3.0);

        let with_max_start = base.clone().with_max_start(5.0);
        assert_eq!(with_max_start.actual_end(), 5.0);

        let with_end = with_max_start.clone().with_end(8.0);
        assert_eq!(with_end.actual_end(), 8.0);

        let with_max_end = with_end.with_max_end(11.0);
        assert_eq!(with_max_end.actual_end(), 11.0);
    }

    #[test]
    fn test_split_prerequisites() {
        let ids = split_prerequisites(" a ,b,, c ");
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], "a");
        assert_eq!(ids[1], "b");
        assert_eq!(ids[2], "c");

        assert!(split_prerequisites("").is_empty());
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let record = Record::new("x", "X", "kind", 0.0);
        assert_eq!(record.end(), None);
        assert_eq!(record.max_start(), None);
        assert_eq!(record.max_end(), None);
        assert_eq!(record.icon(), None);
        assert!(record.prerequisites().is_empty());
        assert_eq!(record.kind(), "kind");
    }
}
