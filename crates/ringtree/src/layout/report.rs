//! Soft failures of a layout pass.

use std::fmt;

use log::warn;

use ringtree_core::identifier::Id;

/// A problem that did not stop the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutDiagnostic {
    /// A prerequisite named an id that was unknown or not yet placed; the
    /// link was dropped.
    UnresolvedPrerequisite { entity: Id, prerequisite: Id },
    /// No lane at the entity's radius could take it; it keeps its preferred
    /// angle and stays unplaced.
    LaneExhausted { entity: Id },
}

impl LayoutDiagnostic {
    /// The entity the diagnostic is about.
    pub fn entity(&self) -> Id {
        match self {
            Self::UnresolvedPrerequisite { entity, .. } | Self::LaneExhausted { entity } => *entity,
        }
    }
}

impl fmt::Display for LayoutDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedPrerequisite {
                entity,
                prerequisite,
            } => write!(
                f,
                "prerequisite `{prerequisite}` of `{entity}` is not defined before it"
            ),
            Self::LaneExhausted { entity } => write!(f, "no free lane for `{entity}`"),
        }
    }
}

/// Diagnostics collected during a layout pass, in the order they occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    diagnostics: Vec<LayoutDiagnostic>,
}

impl LayoutReport {
    /// Records a diagnostic and logs it as a warning.
    pub fn push(&mut self, diagnostic: LayoutDiagnostic) {
        warn!(diagnostic:%; "Layout diagnostic");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[LayoutDiagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the pass produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Entities left without a lane.
    pub fn unplaced(&self) -> impl Iterator<Item = Id> + '_ {
        self.diagnostics.iter().filter_map(|diagnostic| match diagnostic {
            LayoutDiagnostic::LaneExhausted { entity } => Some(*entity),
            LayoutDiagnostic::UnresolvedPrerequisite { .. } => None,
        })
    }

    /// `(entity, prerequisite)` pairs whose link was dropped.
    pub fn unresolved(&self) -> impl Iterator<Item = (Id, Id)> + '_ {
        self.diagnostics.iter().filter_map(|diagnostic| match diagnostic {
            LayoutDiagnostic::UnresolvedPrerequisite {
                entity,
                prerequisite,
            } => Some((*entity, *prerequisite)),
            LayoutDiagnostic::LaneExhausted { .. } => None,
        })
    }
}
