//! Non-fatal conversion diagnostics.
//!
//! Every recoverable event (a dangling reference replaced by a default, an
//! unsupported control skipped, a resource that could not be pipelined, a
//! malformed subtree replaced by a placeholder) is recorded here together
//! with its position in the source tree, and mirrored to the `log` facade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A definition id did not resolve; a default was substituted.
    DanglingReference,
    /// A source entity or enumeration value has no target equivalent.
    UnsupportedEntity,
    /// An embedded resource could not be moved to the target container.
    ResourcePipeline,
    /// A subtree violated a structural invariant and was replaced.
    StructuralIntegrity,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::DanglingReference => write!(f, "dangling-reference"),
            DiagnosticKind::UnsupportedEntity => write!(f, "unsupported-entity"),
            DiagnosticKind::ResourcePipeline => write!(f, "resource-pipeline"),
            DiagnosticKind::StructuralIntegrity => write!(f, "structural-integrity"),
        }
    }
}

/// One step of a path into the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "index", rename_all = "snake_case")]
pub enum Step {
    Section(usize),
    Paragraph(usize),
    Run(usize),
    Control(usize),
    Cell { row: usize, col: usize },
    Header,
    Footer,
    Footnote,
    Endnote,
    ShapeText,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Section(i) => write!(f, "section[{}]", i),
            Step::Paragraph(i) => write!(f, "paragraph[{}]", i),
            Step::Run(i) => write!(f, "run[{}]", i),
            Step::Control(i) => write!(f, "control[{}]", i),
            Step::Cell { row, col } => write!(f, "cell[{},{}]", row, col),
            Step::Header => write!(f, "header"),
            Step::Footer => write!(f, "footer"),
            Step::Footnote => write!(f, "footnote"),
            Step::Endnote => write!(f, "endnote"),
            Step::ShapeText => write!(f, "shape-text"),
        }
    }
}

/// Position of an entity inside the source document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Path from the document root
    pub steps: Vec<Step>,
}

impl Location {
    /// The document root.
    pub fn document() -> Self {
        Self::default()
    }

    /// A top-level section.
    pub fn section(index: usize) -> Self {
        Self {
            steps: vec![Step::Section(index)],
        }
    }

    /// Extend this location by one step.
    pub fn push(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    pub fn paragraph(&self, index: usize) -> Self {
        self.push(Step::Paragraph(index))
    }

    pub fn run(&self, index: usize) -> Self {
        self.push(Step::Run(index))
    }

    pub fn control(&self, index: usize) -> Self {
        self.push(Step::Control(index))
    }

    pub fn cell(&self, row: usize, col: usize) -> Self {
        self.push(Step::Cell { row, col })
    }

    /// Whether this location is the document root or a top-level section.
    pub fn is_section_level(&self) -> bool {
        match self.steps.as_slice() {
            [] | [Step::Section(_)] => true,
            _ => false,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "document");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// A single non-fatal conversion event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Event kind
    pub kind: DiagnosticKind,

    /// Where in the source tree it happened
    pub location: Location,

    /// Human-readable detail
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.detail)
    }
}

/// Ordered list of diagnostics accumulated during one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and mirror it to the log.
    pub fn push(&mut self, kind: DiagnosticKind, location: Location, detail: impl Into<String>) {
        let diagnostic = Diagnostic {
            kind,
            location,
            detail: detail.into(),
        };
        log::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    /// Append all diagnostics of another list, keeping their order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&Diagnostic> {
        self.entries.first()
    }

    /// Count diagnostics of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Diagnostics of one kind, in recording order.
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.entries.iter().filter(|d| d.kind == kind).collect()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        let loc = Location::section(1).paragraph(3).control(0).cell(1, 2);
        assert_eq!(
            loc.to_string(),
            "section[1]/paragraph[3]/control[0]/cell[1,2]"
        );
        assert_eq!(Location::document().to_string(), "document");
    }

    #[test]
    fn test_section_level() {
        assert!(Location::document().is_section_level());
        assert!(Location::section(4).is_section_level());
        assert!(!Location::section(4).paragraph(0).is_section_level());
    }

    #[test]
    fn test_diagnostics_counting() {
        let mut diags = Diagnostics::new();
        diags.push(
            DiagnosticKind::DanglingReference,
            Location::section(0).paragraph(0).run(0),
            "charPr 9",
        );
        diags.push(
            DiagnosticKind::UnsupportedEntity,
            Location::section(0).paragraph(1),
            "ctrl 'xxxx'",
        );

        let mut more = Diagnostics::new();
        more.push(
            DiagnosticKind::DanglingReference,
            Location::section(1),
            "paraPr 4",
        );
        diags.extend(more);

        assert_eq!(diags.len(), 3);
        assert_eq!(diags.count(DiagnosticKind::DanglingReference), 2);
        assert_eq!(
            diags.of_kind(DiagnosticKind::UnsupportedEntity)[0].detail,
            "ctrl 'xxxx'"
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic {
            kind: DiagnosticKind::ResourcePipeline,
            location: Location::section(0).paragraph(2).control(1),
            detail: "bin data 2 missing".into(),
        };
        assert_eq!(
            diag.to_string(),
            "[resource-pipeline] section[0]/paragraph[2]/control[1]: bin data 2 missing"
        );
    }
}
