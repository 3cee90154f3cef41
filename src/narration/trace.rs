/// A single elementary row operation applied during elimination.
///
/// Row indices are 0-based; the narrator decides how to number them.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOperation<T> {
    /// Exchange two rows.
    Swap { first: usize, second: usize },
    /// Divide `row` by `pivot` so the pivot becomes 1.
    Scale { row: usize, pivot: T },
    /// `target <- target - factor * source`
    Combine {
        target: usize,
        source: usize,
        factor: T,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEntry {
    /// Title of a stage of the computation.
    Heading(String),
    /// Free-form explanation or intermediate result.
    Note(String),
    /// Description of a row operation that was just applied.
    Operation(String),
    /// Multi-line rendering of a matrix or vector.
    Block(Vec<String>),
}

/// Append-only narration of one kernel operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTrace {
    entries: Vec<TraceEntry>,
}

impl StepTrace {
    pub fn new() -> Self {
        StepTrace::default()
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.entries.push(TraceEntry::Heading(text.into()));
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.entries.push(TraceEntry::Note(text.into()));
    }

    pub fn operation(&mut self, text: impl Into<String>) {
        self.entries.push(TraceEntry::Operation(text.into()));
    }

    pub fn block(&mut self, lines: Vec<String>) {
        self.entries.push(TraceEntry::Block(lines));
    }

    pub fn append(&mut self, other: StepTrace) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn operation_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, TraceEntry::Operation(_)))
            .count()
    }

    /// Flattens the trace into display lines. Headings are followed by an
    /// underline and preceded by a blank line unless they open the trace.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for entry in &self.entries {
            match entry {
                TraceEntry::Heading(text) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(text.clone());
                    lines.push("-".repeat(text.chars().count()));
                }
                TraceEntry::Note(text) | TraceEntry::Operation(text) => lines.push(text.clone()),
                TraceEntry::Block(block) => lines.extend(block.iter().cloned()),
            }
        }
        lines
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_lines() {
        let mut trace = StepTrace::new();
        trace.heading("Start");
        trace.block(vec!["[ 1 ]".into(), "[ 2 ]".into()]);
        trace.operation("row 1 swapped with row 2");
        trace.heading("End");
        trace.note("done");

        assert_eq!(trace.operation_count(), 1);
        assert_eq!(
            trace.lines(),
            vec![
                "Start",
                "-----",
                "[ 1 ]",
                "[ 2 ]",
                "row 1 swapped with row 2",
                "",
                "End",
                "---",
                "done",
            ]
        );
    }

    #[test]
    fn test_trace_append() {
        let mut first = StepTrace::new();
        first.note("a");
        let mut second = StepTrace::new();
        second.operation("b");
        first.append(second);
        assert_eq!(first.entries().len(), 2);
        assert_eq!(first.operation_count(), 1);
    }
}
