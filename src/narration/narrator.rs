use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::narration::trace::RowOperation;
use itertools::Itertools;
use std::fmt::Display;

/// Renders matrices, vectors and row operations as text.
///
/// Output depends only on the values passed in, so the same state always
/// produces the same lines.
#[derive(Debug, Clone, Copy)]
pub struct Narrator {
    one_based: bool,
}

impl Narrator {
    pub fn new(one_based: bool) -> Self {
        Narrator { one_based }
    }

    /// Display number of a 0-based row or variable index.
    pub fn index(&self, i: usize) -> usize {
        if self.one_based {
            i + 1
        } else {
            i
        }
    }

    /// Scalar wrapped in parentheses when it would be ambiguous next to an
    /// operator, e.g. `-1/2` or `3/4`.
    pub fn scalar<T: Display>(&self, value: &T) -> String {
        let text = value.to_string();
        if text.contains('/') || text.starts_with('-') {
            format!("({})", text)
        } else {
            text
        }
    }

    /// One bracketed line per row, every column right-aligned to its widest
    /// entry. `split` draws a bar before that column.
    pub fn matrix<T: GenElement>(&self, matrix: &MatrixGen<T>, split: Option<usize>) -> Vec<String> {
        let cells: Vec<Vec<String>> = (0..matrix.rows)
            .map(|r| matrix.row(r).iter().map(|x| x.to_string()).collect())
            .collect();
        let widths: Vec<usize> = (0..matrix.cols)
            .map(|c| cells.iter().map(|row| row[c].len()).max().unwrap_or(0))
            .collect();

        cells
            .iter()
            .map(|row| {
                let body = row
                    .iter()
                    .enumerate()
                    .map(|(c, text)| {
                        let cell = format!("{:>width$}", text, width = widths[c]);
                        match split {
                            Some(s) if s == c && c > 0 => format!("| {}", cell),
                            _ => cell,
                        }
                    })
                    .join("  ");
                format!("[ {} ]", body)
            })
            .collect()
    }

    /// Column vector, one bracketed entry per line.
    pub fn column<T: Display>(&self, values: &[T]) -> Vec<String> {
        let texts: Vec<String> = values.iter().map(|x| x.to_string()).collect();
        let width = texts.iter().map(|t| t.len()).max().unwrap_or(0);
        texts
            .iter()
            .map(|t| format!("[ {:>width$} ]", t, width = width))
            .collect()
    }

    /// Vector written inline, e.g. `(1, -2, 3/4)`.
    pub fn tuple<T: Display>(&self, values: &[T]) -> String {
        format!("({})", values.iter().join(", "))
    }

    /// Labelled column vector: the label sits on the middle line.
    pub fn labelled_column<T: Display>(&self, label: &str, values: &[T]) -> Vec<String> {
        let column = self.column(values);
        let middle = column.len().saturating_sub(1) / 2;
        let pad = " ".repeat(label.len() + 3);
        column
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == middle {
                    format!("{} = {}", label, line)
                } else {
                    format!("{}{}", pad, line)
                }
            })
            .collect()
    }

    pub fn operation<T: Display>(&self, operation: &RowOperation<T>) -> String {
        match operation {
            RowOperation::Swap { first, second } => format!(
                "row {} swapped with row {}",
                self.index(*first),
                self.index(*second)
            ),
            RowOperation::Scale { row, pivot } => format!(
                "row {} scaled by 1/{}",
                self.index(*row),
                self.scalar(pivot)
            ),
            RowOperation::Combine {
                target,
                source,
                factor,
            } => format!(
                "row {} reduced by {}·row {}",
                self.index(*target),
                self.scalar(factor),
                self.index(*source)
            ),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix::Matrix;
    use crate::rings::fraction::Fraction;

    fn fr(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_matrix_alignment() {
        let m = MatrixGen::from_list(vec![
            vec![fr("1"), fr("-10"), fr("2")],
            vec![fr("1/2"), fr("3"), fr("4")],
        ])
        .unwrap();
        let narrator = Narrator::new(true);

        assert_eq!(
            narrator.matrix(&m, None),
            vec!["[   1  -10  2 ]", "[ 1/2    3  4 ]"]
        );
        assert_eq!(
            narrator.matrix(&m, Some(2)),
            vec!["[   1  -10  | 2 ]", "[ 1/2    3  | 4 ]"]
        );
        assert_eq!(narrator.matrix(&m, None), narrator.matrix(&m, None));
    }

    #[test]
    fn test_vectors() {
        let narrator = Narrator::new(true);
        let x = vec![fr("6"), fr("-10"), fr("1/3")];
        assert_eq!(narrator.column(&x), vec!["[   6 ]", "[ -10 ]", "[ 1/3 ]"]);
        assert_eq!(narrator.tuple(&x), "(6, -10, 1/3)");
        assert_eq!(
            narrator.labelled_column("Tu", &x),
            vec!["     [   6 ]", "Tu = [ -10 ]", "     [ 1/3 ]"]
        );
    }

    #[test]
    fn test_operations() {
        let narrator = Narrator::new(true);
        assert_eq!(
            narrator.operation(&RowOperation::<Fraction>::Swap {
                first: 0,
                second: 2
            }),
            "row 1 swapped with row 3"
        );
        assert_eq!(
            narrator.operation(&RowOperation::Scale {
                row: 1,
                pivot: fr("2/3")
            }),
            "row 2 scaled by 1/(2/3)"
        );
        assert_eq!(
            narrator.operation(&RowOperation::Combine {
                target: 1,
                source: 0,
                factor: fr("-2")
            }),
            "row 2 reduced by (-2)·row 1"
        );
        assert_eq!(
            Narrator::new(false).operation(&RowOperation::Scale {
                row: 1,
                pivot: fr("5")
            }),
            "row 1 scaled by 1/5"
        );
    }
}
