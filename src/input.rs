use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::rings::fraction::Fraction;
use std::str::FromStr;

/// How the vectors of an entry grid are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Each grid row is a vector.
    Rows,
    /// Each grid column is a vector.
    Columns,
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rows" | "row" => Ok(Orientation::Rows),
            "columns" | "column" | "cols" => Ok(Orientation::Columns),
            _ => Err(Error::parse(s, "expected 'rows' or 'columns'")),
        }
    }
}

pub fn parse_vector<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Fraction>> {
    texts.iter().map(|t| t.as_ref().parse()).collect()
}

pub fn parse_grid<S: AsRef<str>>(grid: &[Vec<S>]) -> Result<Vec<Vec<Fraction>>> {
    grid.iter().map(|row| parse_vector(row.as_slice())).collect()
}

pub fn parse_matrix<S: AsRef<str>>(grid: &[Vec<S>]) -> Result<MatrixGen<Fraction>> {
    MatrixGen::from_list(parse_grid(grid)?)
}

/// Turns an entry grid into the column-form vectors the kernel works on.
pub fn vectors_from_grid<T: GenElement>(
    grid: Vec<Vec<T>>,
    orientation: Orientation,
) -> Result<Vec<Vec<T>>> {
    let matrix = MatrixGen::from_list(grid)?;
    Ok(match orientation {
        Orientation::Rows => matrix.to_list(),
        Orientation::Columns => matrix.transpose().to_list(),
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Kernel;
    use crate::linalg::independence::Method;

    fn v(values: &[i64]) -> Vec<Fraction> {
        values.iter().map(|&x| Fraction::from(x)).collect()
    }

    #[test]
    fn test_parse_grid() {
        let grid = vec![vec!["1", "1/2", ""], vec!["-3", "0,5", " 2 "]];
        let parsed = parse_grid(&grid).unwrap();
        assert_eq!(parsed[0][1], "1/2".parse::<Fraction>().unwrap());
        assert_eq!(parsed[0][2], 0);
        assert_eq!(parsed[1][1], parsed[0][1]);

        let matrix = parse_matrix(&grid).unwrap();
        assert_eq!((matrix.rows, matrix.cols), (2, 3));
    }

    #[test]
    fn test_parse_error_aborts() {
        let grid = vec![vec!["1", "x"]];
        match parse_grid(&grid) {
            Err(Error::Parse { input, .. }) => assert_eq!(input, "x"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_orientation() {
        let grid = vec![v(&[1, 2, 3]), v(&[4, 5, 6])];
        assert_eq!(
            vectors_from_grid(grid.clone(), Orientation::Rows).unwrap(),
            grid
        );
        assert_eq!(
            vectors_from_grid(grid, Orientation::Columns).unwrap(),
            vec![v(&[1, 4]), v(&[2, 5]), v(&[3, 6])]
        );
        assert_eq!("Columns".parse::<Orientation>().unwrap(), Orientation::Columns);
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_orientation_reaches_independence() {
        let grid = vec![vec!["1", "0", "1"], vec!["0", "1", "1"]];
        let kernel = Kernel::default();

        let rows = vectors_from_grid(parse_grid(&grid).unwrap(), "rows".parse().unwrap()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(kernel.is_independent(&rows, Method::Elimination).unwrap().independent);

        let columns =
            vectors_from_grid(parse_grid(&grid).unwrap(), "columns".parse().unwrap()).unwrap();
        assert_eq!(columns.len(), 3);
        assert!(!kernel.is_independent(&columns, Method::Elimination).unwrap().independent);

        // two column vectors in R^3 are not square
        assert!(matches!(
            kernel.is_independent(&rows, Method::Determinant),
            Err(Error::Shape(_))
        ));
    }

    #[test]
    fn test_orientation_reaches_basis_matrix() {
        let basis = parse_grid(&[vec!["1", "1"], vec!["0", "1"]]).unwrap();
        let images = parse_grid(&[vec!["2", "3"], vec!["3", "5"]]).unwrap();
        let kernel = Kernel::default();

        let by_columns = kernel
            .matrix_from_basis_images(
                &vectors_from_grid(basis.clone(), Orientation::Columns).unwrap(),
                &vectors_from_grid(images.clone(), Orientation::Columns).unwrap(),
            )
            .unwrap();
        assert_eq!(by_columns.matrix.to_list(), vec![v(&[2, 1]), v(&[3, 2])]);

        let by_rows = kernel
            .matrix_from_basis_images(
                &vectors_from_grid(basis, Orientation::Rows).unwrap(),
                &vectors_from_grid(images, Orientation::Rows).unwrap(),
            )
            .unwrap();
        assert_eq!(by_rows.matrix.to_list(), vec![v(&[-1, 3]), v(&[-2, 5])]);
    }

    #[test]
    fn test_boundary_error_messages() {
        let err = parse_grid(&[vec!["1/0"]]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot read '1/0' as a number: division by zero");

        let err = "sideways".parse::<Orientation>().unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().starts_with("Cannot read 'sideways'"));

        let ragged = parse_grid(&[vec!["1", "2"], vec!["3"]]).unwrap();
        assert!(matches!(
            vectors_from_grid(ragged, Orientation::Columns),
            Err(Error::Dimension(_))
        ));
    }
}
