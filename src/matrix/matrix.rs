use crate::error::Result;

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn is_rref(&self) -> bool;
    fn identity(n: usize) -> Self;
    fn inverse(&self) -> Result<Self>;
    fn transpose(&self) -> Self;
    fn at(&self, row: usize, col: usize) -> T;
}
