// src/core/collection.rs

use log::debug;
use crate::error::PolystackError;
use crate::polynomial::Polynomial;

/// LIFO store of loaded and derived polynomials.
///
/// Backed by a `Vec` whose last element is the most recently pushed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    polynomials: Vec<Polynomial>,
}

impl Collection {
    pub fn new() -> Self {
        Collection {
            polynomials: Vec::new(),
        }
    }

    pub fn push(&mut self, polynomial: Polynomial) {
        self.polynomials.push(polynomial);
        debug!("Collection now holds {} polynomials", self.polynomials.len());
    }

    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    /// Most recently pushed polynomial.
    pub fn top(&self) -> Option<&Polynomial> {
        self.polynomials.last()
    }

    /// The two most recently pushed polynomials as `(top, second)`.
    pub fn top_two(&self) -> Result<(&Polynomial, &Polynomial), PolystackError> {
        match self.polynomials.as_slice() {
            [.., second, top] => Ok((top, second)),
            _ => Err(PolystackError::InsufficientOperands {
                required: 2,
                available: self.polynomials.len(),
            }),
        }
    }

    /// Applies `operation` to `(top, second)` and pushes the result.
    ///
    /// The operands stay in the collection. On error nothing is pushed.
    pub fn apply<F>(&mut self, operation: F) -> Result<&Polynomial, PolystackError>
    where
        F: FnOnce(&Polynomial, &Polynomial) -> Result<Polynomial, PolystackError>,
    {
        let (top, second) = self.top_two()?;
        let result = operation(top, second)?;
        let index = self.polynomials.len();
        self.push(result);
        Ok(&self.polynomials[index])
    }

    /// Iterates from the most recently pushed polynomial to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Polynomial> {
        self.polynomials.iter().rev()
    }
}

impl Extend<Polynomial> for Collection {
    fn extend<T: IntoIterator<Item = Polynomial>>(&mut self, iter: T) {
        for polynomial in iter {
            self.push(polynomial);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::arithmetic;

    fn constant(c: i64) -> Polynomial {
        Polynomial::from_terms([(c, 0)]).unwrap()
    }

    #[test]
    fn test_lifo_order() {
        let mut collection = Collection::new();
        collection.extend([constant(1), constant(2), constant(3)]);
        assert_eq!(collection.top(), Some(&constant(3)));
        let order: Vec<_> = collection.iter().cloned().collect();
        assert_eq!(order, vec![constant(3), constant(2), constant(1)]);
    }

    #[test]
    fn test_top_two() {
        let mut collection = Collection::new();
        collection.push(constant(1));
        collection.push(constant(2));
        let (top, second) = collection.top_two().unwrap();
        assert_eq!(top, &constant(2));
        assert_eq!(second, &constant(1));
    }

    #[test]
    fn test_apply_keeps_operands() {
        let mut collection = Collection::new();
        collection.push(constant(10));
        collection.push(constant(4));
        let result = collection.apply(arithmetic::subtract).unwrap().clone();
        assert_eq!(result, constant(-6));
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.top(), Some(&constant(-6)));
    }

    #[test]
    fn test_apply_with_one_operand() {
        let mut collection = Collection::new();
        collection.push(constant(1));
        let err = collection.apply(arithmetic::add).unwrap_err();
        assert!(matches!(err, PolystackError::InsufficientOperands { required: 2, available: 1 }));
        assert_eq!(collection.len(), 1);
    }
}
