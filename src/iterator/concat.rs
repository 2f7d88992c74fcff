use crate::iterator::Iterator;

/// Yields everything from `first`, then everything from `last`
///
/// `first_active` is cleared the first time `first` reports exhaustion and
/// never set again; `first` is not consulted after that.
pub struct Concat<A, B> {
    first: A,
    last: B,
    first_active: bool,
}

impl<A, B> Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    pub fn new(first: A, last: B) -> Self {
        Concat {
            first,
            last,
            first_active: true,
        }
    }
}

impl<A, B> Iterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.first_active {
            if let Some(value) = self.first.next() {
                return Some(value);
            }
            self.first_active = false;
        }
        self.last.next()
    }
}
