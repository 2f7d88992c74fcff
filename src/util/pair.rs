use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered two-element tuple
///
/// `Enumerate` uses it to attach an index to each element, and
/// `HashMap::iter` yields one per entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_inner()
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({:?}, {:?})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_creation() {
        let p = Pair::new(0usize, "zero");
        assert_eq!(*p.first(), 0);
        assert_eq!(*p.second(), "zero");
    }

    #[test]
    fn test_pair_tuple_conversion() {
        let p: Pair<i32, char> = (7, 'x').into();
        assert_eq!(p, Pair::new(7, 'x'));

        let (a, b): (i32, char) = p.into();
        assert_eq!(a, 7);
        assert_eq!(b, 'x');
    }

    #[test]
    fn test_pair_debug() {
        let p = Pair::new(1, "one");
        assert_eq!(format!("{p:?}"), "Pair(1, \"one\")");
    }

    #[test]
    fn test_pair_serde() {
        let p = Pair::new(3u32, String::from("c"));
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"first":3,"second":"c"}"#);

        let back: Pair<u32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
