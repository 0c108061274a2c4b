use std::fmt::Display;

pub struct Join<Iter, Sep>
where
    Iter: Iterator,
{
    iter: Iter,
    sep: Sep,
}

impl<Iter, Sep> Display for Join<Iter, Sep>
where
    Iter: Iterator + Clone,
    <Iter as Iterator>::Item: Display,
    Sep: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter.clone().peekable();
        while let Some(item) = iter.next() {
            write!(f, "{item}")?;
            if iter.peek().is_some() {
                write!(f, "{}", self.sep)?;
            }
        }
        Ok(())
    }
}

pub trait JoinIter: Sized + Iterator {
    /// Lazily displays every item with `sep` in between.
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep>;
}

impl<Iter> JoinIter for Iter
where
    Iter: Sized + Iterator + Clone,
{
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep> {
        Join { iter: self, sep }
    }
}

#[cfg(test)]
mod tests {
    use super::JoinIter as _;

    #[test]
    fn separates_items() {
        assert_eq!(["a", "b", "c"].iter().join(", ").to_string(), "a, b, c");
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(std::iter::empty::<&str>().join(", ").to_string(), "");
        assert_eq!(["only"].iter().join(", ").to_string(), "only");
    }
}
