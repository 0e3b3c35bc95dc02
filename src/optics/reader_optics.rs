//! Reader adapters: read-only optics as [`Reader`] computations.
//!
//! `to_reader` and its alias `ask` read the focus, `asks(f)` reads `f` of
//! the focus. Lenses and isos go through their getter.

use super::getter::Getter;
use super::iso::PIso;
use super::lens::PLens;
use crate::effect::Reader;

impl<S, A> Getter<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Reads the focus of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::optics::Getter;
    ///
    /// let length: Getter<String, usize> = Getter::new(|text: &String| text.len());
    /// let doubled = length.to_reader().fmap(|n| n * 2);
    /// assert_eq!(doubled.run("abc".to_string()), 6);
    /// ```
    pub fn to_reader(&self) -> Reader<S, A> {
        let getter = self.clone();
        Reader::new(move |source: S| getter.get(&source))
    }

    /// Same as [`Getter::to_reader`].
    pub fn ask(&self) -> Reader<S, A> {
        self.to_reader()
    }

    /// Reads a projection of the focus.
    pub fn asks<R, F>(&self, function: F) -> Reader<S, R>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        self.to_reader().fmap(function)
    }
}

impl<S, T, A, B> PLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Reads the focus of the environment.
    pub fn to_reader(&self) -> Reader<S, A> {
        self.as_getter().to_reader()
    }

    /// Same as [`PLens::to_reader`].
    pub fn ask(&self) -> Reader<S, A> {
        self.to_reader()
    }

    /// Reads a projection of the focus.
    pub fn asks<R, F>(&self, function: F) -> Reader<S, R>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        self.as_getter().asks(function)
    }
}

impl<S, T, A, B> PIso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Reads the converted environment.
    pub fn to_reader(&self) -> Reader<S, A> {
        self.as_getter().to_reader()
    }

    /// Same as [`PIso::to_reader`].
    pub fn ask(&self) -> Reader<S, A> {
        self.to_reader()
    }

    /// Reads a projection of the converted environment.
    pub fn asks<R, F>(&self, function: F) -> Reader<S, R>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        self.as_getter().asks(function)
    }
}

#[cfg(test)]
mod tests {
    use crate::optics::{Iso, Lens};
    use rstest::rstest;

    fn first() -> Lens<(i32, char), i32> {
        Lens::new(|pair: &(i32, char)| pair.0, |pair: (i32, char), value| (value, pair.1))
    }

    #[rstest]
    fn lens_readers_read_the_focus() {
        assert_eq!(first().to_reader().run((4, 'a')), 4);
        assert_eq!(first().ask().run((5, 'a')), 5);
        assert_eq!(first().asks(|n| n * 10).run((6, 'a')), 60);
    }

    #[rstest]
    fn iso_readers_read_the_converted_value() {
        let negated: Iso<i32, i32> = Iso::new(|n: &i32| -n, |n: i32| -n);
        assert_eq!(negated.ask().run(3), -3);
        assert_eq!(negated.asks(|n| n.to_string()).run(3), "-3");
    }
}
