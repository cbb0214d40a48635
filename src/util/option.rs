pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch. Using
    /// this method states that the surrounding code has already ruled out None, it isn't a way to
    /// handle a missing value.
    ///
    /// No panics annotation is used to allow it to pass the clippy lint, the whole semantics are
    /// that if used, None is impossible.
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!(),
        }
    }
}
