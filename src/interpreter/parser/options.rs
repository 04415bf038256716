/// How an opening parenthesis is matched with a closing one.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ParenMatching {
    /// The first `)` after a `(` closes it, regardless of nesting.
    ///
    /// `(13-4)-(12+1)` parses normally, but `((1+2)+3)` is rejected because
    /// the inner slice `(1+2` has no closing parenthesis of its own.
    #[default]
    FirstClosing,
    /// A depth counter pairs each `(` with the `)` at the same nesting level.
    Balanced,
}

/// Options that control parsing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    /// Parenthesis matching strategy.
    pub paren_matching: ParenMatching,
}

impl Options {
    /// Options using depth-aware parenthesis matching.
    #[must_use]
    pub const fn balanced() -> Self {
        Self { paren_matching: ParenMatching::Balanced }
    }
}
