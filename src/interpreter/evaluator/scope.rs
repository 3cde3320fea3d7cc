use std::fmt;

/// Variable bindings visible while evaluating one subtree.
///
/// Scopes form a chain that only grows: [`Scope::bind`] borrows the current
/// scope as the parent of a new one, so a binding lives exactly as long as
/// the evaluation step that introduced it and ancestors are never modified.
/// Lookups walk from the newest binding outwards, so inner bindings shadow
/// outer ones.
#[derive(Debug, Clone, Copy, Default)]
pub enum Scope<'a> {
    /// No bindings.
    #[default]
    Empty,
    /// One binding on top of a parent scope.
    Binding {
        /// Variable name, matched case-sensitively.
        name:   &'a str,
        /// Already evaluated value.
        value:  &'a str,
        /// The scope this binding extends.
        parent: &'a Scope<'a>,
    },
}

impl<'a> Scope<'a> {
    /// Returns a scope that extends `self` with `name = value`.
    ///
    /// # Example
    /// ```
    /// use calculator::interpreter::evaluator::scope::Scope;
    ///
    /// let root = Scope::Empty;
    /// let outer = root.bind("a", "1");
    /// let inner = outer.bind("a", "2");
    ///
    /// assert_eq!(inner.resolve("a"), Some("2"));
    /// assert_eq!(outer.resolve("a"), Some("1"));
    /// assert_eq!(root.resolve("a"), None);
    /// ```
    #[must_use]
    pub const fn bind<'b>(&'b self, name: &'b str, value: &'b str) -> Scope<'b> {
        Scope::Binding { name,
                         value,
                         parent: self }
    }

    /// Looks up the nearest binding of `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        let mut current = self;
        loop {
            match current {
                Self::Empty => return None,
                Self::Binding { name: bound,
                                value,
                                parent, } => {
                    if *bound == name {
                        return Some(*value);
                    }
                    current = *parent;
                },
            }
        }
    }

    /// Collects the visible bindings, newest first, skipping shadowed
    /// ones.
    fn visible(&self) -> Vec<(&'a str, &'a str)> {
        let mut seen = Vec::new();
        let mut current = self;
        while let Self::Binding { name, value, parent } = current {
            if !seen.iter().any(|(bound, _)| bound == name) {
                seen.push((*name, *value));
            }
            current = *parent;
        }
        seen
    }
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.visible()
                           .iter()
                           .rev()
                           .map(|(name, value)| format!("{name}={value}"))
                           .collect::<Vec<_>>();
        write!(f, "{{{}}}", bindings.join(", "))
    }
}
