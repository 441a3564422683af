//! Collects code fragments while a name is being encoded.

/// Primary and alternate codes built side by side.
///
/// Until a rule forks the two readings, `alternate` mirrors `primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CodeAccumulator {
    primary: String,
    alternate: String,
    has_alternate: bool,
}

impl CodeAccumulator {
    /// Append the same fragment to both codes.
    pub(crate) fn emit(&mut self, code: &str) {
        self.primary.push_str(code);
        self.alternate.push_str(code);
    }

    /// Append diverging fragments; either may be empty.
    pub(crate) fn emit_split(&mut self, primary: &str, alternate: &str) {
        self.has_alternate = true;
        self.primary.push_str(primary);
        self.alternate.push_str(alternate);
    }

    /// Both codes already hold at least `stop_length` characters.
    pub(crate) fn is_saturated(&self, stop_length: usize) -> bool {
        self.primary.len() >= stop_length && self.alternate.len() >= stop_length
    }

    /// Finish encoding: `(primary, alternate, has_alternate)`.
    ///
    /// The alternate is emptied when no rule ever forked, and both codes are
    /// cut to `stop_length` when given.
    pub(crate) fn finish(self, stop_length: Option<usize>) -> (String, String, bool) {
        let Self {
            mut primary,
            mut alternate,
            has_alternate,
        } = self;

        if !has_alternate {
            alternate.clear();
        }

        if let Some(stop) = stop_length {
            primary.truncate(stop);
            alternate.truncate(stop);
        }

        (primary, alternate, has_alternate)
    }
}
