use crate::{Error, Regex, Shape, shape};

impl Regex {
    /// `X*`
    pub fn zero_or_more(&self) -> Result<Regex, Error> {
        self.repeat("*")
    }

    /// `X+`
    pub fn one_or_more(&self) -> Result<Regex, Error> {
        self.repeat("+")
    }

    /// `X?`
    pub fn optional(&self) -> Result<Regex, Error> {
        self.repeat("?")
    }

    /// `X{m}`
    pub fn exactly(&self, m: u32) -> Result<Regex, Error> {
        self.repeat(&format!("{{{m}}}"))
    }

    /// Between `m` and `n` repetitions, inclusive.
    ///
    /// `(0, 1)` is written `X?` and `m == n` is written `X{m}`.
    pub fn m_to_n(&self, m: u32, n: u32) -> Result<Regex, Error> {
        match (m, n) {
            (0, 1) => self.optional(),
            _ if m == n => self.exactly(m),
            _ if m > n => {
                self.check_not_repeating()?;
                Err(Error::invalid_argument(format!(
                    "lower bound {m} exceeds upper bound {n}"
                )))
            }
            _ => self.repeat(&format!("{{{m},{n}}}")),
        }
    }

    /// `m` or more repetitions. `0` and `1` are written `X*` and `X+`.
    pub fn m_or_more(&self, m: u32) -> Result<Regex, Error> {
        match m {
            0 => self.zero_or_more(),
            1 => self.one_or_more(),
            _ => self.repeat(&format!("{{{m},}}")),
        }
    }

    /// Make the trailing repetition non-greedy, e.g. `X*` becomes `X*?`.
    pub fn lazy(&self) -> Result<Regex, Error> {
        let text = self.render();
        if !shape::is_repeating(&text) || shape::is_lazy(&text) {
            return Err(Error::invalid_argument(format!(
                "`{text}` does not end in a greedy repetition"
            )));
        }
        Ok(self.map_fragments(|f| f.push("?")))
    }

    fn check_not_repeating(&self) -> Result<(), Error> {
        let text = self.render();
        if shape::is_repeating(&text) {
            tracing::trace!("rejecting repetition of `{text}`");
            return Err(Error::AlreadyRepeating(text));
        }
        Ok(())
    }

    /// Group as needed so `suffix` binds to the whole value, then append it.
    fn repeat(&self, suffix: &str) -> Result<Regex, Error> {
        self.check_not_repeating()?;
        if self.shape() == Shape::Lookaround {
            return Err(Error::invalid_argument(format!(
                "lookaround `{self}` cannot be repeated"
            )));
        }
        let grouped = self.to_non_capture_group()?;
        Ok(grouped.map_fragments(|f| f.push(suffix)))
    }
}
