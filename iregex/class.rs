use crate::{Error, Fragments, Operand, Regex, shape};

impl Regex {
    /// Any one of `chars`.
    ///
    /// Each item must be a single character or a two-character escape such as
    /// `\d`. A single item is emitted without brackets.
    pub fn any_of<I>(chars: I) -> Result<Regex, Error>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let members = class_members(chars)?;
        if let [only] = &*members {
            return Ok(Regex::literal(escape_atom(only)));
        }
        Ok(Regex::from_fragments(bracket("[", &members)))
    }

    /// Any one character except `chars`. Always emitted as `[^...]`.
    pub fn none_of<I>(chars: I) -> Result<Regex, Error>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let members = class_members(chars)?;
        Ok(Regex::from_fragments(bracket("[^", &members)))
    }
}

fn class_members<I>(chars: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let members = chars
        .into_iter()
        .map(|item| {
            let text = item.into().into_regex().render();
            if shape::is_single_char(&text) {
                Ok(text)
            } else {
                Err(Error::NotACharacter(text))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    if members.is_empty() {
        return Err(Error::invalid_argument("empty character set"));
    }
    Ok(members)
}

fn bracket(open: &str, members: &[String]) -> Fragments {
    members
        .iter()
        .fold(Fragments::single(open), |acc, member| {
            acc.push(&escape_member(member))
        })
        .push("]")
}

/// Escape a lone metacharacter so it matches itself outside brackets, the
/// same way it would inside them.
fn escape_atom(member: &str) -> String {
    match single(member) {
        Some(c) if regex_syntax::is_meta_character(c) => format!("\\{c}"),
        _ => member.to_owned(),
    }
}

/// Escape characters that have meaning inside `[...]`.
fn escape_member(member: &str) -> String {
    match single(member) {
        Some(c @ ('[' | ']' | '^' | '-' | '\\' | '&' | '~')) => format!("\\{c}"),
        _ => member.to_owned(),
    }
}

fn single(member: &str) -> Option<char> {
    let mut chars = member.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
