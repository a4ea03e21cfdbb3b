//! Parsed property paths.

use std::fmt;
use std::str::FromStr;

/// One step of a [`PropertyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A named key, written `name` or `["name"]`.
    ///
    /// On an array, a key made of digits addresses an element.
    Key(String),
    /// A position, written `[0]`.
    ///
    /// On an object, the index is looked up as its decimal key.
    Index(usize),
}

impl Segment {
    /// Keys that would not parse back to themselves are written in quoted
    /// bracket form. An empty key is one of them: between two brackets it
    /// would print as nothing at all.
    fn needs_quoting(&self) -> bool {
        match self {
            Self::Key(key) => key.is_empty() || key.contains(['.', '[', ']']),
            Self::Index(_) => false,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) if self.needs_quoting() => {
                write!(formatter, "[\"")?;
                for character in key.chars() {
                    if matches!(character, '"' | '\\') {
                        write!(formatter, "\\")?;
                    }
                    write!(formatter, "{character}")?;
                }
                write!(formatter, "\"]")
            }
            Self::Key(key) => write!(formatter, "{key}"),
            Self::Index(index) => write!(formatter, "[{index}]"),
        }
    }
}

/// A path into a nested container, such as `user.name` or
/// `orders[0].items[2].sku`.
///
/// Parsing never fails. Dots separate keys, brackets hold either an index
/// or a quoted key, and anything that does not fit the bracket grammar is
/// kept as literal key text.
///
/// # Examples
///
/// ```
/// use combinars::props::{PropertyPath, Segment};
///
/// let path = PropertyPath::parse("orders[0][\"line.items\"].sku");
/// assert_eq!(
///     path.segments(),
///     &[
///         Segment::Key("orders".into()),
///         Segment::Index(0),
///         Segment::Key("line.items".into()),
///         Segment::Key("sku".into()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct PropertyPath {
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Parses a dotted path.
    ///
    /// An empty string is the path made of one empty key.
    pub fn parse(path: &str) -> Self {
        let mut segments = Vec::new();
        let mut key = String::new();
        // Set after a bracket segment, where a following `.` or `[` must not
        // emit an empty key.
        let mut after_bracket = false;
        let mut characters = path.char_indices();

        while let Some((position, character)) = characters.next() {
            match character {
                '.' => {
                    if !after_bracket || !key.is_empty() {
                        segments.push(Segment::Key(std::mem::take(&mut key)));
                    }
                    after_bracket = false;
                }
                '[' => match parse_bracket(&path[position + 1..]) {
                    Some((segment, consumed)) => {
                        if !key.is_empty() {
                            segments.push(Segment::Key(std::mem::take(&mut key)));
                        }
                        segments.push(segment);
                        for _ in 0..consumed {
                            characters.next();
                        }
                        after_bracket = true;
                    }
                    None => {
                        key.push(character);
                        after_bracket = false;
                    }
                },
                _ => {
                    key.push(character);
                    after_bracket = false;
                }
            }
        }

        if !after_bracket || !key.is_empty() {
            segments.push(Segment::Key(key));
        }

        Self { segments }
    }

    /// Builds a path from explicit segments.
    ///
    /// No parsing happens, so keys may contain dots and brackets.
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments, addressing the container
    /// itself.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Parses the text after a `[` up to and including the matching `]`.
///
/// Returns the segment and the number of characters consumed after `[`.
fn parse_bracket(rest: &str) -> Option<(Segment, usize)> {
    let mut characters = rest.chars();
    match characters.next()? {
        quote @ ('"' | '\'') => {
            let mut key = String::new();
            let mut consumed = 1;
            let mut escaped = false;
            for character in characters.by_ref() {
                consumed += 1;
                if escaped {
                    key.push(character);
                    escaped = false;
                } else if character == '\\' {
                    escaped = true;
                } else if character == quote {
                    break;
                } else {
                    key.push(character);
                }
            }
            if characters.next()? != ']' {
                return None;
            }
            Some((Segment::Key(key), consumed + 1))
        }
        _ => {
            let end = rest.find(']')?;
            let inner = &rest[..end];
            let segment = inner.parse::<usize>().map_or_else(
                |_| Segment::Key(inner.to_string()),
                Segment::Index,
            );
            Some((segment, inner.chars().count() + 1))
        }
    }
}

impl FromStr for PropertyPath {
    type Err = std::convert::Infallible;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(path))
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for PropertyPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for PropertyPath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<Vec<Segment>> for PropertyPath {
    fn from(segments: Vec<Segment>) -> Self {
        Self::from_segments(segments)
    }
}

impl From<PropertyPath> for String {
    fn from(path: PropertyPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 && !segment.needs_quoting() && matches!(segment, Segment::Key(_)) {
                write!(formatter, ".")?;
            }
            write!(formatter, "{segment}")?;
        }
        Ok(())
    }
}
