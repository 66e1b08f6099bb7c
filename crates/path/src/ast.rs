//! Structured forms of reference strings.
use std::fmt;

/// The traversal kind of a reference string.
///
/// Exactly one kind applies to any string; see [`crate::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `.Doc.path` or `=.Doc.path`: looked up from the document root.
    Root,
    /// `..path` or `=..path`: looked up from the current page.
    Local,
    /// `~/path`: substituted with the configured base URL.
    Tilde,
    /// An object with a `=.builtIn...` key: a function reference.
    Eval,
    /// Anything else.
    Literal,
}

impl RefKind {
    /// Whether values of this kind are dereferenced against data.
    pub fn is_reference(&self) -> bool {
        !matches!(self, RefKind::Literal | RefKind::Eval)
    }
}

/// One step of a path walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A map key.
    Key(String),
    /// A sequence index (a segment made only of ASCII digits).
    Index(usize),
}

impl Segment {
    /// The segment as a map key; indices are rendered as their decimal form.
    pub fn as_key(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Segment::Key(key) => key.as_str().into(),
            Segment::Index(index) => index.to_string().into(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A parsed reference: its kind, whether it carried the `=` eval marker, and
/// its segments with the sigil removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    pub kind: RefKind,
    pub eval: bool,
    pub segments: Vec<Segment>,
}

impl Path {
    /// The document named by a root path.
    pub fn document(&self) -> Option<&str> {
        match (self.kind, self.segments.first()) {
            (RefKind::Root, Some(Segment::Key(name))) => Some(name),
            _ => None,
        }
    }

    /// Segments to walk once the starting value has been found.
    ///
    /// Root paths skip the document name; every other kind walks them all.
    pub fn walk_segments(&self) -> &[Segment] {
        match self.kind {
            RefKind::Root => self.segments.get(1..).unwrap_or(&[]),
            _ => &self.segments,
        }
    }

    pub fn is_eval(&self) -> bool {
        self.eval
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.eval {
            f.write_str("=")?;
        }
        let separator = match self.kind {
            RefKind::Root => {
                f.write_str(".")?;
                "."
            }
            RefKind::Local => {
                f.write_str("..")?;
                "."
            }
            RefKind::Tilde => {
                f.write_str("~/")?;
                "/"
            }
            RefKind::Eval | RefKind::Literal => ".",
        };
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
