//! A `nom`-based splitter for reference paths.
use super::ast::{Path, RefKind, Segment};
use crate::classify;
use crate::error::PathError;
use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::char,
    combinator::map,
    multi::separated_list1,
};

// --- Main Public Parser ---

/// Parses a reference string into its kind and segments.
///
/// The sigil (`.`, `..`, `=.`, `=..`, `~/`) is consumed and never produces a
/// segment. Literal strings are split on `.` as-is, which is how iterator
/// paths like `itemObject.name` are walked.
pub fn to_path(reference: &str) -> Result<Path, PathError> {
    let kind = classify(reference);
    let eval = reference.starts_with('=') && matches!(kind, RefKind::Root | RefKind::Local);

    let body = match kind {
        RefKind::Local => reference
            .strip_prefix("=..")
            .or_else(|| reference.strip_prefix(".."))
            .unwrap_or(reference),
        RefKind::Root => reference
            .strip_prefix("=.")
            .or_else(|| reference.strip_prefix('.'))
            .unwrap_or(reference),
        RefKind::Tilde => {
            let rest = reference.strip_prefix("~/").unwrap_or(reference);
            let segments = rest
                .split('/')
                .filter(|part| !part.is_empty())
                .map(|part| Segment::Key(part.to_string()))
                .collect();
            return Ok(Path { kind, eval, segments });
        }
        RefKind::Eval | RefKind::Literal => reference,
    };

    if body.is_empty() {
        return Err(PathError::EmptyPath(reference.to_string()));
    }

    match segments(body) {
        Ok(("", segments)) => Ok(Path { kind, eval, segments }),
        Ok((rem, _)) => Err(PathError::Parse(
            reference.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(PathError::Parse(reference.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn segment(input: &str) -> IResult<&str, Segment> {
    map(take_till1(|c: char| c == '.'), |token: &str| {
        if token.bytes().all(|b| b.is_ascii_digit())
            && let Ok(index) = token.parse::<usize>()
        {
            Segment::Index(index)
        } else {
            Segment::Key(token.to_string())
        }
    })
    .parse(input)
}

fn segments(input: &str) -> IResult<&str, Vec<Segment>> {
    separated_list1(char('.'), segment).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(path: &Path) -> Vec<String> {
        path.segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_path_drops_sigil() {
        let path = to_path(".Abc.fruit.0.abc").unwrap();
        assert_eq!(path.kind, RefKind::Root);
        assert!(!path.is_eval());
        assert_eq!(
            path.segments,
            vec![
                Segment::Key("Abc".into()),
                Segment::Key("fruit".into()),
                Segment::Index(0),
                Segment::Key("abc".into()),
            ]
        );
        assert_eq!(path.document(), Some("Abc"));
        assert_eq!(path.walk_segments().len(), 3);
    }

    #[test]
    fn test_eval_root_and_local() {
        let root = to_path("=.Global.user.name").unwrap();
        assert_eq!(root.kind, RefKind::Root);
        assert!(root.is_eval());
        assert_eq!(keys(&root), vec!["Global", "user", "name"]);

        let local = to_path("=..formData.password").unwrap();
        assert_eq!(local.kind, RefKind::Local);
        assert!(local.is_eval());
        assert_eq!(keys(&local), vec!["formData", "password"]);
        assert_eq!(local.walk_segments().len(), 2);
    }

    #[test]
    fn test_tilde_splits_on_slash() {
        let path = to_path("~/assets/logo.png").unwrap();
        assert_eq!(path.kind, RefKind::Tilde);
        assert_eq!(keys(&path), vec!["assets", "logo.png"]);
        assert_eq!(path.to_string(), "~/assets/logo.png");
    }

    #[test]
    fn test_literal_iterator_path() {
        let path = to_path("itemObject.tags.1").unwrap();
        assert_eq!(path.kind, RefKind::Literal);
        assert_eq!(path.segments[2], Segment::Index(1));
    }

    #[test]
    fn test_display_round_trips() {
        for reference in [".Global.a.0", "..formData.x", "=.Global.y", "=..z"] {
            assert_eq!(to_path(reference).unwrap().to_string(), reference);
        }
    }

    #[test]
    fn test_empty_segment_is_an_error() {
        let err = to_path(".Global..x").unwrap_err();
        assert!(matches!(err, PathError::Parse(..)));
        let err = to_path(".Global.x.").unwrap_err();
        assert!(matches!(err, PathError::Parse(..)));
    }

    #[test]
    fn test_huge_index_is_a_key() {
        let path = to_path("..list.99999999999999999999999").unwrap();
        assert!(matches!(path.segments[1], Segment::Key(_)));
    }
}
