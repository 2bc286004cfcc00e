//! Conversion between flat strings and [`RichText`] values.
//!
//! Multi-line strings are stored by the engine as an `ArgumentFormat` text:
//! a `{0}<br>{1}<br>...` pattern over one plain text per line. [`encode`]
//! always produces that shape with [`MULTILINE_TEMPLATE_GUID`]; [`decode`]
//! also accepts the other templates the engine has been seen to emit.

use super::model::{ArgumentValue, NamedArgument, RichText};
use crate::util::{Error, GvasString, Result};
use smallvec::{smallvec, SmallVec};

/// Marker used in flat strings for a line break.
pub const LINE_SEPARATOR: &str = "<br>";

/// Template GUID written by [`encode`] for multi-line text.
pub const MULTILINE_TEMPLATE_GUID: &str = "56F8D27149CC5E2D12103BBEBFCA9097";

/// Template GUIDs accepted by [`decode`].
pub const KNOWN_TEMPLATE_GUIDS: [&str; 3] = [
    MULTILINE_TEMPLATE_GUID,
    "1428110346E6AD292230C4AA503E3FE9",
    "69981E2B47B2AABC01CE39842FB03A96",
];

/// Maximum nesting of texts inside argument values accepted by [`decode`].
pub const MAX_DECODE_DEPTH: usize = 64;

const SIMPLE_TEXT_FLAGS: u32 = 0;
const FORMAT_TEXT_FLAGS: u32 = 1;
const LINE_TEXT_FLAGS: u32 = 2;
const PATTERN_TEXT_FLAGS: u32 = 8;

/// Convert a flat string into the text value the engine would store.
pub fn encode(s: Option<&str>) -> RichText {
    let Some(s) = s else {
        return RichText::none(SIMPLE_TEXT_FLAGS, None);
    };

    let lines: Vec<&str> = s.split(LINE_SEPARATOR).collect();
    match lines.as_slice() {
        [] => RichText::none(SIMPLE_TEXT_FLAGS, None),
        [_] => RichText::None {
            flags: SIMPLE_TEXT_FLAGS,
            values: smallvec![Some(s.to_string())],
        },
        _ => {
            let pattern = (0..lines.len())
                .map(|i| format!("{{{i}}}"))
                .collect::<Vec<_>>()
                .join(LINE_SEPARATOR);
            let args = lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let values: SmallVec<[GvasString; 1]> = if line.is_empty() {
                        SmallVec::new()
                    } else {
                        smallvec![Some(line.to_string())]
                    };
                    NamedArgument {
                        name: Some(i.to_string()),
                        value: ArgumentValue::Text(RichText::None {
                            flags: LINE_TEXT_FLAGS,
                            values,
                        }),
                    }
                })
                .collect();

            RichText::ArgumentFormat {
                flags: FORMAT_TEXT_FLAGS,
                source_format: Box::new(RichText::Base {
                    flags: PATTERN_TEXT_FLAGS,
                    namespace: Some(String::new()),
                    key: Some(MULTILINE_TEMPLATE_GUID.to_string()),
                    value: Some(pattern),
                }),
                args,
            }
        }
    }
}

/// Convert a text value back into a flat string.
///
/// Fails on the first malformed or unsupported component; no partial
/// output is produced.
pub fn decode(text: &RichText) -> Result<GvasString> {
    decode_at(text, 0).inspect_err(|e| tracing::debug!("text decode failed: {e}"))
}

fn decode_at(text: &RichText, depth: usize) -> Result<GvasString> {
    if depth > MAX_DECODE_DEPTH {
        return Err(Error::RecursionLimit(MAX_DECODE_DEPTH));
    }

    match text {
        RichText::Base {
            namespace, value, ..
        } => {
            if namespace.as_deref() != Some("") {
                return Err(Error::UnexpectedNamespace(namespace.clone()));
            }
            Ok(value.clone())
        }
        RichText::ArgumentFormat {
            source_format,
            args,
            ..
        } => {
            let RichText::Base { key, value, .. } = source_format.as_ref() else {
                return Err(Error::MalformedSourceFormat(source_format.history_type()));
            };
            if !key
                .as_deref()
                .is_some_and(|k| KNOWN_TEMPLATE_GUIDS.contains(&k))
            {
                return Err(Error::UnknownTemplateGuid(key.clone()));
            }
            let pattern = value.as_deref().ok_or(Error::NullPattern)?;
            substitute(pattern, args, depth).map(Some)
        }
        RichText::AsNumber { source_value, .. } => match source_value.as_ref() {
            ArgumentValue::Int(n) => Ok(Some(n.to_string())),
            ArgumentValue::Text(inner) => decode_at(inner, depth + 1),
        },
        RichText::None { values, .. } => match values.as_slice() {
            [] => Ok(None),
            [Some(v)] => Ok(Some(v.clone())),
            [None] => Err(Error::NullInSimpleText),
            _ => Err(Error::TooManyEntries(values.len())),
        },
    }
}

/// Replace every `{<digits>}` token in `pattern` with its decoded argument.
///
/// Anything that is not a complete token is copied through unchanged.
fn substitute(pattern: &str, args: &[NamedArgument], depth: usize) -> Result<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits == 0 || !after[digits..].starts_with('}') {
            out.push('{');
            rest = after;
            continue;
        }

        // Saturate so huge indices are reported as out of range
        let index = after[..digits]
            .parse::<usize>()
            .unwrap_or(usize::MAX);
        let arg = args.get(index).ok_or(Error::ArgumentIndexOutOfRange {
            index,
            count: args.len(),
        })?;
        let ArgumentValue::Text(inner) = &arg.value else {
            return Err(Error::ExpectedTextArgument { index });
        };
        let decoded = decode_at(inner, depth + 1)?;
        tracing::trace!(index, ?decoded, "substituted text argument");
        out.push_str(decoded.as_deref().unwrap_or_default());

        rest = &after[digits + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: Option<&str>) -> NamedArgument {
        NamedArgument {
            name: Some("0".into()),
            value: ArgumentValue::Text(RichText::none(LINE_TEXT_FLAGS, s.map(String::from))),
        }
    }

    fn format(key: &str, pattern: Option<&str>, args: Vec<NamedArgument>) -> RichText {
        RichText::ArgumentFormat {
            flags: FORMAT_TEXT_FLAGS,
            source_format: Box::new(RichText::Base {
                flags: PATTERN_TEXT_FLAGS,
                namespace: Some(String::new()),
                key: Some(key.into()),
                value: pattern.map(String::from),
            }),
            args,
        }
    }

    #[test]
    fn test_encode_null() {
        let t = encode(None);
        assert_eq!(t, RichText::None { flags: 0, values: SmallVec::new() });
        assert_eq!(decode(&t).unwrap(), None);
    }

    #[test]
    fn test_encode_single_line() {
        let t = encode(Some("Hello"));
        assert_eq!(
            t,
            RichText::None {
                flags: 0,
                values: smallvec![Some("Hello".to_string())]
            }
        );
        assert_eq!(decode(&t).unwrap().as_deref(), Some("Hello"));
    }

    #[test]
    fn test_encode_empty_string() {
        let t = encode(Some(""));
        assert!(matches!(t, RichText::None { ref values, .. } if values.len() == 1));
        assert_eq!(decode(&t).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_encode_two_lines() {
        let t = encode(Some("Hello<br>World"));
        let RichText::ArgumentFormat {
            flags,
            source_format,
            args,
        } = &t
        else {
            panic!("expected ArgumentFormat, got {t:?}");
        };
        assert_eq!(*flags, 1);
        assert_eq!(
            **source_format,
            RichText::base(8, MULTILINE_TEMPLATE_GUID, "{0}<br>{1}")
        );
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name.as_deref(), Some("0"));
        assert_eq!(args[1].name.as_deref(), Some("1"));
        assert_eq!(
            args[1].value,
            ArgumentValue::Text(RichText::none(2, Some("World".into())))
        );
        assert_eq!(decode(&t).unwrap().as_deref(), Some("Hello<br>World"));
    }

    #[test]
    fn test_encode_blank_lines() {
        let t = encode(Some("<br>middle<br>"));
        let RichText::ArgumentFormat { args, .. } = &t else {
            panic!("expected ArgumentFormat");
        };
        assert_eq!(args.len(), 3);
        assert_eq!(args[0].value, ArgumentValue::Text(RichText::none(2, None)));
        assert_eq!(decode(&t).unwrap().as_deref(), Some("<br>middle<br>"));
    }

    #[test]
    fn test_decode_base() {
        let t = RichText::base(0, "key", "value");
        assert_eq!(decode(&t).unwrap().as_deref(), Some("value"));

        let t = RichText::Base {
            flags: 0,
            namespace: Some("x".into()),
            key: None,
            value: Some("value".into()),
        };
        assert!(matches!(
            decode(&t),
            Err(Error::UnexpectedNamespace(Some(ref ns))) if ns == "x"
        ));
    }

    #[test]
    fn test_decode_unknown_guid() {
        let t = format("UNKNOWN_GUID", Some("{0}"), vec![line(Some("a"))]);
        assert!(matches!(
            decode(&t),
            Err(Error::UnknownTemplateGuid(Some(ref k))) if k == "UNKNOWN_GUID"
        ));

        let t = format(KNOWN_TEMPLATE_GUIDS[1], Some("[{0}]"), vec![line(Some("a"))]);
        assert_eq!(decode(&t).unwrap().as_deref(), Some("[a]"));
    }

    #[test]
    fn test_decode_malformed_source_format() {
        let t = RichText::ArgumentFormat {
            flags: 1,
            source_format: Box::new(RichText::none(0, Some("{0}".into()))),
            args: vec![],
        };
        assert!(matches!(
            decode(&t),
            Err(Error::MalformedSourceFormat(crate::text::TextHistoryType::None))
        ));
    }

    #[test]
    fn test_decode_null_pattern() {
        let t = format(MULTILINE_TEMPLATE_GUID, None, vec![]);
        assert!(matches!(decode(&t), Err(Error::NullPattern)));
    }

    #[test]
    fn test_decode_int_argument() {
        let t = format(
            MULTILINE_TEMPLATE_GUID,
            Some("{0}"),
            vec![NamedArgument::new("0", 3)],
        );
        assert!(matches!(
            decode(&t),
            Err(Error::ExpectedTextArgument { index: 0 })
        ));
    }

    #[test]
    fn test_decode_index_out_of_range() {
        let t = format(
            MULTILINE_TEMPLATE_GUID,
            Some("{0}<br>{5}"),
            vec![line(Some("a")), line(Some("b"))],
        );
        assert!(matches!(
            decode(&t),
            Err(Error::ArgumentIndexOutOfRange { index: 5, count: 2 })
        ));

        let t = format(MULTILINE_TEMPLATE_GUID, Some("{99999999999999999999999}"), vec![]);
        assert!(matches!(
            decode(&t),
            Err(Error::ArgumentIndexOutOfRange { index: usize::MAX, .. })
        ));
    }

    #[test]
    fn test_decode_non_token_braces() {
        let t = format(
            MULTILINE_TEMPLATE_GUID,
            Some("{a} {} {1 {{0}} {"),
            vec![line(Some("x"))],
        );
        assert_eq!(decode(&t).unwrap().as_deref(), Some("{a} {} {1 {x} {"));
    }

    #[test]
    fn test_decode_repeated_and_reordered_tokens() {
        let t = format(
            MULTILINE_TEMPLATE_GUID,
            Some("{1}-{0}-{1}"),
            vec![line(Some("a")), line(None)],
        );
        assert_eq!(decode(&t).unwrap().as_deref(), Some("-a-"));
    }

    #[test]
    fn test_decode_as_number() {
        let t = RichText::AsNumber {
            flags: 0,
            source_value: Box::new(ArgumentValue::Int(-42)),
            format_options: None,
            target_culture: None,
        };
        assert_eq!(decode(&t).unwrap().as_deref(), Some("-42"));

        let t = RichText::AsNumber {
            flags: 0,
            source_value: Box::new(ArgumentValue::Text(encode(Some("a<br>b")))),
            format_options: None,
            target_culture: Some("en".into()),
        };
        assert_eq!(decode(&t).unwrap().as_deref(), Some("a<br>b"));
    }

    #[test]
    fn test_decode_simple_text_errors() {
        let t = RichText::None {
            flags: 0,
            values: smallvec![None],
        };
        assert!(matches!(decode(&t), Err(Error::NullInSimpleText)));

        let t = RichText::None {
            flags: 0,
            values: smallvec![Some("a".into()), Some("b".into())],
        };
        assert!(matches!(decode(&t), Err(Error::TooManyEntries(2))));
    }

    #[test]
    fn test_decode_recursion_limit() {
        let mut t = RichText::none(0, Some("leaf".into()));
        for _ in 0..=MAX_DECODE_DEPTH {
            t = RichText::AsNumber {
                flags: 0,
                source_value: Box::new(ArgumentValue::Text(t)),
                format_options: None,
                target_culture: None,
            };
        }
        assert!(matches!(decode(&t), Err(Error::RecursionLimit(MAX_DECODE_DEPTH))));
    }
}
