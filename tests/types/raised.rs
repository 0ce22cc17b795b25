use failable::{Raised, NULL_RESULT_MESSAGE};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Outer(Inner);

#[derive(Debug)]
struct Inner;

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("outer failed")
    }
}

impl fmt::Display for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("inner failed")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl Error for Inner {}

#[test]
fn error_variant_displays_wrapped_error() {
    let raised = Raised::Error("bang");

    assert!(raised.is_error());
    assert!(!raised.is_null_result());
    assert_eq!(raised.to_string(), "bang");
    assert_eq!(raised.error(), Some(&"bang"));
}

#[test]
fn null_result_has_fixed_text() {
    let raised: Raised<&str> = Raised::NullResult;

    assert!(raised.is_null_result());
    assert!(!raised.is_panic());
    assert_eq!(raised.to_string(), NULL_RESULT_MESSAGE);
    assert_eq!(NULL_RESULT_MESSAGE, "a null return value was absorbed");
    assert_eq!(raised.into_error(), None);
}

#[test]
fn raised_is_matched_with_a_wildcard_arm() {
    fn describe(raised: &Raised<&str>) -> &'static str {
        match raised {
            Raised::Error(_) => "error",
            Raised::NullResult => "empty",
            _ => "panic",
        }
    }

    assert_eq!(describe(&Raised::Error("bang")), "error");
    assert_eq!(describe(&Raised::NullResult), "empty");
}

#[test]
fn source_delegates_to_wrapped_error() {
    let raised = Raised::Error(Outer(Inner));

    let source = raised.source().expect("outer error has a source");
    assert_eq!(source.to_string(), "inner failed");
}

#[test]
fn map_error_keeps_null_result() {
    let raised: Raised<&str> = Raised::NullResult;
    assert!(raised.map_error(str::len).is_null_result());

    let mapped = Raised::Error("four").map_error(str::len);
    assert_eq!(mapped.into_error(), Some(4));
}

#[test]
fn debug_output_names_the_variant() {
    assert_eq!(format!("{:?}", Raised::Error(1)), "Error(1)");
    assert_eq!(format!("{:?}", Raised::<i32>::NullResult), "NullResult");
}
