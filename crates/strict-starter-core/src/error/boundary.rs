/// Macro to define error boundaries with automatic `From` implementation.
///
/// A boundary declares, once, how a foreign error type turns into one of the
/// crate's own errors. The generated `From` impl is what lets `?` cross the
/// boundary without a `map_err()` at every call site.
///
/// # Syntax
///
/// ```ignore
/// error_boundary!(SourceError => TargetError, |err_var| {
///     // conversion logic returning TargetError
/// });
/// ```
///
/// # Example
///
/// ```
/// use strict_starter_core::error_boundary;
///
/// #[derive(Debug, thiserror::Error)]
/// enum LoadError {
///     #[error("bad number: {0}")]
///     Number(String),
/// }
///
/// error_boundary!(std::num::ParseIntError => LoadError, |e| {
///     LoadError::Number(e.to_string())
/// });
///
/// fn parse_retries(raw: &str) -> Result<u32, LoadError> {
///     let retries = raw.trim().parse::<u32>()?;
///     Ok(retries)
/// }
///
/// assert_eq!(parse_retries(" 4 ").unwrap(), 4);
/// assert!(parse_retries("four").is_err());
/// ```
#[macro_export]
macro_rules! error_boundary {
    ($inner:ty => $outer:ty, |$err:ident| $body:expr) => {
        impl ::std::convert::From<$inner> for $outer {
            fn from($err: $inner) -> $outer {
                $body
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::error::StarterError;

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum ParseFailure {
        #[error("Parse: {0}")]
        Parse(String),
        #[error("Flag: {0}")]
        Flag(String),
    }

    error_boundary!(std::num::ParseIntError => ParseFailure, |e| {
        ParseFailure::Parse(e.to_string())
    });

    error_boundary!(std::str::ParseBoolError => ParseFailure, |e| {
        ParseFailure::Flag(e.to_string())
    });

    #[test]
    fn test_boundary_with_question_mark() {
        fn parse_number(s: &str) -> Result<i32, ParseFailure> {
            let num = s.parse::<i32>()?;
            Ok(num)
        }

        assert_eq!(parse_number("12"), Ok(12));
        match parse_number("not_a_number").unwrap_err() {
            ParseFailure::Parse(msg) => assert!(msg.contains("invalid digit")),
            other => panic!("Expected Parse variant, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_boundaries_same_target() {
        fn parse_flag(s: &str) -> Result<bool, ParseFailure> {
            Ok(s.parse::<bool>()?)
        }

        assert_eq!(parse_flag("true"), Ok(true));
        assert!(matches!(parse_flag("yes"), Err(ParseFailure::Flag(_))));
    }

    #[test]
    fn test_json_boundary_into_starter_error() {
        fn parse(raw: &str) -> Result<serde_json::Value, StarterError> {
            Ok(serde_json::from_str(raw)?)
        }

        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, StarterError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
