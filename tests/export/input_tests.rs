use numlab::input::{parse_number_list, parse_scalar, ParseError};
use numlab::logging::{parse_level, LoggingError};
use simplelog::LevelFilter;

#[test]
fn parses_comma_separated_list() -> Result<(), ParseError> {
    assert_eq!(parse_number_list("1, 2.5,3 , -4e-1")?, vec![1.0, 2.5, 3.0, -0.4]);
    assert_eq!(parse_number_list("7")?, vec![7.0]);
    Ok(())
}

#[test]
fn reports_bad_token_position() {
    assert_eq!(
        parse_number_list("1, two, 3"),
        Err(ParseError::InvalidNumber { idx: 1, token: "two".to_string() }),
    );
    assert_eq!(
        parse_number_list("1,,3"),
        Err(ParseError::InvalidNumber { idx: 1, token: String::new() }),
    );
    assert_eq!(parse_number_list("   "), Err(ParseError::Empty));
}

#[test]
fn parses_scalars() {
    assert_eq!(parse_scalar(" 0.6 "), Ok(0.6));
    assert_eq!(parse_scalar(""), Err(ParseError::Empty));
    assert!(matches!(parse_scalar("1.4x"), Err(ParseError::InvalidNumber { .. })));
}

#[test]
fn log_levels() {
    assert_eq!(parse_level("debug").ok(), Some(LevelFilter::Debug));
    assert_eq!(parse_level("error").ok(), Some(LevelFilter::Error));
    assert!(matches!(parse_level("verbose"), Err(LoggingError::UnknownLevel(l)) if l == "verbose"));
}
