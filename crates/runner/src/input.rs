use std::io::BufRead;

use super::error::Error;

/// Reads the step unit from the first non-blank line of `reader`.
///
/// Blank lines are skipped; `MissingStepUnit` is returned only at end of input.
pub fn read_step_unit<R: BufRead>(mut reader: R) -> Result<usize, Error> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::MissingStepUnit);
        }
        if !line.trim().is_empty() {
            return parse_step_unit(&line);
        }
    }
}

/// Parses the first whitespace-separated token of `line` as a positive integer.
pub fn parse_step_unit(line: &str) -> Result<usize, Error> {
    let token = line.split_whitespace().next().ok_or(Error::MissingStepUnit)?;

    match token.parse::<usize>() {
        Ok(0) | Err(_) => Err(Error::InvalidStepUnit(token.to_string())),
        Ok(step_unit) => Ok(step_unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_first_token() {
        assert_eq!(read_step_unit(Cursor::new("1000\n")).unwrap(), 1000);
        assert_eq!(parse_step_unit("  25 trailing words").unwrap(), 25);
    }

    #[test]
    fn test_skips_leading_blank_lines() {
        assert_eq!(read_step_unit(Cursor::new("\n\n10\n")).unwrap(), 10);
        assert_eq!(read_step_unit(Cursor::new("\n   \t\n  42")).unwrap(), 42);
    }

    #[test]
    fn test_blank_lines_then_eof() {
        assert!(matches!(
            read_step_unit(Cursor::new("\n \n\n")),
            Err(Error::MissingStepUnit)
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            read_step_unit(Cursor::new("")),
            Err(Error::MissingStepUnit)
        ));
        assert!(matches!(parse_step_unit("   \n"), Err(Error::MissingStepUnit)));
    }

    #[test]
    fn test_rejects_non_positive_and_garbage() {
        for bad in ["0", "-5", "ten", "3.5"] {
            match parse_step_unit(bad) {
                Err(Error::InvalidStepUnit(token)) => assert_eq!(token, bad),
                other => panic!("Expected InvalidStepUnit for {:?}, got: {:?}", bad, other),
            }
        }
    }
}
