//! Coercion of raw user text into model numbers.
//!
//! Edits arrive as free text from whatever surface drives the model. Nothing
//! here ever fails: malformed input is coerced, never reported.

/// Variable count used when the text carries no integer at all.
pub const DEFAULT_VARIABLE_COUNT: usize = 2;

/// Parse a coefficient or right-hand-side value.
///
/// The longest numeric prefix is used (`"3.5kg"` is `3.5`). Text with no
/// numeric prefix, and prefixes that overflow to infinity, become `0.0`.
pub fn parse_coefficient(text: &str) -> f64 {
    let mut scanner = NumberScanner::new(text);
    let Some(prefix) = scanner.read_float() else {
        return 0.0;
    };
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a requested variable count.
///
/// Uses the leading integer (`"3.7"` is `3`). Text with no integer prefix
/// yields [`DEFAULT_VARIABLE_COUNT`]. Negative values come back as `0` and are
/// left for the model's clamp to raise.
pub fn parse_variable_count(text: &str) -> usize {
    let mut scanner = NumberScanner::new(text);
    let Some(prefix) = scanner.read_integer() else {
        return DEFAULT_VARIABLE_COUNT;
    };
    if prefix.starts_with('-') {
        return 0;
    }
    let digits = prefix.trim_start_matches('+');
    digits.parse::<usize>().unwrap_or(usize::MAX)
}

struct NumberScanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> NumberScanner<'a> {
    fn new(source: &'a str) -> Self {
        let trimmed = source.trim_start();
        Self {
            source: trimmed,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_sign(&mut self) {
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    fn read_integer(&mut self) -> Option<&'a str> {
        self.skip_sign();
        if self.skip_digits() == 0 {
            return None;
        }
        Some(&self.source[..self.pos])
    }

    fn read_float(&mut self) -> Option<&'a str> {
        self.skip_sign();
        let mut digits = self.skip_digits();

        if self.peek() == Some('.') {
            self.advance();
            digits += self.skip_digits();
        }
        if digits == 0 {
            return None;
        }

        // Exponent only counts when digits follow it
        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_digit = match self.peek_at(1) {
                Some('+' | '-') => self.peek_at(2),
                other => other,
            };
            if exponent_digit.is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
                self.skip_sign();
                self.skip_digits();
            }
        }

        Some(&self.source[..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_coefficient("3"), 3.0);
        assert_eq!(parse_coefficient("-2.5"), -2.5);
        assert_eq!(parse_coefficient("  +4"), 4.0);
        assert_eq!(parse_coefficient(".5"), 0.5);
        assert_eq!(parse_coefficient("1e3"), 1000.0);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_coefficient("3.5kg"), 3.5);
        assert_eq!(parse_coefficient("12abc"), 12.0);
        assert_eq!(parse_coefficient("2e"), 2.0);
        assert_eq!(parse_coefficient("7."), 7.0);
    }

    #[test]
    fn test_garbage_becomes_zero() {
        assert_eq!(parse_coefficient(""), 0.0);
        assert_eq!(parse_coefficient("abc"), 0.0);
        assert_eq!(parse_coefficient("-"), 0.0);
        assert_eq!(parse_coefficient("."), 0.0);
        assert_eq!(parse_coefficient("1e999"), 0.0);
    }

    #[test]
    fn test_variable_count() {
        assert_eq!(parse_variable_count("4"), 4);
        assert_eq!(parse_variable_count("3.7"), 3);
        assert_eq!(parse_variable_count("x"), DEFAULT_VARIABLE_COUNT);
        assert_eq!(parse_variable_count(""), DEFAULT_VARIABLE_COUNT);
        assert_eq!(parse_variable_count("-5"), 0);
        assert_eq!(parse_variable_count("99999999999999999999999"), usize::MAX);
    }
}
