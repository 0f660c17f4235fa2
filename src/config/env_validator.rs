//! Environment variable validation
//!
//! Invalid `MICROTOPO_*` values fall back to the configured value and
//! print a warning, with a typo suggestion when one valid value is close.

use std::io::Write;

/// Validator for one environment variable with a closed set of values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, returning `fallback` (and warning on stderr) if it is invalid.
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Same as [`parse`](Self::parse) with an explicit warning sink.
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value.trim()) {
            return parsed;
        }

        tracing::debug!(var = self.var_name, value, "ignoring invalid environment value");
        let hint = self
            .closest(value)
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        fallback
    }

    fn closest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .filter(|(_, dist)| (1..=2).contains(dist))
            .min_by_key(|(_, dist)| *dist)
            .map(|(valid, _)| valid)
    }
}

/// Edit distance between two strings, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
