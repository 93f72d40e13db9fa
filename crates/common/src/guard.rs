//! Reusable argument checks that report violations as [`Outcome`] values.

use std::fmt::Debug;

use crate::result::Outcome;

/// A named argument for the bulk guards.
#[derive(Debug, Clone)]
pub struct GuardArgument<'a, T> {
    pub argument: T,
    pub argument_name: &'a str,
}

impl<'a, T> GuardArgument<'a, T> {
    pub fn new(argument: T, argument_name: &'a str) -> Self {
        Self {
            argument,
            argument_name,
        }
    }
}

/// Succeeds when `actual_value > min_value`.
pub fn greater_than(min_value: i64, actual_value: i64) -> Outcome<()> {
    if actual_value > min_value {
        Outcome::ok(())
    } else {
        Outcome::fail(format!(
            "Number given {{{actual_value}}} is not greater than {{{min_value}}}"
        ))
    }
}

/// Succeeds when `text` has at least `num_chars` characters.
pub fn against_at_least(num_chars: usize, text: &str) -> Outcome<()> {
    if text.chars().count() >= num_chars {
        Outcome::ok(())
    } else {
        Outcome::fail(format!("Text is not at least {num_chars} chars."))
    }
}

/// Succeeds when `text` has at most `num_chars` characters.
pub fn against_at_most(num_chars: usize, text: &str) -> Outcome<()> {
    if text.chars().count() <= num_chars {
        Outcome::ok(())
    } else {
        Outcome::fail(format!("Text is greater than {num_chars} chars."))
    }
}

/// Fails when a required argument is missing.
pub fn against_none<T>(argument: Option<&T>, argument_name: &str) -> Outcome<()> {
    match argument {
        Some(_) => Outcome::ok(()),
        None => Outcome::fail(format!("{argument_name} is null or undefined")),
    }
}

/// Fails on the first missing argument.
pub fn against_none_bulk<T>(args: &[GuardArgument<'_, Option<T>>]) -> Outcome<()> {
    for arg in args {
        let result = against_none(arg.argument.as_ref(), arg.argument_name);
        if result.is_failure() {
            return result;
        }
    }
    Outcome::ok(())
}

/// Succeeds when `value` is one of `valid_values`.
pub fn is_one_of<T: PartialEq + Debug>(
    value: &T,
    valid_values: &[T],
    argument_name: &str,
) -> Outcome<()> {
    if valid_values.contains(value) {
        Outcome::ok(())
    } else {
        Outcome::fail(format!(
            "{argument_name} isn't oneOf the correct values in {valid_values:?}. Got \"{value:?}\"."
        ))
    }
}

/// Succeeds when `min <= num <= max`.
pub fn in_range(num: i64, min: i64, max: i64, argument_name: &str) -> Outcome<()> {
    if (min..=max).contains(&num) {
        Outcome::ok(())
    } else {
        Outcome::fail(format!(
            "{argument_name} is not within range {min} to {max}."
        ))
    }
}

/// Succeeds when every number lies within `[min, max]`.
pub fn all_in_range(numbers: &[i64], min: i64, max: i64, argument_name: &str) -> Outcome<()> {
    if numbers
        .iter()
        .all(|&num| in_range(num, min, max, argument_name).is_success())
    {
        Outcome::ok(())
    } else {
        Outcome::fail(format!("{argument_name} is not within the range."))
    }
}
