// arithmetic.rs

use std::str::FromStr;

use itertools::Itertools;
use rust_decimal::Decimal;

use crate::command::{Command, CommandError};

/// Significant digits kept by division, matching a 28-digit decimal context.
const DIVISION_PRECISION: u32 = 28;

/// Parses a decimal operand, falling back to scientific notation (`1e3`).
fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn parse_pair(args: &[String], invalid: impl Fn() -> CommandError) -> Result<(Decimal, Decimal), CommandError> {
    match (parse_decimal(&args[0]), parse_decimal(&args[1])) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(invalid()),
    }
}

fn invalid_operands(args: &[String]) -> CommandError {
    CommandError::InvalidNumber(format!(
        "Invalid number input: '{}' or '{}' is not a valid number.",
        args[0], args[1]
    ))
}

pub struct AddCommand;

impl Command for AddCommand {
    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        if args.len() != 2 {
            return Err(CommandError::InvalidArgumentCount(
                "Error: Please provide exactly two numbers to add.",
            ));
        }
        let (a, b) = parse_pair(args, || {
            CommandError::InvalidNumber("Error: Invalid input. Please provide valid numbers.".to_string())
        })?;
        let sum = a.checked_add(b).ok_or(CommandError::Overflow)?;
        Ok(format!("The result of adding {a} and {b} is equal to {sum}."))
    }
}

pub struct SubtractCommand;

impl Command for SubtractCommand {
    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        if args.len() != 2 {
            return Err(CommandError::InvalidArgumentCount(
                "Please provide exactly two numbers to subtract.",
            ));
        }
        let (a, b) = parse_pair(args, || invalid_operands(args))?;
        let difference = a.checked_sub(b).ok_or(CommandError::Overflow)?;
        Ok(format!("The result of subtracting {b} from {a} is equal to {difference}."))
    }
}

pub struct MultiplyCommand;

impl Command for MultiplyCommand {
    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        if args.len() != 2 {
            return Err(CommandError::InvalidArgumentCount(
                "Please provide exactly two numbers to multiply.",
            ));
        }
        let (a, b) = parse_pair(args, || invalid_operands(args))?;
        let product = a.checked_mul(b).ok_or(CommandError::Overflow)?;
        Ok(format!("The result of multiplying {a} and {b} is equal to {product}."))
    }
}

pub struct DivideCommand;

impl Command for DivideCommand {
    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        if args.len() != 2 {
            return Err(CommandError::InvalidArgumentCount(
                "Please provide exactly two numbers to divide.",
            ));
        }
        let (a, b) = parse_pair(args, || invalid_operands(args))?;
        if b.is_zero() {
            return Err(CommandError::DivisionByZero);
        }
        let quotient = a.checked_div(b).ok_or(CommandError::Overflow)?;
        let quotient = quotient.round_sf(DIVISION_PRECISION).unwrap_or(quotient);
        Ok(format!("The result of dividing {a} by {b} is equal to {quotient}."))
    }
}

/// Arithmetic mean over `f64` values, unlike the decimal binary commands.
pub struct MeanCommand;

impl Command for MeanCommand {
    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        if args.is_empty() {
            return Err(CommandError::NoArguments);
        }
        let numbers = args
            .iter()
            .map(|arg| {
                arg.parse::<f64>()
                    .map_err(|_| CommandError::InvalidFloat(arg.clone()))
            })
            .collect::<Result<Vec<f64>, _>>()?;
        let count = numbers.len() as f64;
        let sum: f64 = numbers.iter().sum();
        // A finite set of inputs can still overflow the running sum.
        let mean = if sum.is_finite() {
            sum / count
        } else {
            numbers.iter().map(|n| n / count).sum()
        };
        Ok(format!(
            "The mean of {} is {:?}.",
            numbers.iter().map(|n| format!("{n:?}")).join(", "),
            mean
        ))
    }
}
