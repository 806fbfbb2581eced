//! Calc command implementation.
//!
//! Evaluates one big-integer operation on hexadecimal operands.

use clap::ValueEnum;
use kestrel_bigint::UnsignedBigInteger;
use tracing::debug;

use crate::commands::common::{format_hex, parse_bit_count, parse_hex_operand};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalcOp {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`, failing when the result would be negative
    Sub,
    /// `lhs * rhs`
    Mul,
    /// `lhs << rhs`, where `rhs` is a decimal bit count
    Shl,
}

/// Arguments for the calc command.
#[derive(Debug, Clone)]
pub struct CalcArgs {
    /// Operation to apply.
    pub op: CalcOp,
    /// Left operand, hexadecimal.
    pub lhs: String,
    /// Right operand, hexadecimal or a bit count for `shl`.
    pub rhs: String,
    /// Print upper-case hex digits.
    pub uppercase: bool,
    /// Configuration loaded for this run.
    pub config: Config,
}

/// Calc command handler.
pub struct CalcCommand {
    args: CalcArgs,
}

impl Command for CalcCommand {
    type Args = CalcArgs;
    type Output = UnsignedBigInteger;

    fn new(args: CalcArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<UnsignedBigInteger> {
        let lhs = parse_hex_operand(&self.args.lhs)?;
        debug!(
            "{} {:?}: lhs has {} significant word(s)",
            Self::name(),
            self.args.op,
            lhs.trimmed_length()
        );

        let result = match self.args.op {
            CalcOp::Shl => lhs.shift_left(parse_bit_count(&self.args.rhs)?),
            op => {
                let rhs = parse_hex_operand(&self.args.rhs)?;
                match op {
                    CalcOp::Add => lhs.add(&rhs),
                    CalcOp::Sub => lhs.checked_sub(&rhs)?,
                    _ => lhs.multiply(&rhs),
                }
            }
        };

        Ok(result.into_result()?)
    }

    fn name() -> &'static str {
        "calc"
    }
}

impl CalcCommand {
    /// Evaluate and print the result.
    pub fn run(&self) -> Result<()> {
        let value = self.execute()?;
        let uppercase = self.args.uppercase || self.args.config.calc.uppercase;
        println!("{}", format_hex(&value, uppercase));
        Ok(())
    }
}

/// Run the calc command.
pub fn run_calc(args: CalcArgs) -> Result<()> {
    CalcCommand::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KstError;
    use kestrel_bigint::ArithmeticError;

    fn eval(op: CalcOp, lhs: &str, rhs: &str) -> Result<String> {
        let command = CalcCommand::new(CalcArgs {
            op,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            uppercase: false,
            config: Config::default(),
        });
        command.execute().map(|value| format_hex(&value, false))
    }

    #[test]
    fn test_add_carries_into_new_word() {
        assert_eq!(eval(CalcOp::Add, "0xffffffff", "1").unwrap(), "0x100000000");
    }

    #[test]
    fn test_sub_borrows_across_words() {
        assert_eq!(
            eval(CalcOp::Sub, "0x10000000000000000", "1").unwrap(),
            "0xffffffffffffffff"
        );
    }

    #[test]
    fn test_sub_negative_is_arithmetic_error() {
        let err = eval(CalcOp::Sub, "1", "2").unwrap_err();
        assert!(matches!(
            err,
            KstError::Arithmetic(ArithmeticError::NegativeDifference { .. })
        ));
    }

    #[test]
    fn test_mul() {
        assert_eq!(
            eval(CalcOp::Mul, "0xffffffff", "0xffffffff").unwrap(),
            "0xfffffffe00000001"
        );
        assert_eq!(eval(CalcOp::Mul, "0x1234", "0").unwrap(), "0x0");
    }

    #[test]
    fn test_shl() {
        assert_eq!(eval(CalcOp::Shl, "1", "32").unwrap(), "0x100000000");
        assert_eq!(eval(CalcOp::Shl, "0x3", "1").unwrap(), "0x6");
    }

    #[test]
    fn test_shl_rejects_hex_count() {
        assert!(matches!(
            eval(CalcOp::Shl, "1", "0x20"),
            Err(KstError::Validation(_))
        ));
    }

    #[test]
    fn test_shl_rejects_huge_count() {
        let err = eval(CalcOp::Shl, "1", "1000000000000").unwrap_err();
        assert!(matches!(err, KstError::Validation(_)));
        assert!(err.to_string().contains("bit count"));

        let max = crate::commands::common::MAX_SHIFT_BITS;
        assert!(eval(CalcOp::Shl, "1", &(max + 1).to_string()).is_err());
        assert!(eval(CalcOp::Shl, "0", &max.to_string()).is_ok());
    }

    #[test]
    fn test_bad_operand() {
        assert!(matches!(
            eval(CalcOp::Add, "0xzz", "1"),
            Err(KstError::Validation(_))
        ));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(CalcCommand::name(), "calc");
    }
}
