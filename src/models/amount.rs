//! Overflow-checked money arithmetic.
//!
//! `Decimal` operators panic on overflow. Every sum and product the engine
//! derives goes through these helpers instead, so an oversized amount
//! surfaces as `InvalidInput` naming the field being derived.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Adds `values`, failing with `InvalidInput { field }` on overflow.
pub(crate) fn checked_sum(field: &str, values: &[Decimal]) -> EngineResult<Decimal> {
    values.iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(*value)
            .ok_or_else(|| EngineError::amount_overflow(field))
    })
}

/// Multiplies `values`, failing with `InvalidInput { field }` on overflow.
pub(crate) fn checked_product(field: &str, values: &[Decimal]) -> EngineResult<Decimal> {
    values.iter().try_fold(Decimal::ONE, |acc, value| {
        acc.checked_mul(*value)
            .ok_or_else(|| EngineError::amount_overflow(field))
    })
}

/// `minuend - subtrahend`, failing with `InvalidInput { field }` on overflow.
pub(crate) fn checked_difference(
    field: &str,
    minuend: Decimal,
    subtrahend: Decimal,
) -> EngineResult<Decimal> {
    minuend
        .checked_sub(subtrahend)
        .ok_or_else(|| EngineError::amount_overflow(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_sum_and_product_of_ordinary_amounts() {
        assert_eq!(
            checked_sum("gross_pay", &[dec("1600.00"), dec("150.00"), dec("100")]).unwrap(),
            dec("1850.00")
        );
        assert_eq!(
            checked_product("overtime_pay", &[dec("5"), dec("20"), dec("1.5")]).unwrap(),
            dec("150")
        );
        assert_eq!(checked_sum("gross_pay", &[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_overflow_names_the_field() {
        match checked_sum("gross_pay", &[Decimal::MAX, Decimal::ONE]) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "gross_pay"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert!(checked_product("regular_pay", &[Decimal::MAX, dec("2")]).is_err());
        assert!(checked_difference("net_pay", Decimal::MIN, Decimal::MAX).is_err());
    }
}
