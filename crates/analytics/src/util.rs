use rust_decimal::Decimal;

/// `part / whole * 100`, or zero when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) / Decimal::from(whole) * Decimal::ONE_HUNDRED
}

/// `amount / whole * 100`, or zero when `whole` is zero.
pub(crate) fn share_of(amount: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    amount / whole * Decimal::ONE_HUNDRED
}

/// Arithmetic mean, or zero for an empty population.
pub(crate) fn mean(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total / Decimal::from(count)
}
