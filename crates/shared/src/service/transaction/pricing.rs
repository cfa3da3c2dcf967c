use crate::{
    errors::TransactionError, model::transaction::PaymentStatus,
    service::transaction::order_items::OrderLine,
};

pub const TAX_RATE_PERCENT: i128 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBreakdown {
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

/// Outcome of reconciling a tendered amount against the order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Amount to persist: always the tax-inclusive total, never the tendered figure.
    pub amount: i64,
    pub status: PaymentStatus,
    pub tendered: i64,
}

/// Sums `price * quantity` over all lines and adds truncating 11% tax.
///
/// The sum is carried in `i128`, so only a total that does not fit the `i64`
/// amount column is reported as [`TransactionError::AmountOverflow`].
pub fn calculate_tax(lines: &[OrderLine]) -> Result<TaxBreakdown, TransactionError> {
    let subtotal = lines.iter().try_fold(0i128, |acc, line| {
        i128::from(line.price)
            .checked_mul(i128::from(line.quantity))
            .and_then(|line_total| acc.checked_add(line_total))
    });
    let subtotal = subtotal.ok_or(TransactionError::AmountOverflow)?;

    let tax = subtotal
        .checked_mul(TAX_RATE_PERCENT)
        .map(|v| v / 100)
        .ok_or(TransactionError::AmountOverflow)?;
    let total = subtotal
        .checked_add(tax)
        .ok_or(TransactionError::AmountOverflow)?;

    let narrow = |v: i128| i64::try_from(v).map_err(|_| TransactionError::AmountOverflow);

    Ok(TaxBreakdown {
        subtotal: narrow(subtotal)?,
        tax: narrow(tax)?,
        total: narrow(total)?,
    })
}

/// Accepts the payment when `tendered >= total`. Any excess is discarded.
pub fn reconcile_payment(tendered: i64, total: i64) -> Result<Settlement, TransactionError> {
    if tendered < total {
        return Err(TransactionError::InsufficientPayment { tendered, total });
    }

    Ok(Settlement {
        amount: total,
        status: PaymentStatus::Success,
        tendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: i64, quantity: i64) -> OrderLine {
        OrderLine {
            order_item_id: 0,
            price,
            quantity,
        }
    }

    #[test]
    fn computes_subtotal_tax_and_total() {
        let breakdown = calculate_tax(&[line(10_000, 2), line(5_000, 1)]).unwrap();

        assert_eq!(breakdown.subtotal, 25_000);
        assert_eq!(breakdown.tax, 2_750);
        assert_eq!(breakdown.total, 27_750);
    }

    #[test]
    fn tax_is_truncated_not_rounded() {
        // 99 * 0.11 = 10.89
        let breakdown = calculate_tax(&[line(99, 1)]).unwrap();
        assert_eq!(breakdown.tax, 10);
        assert_eq!(breakdown.total, 109);

        // 9 * 0.11 = 0.99
        let breakdown = calculate_tax(&[line(3, 3)]).unwrap();
        assert_eq!(breakdown.tax, 0);
        assert_eq!(breakdown.total, 9);
    }

    #[test]
    fn total_matches_floor_of_one_point_eleven() {
        for subtotal in [1i64, 7, 50, 101, 999, 12_345, 1_000_001] {
            let breakdown = calculate_tax(&[line(subtotal, 1)]).unwrap();
            assert_eq!(breakdown.total, subtotal * 111 / 100, "subtotal {subtotal}");
        }
    }

    #[test]
    fn reports_overflow_when_total_exceeds_amount_column() {
        let err = calculate_tax(&[line(i64::MAX, 1)]).unwrap_err();
        assert!(matches!(err, TransactionError::AmountOverflow));

        let lines = [
            line(i64::from(i32::MAX), i64::from(i32::MAX)),
            line(i64::MAX / 2, 3),
        ];
        let err = calculate_tax(&lines).unwrap_err();
        assert!(matches!(err, TransactionError::AmountOverflow));
    }

    #[test]
    fn exact_payment_succeeds_with_total_as_amount() {
        let settlement = reconcile_payment(27_750, 27_750).unwrap();
        assert_eq!(settlement.amount, 27_750);
        assert_eq!(settlement.status, PaymentStatus::Success);
    }

    #[test]
    fn overpayment_is_capped_to_total() {
        let settlement = reconcile_payment(30_000, 27_750).unwrap();
        assert_eq!(settlement.amount, 27_750);
        assert_eq!(settlement.tendered, 30_000);
    }

    #[test]
    fn underpayment_is_rejected() {
        let err = reconcile_payment(27_000, 27_750).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::InsufficientPayment {
                tendered: 27_000,
                total: 27_750
            }
        ));
    }
}
