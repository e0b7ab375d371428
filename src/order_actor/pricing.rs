//! Order arithmetic.
//!
//! Pure functions: no actor calls, no I/O. The order workflow fetches unit
//! prices, then asks [`quote`] for every figure stored on the order.

use super::error::OrderError;

/// A line with its unit price resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedLine {
    pub quantity: u32,
    pub unit_price: f64,
}

impl PricedLine {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Every figure of a priced order.
///
/// `line_totals[i]` belongs to `lines[i]` of the input and already carries
/// its share of the discount.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub subtotal: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub total: f64,
    pub cash: f64,
    pub balance: f64,
    pub line_totals: Vec<f64>,
}

/// Prices an order and checks the cash covers it.
///
/// The discount is spread over the lines in proportion to each line's share
/// of the subtotal, so the adjusted line totals add up to `total`. With no
/// discount (or a zero subtotal) lines keep their undiscounted totals.
///
/// # Errors
/// [`OrderError::InsufficientCash`] when `cash < total`. Cash equal to the
/// total is accepted with a zero balance.
pub fn quote(lines: &[PricedLine], discount_percent: f64, cash: f64) -> Result<Quote, OrderError> {
    let raw: Vec<f64> = lines.iter().map(PricedLine::line_total).collect();
    let subtotal: f64 = raw.iter().sum();
    let discount_amount = subtotal * discount_percent / 100.0;
    let total = subtotal - discount_amount;
    let balance = cash - total;

    if balance < 0.0 {
        return Err(OrderError::InsufficientCash { total, cash });
    }

    let line_totals = if subtotal > 0.0 && discount_amount > 0.0 {
        raw.iter()
            .map(|line| line - discount_amount * (line / subtotal))
            .collect()
    } else {
        raw
    };

    Ok(Quote {
        subtotal,
        discount_percent,
        discount_amount,
        total,
        cash,
        balance,
        line_totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn line(quantity: u32, unit_price: f64) -> PricedLine {
        PricedLine {
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_quote_with_discount() {
        let q = quote(&[line(2, 100.0), line(1, 50.0)], 10.0, 300.0).unwrap();

        assert_eq!(q.subtotal, 250.0);
        assert_eq!(q.discount_amount, 25.0);
        assert_eq!(q.total, 225.0);
        assert_eq!(q.balance, 75.0);
        assert!((q.line_totals[0] - 180.0).abs() < EPSILON);
        assert!((q.line_totals[1] - 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_adjusted_lines_sum_to_total() {
        let q = quote(
            &[line(3, 19.99), line(7, 2.35), line(1, 149.5)],
            12.5,
            1_000.0,
        )
        .unwrap();
        let sum: f64 = q.line_totals.iter().sum();
        assert!((sum - q.total).abs() < EPSILON);
    }

    #[test]
    fn test_zero_discount_keeps_line_totals() {
        let q = quote(&[line(4, 12.5), line(1, 3.0)], 0.0, 53.0).unwrap();
        assert_eq!(q.line_totals, vec![50.0, 3.0]);
        assert_eq!(q.total, q.subtotal);
        assert_eq!(q.balance, 0.0);
    }

    #[test]
    fn test_exact_cash_accepted_short_cash_rejected() {
        let exact = quote(&[line(1, 99.0)], 0.0, 99.0).unwrap();
        assert_eq!(exact.balance, 0.0);

        let short = quote(&[line(1, 99.0)], 0.0, 98.99).unwrap_err();
        assert_eq!(
            short,
            OrderError::InsufficientCash {
                total: 99.0,
                cash: 98.99
            }
        );
    }

    #[test]
    fn test_full_discount_makes_order_free() {
        let q = quote(&[line(2, 40.0)], 100.0, 0.0).unwrap();
        assert_eq!(q.total, 0.0);
        assert_eq!(q.balance, 0.0);
        assert_eq!(q.line_totals, vec![0.0]);
    }
}
