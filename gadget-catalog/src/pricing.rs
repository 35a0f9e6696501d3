use std::cmp::Ordering;
use std::fmt;

/// Number of decimal places prices are compared at
pub const PRICE_PRECISION: i32 = 2;

/// Magnitude from which every `f64` is a whole number, so rounding to
/// cents would change nothing
const WHOLE_NUMBERS_FROM: f64 = 4_503_599_627_370_496.0; // 2^52

fn scale() -> f64 {
    10f64.powi(PRICE_PRECISION)
}

/// Round a price to two decimals.
///
/// Monotone in `price`; values too large to carry cents are returned as is.
pub fn round_price(price: f64) -> f64 {
    if !price.is_finite() || price.abs() >= WHOLE_NUMBERS_FROM {
        return price;
    }
    (price * scale()).round() / scale()
}

/// Sort key for a priced entry within a collection.
///
/// Orders by the two-decimal price first, then by the entry's position, so
/// two entries never compare equal even when their prices do.
#[derive(Debug, Clone, Copy)]
pub struct PriceKey {
    price: f64,
    pub position: usize,
}

impl PriceKey {
    pub fn new(price: f64, position: usize) -> Self {
        Self {
            price: round_price(price),
            position,
        }
    }

    /// Price this key was built from, rounded to two decimals
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.price
            .total_cmp(&other.price)
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriceKey {}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}#{}", self.price, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round_price(2.49), 2.49);
        assert_eq!(round_price(9.994), 9.99);
        assert_eq!(round_price(9.996), 10.0);
        assert_eq!(round_price(20.987), 20.99);
        assert_eq!(round_price(1e20), 1e20);
    }

    #[test]
    fn test_key_ordering() {
        let cheap = PriceKey::new(9.99, 3);
        let pricey = PriceKey::new(29.99, 0);
        assert!(cheap < pricey);

        // Equal prices fall back to position
        let first = PriceKey::new(2.49, 1);
        let second = PriceKey::new(2.490001, 2);
        assert_eq!(first.price(), second.price());
        assert!(first < second);
    }

    #[test]
    fn test_key_ordering_large_prices() {
        let huge = PriceKey::new(1e20, 0);
        let large = PriceKey::new(1e18, 1);
        assert!(large < huge);

        let largest = PriceKey::new(f64::MAX, 0);
        let near_largest = PriceKey::new(f64::MAX / 2.0, 1);
        assert!(near_largest < largest);

        // Either side of the whole-number threshold
        let below = PriceKey::new(WHOLE_NUMBERS_FROM - 0.5, 0);
        let above = PriceKey::new(WHOLE_NUMBERS_FROM, 1);
        assert!(below < above);
    }

    #[test]
    fn test_display() {
        assert_eq!(PriceKey::new(2.0, 4).to_string(), "2.00#4");
    }
}
