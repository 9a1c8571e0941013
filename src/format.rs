//! Display helpers for listing cards and the detail page

/// Share of the price used for the rough monthly payment estimate
const MONTHLY_PAYMENT_RATE: f64 = 0.005;

/// `285000` -> `"$285,000"`
pub fn format_price(price: u64) -> String {
    format!("${}", format_number(price))
}

/// `1850` -> `"1,850"`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Ballpark monthly payment shown beside a listing, in whole dollars
pub fn estimated_monthly_payment(price: u64) -> u64 {
    (price as f64 * MONTHLY_PAYMENT_RATE).round() as u64
}

/// Position in a listing's photo gallery. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCursor {
    index: usize,
    len: usize,
}

impl ImageCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
        }
        self.index
    }

    /// Jump to a thumbnail; out-of-range picks are ignored
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }

    /// The current image out of `images`
    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(285_000), "$285,000");
        assert_eq!(format_price(1_000_000), "$1,000,000");
        assert_eq!(format_price(950), "$950");
        assert_eq!(format_price(0), "$0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1850), "1,850");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(123_456_789), "123,456,789");
    }

    #[test]
    fn test_monthly_estimate() {
        assert_eq!(estimated_monthly_payment(285_000), 1425);
        assert_eq!(estimated_monthly_payment(425_000), 2125);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = ImageCursor::new(3);
        assert_eq!(cursor.prev(), 2);
        assert_eq!(cursor.next(), 0);
        assert_eq!(cursor.next(), 1);
        assert_eq!(cursor.select(7), 1);
        assert_eq!(cursor.select(2), 2);
        assert_eq!(cursor.next(), 0);
    }

    #[test]
    fn test_cursor_on_empty_gallery() {
        let mut cursor = ImageCursor::new(0);
        assert_eq!(cursor.next(), 0);
        assert_eq!(cursor.prev(), 0);
        assert_eq!(cursor.current(&[]), None);
    }
}
