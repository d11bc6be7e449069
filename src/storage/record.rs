use crate::common::config::ProductCode;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single inventory entry. The product code is the hash key and never
/// changes once the record is stored; stock and price are the mutable
/// payload.
///
/// Stock is signed: restocking with a negative delta may drive it below
/// zero, which is accepted behavior rather than an error. Price is
/// likewise taken as given and not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductRecord {
    code: ProductCode,
    stock: i64,
    price: f64,
}

impl ProductRecord {
    /// Creates a new record from its three fields.
    pub fn new(code: ProductCode, stock: i64, price: f64) -> Self {
        Self { code, stock, price }
    }

    /// Returns the product code.
    pub fn get_code(&self) -> ProductCode {
        self.code
    }

    /// Returns the current stock level.
    pub fn get_stock(&self) -> i64 {
        self.stock
    }

    /// Returns the current price.
    pub fn get_price(&self) -> f64 {
        self.price
    }

    /// Overwrites stock and price in place, leaving the code untouched.
    pub fn set_details(&mut self, stock: i64, price: f64) {
        self.stock = stock;
        self.price = price;
    }

    /// Adds `delta` to the stock level and returns the new level.
    /// Negative deltas are applied as-is.
    pub fn add_stock(&mut self, delta: i64) -> i64 {
        self.stock += delta;
        self.stock
    }
}

impl Display for ProductRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code: {} stock: {} price: {}",
            self.code, self.stock, self.price
        )
    }
}
