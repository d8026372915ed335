//! Static lookup tables.
//!
//! Seeded once at startup and injected into handlers as axum state;
//! never mutated at request time, so cloning the state shares nothing
//! that needs synchronization beyond the clone itself.

use std::collections::HashMap;

/// A coupon record: a redemption code and its discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coupon {
    pub code: &'static str,
    pub discount: &'static str,
}

/// Immutable application data, keyed by integer id.
#[derive(Debug, Clone)]
pub struct Catalog {
    coupons: HashMap<i64, Coupon>,
}

impl Catalog {
    /// Build the catalog with its hardcoded entries.
    pub fn seed() -> Self {
        let coupons = HashMap::from([
            (
                1,
                Coupon {
                    code: "abc123",
                    discount: "10%",
                },
            ),
            (
                2,
                Coupon {
                    code: "xyz789",
                    discount: "20%",
                },
            ),
            (
                3,
                Coupon {
                    code: "pqr456",
                    discount: "30%",
                },
            ),
        ]);

        Self { coupons }
    }

    /// Look up a coupon by id.
    pub fn coupon(&self, id: i64) -> Option<&Coupon> {
        self.coupons.get(&id)
    }
}
