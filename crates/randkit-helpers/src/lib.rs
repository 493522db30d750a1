//! randkit helpers: randomized values on top of an injected [`RandomSource`].
//!
//! All operations are stateless free functions taking the generator as their
//! first argument. The [`RandomHelpers`] extension trait offers the same
//! operations as methods on any generator.
//!
//! ```
//! use randkit_core::rng::RandAdapter;
//! use randkit_helpers::{RandomHelpers, StringOptions};
//!
//! let mut rng = RandAdapter::seeded(7);
//! let options = StringOptions::default().with_alphabet("A").with_bounds(5, 6);
//! assert_eq!(rng.next_string(&options).unwrap(), "AAAAA");
//! ```
//!
//! [`RandomSource`]: randkit_core::rng::RandomSource

mod draw;

pub mod collection;
pub mod datetime;
pub mod ext;
pub mod options;
pub mod pick;
pub mod string;

pub use collection::{next_collection, next_collection_cloned};
pub use datetime::{days_in_month, is_leap_year, next_date, next_datetime, next_time};
pub use ext::RandomHelpers;
pub use options::{ALPHANUMERIC, LengthBounds, StringOptions};
pub use pick::{pick, pick_or};
pub use string::{next_alphanumeric, next_string};
