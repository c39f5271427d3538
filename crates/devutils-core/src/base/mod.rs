//! Number base converter.
//!
//! - [`Radix`]: a validated base in `2..=36`
//! - [`is_valid_for_base`] / [`convert_base`]: the conversion engine
//! - [`BaseValues`]: five fields kept in sync by [`apply_edit`]

mod convert;
mod fields;
mod radix;

pub use convert::{
    convert, convert_base, is_valid_for_base, render_integer, validate, MAX_FRACTION_DIGITS,
};
pub use fields::{apply_edit, BaseField, BaseValues};
pub use radix::{Radix, DIGITS};
