//! Five synchronized base fields (binary, octal, decimal, hex, custom).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::convert::{convert_base, is_valid_for_base};
use super::radix::Radix;
use crate::error::{DevUtilsError, Result};

/// Identifies one of the five fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseField {
    Binary,
    Octal,
    Decimal,
    Hex,
    Custom,
}

impl BaseField {
    /// Declaration order; also the lookup order used on a radix change.
    pub const ALL: [BaseField; 5] = [
        BaseField::Binary,
        BaseField::Octal,
        BaseField::Decimal,
        BaseField::Hex,
        BaseField::Custom,
    ];

    pub const FIXED: [BaseField; 4] = [
        BaseField::Binary,
        BaseField::Octal,
        BaseField::Decimal,
        BaseField::Hex,
    ];

    /// Radix of a fixed field, `None` for the custom field.
    pub fn fixed_radix(self) -> Option<Radix> {
        match self {
            Self::Binary => Some(Radix::BINARY),
            Self::Octal => Some(Radix::OCTAL),
            Self::Decimal => Some(Radix::DECIMAL),
            Self::Hex => Some(Radix::HEX),
            Self::Custom => None,
        }
    }

    /// Human label, e.g. "Base 2 (Binary)".
    pub fn label(self) -> &'static str {
        match self {
            Self::Binary => "Base 2 (Binary)",
            Self::Octal => "Base 8 (Octal)",
            Self::Decimal => "Base 10 (Decimal)",
            Self::Hex => "Base 16 (Hex)",
            Self::Custom => "Custom",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hex => "hex",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for BaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseField {
    type Err = DevUtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "bin" | "binary" => Ok(Self::Binary),
            "8" | "oct" | "octal" => Ok(Self::Octal),
            "10" | "dec" | "decimal" => Ok(Self::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(Self::Hex),
            "custom" => Ok(Self::Custom),
            other => Err(DevUtilsError::InvalidArgument(format!(
                "unknown field \"{}\" (use bin, oct, dec, hex, or custom)",
                other
            ))),
        }
    }
}

/// View state of the base converter.
///
/// At every stable point all non-empty fields denote the same magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseValues {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hex: String,
    pub custom: String,
    pub custom_base: Radix,
}

impl BaseValues {
    /// Empty state with the given custom radix.
    pub fn new(custom_base: Radix) -> Self {
        Self {
            custom_base,
            ..Self::default()
        }
    }

    pub fn get(&self, field: BaseField) -> &str {
        match field {
            BaseField::Binary => &self.binary,
            BaseField::Octal => &self.octal,
            BaseField::Decimal => &self.decimal,
            BaseField::Hex => &self.hex,
            BaseField::Custom => &self.custom,
        }
    }

    fn slot(&mut self, field: BaseField) -> &mut String {
        match field {
            BaseField::Binary => &mut self.binary,
            BaseField::Octal => &mut self.octal,
            BaseField::Decimal => &mut self.decimal,
            BaseField::Hex => &mut self.hex,
            BaseField::Custom => &mut self.custom,
        }
    }

    /// Radix a field is rendered in; the custom field follows the selector.
    pub fn effective_base(&self, field: BaseField) -> Radix {
        field.fixed_radix().unwrap_or(self.custom_base)
    }

    pub fn is_empty(&self) -> bool {
        BaseField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Pure edit: the resulting state after typing `text` into `field`.
    ///
    /// An edit that is not valid for the field's base leaves the state as it was.
    pub fn apply_edit(&self, field: BaseField, text: &str) -> Self {
        let mut next = self.clone();
        next.edit(field, text);
        next
    }

    /// Apply an edit in place. Returns `false` if the edit was rejected.
    pub fn edit(&mut self, field: BaseField, text: &str) -> bool {
        let source = self.effective_base(field);
        if !is_valid_for_base(text, source) {
            debug!(%field, base = %source, text, "rejected edit");
            return false;
        }

        if text.is_empty() {
            self.clear();
            return true;
        }

        match self.fan_out(field, text) {
            Ok(values) => {
                for (target, value) in values {
                    *self.slot(target) = value;
                }
                true
            }
            Err(err) => {
                debug!(%err, "conversion failed after validation");
                false
            }
        }
    }

    /// Every field's value after typing `text` into `field`, computed without
    /// touching the state so a failed conversion commits nothing.
    fn fan_out(&self, field: BaseField, text: &str) -> Result<Vec<(BaseField, String)>> {
        let source = self.effective_base(field);
        BaseField::ALL
            .iter()
            .map(|&target| {
                let target_base = self.effective_base(target);
                let value = if target == field
                    || (target == BaseField::Custom && target_base == source)
                {
                    text.to_string()
                } else {
                    convert_base(text, source, target_base)?
                };
                Ok((target, value))
            })
            .collect()
    }

    /// Empty all five fields; the custom radix is kept.
    pub fn clear(&mut self) {
        for field in BaseField::ALL {
            self.slot(field).clear();
        }
    }

    /// Change the custom radix, repopulating only the custom field.
    ///
    /// The first non-empty fixed field (binary, octal, decimal, hex) is the
    /// source; if all fixed fields are empty the custom value is reconverted
    /// from the old radix.
    pub fn set_custom_base(&mut self, new_base: Radix) {
        let old_base = self.custom_base;
        let source = BaseField::FIXED
            .iter()
            .copied()
            .find(|f| !self.get(*f).is_empty())
            .map(|f| (self.get(f).to_string(), self.effective_base(f)))
            .or_else(|| {
                (!self.custom.is_empty()).then(|| (self.custom.clone(), old_base))
            });

        self.custom_base = new_base;
        self.custom = match source {
            Some((text, from)) => convert_base(&text, from, new_base).unwrap_or_else(|err| {
                debug!(%err, "custom field reset after radix change");
                String::new()
            }),
            None => String::new(),
        };
        debug!(from = %old_base, to = %new_base, "custom radix changed");
    }

    /// Pure form of [`BaseValues::set_custom_base`] taking a raw base.
    ///
    /// # Errors
    ///
    /// Returns [`DevUtilsError::InvalidArgument`] if `base` is outside `2..=36`.
    pub fn with_custom_base(&self, base: u32) -> Result<Self> {
        let radix = Radix::new(base)?;
        let mut next = self.clone();
        next.set_custom_base(radix);
        Ok(next)
    }

    /// Field values in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (BaseField, &str)> + '_ {
        BaseField::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// Pure update function: the state after an edit of `field` to `text`.
pub fn apply_edit(state: &BaseValues, field: BaseField, text: &str) -> BaseValues {
    state.apply_edit(field, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> BaseValues {
        BaseValues::new(Radix::DEFAULT_CUSTOM)
    }

    #[test]
    fn test_decimal_edit_fans_out() {
        let state = apply_edit(&empty(), BaseField::Decimal, "255");
        assert_eq!(state.binary, "11111111");
        assert_eq!(state.octal, "377");
        assert_eq!(state.decimal, "255");
        assert_eq!(state.hex, "ff");
        assert_eq!(state.custom, "7v");
    }

    #[test]
    fn test_edited_field_keeps_typed_text() {
        let state = apply_edit(&empty(), BaseField::Hex, "FF");
        assert_eq!(state.hex, "FF");
        assert_eq!(state.decimal, "255");
    }

    #[test]
    fn test_invalid_edit_is_rejected() {
        let before = apply_edit(&empty(), BaseField::Decimal, "10");
        let after = apply_edit(&before, BaseField::Binary, "102");
        assert_eq!(before, after);

        let mut state = before.clone();
        assert!(!state.edit(BaseField::Hex, "xyz"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_clearing_any_field_clears_all() {
        for field in BaseField::ALL {
            let state = apply_edit(&empty(), BaseField::Decimal, "42");
            let cleared = apply_edit(&state, field, "");
            assert!(cleared.is_empty(), "clearing {} left values", field);
            assert_eq!(cleared.custom_base, Radix::DEFAULT_CUSTOM);
        }
    }

    #[test]
    fn test_custom_edit_uses_selected_radix() {
        let state = BaseValues::new(Radix::new(36).unwrap()).apply_edit(BaseField::Custom, "z");
        assert_eq!(state.decimal, "35");
        assert_eq!(state.hex, "23");
        assert_eq!(state.binary, "100011");
    }

    #[test]
    fn test_custom_matching_source_base_copies_text() {
        let state = BaseValues::new(Radix::HEX).apply_edit(BaseField::Hex, "Ab");
        assert_eq!(state.custom, "Ab");
        assert_eq!(state.decimal, "171");
    }

    #[test]
    fn test_radix_change_prefers_first_fixed_field() {
        let mut state = apply_edit(&empty(), BaseField::Decimal, "255");
        state.set_custom_base(Radix::new(3).unwrap());
        assert_eq!(state.custom, "100110");
        assert_eq!(state.decimal, "255");
        assert_eq!(state.binary, "11111111");
    }

    #[test]
    fn test_radix_change_reconverts_lone_custom_value() {
        let mut state = empty();
        state.custom = "10".to_string();
        state.set_custom_base(Radix::HEX);
        assert_eq!(state.custom, "20");
        assert_eq!(state.custom_base, Radix::HEX);
    }

    #[test]
    fn test_radix_change_on_empty_state() {
        let mut state = empty();
        state.set_custom_base(Radix::OCTAL);
        assert!(state.custom.is_empty());
        assert_eq!(state.custom_base, Radix::OCTAL);
    }

    #[test]
    fn test_with_custom_base_rejects_out_of_range() {
        let state = apply_edit(&empty(), BaseField::Decimal, "9");
        assert!(state.with_custom_base(40).is_err());
        assert_eq!(state.with_custom_base(9).unwrap().custom, "10");
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("bin".parse::<BaseField>().unwrap(), BaseField::Binary);
        assert_eq!("16".parse::<BaseField>().unwrap(), BaseField::Hex);
        assert_eq!("Custom".parse::<BaseField>().unwrap(), BaseField::Custom);
        assert!("base64".parse::<BaseField>().is_err());
    }

    #[test]
    fn test_failed_fan_out_commits_nothing() {
        let state = apply_edit(&empty(), BaseField::Decimal, "42");
        assert!(state.fan_out(BaseField::Binary, "12").is_err());
        assert_eq!(state.decimal, "42");
        assert_eq!(state.binary, "101010");
    }

    #[test]
    fn test_saturated_hex_fraction_with_base36_custom() {
        let mut state = BaseValues::new(Radix::new(36).unwrap());
        assert!(state.edit(BaseField::Hex, "0.ffffffffffffffffffff"));
        assert_eq!(state.custom, "0.zzzzzzzz");
        assert_eq!(state.decimal, "0.99999999");
        assert_eq!(state.hex, "0.ffffffffffffffffffff");
    }
}
