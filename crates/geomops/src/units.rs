//! Dimensioned-value parsing.
//!
//! Purpose
//! - Turn `"<number><unit>"` strings (`"2mm"`, `"1.5MHz"`, `"180deg"`, `"1m_per_h"`)
//!   into plain `f64` values in SI base units, or in a requested target unit.
//!
//! Conventions
//! - Unit names are case-sensitive (`mm` vs `Mm`, `h` hour vs `H` henry).
//! - A rate `<unit>_per_<time>` scales by `factor(unit) * factor(time)`: the value
//!   is read as an amount per `<time>` and re-expressed per that many seconds'
//!   worth of the base rate, so `1m_per_h == 3600.0`.
//! - Angles resolve to radians (`deg = π/180`, `degmin = π/10800`, `degsec = π/648000`).
//! - Unknown suffixes are an error; nothing is silently left unscaled.

use std::f64::consts::PI;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::UnitError;

/// Physical quantity a unit measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Length,
    Frequency,
    Angle,
    Time,
    Mass,
    Voltage,
    Current,
    Resistance,
    Capacitance,
    Inductance,
    Power,
}

/// A base quantity, or that quantity per unit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Base(UnitCategory),
    PerTime(UnitCategory),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(c) => write!(f, "{c:?}"),
            Self::PerTime(c) => write!(f, "{c:?} per time"),
        }
    }
}

use UnitCategory::*;

/// `(name, category, factor to SI base)`.
static UNITS: &[(&str, UnitCategory, f64)] = &[
    ("m", Length, 1.0),
    ("km", Length, 1e3),
    ("cm", Length, 1e-2),
    ("mm", Length, 1e-3),
    ("um", Length, 1e-6),
    ("µm", Length, 1e-6),
    ("nm", Length, 1e-9),
    ("pm", Length, 1e-12),
    ("in", Length, 0.0254),
    ("mil", Length, 2.54e-5),
    ("ft", Length, 0.3048),
    ("Hz", Frequency, 1.0),
    ("kHz", Frequency, 1e3),
    ("MHz", Frequency, 1e6),
    ("GHz", Frequency, 1e9),
    ("THz", Frequency, 1e12),
    ("rad", Angle, 1.0),
    ("mrad", Angle, 1e-3),
    ("deg", Angle, PI / 180.0),
    ("degmin", Angle, PI / 10_800.0),
    ("degsec", Angle, PI / 648_000.0),
    ("s", Time, 1.0),
    ("ms", Time, 1e-3),
    ("us", Time, 1e-6),
    ("µs", Time, 1e-6),
    ("ns", Time, 1e-9),
    ("ps", Time, 1e-12),
    ("fs", Time, 1e-15),
    ("min", Time, 60.0),
    ("h", Time, 3600.0),
    ("day", Time, 86_400.0),
    ("kg", Mass, 1.0),
    ("g", Mass, 1e-3),
    ("mg", Mass, 1e-6),
    ("V", Voltage, 1.0),
    ("kV", Voltage, 1e3),
    ("mV", Voltage, 1e-3),
    ("uV", Voltage, 1e-6),
    ("A", Current, 1.0),
    ("mA", Current, 1e-3),
    ("uA", Current, 1e-6),
    ("nA", Current, 1e-9),
    ("ohm", Resistance, 1.0),
    ("kohm", Resistance, 1e3),
    ("Mohm", Resistance, 1e6),
    ("F", Capacitance, 1.0),
    ("uF", Capacitance, 1e-6),
    ("nF", Capacitance, 1e-9),
    ("pF", Capacitance, 1e-12),
    ("H", Inductance, 1.0),
    ("mH", Inductance, 1e-3),
    ("uH", Inductance, 1e-6),
    ("nH", Inductance, 1e-9),
    ("W", Power, 1.0),
    ("kW", Power, 1e3),
    ("mW", Power, 1e-3),
];

const PER: &str = "_per_";

static VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-zµ_]*)\s*$")
        .expect("static pattern compiles")
});

fn lookup_simple(unit: &str) -> Option<(UnitCategory, f64)> {
    UNITS
        .iter()
        .find(|(name, _, _)| *name == unit)
        .map(|&(_, cat, factor)| (cat, factor))
}

fn lookup(unit: &str) -> Result<(Dimension, f64), UnitError> {
    let unknown = || UnitError::UnknownUnit {
        unit: unit.to_string(),
    };
    match unit.split_once(PER) {
        None => lookup_simple(unit)
            .map(|(cat, factor)| (Dimension::Base(cat), factor))
            .ok_or_else(unknown),
        Some((num, den)) => {
            let (cat, num_factor) = lookup_simple(num).ok_or_else(unknown)?;
            match lookup_simple(den) {
                Some((Time, den_factor)) => Ok((Dimension::PerTime(cat), num_factor * den_factor)),
                _ => Err(unknown()),
            }
        }
    }
}

/// Quantity measured by `unit` (simple or `<unit>_per_<time>`).
pub fn unit_category(unit: &str) -> Result<Dimension, UnitError> {
    lookup(unit).map(|(dim, _)| dim)
}

/// Multiplier taking a value in `unit` to SI base units.
pub fn scale_factor(unit: &str) -> Result<f64, UnitError> {
    lookup(unit).map(|(_, factor)| factor)
}

/// Parse `<number><optional unit>` into SI base units, or into `default_unit`
/// when given.
///
/// A bare number passes through unchanged (it is taken to be in `default_unit`
/// already, which must still be a known unit).
pub fn parse_dimensioned_value(text: &str, default_unit: Option<&str>) -> Result<f64, UnitError> {
    let caps = VALUE_RE
        .captures(text)
        .ok_or_else(|| UnitError::InvalidNumber {
            text: text.to_string(),
        })?;
    let value: f64 = caps[1].parse().map_err(|_| UnitError::InvalidNumber {
        text: text.to_string(),
    })?;
    let suffix = &caps[2];
    let target = default_unit.map(lookup).transpose()?;

    if suffix.is_empty() {
        trace!(text, "plain number");
        return Ok(value);
    }
    let (dim, factor) = lookup(suffix)?;
    let out = match (target, default_unit) {
        (Some((to_dim, to_factor)), Some(to)) => {
            if dim != to_dim {
                return Err(UnitError::IncompatibleUnits {
                    from: suffix.to_string(),
                    to: to.to_string(),
                });
            }
            value * (factor / to_factor)
        }
        _ => value * factor,
    };
    trace!(text, unit = suffix, %dim, out, "parsed dimensioned value");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_conversion() {
        assert_eq!(parse_dimensioned_value("2mm", None).unwrap(), 0.002);
        assert!((parse_dimensioned_value("180deg", None).unwrap() - PI).abs() < 1e-12);
        assert_eq!(parse_dimensioned_value("1.5MHz", None).unwrap(), 1.5e6);
        assert_eq!(parse_dimensioned_value("3rad", None).unwrap(), 3.0);
        assert!((parse_dimensioned_value("60degmin", None).unwrap() - PI / 180.0).abs() < 1e-15);
    }

    #[test]
    fn target_unit() {
        assert_eq!(parse_dimensioned_value("2mm", Some("mm")).unwrap(), 2.0);
        assert!((parse_dimensioned_value("1m", Some("mm")).unwrap() - 1000.0).abs() < 1e-9);
        assert!((parse_dimensioned_value("90deg", Some("rad")).unwrap() - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn compound_rates() {
        assert_eq!(parse_dimensioned_value("1m_per_h", None).unwrap(), 3600.0);
        assert_eq!(parse_dimensioned_value("2mm_per_s", None).unwrap(), 0.002);
        assert_eq!(
            unit_category("m_per_h").unwrap(),
            Dimension::PerTime(UnitCategory::Length)
        );
        assert!(matches!(
            parse_dimensioned_value("1m_per_kg", None),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(parse_dimensioned_value("-3.4e-2", None).unwrap(), -3.4e-2);
        assert_eq!(parse_dimensioned_value("  .5 ", None).unwrap(), 0.5);
        assert_eq!(parse_dimensioned_value("7", Some("mm")).unwrap(), 7.0);
    }

    #[test]
    fn errors_are_descriptive() {
        let err = parse_dimensioned_value("2furlongs", None).unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit {
                unit: "furlongs".into()
            }
        );
        assert!(err.to_string().contains("furlongs"));
        assert!(matches!(
            parse_dimensioned_value("mm", None),
            Err(UnitError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_dimensioned_value("2mm", Some("Hz")),
            Err(UnitError::IncompatibleUnits { .. })
        ));
        assert!(matches!(
            parse_dimensioned_value("2", Some("parsec")),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn table_lookups() {
        assert_eq!(unit_category("H").unwrap(), Dimension::Base(UnitCategory::Inductance));
        assert_eq!(unit_category("h").unwrap(), Dimension::Base(UnitCategory::Time));
        assert_eq!(scale_factor("kHz").unwrap(), 1e3);
        assert!(scale_factor("Mm").is_err());
    }
}
