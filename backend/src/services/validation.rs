//! Input schemas and validation for the two request paths.
//!
//! The paths deliberately differ in strictness:
//! - the write path ([`AddSchoolInput`]) requires JSON numbers for latitude and
//!   longitude and rejects numeric-looking strings such as `"51.5"`;
//! - the read path ([`CoordinateQuery`]) parses query-string text leniently,
//!   taking the longest numeric prefix (`"12abc"` reads as `12`).

use serde::Deserialize;
use serde_json::Value;

use super::error::ValidationError;
use crate::models::{Coordinate, NewSchool};

/// Switches that tighten validation beyond the wire contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject latitude outside [-90, 90] and longitude outside [-180, 180].
    pub enforce_coordinate_ranges: bool,
}

/// Raw body of an add-school request. Fields stay untyped until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddSchoolInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn json_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    }
}

impl AddSchoolInput {
    /// Check every field and produce a typed submission, or fail without
    /// touching anything.
    pub fn validate(&self, options: ValidationOptions) -> Result<NewSchool, ValidationError> {
        let name = non_empty_text(self.name.as_ref()).ok_or(ValidationError::InvalidSchool)?;
        let address =
            non_empty_text(self.address.as_ref()).ok_or(ValidationError::InvalidSchool)?;
        let latitude = json_number(self.latitude.as_ref()).ok_or(ValidationError::InvalidSchool)?;
        let longitude =
            json_number(self.longitude.as_ref()).ok_or(ValidationError::InvalidSchool)?;

        let location = Coordinate::new(latitude, longitude);
        if options.enforce_coordinate_ranges && !location.is_in_range() {
            return Err(ValidationError::InvalidSchool);
        }

        Ok(NewSchool {
            name,
            address,
            location,
        })
    }
}

/// Query parameters of a proximity listing, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl CoordinateQuery {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
        }
    }

    /// Collect the two parameters from decoded query-string pairs.
    ///
    /// A repeated key keeps its first value, so `latitude=0&latitude=5` reads
    /// as `0`. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "latitude" => &mut query.latitude,
                "longitude" => &mut query.longitude,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Parse both parameters into the caller's location.
    pub fn validate(&self, options: ValidationOptions) -> Result<Coordinate, ValidationError> {
        let latitude = self
            .latitude
            .as_deref()
            .and_then(parse_float_prefix)
            .ok_or(ValidationError::InvalidCoordinates)?;
        let longitude = self
            .longitude
            .as_deref()
            .and_then(parse_float_prefix)
            .ok_or(ValidationError::InvalidCoordinates)?;

        let location = Coordinate::new(latitude, longitude);
        if options.enforce_coordinate_ranges && !location.is_in_range() {
            return Err(ValidationError::InvalidCoordinates);
        }
        Ok(location)
    }
}

/// Parse the longest decimal-number prefix of `input` after leading
/// whitespace. Returns `None` when there is no numeric prefix or the value is
/// not finite. `inf`/`nan` spellings are not numbers here.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> AddSchoolInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.5"), Some(12.5));
        assert_eq!(parse_float_prefix("  -3"), Some(-3.0));
        assert_eq!(parse_float_prefix("+.5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("12abc"), Some(12.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("2E-2x"), Some(0.02));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("Infinity"), None);
        assert_eq!(parse_float_prefix("NaN"), None);
        assert_eq!(parse_float_prefix("inf"), None);
        assert_eq!(parse_float_prefix("1e999"), None);
    }

    #[test]
    fn test_add_school_valid() {
        let school = input(json!({
            "name": "A", "address": "X", "latitude": 51.5, "longitude": -0.12
        }))
        .validate(ValidationOptions::default())
        .unwrap();

        assert_eq!(school.name, "A");
        assert_eq!(school.address, "X");
        assert_eq!(school.location, Coordinate::new(51.5, -0.12));
    }

    #[test]
    fn test_add_school_accepts_integer_coordinates() {
        let school = input(json!({"name": "A", "address": "X", "latitude": 0, "longitude": 1}))
            .validate(ValidationOptions::default())
            .unwrap();
        assert_eq!(school.location, Coordinate::new(0.0, 1.0));
    }

    #[test]
    fn test_add_school_rejects_string_latitude() {
        let result = input(json!({
            "name": "A", "address": "X", "latitude": "51.5", "longitude": 0
        }))
        .validate(ValidationOptions::default());
        assert_eq!(result, Err(ValidationError::InvalidSchool));
    }

    #[test]
    fn test_add_school_rejects_missing_or_empty_fields() {
        let cases = [
            json!({"address": "X", "latitude": 0, "longitude": 0}),
            json!({"name": "", "address": "X", "latitude": 0, "longitude": 0}),
            json!({"name": "A", "address": null, "latitude": 0, "longitude": 0}),
            json!({"name": "A", "address": "X", "longitude": 0}),
            json!({"name": 5, "address": "X", "latitude": 0, "longitude": 0}),
            json!({"name": "A", "address": "X", "latitude": 0, "longitude": true}),
        ];
        for case in cases {
            let result = input(case.clone()).validate(ValidationOptions::default());
            assert_eq!(result, Err(ValidationError::InvalidSchool), "case {}", case);
        }
    }

    #[test]
    fn test_add_school_range_enforcement_is_opt_in() {
        let body = json!({"name": "A", "address": "X", "latitude": 200, "longitude": 0});

        assert!(input(body.clone())
            .validate(ValidationOptions::default())
            .is_ok());
        let strict = ValidationOptions {
            enforce_coordinate_ranges: true,
        };
        assert_eq!(
            input(body).validate(strict),
            Err(ValidationError::InvalidSchool)
        );
    }

    #[test]
    fn test_coordinate_query_lenient_parse() {
        let origin = CoordinateQuery::new("10.5", " 20deg")
            .validate(ValidationOptions::default())
            .unwrap();
        assert_eq!(origin, Coordinate::new(10.5, 20.0));
    }

    #[test]
    fn test_coordinate_query_rejects_non_numeric_or_missing() {
        let options = ValidationOptions::default();
        assert_eq!(
            CoordinateQuery::new("abc", "0").validate(options),
            Err(ValidationError::InvalidCoordinates)
        );
        let missing = CoordinateQuery {
            latitude: Some("1".to_string()),
            longitude: None,
        };
        assert_eq!(
            missing.validate(options),
            Err(ValidationError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_coordinate_query_from_pairs_keeps_first_value() {
        let pairs = vec![
            ("latitude".to_string(), "0".to_string()),
            ("page".to_string(), "2".to_string()),
            ("latitude".to_string(), "5".to_string()),
            ("longitude".to_string(), "7".to_string()),
        ];
        let query = CoordinateQuery::from_pairs(pairs);
        assert_eq!(query, CoordinateQuery::new("0", "7"));
        assert_eq!(
            query.validate(ValidationOptions::default()),
            Ok(Coordinate::new(0.0, 7.0))
        );

        let missing = CoordinateQuery::from_pairs(vec![("latitude".to_string(), "1".to_string())]);
        assert_eq!(missing.longitude, None);
    }

    #[test]
    fn test_coordinate_query_range_enforcement() {
        let strict = ValidationOptions {
            enforce_coordinate_ranges: true,
        };
        assert_eq!(
            CoordinateQuery::new("0", "181").validate(strict),
            Err(ValidationError::InvalidCoordinates)
        );
        assert!(CoordinateQuery::new("0", "181")
            .validate(ValidationOptions::default())
            .is_ok());
    }
}
