// Date wire-format normalization
//
// The backend serializes some timestamps as numeric tuples instead of ISO
// strings: [year, month, day] for dates and [year, month, day, hour, minute,
// second] or [..., nano] for datetimes. Everything the client decodes passes
// through `normalize` once, at the pipeline boundary, so the typed models can
// rely on plain ISO strings.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Recursively replace date/datetime tuples with ISO-8601 strings.
/// Total: any value that is not a recognizable tuple passes through unchanged.
pub fn normalize(value: &mut Value) {
    match value {
        Value::Array(items) => {
            if let Some(formatted) = format_date_tuple(items) {
                *value = Value::String(formatted);
                return;
            }
            for item in items.iter_mut() {
                normalize(item);
            }
        }
        Value::Object(map) => {
            for (_, v) in map.iter_mut() {
                normalize(v);
            }
        }
        _ => {}
    }
}

/// Convenience wrapper for owned values
pub fn normalized(mut value: Value) -> Value {
    normalize(&mut value);
    value
}

/// Try to interpret a JSON array as a date or datetime tuple.
/// Accepts [y, m, d], [y, m, d, h, mi, s] and [y, m, d, h, mi, s, nano];
/// every element must be an integer and the fields must form a real calendar
/// date, otherwise the array is left alone.
fn format_date_tuple(items: &[Value]) -> Option<String> {
    if !matches!(items.len(), 3 | 6 | 7) {
        return None;
    }

    let mut nums = Vec::with_capacity(items.len());
    for item in items {
        nums.push(item.as_i64()?);
    }

    let year = i32::try_from(nums[0]).ok()?;
    if !(1000..=9999).contains(&year) {
        return None;
    }
    let month = u32::try_from(nums[1]).ok()?;
    let day = u32::try_from(nums[2]).ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    if nums.len() == 3 {
        return Some(date.format("%Y-%m-%d").to_string());
    }

    let hour = u32::try_from(nums[3]).ok()?;
    let minute = u32::try_from(nums[4]).ok()?;
    let second = u32::try_from(nums[5]).ok()?;
    let datetime = date.and_hms_opt(hour, minute, second)?;

    if nums.len() == 7 {
        let nano = u32::try_from(nums[6]).ok()?;
        let datetime = date.and_hms_nano_opt(hour, minute, second, nano)?;
        if nano != 0 {
            return Some(datetime.format("%Y-%m-%dT%H:%M:%S%.9f").to_string());
        }
        return Some(datetime.format("%Y-%m-%dT%H:%M:%S").to_string());
    }

    Some(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Parse a normalized datetime string back into chrono
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_tuple() {
        let v = normalized(json!([2024, 3, 15]));
        assert_eq!(v, json!("2024-03-15"));
    }

    #[test]
    fn test_datetime_tuple() {
        let v = normalized(json!([2024, 3, 15, 9, 30, 0]));
        assert_eq!(v, json!("2024-03-15T09:30:00"));
    }

    #[test]
    fn test_datetime_tuple_with_nanos() {
        let v = normalized(json!([2024, 3, 15, 9, 30, 0, 123000000]));
        assert_eq!(v, json!("2024-03-15T09:30:00.123000000"));

        // Zero nanos collapse to whole seconds
        let v = normalized(json!([2024, 3, 15, 9, 30, 0, 0]));
        assert_eq!(v, json!("2024-03-15T09:30:00"));
    }

    #[test]
    fn test_non_tuple_arrays_pass_through() {
        // Wrong arity
        assert_eq!(normalized(json!([1, 2])), json!([1, 2]));
        // Not a real calendar date
        assert_eq!(normalized(json!([2024, 13, 45])), json!([2024, 13, 45]));
        // Non-integer elements
        assert_eq!(
            normalized(json!(["a", "b", "c"])),
            json!(["a", "b", "c"])
        );
        // Plausible id lists must survive: year out of range
        assert_eq!(normalized(json!([1, 2, 3])), json!([1, 2, 3]));
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(normalized(json!("2024-03-15")), json!("2024-03-15"));
        assert_eq!(normalized(json!(42)), json!(42));
        assert_eq!(normalized(json!(null)), json!(null));
    }

    #[test]
    fn test_nested_recursion_preserves_siblings() {
        let v = normalized(json!({
            "id": 7,
            "name": "Algebra",
            "startDate": [2024, 3, 15],
            "createdAt": [2024, 3, 1, 8, 0, 0],
            "lessons": [
                {"id": 1, "date": [2024, 4, 2], "defaultScore": 50}
            ]
        }));
        assert_eq!(
            v,
            json!({
                "id": 7,
                "name": "Algebra",
                "startDate": "2024-03-15",
                "createdAt": "2024-03-01T08:00:00",
                "lessons": [
                    {"id": 1, "date": "2024-04-02", "defaultScore": 50}
                ]
            })
        );
    }

    #[test]
    fn test_parse_datetime_roundtrip() {
        let dt = parse_datetime("2024-03-15T09:30:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-03-15 09:30");
    }
}
