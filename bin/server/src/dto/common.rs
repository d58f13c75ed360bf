use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Uniform success envelope around every endpoint payload
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Current time as an ISO-8601 string with millisecond precision
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn envelope_sets_success_flag() {
        let value = serde_json::to_value(Envelope::success(serde_json::json!({"x": 1}))).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["x"], 1);
    }
}
