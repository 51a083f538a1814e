use serde_json::{Map, Value};

/// Partial update for a recruiter. Recognized fields: `name`, `email`.
/// Unknown keys and non-string values are silently ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecruiterPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl RecruiterPatch {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut patch = Self::default();
        for (field, value) in map {
            match field.as_str() {
                "name" => patch.name = value.as_str().map(str::to_owned),
                "email" => patch.email = value.as_str().map(str::to_owned),
                _ => {}
            }
        }
        patch
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn recognized_fields_are_applied() {
        let patch = RecruiterPatch::from_map(&map(json!({
            "name": "Mario Gomez",
            "email": "MarioGomez@walla.com"
        })));
        assert_eq!(patch.name.as_deref(), Some("Mario Gomez"));
        assert_eq!(patch.email.as_deref(), Some("MarioGomez@walla.com"));
    }

    #[test]
    fn unknown_and_mismatched_fields_are_ignored() {
        let patch = RecruiterPatch::from_map(&map(json!({"name": 42, "phone": "555"})));
        assert!(patch.is_empty());
    }
}
