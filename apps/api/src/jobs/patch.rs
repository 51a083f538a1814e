use serde_json::{Map, Value};

/// Partial update for a job, built from a free-form field map.
///
/// The recognized fields form a closed set: `title`, `salary`, `location`.
/// Unknown keys and non-string values are silently ignored, never an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
}

impl JobPatch {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut patch = Self::default();
        for (field, value) in map {
            match field.as_str() {
                "title" => patch.title = value.as_str().map(str::to_owned),
                "salary" => patch.salary = value.as_str().map(str::to_owned),
                "location" => patch.location = value.as_str().map(str::to_owned),
                _ => {}
            }
        }
        patch
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.location.is_none()
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
    fn recognized_string_fields_are_applied() {
        let patch = JobPatch::from_map(&map(json!({"salary": "99K"})));
        assert_eq!(patch.salary.as_deref(), Some("99K"));
        assert!(patch.title.is_none());
        assert!(patch.location.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let patch = JobPatch::from_map(&map(json!({"foo": "bar"})));
        assert!(patch.is_empty());
    }

    #[test]
    fn non_string_values_are_ignored() {
        let patch = JobPatch::from_map(&map(json!({"title": 123, "salary": "25K"})));
        assert!(patch.title.is_none());
        assert_eq!(patch.salary.as_deref(), Some("25K"));
    }

    #[test]
    fn full_map_applies_all_three_fields() {
        let patch = JobPatch::from_map(&map(json!({
            "title": "DevOps Updated",
            "salary": "25K",
            "location": "Yokneam Elite",
            "id": 9
        })));
        assert_eq!(
            patch,
            JobPatch {
                title: Some("DevOps Updated".to_string()),
                salary: Some("25K".to_string()),
                location: Some("Yokneam Elite".to_string()),
            }
        );
    }
}
