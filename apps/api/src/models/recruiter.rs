use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecruiterRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Embedded recruiter reference in a job creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruiterRef {
    pub name: String,
    pub email: String,
}

/// POST /recruiters body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecruiter {
    pub name: String,
    pub email: String,
}

/// Read-only projection of a recruiter for the `/info` endpoints.
/// Hides the surrogate id; exposes associated company names and job titles.
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterDto {
    pub name: String,
    pub email: String,
    pub companies: Vec<String>,
    pub jobs: Vec<String>,
}

impl RecruiterDto {
    pub fn new(row: RecruiterRow, companies: Vec<String>, jobs: Vec<String>) -> Self {
        Self {
            name: row.name,
            email: row.email,
            companies,
            jobs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_hides_surrogate_id() {
        let dto = RecruiterDto::new(
            RecruiterRow {
                id: 7,
                name: "Barak Itzhaki".to_string(),
                email: "barak@x.com".to_string(),
            },
            vec!["Facebook".to_string()],
            vec!["Java Developer".to_string()],
        );
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Barak Itzhaki");
        assert_eq!(json["companies"][0], "Facebook");
        assert_eq!(json["jobs"][0], "Java Developer");
    }
}
