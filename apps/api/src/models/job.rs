use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::company::CompanyRef;
use crate::models::recruiter::RecruiterRef;

/// Raw job projection as stored, surrogate keys included.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub salary: String,
    pub location: String,
    pub company_id: i64,
    pub recruiter_id: i64,
}

/// Job row joined with its company and recruiter, for DTO projection.
#[derive(Debug, Clone, FromRow)]
pub struct JobDetailRow {
    pub id: i64,
    pub title: String,
    pub salary: String,
    pub location: String,
    pub company_name: String,
    pub recruiter_name: String,
    pub recruiter_email: String,
}

/// POST /jobs body. Company is referenced by name, recruiter by name+email;
/// both are resolved or created before the job itself is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub salary: String,
    pub location: String,
    pub company: CompanyRef,
    pub recruiter: RecruiterRef,
}

/// Read-only projection of a job for the `/info` endpoints.
/// Hides surrogate ids; nests company and recruiter by natural fields.
#[derive(Debug, Clone, Serialize)]
pub struct JobDto {
    pub title: String,
    pub salary: String,
    pub company: CompanyRef,
    pub recruiter: RecruiterRef,
    pub location: String,
}

impl From<JobDetailRow> for JobDto {
    fn from(row: JobDetailRow) -> Self {
        Self {
            title: row.title,
            salary: row.salary,
            company: CompanyRef {
                name: row.company_name,
            },
            recruiter: RecruiterRef {
                name: row.recruiter_name,
                email: row.recruiter_email,
            },
            location: row.location,
        }
    }
}
