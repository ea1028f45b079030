use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Subject {
    pub name: String,
    pub attended: u32,
    pub total: u32,
    /// Attendance goal in percent. Defaults to 75 when the caller omits it.
    #[serde(default = "default_target_attendance")]
    pub target_attendance: u32,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}

// Default value functions for serde
fn default_target_attendance() -> u32 {
    75
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_defaults_target_attendance_to_75() {
        let subject: Subject =
            serde_json::from_value(serde_json::json!({"name": "Math", "attended": 8, "total": 10}))
                .unwrap();

        assert_eq!(subject.target_attendance, 75);
    }

    #[test]
    fn test_subject_keeps_explicit_target_attendance() {
        let subject: Subject = serde_json::from_value(serde_json::json!({
            "name": "Physics",
            "attended": 2,
            "total": 9,
            "target_attendance": 90
        }))
        .unwrap();

        assert_eq!(subject.target_attendance, 90);
    }

    #[test]
    fn test_request_accepts_empty_subject_list() {
        let request: SuggestRequest =
            serde_json::from_value(serde_json::json!({"subjects": []})).unwrap();

        assert!(request.subjects.is_empty());
    }

    #[test]
    fn test_request_rejects_missing_subjects_field() {
        let result: Result<SuggestRequest, _> = serde_json::from_value(serde_json::json!({}));

        assert!(result.is_err());
    }
}
