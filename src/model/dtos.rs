use serde_json::Value;

/// Parameters for a signup request
#[derive(Debug, Clone)]
pub struct SignupParams<'a> {
    pub activity: &'a str,
    pub email: &'a str,
}

/// Parameters for removing a participant from an activity
#[derive(Debug, Clone)]
pub struct RemovalParams<'a> {
    pub activity: &'a str,
    pub email: &'a str,
}

/// Status and body of a mutation request. A non-ok status is not an error
/// at this layer; callers decide what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn message(&self) -> Option<String> {
        self.text_field("message")
    }

    pub fn detail(&self) -> Option<String> {
        self.text_field("detail")
    }

    fn text_field(&self, key: &str) -> Option<String> {
        let field = self.body.get(key)?;
        match field {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_and_message_fields() {
        let resp = ApiResponse {
            status: 400,
            body: json!({"detail": "Activity full"}),
        };
        assert!(!resp.ok());
        assert_eq!(resp.detail().as_deref(), Some("Activity full"));
        assert_eq!(resp.message(), None);

        let resp = ApiResponse {
            status: 200,
            body: json!({"message": "Signed up ann@school.edu for Chess Club"}),
        };
        assert!(resp.ok());
        assert_eq!(
            resp.message().as_deref(),
            Some("Signed up ann@school.edu for Chess Club")
        );
    }
}
