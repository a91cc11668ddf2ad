use leptos::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "role_code")]
    pub user_type: i32,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub mobile: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub state: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
    })
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `user_type` arrives as `2` from some endpoints and `"2"` from others.
fn role_code<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Int(n) => i32::try_from(n).map_err(serde::de::Error::custom),
        StringOrNumber::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardCounts {
    #[serde(alias = "totalLeads")]
    pub leads: u64,
    #[serde(alias = "totalProjects")]
    pub projects: u64,
    #[serde(alias = "totalEmployees")]
    pub employees: u64,
    #[serde(alias = "totalBookings")]
    pub bookings: u64,
    #[serde(alias = "totalPartners")]
    pub partners: u64,
    #[serde(alias = "totalBuilders")]
    pub builders: u64,
    #[serde(alias = "totalQueries")]
    pub queries: u64,
    #[serde(alias = "totalTickets")]
    pub tickets: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountsQuery {
    pub user_type: i32,
    pub user_id: String,
}

impl CountsQuery {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_type: user.user_type,
            user_id: user.id.clone(),
        }
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "user_type={}&user_id={}",
            self.user_type,
            utf8_percent_encode(&self.user_id, NON_ALPHANUMERIC)
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|msg| !msg.trim().is_empty())
    }
}

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid mobile number or password";
pub const NOT_FOUND_MESSAGE: &str = "Service not found. Please try again later.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn invalid_credentials() -> Self {
        Self::with_code(INVALID_CREDENTIALS_MESSAGE, "INVALID_CREDENTIALS")
    }

    pub fn unauthorized() -> Self {
        Self::with_code(SESSION_EXPIRED_MESSAGE, "UNAUTHORIZED")
    }

    pub fn not_found() -> Self {
        Self::with_code(NOT_FOUND_MESSAGE, "NOT_FOUND")
    }

    pub fn server() -> Self {
        Self::with_code(SERVER_ERROR_MESSAGE, "SERVER_ERROR")
    }

    pub fn network() -> Self {
        Self::with_code(NETWORK_ERROR_MESSAGE, "NETWORK_ERROR")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_accepts_numeric_and_string_ids_and_role_codes() {
        let numeric: User = serde_json::from_value(json!({
            "id": 17,
            "name": "Asha Rao",
            "user_type": 2,
            "email": "asha@example.com",
            "mobile": "9876543210",
            "city": "Pune",
            "state": "Maharashtra",
            "photo": null
        }))
        .unwrap();
        assert_eq!(numeric.id, "17");
        assert_eq!(numeric.user_type, 2);
        assert!(numeric.photo.is_none());

        let textual: User = serde_json::from_value(json!({
            "id": "u-17",
            "name": "Asha Rao",
            "user_type": " 3 "
        }))
        .unwrap();
        assert_eq!(textual.id, "u-17");
        assert_eq!(textual.user_type, 3);
        assert_eq!(textual.email, "");
    }

    #[test]
    fn user_rejects_non_numeric_role_code() {
        let result: Result<User, _> = serde_json::from_value(json!({
            "id": 1,
            "user_type": "admin"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn null_contact_fields_become_empty() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": null,
            "user_type": 5,
            "city": null
        }))
        .unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.city, "");
    }

    #[test]
    fn dashboard_counts_accept_camel_case_totals_and_missing_fields() {
        let counts: DashboardCounts = serde_json::from_value(json!({
            "totalLeads": 12,
            "projects": 3
        }))
        .unwrap();
        assert_eq!(counts.leads, 12);
        assert_eq!(counts.projects, 3);
        assert_eq!(counts.bookings, 0);
    }

    #[test]
    fn counts_query_encodes_user_id() {
        let query = CountsQuery {
            user_type: 4,
            user_id: "a b/c".into(),
        };
        assert_eq!(query.to_query_string(), "user_type=4&user_id=a%20b%2Fc");
    }

    #[test]
    fn error_body_prefers_message_and_ignores_blank_text() {
        let body: ErrorBody = serde_json::from_value(json!({
            "message": "Account disabled",
            "error": "ignored"
        }))
        .unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Account disabled"));

        let blank: ErrorBody = serde_json::from_value(json!({ "message": "  " })).unwrap();
        assert!(blank.into_message().is_none());
    }

    #[test]
    fn api_error_constructors_set_codes() {
        assert_eq!(ApiError::invalid_credentials().code, "INVALID_CREDENTIALS");
        assert_eq!(
            ApiError::invalid_credentials().error,
            "Invalid mobile number or password"
        );
        assert_eq!(ApiError::network().code, "NETWORK_ERROR");
        assert!(ApiError::unauthorized().is_unauthorized());
        assert!(!ApiError::server().is_unauthorized());
        assert_eq!(ApiError::validation("bad input").code, "VALIDATION_ERROR");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::not_found().into_view();
    }
}
