//! Backend payload shapes. These are inferred from what the screens consume,
//! so every field defaults when the backend leaves it out.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Open a response body. `{ "data": ... }` envelopes yield their `data`,
/// anything else is the payload itself. A body flagged `"success": false`
/// is a rejection and yields the backend's message instead.
pub fn open_envelope(body: Value) -> Result<Value, String> {
    let Value::Object(mut map) = body else {
        return Ok(body);
    };
    if map.get("success").and_then(Value::as_bool) == Some(false) {
        let message = ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .unwrap_or("request was not successful");
        return Err(message.to_string());
    }
    Ok(match map.remove("data") {
        Some(data) => data,
        None => Value::Object(map),
    })
}

/// Ids arrive as strings from some services and as numbers from others.
fn id_string(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(format!("expected string or number id, got {other}")),
    }
}

fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_string(Value::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}

// ---------- Auth ----------

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawLoginUser")]
pub struct LoginUser {
    pub id: String,
    pub role: String,
    pub name: String,
}

/// Login user as sent. Backends differ in their id and name keys and some
/// send several of them at once; the first non-empty one wins.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawLoginUser {
    id: Option<Value>,
    #[serde(rename = "_id")]
    underscore_id: Option<Value>,
    user_id: Option<Value>,
    role: String,
    name: Option<String>,
    display_name: Option<String>,
    full_name: Option<String>,
}

impl From<RawLoginUser> for LoginUser {
    fn from(raw: RawLoginUser) -> Self {
        let id = [raw.id, raw.underscore_id, raw.user_id]
            .into_iter()
            .flatten()
            .filter_map(|v| id_string(v).ok())
            .find(|id| !id.is_empty())
            .unwrap_or_default();
        let name = [raw.name, raw.display_name, raw.full_name]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
            .unwrap_or_default();
        Self { id, role: raw.role, name }
    }
}

// ---------- Member ----------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberDashboardPayload {
    pub membership: Option<MembershipPayload>,
    pub visits_this_month: i64,
    pub monthly_visit_goal: i64,
    pub upcoming_bookings: Vec<BookingPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipPayload {
    pub plan_name: String,
    pub status: String,
    pub expires_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub class_name: String,
    pub trainer_name: String,
    pub starts_at: Option<DateTime<Utc>>,
}

// ---------- Trainer ----------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainerDashboardPayload {
    pub active_clients: i64,
    pub sessions_today: Vec<TrainingSessionPayload>,
    pub weekly_capacity: i64,
    pub weekly_booked: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingSessionPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub client_name: String,
    pub session_type: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub duration_minutes: i64,
}

// ---------- Staff / CRM ----------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffStatsPayload {
    pub check_ins_today: i64,
    pub classes_today: i64,
    pub pending_tasks: i64,
    pub trial_visits_today: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub source: String,
    pub stage: String,
    pub created_at: Option<DateTime<Utc>>,
}

// ---------- Manager / billing ----------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagerStatsPayload {
    pub active_members: i64,
    pub expiring_this_week: i64,
    pub revenue_this_month: f64,
    pub revenue_target: f64,
    /// Percentage, 0-100.
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub number: String,
    pub member_name: String,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub status: String,
}

// ---------- Branch admin ----------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchStatsPayload {
    pub total_members: i64,
    pub active_members: i64,
    pub check_ins_today: i64,
    pub revenue_this_month: f64,
    pub new_leads: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub member_name: String,
    pub action: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainerStatusPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// `available`, `busy` or `off`.
    pub status: String,
    pub booked_slots: i64,
    pub total_slots: i64,
}

// ---------- Super admin ----------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkStatsPayload {
    pub total_branches: i64,
    pub total_members: i64,
    pub total_revenue: f64,
    pub active_trainers: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchSummaryPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
    pub city: String,
    pub members: i64,
    pub revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(body: &str) -> Result<Value, String> {
        open_envelope(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn envelope_accepts_wrapped_and_bare() {
        let wrapped = open(r#"{"success":true,"data":{"totalMembers":42}}"#).unwrap();
        let stats: BranchStatsPayload = serde_json::from_value(wrapped).unwrap();
        assert_eq!(stats.total_members, 42);

        let bare = open(r#"{"totalMembers":7,"newLeads":2}"#).unwrap();
        let stats: BranchStatsPayload = serde_json::from_value(bare).unwrap();
        assert_eq!(stats.total_members, 7);
        assert_eq!(stats.new_leads, 2);
    }

    #[test]
    fn envelope_accepts_bare_lists() {
        let leads: Vec<LeadPayload> =
            serde_json::from_value(open(r#"[{"id":1,"name":"Kim","stage":"new"}]"#).unwrap()).unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, "1");
    }

    #[test]
    fn unsuccessful_body_is_rejected_with_its_message() {
        assert_eq!(
            open(r#"{"success":false,"message":"member not found"}"#),
            Err("member not found".to_string())
        );
        assert_eq!(
            open(r#"{"success":false,"error":"expired token"}"#),
            Err("expired token".to_string())
        );
        assert_eq!(
            open(r#"{"success":false}"#),
            Err("request was not successful".to_string())
        );
    }

    #[test]
    fn mistyped_envelope_data_does_not_decode() {
        let data = open(r#"{"data":{"checkInsToday":"many"}}"#).unwrap();
        assert!(serde_json::from_value::<StaffStatsPayload>(data).is_err());
    }

    #[test]
    fn login_user_takes_first_present_id_and_name() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"user":{"_id":"abc","id":"abc","role":"MEMBER","name":"","fullName":"Jo Lee"}}"#,
        )
        .unwrap();
        assert_eq!(resp.user.id, "abc");
        assert_eq!(resp.user.name, "Jo Lee");

        let resp: LoginResponse =
            serde_json::from_str(r#"{"user":{"userId":7,"_id":"m-7","role":"STAFF"}}"#).unwrap();
        assert_eq!(resp.user.id, "m-7");
        assert!(resp.token.is_none());
    }

    #[test]
    fn login_user_accepts_numeric_id_and_display_name_alias() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"abc","user":{"id":12,"role":"TRAINER","displayName":"Marcus"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc"));
        assert_eq!(resp.user.id, "12");
        assert_eq!(resp.user.role, "TRAINER");
        assert_eq!(resp.user.name, "Marcus");
    }

    #[test]
    fn missing_fields_default() {
        let payload: MemberDashboardPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.membership.is_none());
        assert_eq!(payload.visits_this_month, 0);
        assert!(payload.upcoming_bookings.is_empty());
    }
}
