//! Shared response envelope for API handlers.
//!
//! Every JSON success body carries `"success": true` next to its payload
//! fields. Use [`SuccessResponse`] instead of ad-hoc
//! `serde_json::json!({ "success": true, ... })`.

use serde::Serialize;

/// `{ "success": true, ...payload }` response envelope.
///
/// The payload must serialize to a JSON object; its fields are flattened
/// into the envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(SuccessResponse::new(DeletedPayload { deleted: id })))
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload for delete endpoints: `{ "deleted": id }`.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: classroom_core::types::DbId,
}
