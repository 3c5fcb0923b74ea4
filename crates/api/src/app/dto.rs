use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    response::Response,
};
use serde_json::Value;

use shoplist_core::Item;

use crate::app::errors;

// -------------------------
// Request bodies
// -------------------------

/// Item sent in a POST/PATCH body.
///
/// A missing or non-JSON content type, an empty body, invalid JSON, or JSON
/// that is not an object all yield an empty item. Only a body that cannot be
/// read at all (e.g. over the size limit) is rejected, with a JSON error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemBody(pub Item);

#[async_trait]
impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(Self::default());
        }

        let bytes = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("failed to read request body: {e}");
                return Err(errors::json_error(e.status(), e.body_text()));
            }
        };

        Ok(Self(parse_item(&bytes)))
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence
            .rsplit_once('+')
            .is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case("json"))
}

fn parse_item(bytes: &[u8]) -> Item {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Item::new();
    }

    let value: Value = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("ignoring malformed JSON body: {e}");
            return Item::new();
        }
    };

    Item::try_from(value).unwrap_or_else(|e| {
        tracing::warn!("ignoring non-object body: {e}");
        Item::new()
    })
}

// -------------------------
// Response bodies
// -------------------------

pub fn added_to_json(item: Item) -> Value {
    serde_json::json!({ "added": item })
}

pub fn updated_to_json(item: Item) -> Value {
    serde_json::json!({ "updated": item })
}

pub fn deleted_json() -> Value {
    serde_json::json!({ "message": "Deleted" })
}
