use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use dispatch::DispatchRegistry;
use webhook::{CanonicalEvent, DeliveryId, WebhookId};

use crate::error::ListenerError;
use crate::{DELIVERY_HEADER, EVENT_HEADER};

/// `POST /github-webhook/:webhook_id`
#[tracing::instrument(
    name = "webhook",
    skip_all,
    fields(
        webhook_id = %webhook_id,
        delivery_id = tracing::field::Empty,
        event_type = tracing::field::Empty,
    )
)]
pub(crate) async fn receive_webhook(
    State(registry): State<Arc<DispatchRegistry>>,
    Path(webhook_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ListenerError> {
    let span = tracing::Span::current();
    let delivery_id = DeliveryId::from_header(header_str(&headers, DELIVERY_HEADER));
    span.record("delivery_id", delivery_id.as_str());

    if !is_json(header_str(&headers, header::CONTENT_TYPE.as_str())) {
        return Err(ListenerError::UnsupportedContentType);
    }

    let event_type = header_str(&headers, EVENT_HEADER)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ListenerError::MissingEventHeader)?;
    span.record("event_type", event_type);

    let mut event = CanonicalEvent::from_slice(&body)?;
    if let Some(id) = WebhookId::new(webhook_id) {
        event = event.with_id(id);
    }

    tracing::info!(summary = %event, "Webhook received");
    if let Err(e) = registry.dispatch(event_type, &event).await {
        tracing::warn!(error = %e, "Webhook not handled");
    }

    Ok(StatusCode::OK)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// `application/json`, optionally followed by parameters such as `charset`.
fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|v| v.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_content_type_accepts_parameters() {
        assert!(is_json(Some("application/json")));
        assert!(is_json(Some("application/json; charset=utf-8")));
        assert!(is_json(Some("Application/JSON")));
    }

    #[test]
    fn other_content_types_are_rejected() {
        assert!(!is_json(None));
        assert!(!is_json(Some("")));
        assert!(!is_json(Some("application/x-www-form-urlencoded")));
        assert!(!is_json(Some("text/plain; application/json")));
    }
}
