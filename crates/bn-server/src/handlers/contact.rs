//! Contact page and submission endpoints.
//!
//! The HTML form posts to `/contact`, which stores the outcome notice in the
//! session and redirects back (post/redirect/get). `/api/contact` takes JSON
//! and returns the notice directly.

use std::fmt::Write;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use bn_contact::{ContactForm, DeliveryError, Notice, NoticeKind, SubmitError};
use bn_content::document_title;
use bn_nav::html::escape_html;
use chrono::{DateTime, Utc};

use crate::session::Session;
use crate::state::AppState;
use crate::template::Document;

const LOCATION: &str = "San Francisco, CA";
const EMAIL: &str = "contact@bootnode.dev";
const PHONE: &str = "+1 (555) 123-4567";
const PHONE_HREF: &str = "tel:+15551234567";

/// Handle GET /contact.
pub(crate) async fn get_contact(State(state): State<Arc<AppState>>, session: Session) -> Response {
    let now = Utc::now();
    let notice = state
        .sessions
        .with_session(session.id, state.default_width, |entry| entry.notice.take())
        .filter(|notice| !notice.is_expired(now));

    let html = Document {
        title: &document_title("Contact"),
        section: Some("/contact"),
        body: &render_contact(notice.as_ref(), now),
        footer: true,
    }
    .render(&state.version);

    (
        AppendHeaders(session.set_cookie()),
        [(header::CACHE_CONTROL, "no-store")],
        Html(html),
    )
        .into_response()
}

/// Handle POST /contact (urlencoded form).
pub(crate) async fn post_contact(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Response {
    let outcome = state.contact.submit(form).await;
    let notice = Notice::for_outcome(&outcome, Utc::now(), state.contact.notice_ttl());

    state
        .sessions
        .with_session(session.id, state.default_width, |entry| {
            entry.notice = Some(notice);
        });

    (AppendHeaders(session.set_cookie()), Redirect::to("/contact")).into_response()
}

/// Handle POST /api/contact (JSON).
pub(crate) async fn post_contact_api(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> (StatusCode, Json<Notice>) {
    let outcome = state.contact.submit(form).await;
    let status = outcome_status(&outcome);
    let notice = Notice::for_outcome(&outcome, Utc::now(), state.contact.notice_ttl());
    (status, Json(notice))
}

fn outcome_status(outcome: &Result<(), SubmitError>) -> StatusCode {
    match outcome {
        Ok(()) => StatusCode::OK,
        Err(SubmitError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(SubmitError::Busy) => StatusCode::CONFLICT,
        Err(SubmitError::Delivery(DeliveryError::NotConfigured)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(SubmitError::Delivery(_)) => StatusCode::BAD_GATEWAY,
    }
}

fn render_contact(notice: Option<&Notice>, now: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(
        r#"<section class="contact"><div class="prose"><h1>Get in Touch</h1><p class="lead">Have questions or want to work together? We'd love to hear from you.</p></div><div class="contact-grid"><div class="contact-info"><h2>Contact Information</h2><p>Fill out the form or reach out to us directly. We'll get back to you as soon as possible.</p><dl>"#,
    );
    write!(
        out,
        r#"<dt>Location</dt><dd>{LOCATION}</dd><dt>Email</dt><dd><a href="mailto:{EMAIL}">{EMAIL}</a></dd><dt>Phone</dt><dd><a href="{PHONE_HREF}">{PHONE}</a></dd></dl></div>"#
    )
    .unwrap();

    out.push_str(r#"<div class="contact-form"><h2>Send us a Message</h2>"#);
    if let Some(notice) = notice {
        let kind = match notice.kind {
            NoticeKind::Success => "success",
            NoticeKind::Failure => "failure",
        };
        write!(
            out,
            r#"<div class="notice notice-{kind}" role="status" data-expires-in="{}">{}</div>"#,
            notice.remaining(now).as_millis(),
            escape_html(&notice.message)
        )
        .unwrap();
    }
    out.push_str(
        r#"<form method="post" action="/contact"><label for="name">Name</label><input type="text" id="name" name="name" required placeholder="Your name"><label for="email">Email</label><input type="email" id="email" name="email" required placeholder="your.email@example.com"><label for="message">Message</label><textarea id="message" name="message" rows="5" required placeholder="Your message..."></textarea><button type="submit" class="button button-primary" data-busy-label="Sending...">Send Message</button></form></div></div></section>"#,
    );
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use bn_contact::FormError;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_contact_page_without_notice() {
        let html = render_contact(None, at(0));

        assert!(html.contains("<h1>Get in Touch</h1>"));
        assert!(html.contains("contact@bootnode.dev"));
        assert!(html.contains(r#"action="/contact""#));
        assert!(!html.contains("notice"));
    }

    #[test]
    fn test_notice_carries_remaining_time() {
        let notice = Notice::failure("Failed <again>", at(0), Duration::from_secs(5));

        let html = render_contact(Some(&notice), at(2));

        assert!(html.contains(
            r#"<div class="notice notice-failure" role="status" data-expires-in="3000">Failed &lt;again&gt;</div>"#
        ));
    }

    #[test]
    fn test_outcome_status() {
        assert_eq!(outcome_status(&Ok(())), StatusCode::OK);
        assert_eq!(
            outcome_status(&Err(SubmitError::Invalid(FormError::InvalidEmail))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            outcome_status(&Err(SubmitError::Busy)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            outcome_status(&Err(SubmitError::Delivery(DeliveryError::NotConfigured))),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
