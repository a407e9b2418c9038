//! Submission front desk: validation, single-flight guard, delivery.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::{DeliveryError, SubmitError};
use crate::form::ContactForm;
use crate::sender::EmailSender;

/// Accepts contact submissions and forwards them to an [`EmailSender`].
///
/// Only one submission is in flight at a time; a second one arriving before
/// the first resolves is rejected with [`SubmitError::Busy`].
pub struct ContactDesk {
    sender: Option<Arc<dyn EmailSender>>,
    in_flight: Arc<AtomicBool>,
    notice_ttl: Duration,
}

/// Clears the in-flight flag when dropped.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ContactDesk {
    /// Create a desk. `None` means delivery is not configured and every valid
    /// submission fails.
    #[must_use]
    pub fn new(sender: Option<Arc<dyn EmailSender>>, notice_ttl: Duration) -> Self {
        Self {
            sender,
            in_flight: Arc::new(AtomicBool::new(false)),
            notice_ttl,
        }
    }

    /// How long status notices stay visible.
    #[must_use]
    pub fn notice_ttl(&self) -> Duration {
        self.notice_ttl
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.sender.is_some()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate and deliver one submission. Never retried.
    pub async fn submit(&self, form: ContactForm) -> Result<(), SubmitError> {
        let form = form.validated().inspect_err(|err| {
            warn!(error = %err, "Rejected contact form");
        })?;

        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            warn!("Contact submission rejected: another is in flight");
            return Err(SubmitError::Busy);
        };

        let Some(sender) = self.sender.clone() else {
            error!("Contact submission failed: delivery is not configured");
            return Err(DeliveryError::NotConfigured.into());
        };

        let result = tokio::task::spawn_blocking(move || sender.send(&form))
            .await
            .map_err(|e| DeliveryError::Task(e.to_string()))
            .and_then(|sent| sent);

        match &result {
            Ok(()) => info!("Contact message delivered"),
            Err(err) => error!(error = %err, "Contact message delivery failed"),
        }
        result.map_err(SubmitError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::mpsc;

    use super::*;
    use crate::form::FormError;

    const TTL: Duration = Duration::from_secs(5);

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<ContactForm>>,
        fail_with: Option<u16>,
    }

    impl EmailSender for Recorder {
        fn send(&self, form: &ContactForm) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(form.clone());
            match self.fail_with {
                Some(status) => Err(DeliveryError::HttpResponse {
                    status,
                    body: "rejected".to_owned(),
                }),
                None => Ok(()),
            }
        }
    }

    /// Blocks until released so a submission stays in flight.
    struct Gate {
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl EmailSender for Gate {
        fn send(&self, _form: &ContactForm) -> Result<(), DeliveryError> {
            self.release.lock().unwrap().recv().unwrap();
            Ok(())
        }
    }

    fn form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello there")
    }

    #[tokio::test]
    async fn test_submit_delivers_trimmed_form() {
        let recorder = Arc::new(Recorder::default());
        let desk = ContactDesk::new(Some(Arc::clone(&recorder) as Arc<dyn EmailSender>), TTL);

        desk.submit(ContactForm::new(" Ada ", "ada@example.com", "Hi"))
            .await
            .unwrap();

        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada");
        assert!(!desk.is_busy());
    }

    #[tokio::test]
    async fn test_invalid_form_not_sent() {
        let recorder = Arc::new(Recorder::default());
        let desk = ContactDesk::new(Some(Arc::clone(&recorder) as Arc<dyn EmailSender>), TTL);

        let err = desk
            .submit(ContactForm::new("Ada", "not-an-email", "Hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(FormError::InvalidEmail)));
        assert!(recorder.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_releases_guard() {
        let recorder = Arc::new(Recorder {
            fail_with: Some(400),
            ..Default::default()
        });
        let desk = ContactDesk::new(Some(Arc::clone(&recorder) as Arc<dyn EmailSender>), TTL);

        let err = desk.submit(form()).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Delivery(DeliveryError::HttpResponse { status: 400, .. })
        ));
        assert!(!desk.is_busy());

        // Not retried, but a new submission is accepted.
        let _ = desk.submit(form()).await;
        assert_eq!(recorder.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_not_configured() {
        let desk = ContactDesk::new(None, TTL);

        let err = desk.submit(form()).await.unwrap_err();

        assert!(matches!(
            err,
            SubmitError::Delivery(DeliveryError::NotConfigured)
        ));
        assert!(!desk.is_configured());
        assert!(!desk.is_busy());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_submission_rejected() {
        let (release, rx) = mpsc::channel();
        let gate = Arc::new(Gate {
            release: Mutex::new(rx),
        });
        let desk = Arc::new(ContactDesk::new(Some(gate), TTL));

        let first = tokio::spawn({
            let desk = Arc::clone(&desk);
            async move { desk.submit(form()).await }
        });
        while !desk.is_busy() {
            tokio::task::yield_now().await;
        }

        let second = desk.submit(form()).await;
        assert!(matches!(second, Err(SubmitError::Busy)));

        release.send(()).unwrap();
        first.await.unwrap().unwrap();
        assert!(!desk.is_busy());
    }
}
