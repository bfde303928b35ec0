use std::sync::Arc;

use eduverse_core::errors::ApplicationError;
use eduverse_core::ledger::EnrollmentLedger;
use eduverse_core::lms::LmsBackend;
use eduverse_core::recommend::{
    composed_description, Intent, RecommendationEngine, Response, Slots,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::conversation::{IntentClassifier, SlotExtractor};

/// The sole inbound entry point a front-end calls: one utterance in, one
/// `Response` out. Owns the classifier, extractor, and engine; optionally
/// mirrors enrollments to an injected LMS backend.
pub struct AgentRuntime {
    classifier: IntentClassifier,
    extractor: SlotExtractor,
    engine: RecommendationEngine,
    backend: Option<Arc<dyn LmsBackend>>,
}

impl AgentRuntime {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            extractor: SlotExtractor::new(),
            engine,
            backend: None,
        }
    }

    pub fn with_backend(engine: RecommendationEngine, backend: Arc<dyn LmsBackend>) -> Self {
        Self { backend: Some(backend), ..Self::new(engine) }
    }

    pub fn ledger(&self) -> &Arc<EnrollmentLedger> {
        self.engine.ledger()
    }

    /// The intent the runtime's own classifier assigns to `text`. Front-ends
    /// that branch on intent (e.g. to end a chat session on farewell) use
    /// this instead of running a classifier of their own.
    pub fn classify(&self, text: &str) -> Intent {
        self.classifier.classify(text)
    }

    /// One synchronous conversation turn: classify, extract slots when the
    /// intent is a course request, let the engine decide, then mirror any new
    /// enrollment to the backend. A backend failure is logged and surfaced as
    /// a generic retry prompt; the ledger record it already wrote stays, so a
    /// retry converges through the idempotent insert.
    pub async fn handle_utterance(&self, user_id: &str, text: &str) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        let intent = self.classifier.classify(text);
        let slots = match intent {
            Intent::CourseRequest => self.extractor.extract(text),
            _ => Slots::default(),
        };
        info!(
            event_name = "agent.utterance.classified",
            correlation_id = %correlation_id,
            user_id = %user_id,
            intent = ?intent,
            "utterance classified"
        );

        let response = self.engine.recommend(user_id, intent, slots);

        if let (Some(record), Some(backend)) = (&response.enrollment, &self.backend) {
            // Same composed wording the success text carries.
            let description = slots
                .topic
                .zip(slots.experience)
                .map(|(topic, experience)| {
                    composed_description(self.engine.catalog().course(topic), experience)
                })
                .unwrap_or_default();
            let mirror = async {
                let course_id = backend
                    .create_course(&record.course_name, &description, &record.materials)
                    .await?;
                backend.enroll_user(user_id, &course_id).await
            };
            if let Err(backend_error) = mirror.await {
                let error = ApplicationError::from(backend_error);
                warn!(
                    event_name = "agent.lms.mirror_failed",
                    correlation_id = %correlation_id,
                    user_id = %user_id,
                    error = %error,
                    "enrollment mirror failed; ledger remains authoritative"
                );
                return Response {
                    text: error.user_message().to_string(),
                    materials: None,
                    enrollment: None,
                };
            }
            info!(
                event_name = "agent.lms.enrollment_mirrored",
                correlation_id = %correlation_id,
                user_id = %user_id,
                course_name = %record.course_name,
                "enrollment mirrored to lms backend"
            );
        }

        response
    }
}
