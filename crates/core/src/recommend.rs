use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::course::{CourseDefinition, ExperienceLevel, Material, Topic};
use crate::domain::enrollment::{EnrollmentRecord, EnrollmentStatus};
use crate::ledger::EnrollmentLedger;
use crate::responses::{pick, FAREWELL_POOL, FEEDBACK_POOL, GREETING_POOL};

/// Discrete category an utterance is classified into before slot extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PositiveFeedback,
    Greeting,
    Farewell,
    ShowEnrollments,
    CourseRequest,
    Unknown,
}

/// Information pulled out of a course request. Both fields are independently
/// optional; absence of either blocks a recommendation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    pub experience: Option<ExperienceLevel>,
    pub topic: Option<Topic>,
}

/// What a front-end renders after one turn: the reply text, an optional
/// materials list, and the enrollment produced by this turn (if any).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    pub materials: Option<Vec<Material>>,
    pub enrollment: Option<EnrollmentRecord>,
}

impl Response {
    fn text_only(text: impl Into<String>) -> Self {
        Self { text: text.into(), materials: None, enrollment: None }
    }
}

const PROMPT_BOTH_MISSING: &str = "Could you please mention both your experience level \
     (beginner or intermediate) and your area of interest? For example: 'I'm a beginner \
     interested in web development.'";
const PROMPT_EXPERIENCE_MISSING: &str = "Please let me know your experience level (beginner or \
     intermediate). For example: 'I'm a beginner.'";
const PROMPT_TOPIC_MISSING: &str = "Can you specify what you'd like to learn (web development, \
     data science, mobile apps, or artificial intelligence)?";
const PROMPT_NOT_ENROLLED: &str =
    "You're not enrolled in any courses yet. Would you like some recommendations?";
const PROMPT_UNKNOWN: &str = "I'm not sure I understood that. Ask me about web development, data \
     science, mobile apps, or artificial intelligence, or type 'show my courses'.";

/// Composed course title, e.g. "Web for Beginners". Also the ledger dedup key.
pub fn composed_course_name(course: &CourseDefinition, experience: ExperienceLevel) -> String {
    format!("{} for {}s", course.display_name, experience.display_name())
}

/// Description shown in the success response. Front-ends and the LMS mirror
/// both go through this, so the two surfaces cannot drift apart.
pub fn composed_description(course: &CourseDefinition, experience: ExperienceLevel) -> String {
    format!(
        "A curated learning path for {}s in {}",
        experience.as_key(),
        course.display_name.to_ascii_lowercase()
    )
}

/// Combines classifier output, slots, and the catalog into a response payload,
/// and applies the enrollment mutation to the ledger before returning.
pub struct RecommendationEngine {
    catalog: Catalog,
    ledger: Arc<EnrollmentLedger>,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog, ledger: Arc<EnrollmentLedger>) -> Self {
        Self { catalog, ledger }
    }

    pub fn ledger(&self) -> &Arc<EnrollmentLedger> {
        &self.ledger
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommend(&self, user_id: &str, intent: Intent, slots: Slots) -> Response {
        match intent {
            Intent::PositiveFeedback => Response::text_only(pick(FEEDBACK_POOL)),
            Intent::Greeting => Response::text_only(pick(GREETING_POOL)),
            Intent::Farewell => Response::text_only(pick(FAREWELL_POOL)),
            Intent::ShowEnrollments => self.show_enrollments(user_id),
            Intent::CourseRequest => self.course_request(user_id, slots),
            Intent::Unknown => Response::text_only(PROMPT_UNKNOWN),
        }
    }

    fn course_request(&self, user_id: &str, slots: Slots) -> Response {
        let (experience, topic) = match (slots.experience, slots.topic) {
            (Some(experience), Some(topic)) => (experience, topic),
            (None, None) => return Response::text_only(PROMPT_BOTH_MISSING),
            (None, Some(_)) => return Response::text_only(PROMPT_EXPERIENCE_MISSING),
            (Some(_), None) => return Response::text_only(PROMPT_TOPIC_MISSING),
        };

        let course = self.catalog.course(topic);
        let course_name = composed_course_name(course, experience);
        let description = composed_description(course, experience);

        let mut text = String::new();
        // The AI course keeps its robot-prefixed welcome.
        if topic == Topic::Ai {
            text.push_str("🤖 ");
        }
        let _ = writeln!(text, "🎉 Welcome to {course_name}!");
        text.push_str("\n📚 Learning Materials:\n");
        for material in &course.materials {
            let _ = writeln!(text, "• {}: {}", material.name, material.url);
        }
        let _ = write!(text, "\n📝 Course Description:\n{description}\n");
        if !course.learning_path.is_empty() {
            text.push_str("\n💡 Learning Path:\n");
            for (step_number, step) in course.learning_path.iter().enumerate() {
                let _ = writeln!(text, "{}. {}", step_number + 1, step);
            }
        }
        text.push_str("\nType 'show my courses' anytime to see your enrolled courses!");

        let record = EnrollmentRecord {
            course_name,
            enrolled_at: Utc::now().date_naive(),
            status: EnrollmentStatus::InProgress,
            materials: course.materials.clone(),
        };
        // Insert is idempotent: re-recommending an identical course is a
        // no-op that keeps the original enrollment date.
        self.ledger.insert(user_id, record.clone());

        Response { text, materials: Some(course.materials.clone()), enrollment: Some(record) }
    }

    fn show_enrollments(&self, user_id: &str) -> Response {
        let records = self.ledger.list_all(user_id);
        if records.is_empty() {
            return Response::text_only(PROMPT_NOT_ENROLLED);
        }

        let mut text = String::from("Here are your enrolled courses:\n");
        for record in &records {
            let _ = write!(
                text,
                "\n📚 {}\nStatus: {}\nEnrolled: {}\n",
                record.course_name,
                record.status.display_name(),
                record.enrolled_at
            );
        }
        for record in &records {
            let _ = write!(text, "\nMaterials for {}:\n", record.course_name);
            for material in &record.materials {
                let _ = writeln!(text, "• {}: {}", material.name, material.url);
            }
        }

        Response { text, materials: None, enrollment: None }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{
        composed_course_name, composed_description, Intent, RecommendationEngine, Response, Slots,
    };
    use crate::catalog::Catalog;
    use crate::domain::course::{ExperienceLevel, Topic};
    use crate::ledger::EnrollmentLedger;
    use crate::responses::{FAREWELL_POOL, FEEDBACK_POOL, GREETING_POOL};

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Catalog::builtin(), Arc::new(EnrollmentLedger::new()))
    }

    fn slots(experience: Option<ExperienceLevel>, topic: Option<Topic>) -> Slots {
        Slots { experience, topic }
    }

    #[test]
    fn beginner_web_enrolls_with_catalog_materials() {
        let engine = engine();
        let response = engine.recommend(
            "user-1",
            Intent::CourseRequest,
            slots(Some(ExperienceLevel::Beginner), Some(Topic::Web)),
        );

        assert!(response.text.contains("Welcome to Web for Beginners!"));
        let enrollment = response.enrollment.expect("course request must enroll");
        assert_eq!(enrollment.course_name, "Web for Beginners");

        let records = engine.ledger().list_all("user-1");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].course_name, "Web for Beginners");
        assert_eq!(records[0].materials, engine.catalog().course(Topic::Web).materials);
    }

    #[test]
    fn repeat_recommendation_does_not_duplicate_enrollment() {
        let engine = engine();
        let request = slots(Some(ExperienceLevel::Beginner), Some(Topic::Web));
        engine.recommend("user-1", Intent::CourseRequest, request);
        engine.recommend("user-1", Intent::CourseRequest, request);

        assert_eq!(engine.ledger().len("user-1"), 1);
    }

    #[test]
    fn missing_experience_prompts_specifically_for_it() {
        let engine = engine();
        let response = engine.recommend("user-1", Intent::CourseRequest, slots(None, Some(Topic::Web)));

        assert!(response.text.contains("experience level"));
        assert!(!response.text.contains("area of interest"), "must not use the both-missing prompt");
        assert!(response.enrollment.is_none());
    }

    #[test]
    fn missing_topic_prompts_specifically_for_it() {
        let engine = engine();
        let response = engine.recommend(
            "user-1",
            Intent::CourseRequest,
            slots(Some(ExperienceLevel::Intermediate), None),
        );

        assert!(response.text.contains("what you'd like to learn"));
        assert!(response.enrollment.is_none());
    }

    #[test]
    fn missing_both_prompts_for_both() {
        let engine = engine();
        let response = engine.recommend("user-1", Intent::CourseRequest, Slots::default());

        assert!(response.text.contains("both your experience level"));
        assert!(response.text.contains("area of interest"));
    }

    #[test]
    fn show_enrollments_without_records_encourages_a_request() {
        let engine = engine();
        let response = engine.recommend("user-1", Intent::ShowEnrollments, Slots::default());

        assert!(response.text.contains("not enrolled in any courses yet"));
        assert!(response.enrollment.is_none());
    }

    #[test]
    fn show_enrollments_lists_names_status_and_materials() {
        let engine = engine();
        engine.recommend(
            "user-1",
            Intent::CourseRequest,
            slots(Some(ExperienceLevel::Intermediate), Some(Topic::DataScience)),
        );
        let response = engine.recommend("user-1", Intent::ShowEnrollments, Slots::default());

        assert!(response.text.contains("Data Science for Intermediates"));
        assert!(response.text.contains("Status: In Progress"));
        assert!(response.text.contains("Kaggle Learn"));
    }

    #[test]
    fn ai_welcome_carries_the_robot_prefix() {
        let engine = engine();
        let response = engine.recommend(
            "user-1",
            Intent::CourseRequest,
            slots(Some(ExperienceLevel::Beginner), Some(Topic::Ai)),
        );

        assert!(response.text.starts_with("🤖 "));
        assert!(response.text.contains("Artificial Intelligence for Beginners"));
    }

    #[test]
    fn small_talk_picks_stay_within_their_pools() {
        let engine = engine();
        let cases = [
            (Intent::PositiveFeedback, FEEDBACK_POOL),
            (Intent::Greeting, GREETING_POOL),
            (Intent::Farewell, FAREWELL_POOL),
        ];
        for (intent, pool) in cases {
            for _ in 0..8 {
                let Response { text, materials, enrollment } =
                    engine.recommend("user-1", intent, Slots::default());
                assert!(pool.contains(&text.as_str()), "{intent:?} reply not in pool: {text}");
                assert!(materials.is_none());
                assert!(enrollment.is_none());
            }
        }
    }

    #[test]
    fn composed_wording_matches_the_success_text() {
        let engine = engine();
        let web = engine.catalog().course(Topic::Web);
        assert_eq!(composed_course_name(web, ExperienceLevel::Beginner), "Web for Beginners");
        assert_eq!(
            composed_description(web, ExperienceLevel::Beginner),
            "A curated learning path for beginners in web"
        );

        let response = engine.recommend(
            "user-1",
            Intent::CourseRequest,
            slots(Some(ExperienceLevel::Beginner), Some(Topic::Web)),
        );
        assert!(response.text.contains("A curated learning path for beginners in web"));
    }

    #[test]
    fn unknown_intent_yields_fallback_without_mutation() {
        let engine = engine();
        let response = engine.recommend("user-1", Intent::Unknown, Slots::default());

        assert!(response.text.contains("not sure I understood"));
        assert!(engine.ledger().is_empty("user-1"));
    }
}
