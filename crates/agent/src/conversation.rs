use eduverse_core::domain::course::{ExperienceLevel, Topic};
use eduverse_core::recommend::{Intent, Slots};

const FEEDBACK_KEYWORDS: &[&str] =
    &["thanks", "thank you", "thx", "good", "great", "awesome", "amazing", "helpful"];
const FAREWELL_KEYWORDS: &[&str] = &["bye", "goodbye", "see you"];
const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey"];
const SHOW_ENROLLMENTS_PHRASE: &str = "show my courses";
// "advanced" is recognized so the text classifies as a course request, but the
// extractor never yields it as a level; the engine then asks for a supported one.
const EXPERIENCE_KEYWORDS: &[&str] = &["beginner", "intermediate", "advanced"];
const TOPIC_KEYWORDS: &[&str] = &["data", "science", "web", "mobile", "app", "ai", "artificial"];

/// Maps raw text to an `Intent` by case-insensitive substring matching against
/// fixed keyword tables. A single utterance can match several tables, so the
/// checks run in strict priority order: feedback, farewell, greeting, the
/// literal enrollments phrase, then course-request keywords.
#[derive(Clone, Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> Intent {
        let normalized = normalize_text(text);

        if contains_any(&normalized, FEEDBACK_KEYWORDS) {
            return Intent::PositiveFeedback;
        }
        if contains_any(&normalized, FAREWELL_KEYWORDS) {
            return Intent::Farewell;
        }
        if contains_any(&normalized, GREETING_KEYWORDS) {
            return Intent::Greeting;
        }
        if normalized.contains(SHOW_ENROLLMENTS_PHRASE) {
            return Intent::ShowEnrollments;
        }
        if contains_any(&normalized, EXPERIENCE_KEYWORDS)
            || contains_any(&normalized, TOPIC_KEYWORDS)
        {
            return Intent::CourseRequest;
        }
        Intent::Unknown
    }
}

/// Pulls `{experience, topic}` out of a course request. First-match, not
/// longest-match: a text naming both levels resolves to beginner because that
/// check runs first. Extraction never fails, it only yields absence.
#[derive(Clone, Debug, Default)]
pub struct SlotExtractor;

impl SlotExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> Slots {
        let normalized = normalize_text(text);

        let experience = if normalized.contains("beginner") {
            Some(ExperienceLevel::Beginner)
        } else if normalized.contains("intermediate") {
            Some(ExperienceLevel::Intermediate)
        } else {
            None
        };

        let topic = if normalized.contains("data") || normalized.contains("science") {
            Some(Topic::DataScience)
        } else if normalized.contains("web") {
            Some(Topic::Web)
        } else if normalized.contains("mobile") || normalized.contains("app") {
            Some(Topic::Mobile)
        } else if normalized.contains("ai") || normalized.contains("artificial") {
            Some(Topic::Ai)
        } else {
            None
        };

        Slots { experience, topic }
    }
}

fn normalize_text(text: &str) -> String {
    text.to_ascii_lowercase()
}

fn contains_any(normalized_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| normalized_text.contains(keyword))
}
