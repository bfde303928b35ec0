use crate::domain::course::{CourseDefinition, Material, Topic};

/// Fixed table of supported topics and their course content. Loaded once at
/// process start and never mutated afterwards.
pub struct Catalog {
    courses: [CourseDefinition; Topic::ALL.len()],
}

impl Catalog {
    pub fn new(courses: [CourseDefinition; Topic::ALL.len()]) -> Self {
        Self { courses }
    }

    /// Total lookup: `Topic` is closed over the catalog keys by construction.
    pub fn course(&self, topic: Topic) -> &CourseDefinition {
        &self.courses[Self::index(topic)]
    }

    pub fn topics(&self) -> impl Iterator<Item = (Topic, &CourseDefinition)> {
        Topic::ALL.into_iter().map(move |topic| (topic, self.course(topic)))
    }

    fn index(topic: Topic) -> usize {
        match topic {
            Topic::Web => 0,
            Topic::DataScience => 1,
            Topic::Mobile => 2,
            Topic::Ai => 3,
        }
    }

    pub fn builtin() -> Self {
        Self::new([
            CourseDefinition {
                display_name: Topic::Web.display_name().to_string(),
                description: "A curated learning path for beginners in web development"
                    .to_string(),
                materials: vec![
                    Material::new(
                        "freeCodeCamp Web Development",
                        "https://www.freecodecamp.org/learn/responsive-web-design/",
                    ),
                    Material::new("MDN Web Docs", "https://developer.mozilla.org/en-US/docs/Learn"),
                    Material::new("The Odin Project", "https://www.theodinproject.com/"),
                ],
                learning_path: vec![
                    "Start with HTML & CSS basics".to_string(),
                    "Move on to JavaScript".to_string(),
                    "Choose a framework (React, Vue, or Angular)".to_string(),
                ],
            },
            CourseDefinition {
                display_name: Topic::DataScience.display_name().to_string(),
                description: "A comprehensive introduction to data science and analysis"
                    .to_string(),
                materials: vec![
                    Material::new(
                        "Coursera Python for Everybody",
                        "https://www.coursera.org/specializations/python",
                    ),
                    Material::new(
                        "DataCamp Introduction to Python",
                        "https://www.datacamp.com/courses/intro-to-python-for-data-science",
                    ),
                    Material::new("Kaggle Learn", "https://www.kaggle.com/learn"),
                ],
                learning_path: vec![
                    "Learn Python basics".to_string(),
                    "Master data analysis libraries".to_string(),
                    "Practice with real datasets".to_string(),
                ],
            },
            CourseDefinition {
                display_name: Topic::Mobile.display_name().to_string(),
                description: "Learn to build mobile apps for iOS and Android".to_string(),
                materials: vec![
                    Material::new(
                        "Android Developer Fundamentals",
                        "https://developer.android.com/courses",
                    ),
                    Material::new(
                        "iOS App Development with Swift",
                        "https://developer.apple.com/tutorials/swiftui",
                    ),
                    Material::new(
                        "React Native Tutorial",
                        "https://reactnative.dev/docs/tutorial",
                    ),
                ],
                learning_path: vec![
                    "Choose your platform (iOS/Android)".to_string(),
                    "Learn platform basics".to_string(),
                    "Build your first app".to_string(),
                ],
            },
            CourseDefinition {
                display_name: Topic::Ai.display_name().to_string(),
                description: "Introduction to AI and machine learning concepts".to_string(),
                materials: vec![
                    Material::new("Fast.ai - Practical Deep Learning", "https://www.fast.ai/"),
                    Material::new(
                        "Coursera Machine Learning Specialization",
                        "https://www.coursera.org/specializations/machine-learning-introduction",
                    ),
                    Material::new("Google AI Education", "https://ai.google/education/"),
                ],
                learning_path: vec![
                    "Learn Python and mathematics basics".to_string(),
                    "Understand ML fundamentals".to_string(),
                    "Practice with AI frameworks".to_string(),
                ],
            },
        ])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
