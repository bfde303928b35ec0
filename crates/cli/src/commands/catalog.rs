use std::fmt::Write as _;

use eduverse_core::catalog::Catalog;

pub fn run() -> String {
    let catalog = Catalog::builtin();
    let mut output = String::from("supported topics:");
    for (topic, course) in catalog.topics() {
        let _ = write!(
            output,
            "\n  {} — {} ({} materials, {} learning-path steps)\n    {}",
            topic.as_key(),
            course.display_name,
            course.materials.len(),
            course.learning_path.len(),
            course.description
        );
    }
    output
}
