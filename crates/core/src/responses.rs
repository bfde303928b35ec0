//! Canned response pools for the small-talk intents. Selection is
//! non-deterministic by design (variety, not correctness); tests assert
//! membership in a pool, never an exact pick.

use rand::seq::SliceRandom;

pub const FEEDBACK_POOL: &[&str] = &[
    "You're always welcome! 😊 Feel free to reach out anytime if you need help!",
    "Glad I could assist! 🌟 Keep exploring and learning more courses!",
    "You're welcome! 🎉 Don't hesitate to ask if you need anything else!",
    "Thank you for the kind words! 🌟 Anything else you'd like to explore?",
    "I'm glad to hear that! 🎉 Let me know if there's more you'd like to learn!",
    "It's great to hear that! 😊 Feel free to ask about more topics anytime!",
];

pub const GREETING_POOL: &[&str] = &[
    "Hello! 👋 Ready to dive into new learning adventures?",
    "Welcome! 🌟 What would you like to learn today? I'm here to help!",
    "Hi there! 😊 Let me know how I can help you find the perfect course!",
];

pub const FAREWELL_POOL: &[&str] = &[
    "Goodbye for now! 👋 Come back anytime to continue your learning journey!",
    "See you soon! 🌟 Your enrolled courses will be waiting when you return!",
    "Have a fantastic day! 😊 Keep up with your newfound knowledge!",
];

pub(crate) fn pick(pool: &[&str]) -> String {
    let mut rng = rand::thread_rng();
    pool.choose(&mut rng).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::{pick, FAREWELL_POOL, FEEDBACK_POOL, GREETING_POOL};

    #[test]
    fn picks_stay_within_their_pool() {
        for pool in [FEEDBACK_POOL, GREETING_POOL, FAREWELL_POOL] {
            for _ in 0..16 {
                let choice = pick(pool);
                assert!(pool.contains(&choice.as_str()));
            }
        }
    }

    #[test]
    fn empty_pool_yields_empty_string() {
        assert_eq!(pick(&[]), "");
    }
}
