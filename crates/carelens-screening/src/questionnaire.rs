//! The fixed cognitive-decline screening questionnaire.
//!
//! 12 questions across five categories. Six are yes/no change questions
//! worth 0 or 1 point; six are frequency questions worth 0, 1, or 2.
//! Maximum total: 18.

use std::sync::LazyLock;

use carelens_core::models::question::{AnswerOption, Question, QuestionCategory};

/// The full, ordered question list.
pub fn questions() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        let change_items = [
            (
                "memory_change",
                QuestionCategory::Memory,
                "Have problems with memory or thinking gotten noticeably worse over the past year?",
                Some("Compared to how they were a year ago, not compared to other people."),
            ),
            (
                "memory_appointments",
                QuestionCategory::Memory,
                "Do they forget appointments, family occasions, or holidays?",
                None,
            ),
            (
                "judgment_decisions",
                QuestionCategory::Judgment,
                "Have they shown poor judgment with money, gifts, or offers that seem too good to be true?",
                None,
            ),
            (
                "orientation_date",
                QuestionCategory::Orientation,
                "Do they have trouble knowing the day, date, or month?",
                None,
            ),
            (
                "function_appliances",
                QuestionCategory::Function,
                "Do they have difficulty learning or operating appliances, tools, or gadgets?",
                Some("For example a new phone, the microwave, or the thermostat."),
            ),
            (
                "language_words",
                QuestionCategory::Language,
                "Do they have trouble finding the right word in conversation?",
                None,
            ),
        ];

        let frequency_items = [
            (
                "memory_repeats",
                QuestionCategory::Memory,
                "How often do they repeat the same questions or stories within a single day?",
            ),
            (
                "orientation_places",
                QuestionCategory::Orientation,
                "How often do they get lost or disoriented in familiar places?",
            ),
            (
                "function_finances",
                QuestionCategory::Function,
                "How often do they need help managing finances, bills, or paperwork?",
            ),
            (
                "function_medications",
                QuestionCategory::Function,
                "How often do they forget medications or take them incorrectly?",
            ),
            (
                "judgment_safety",
                QuestionCategory::Judgment,
                "How often do safety lapses happen, like leaving the stove on or doors unlocked?",
            ),
            (
                "language_conversation",
                QuestionCategory::Language,
                "How often do they struggle to follow or hold a conversation?",
            ),
        ];

        let mut questions: Vec<Question> = change_items
            .iter()
            .map(|(id, category, prompt, help)| Question {
                id: id.to_string(),
                category: *category,
                prompt: prompt.to_string(),
                help_text: help.map(str::to_string),
                options: vec![
                    option("no_change", "No, no change", 0),
                    option("yes_change", "Yes, a change", 1),
                ],
            })
            .collect();

        questions.extend(frequency_items.iter().map(|(id, category, prompt)| Question {
            id: id.to_string(),
            category: *category,
            prompt: prompt.to_string(),
            help_text: None,
            options: vec![
                option("never", "Never or rarely", 0),
                option("sometimes", "Sometimes", 1),
                option("often", "Often", 2),
            ],
        }));

        questions
    });
    &QUESTIONS
}

/// Look up a question by ID.
pub fn get_question(id: &str) -> Option<&'static Question> {
    questions().iter().find(|q| q.id == id)
}

fn option(value: &str, label: &str, weight: u32) -> AnswerOption {
    AnswerOption {
        value: value.to_string(),
        label: label.to_string(),
        weight,
    }
}
