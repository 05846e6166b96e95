// src/models/question.rs

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// An immutable true/false trivia item.
///
/// The expected answer is the literal string "True" or "False"; grading
/// compares submitted strings against it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// Fixed-membership pool of trivia questions, kept in memory for the
/// process lifetime. The order is permuted by the daily reshuffle; the
/// first `QUIZ_QUESTION_COUNT` items of the current order form the
/// round's paper.
#[derive(Debug)]
pub struct QuestionBank {
    pool: Vec<QuestionAnswer>,
}

impl QuestionBank {
    /// Builds the bank from the built-in question list, in seed order.
    pub fn seeded() -> Self {
        let pool = SEED_QUESTIONS
            .iter()
            .map(|(question, answer)| QuestionAnswer {
                question: (*question).to_string(),
                answer: (*answer).to_string(),
            })
            .collect();
        Self { pool }
    }

    /// Randomly permutes the pool in place. Affects future `take` calls
    /// only; papers already handed out keep their order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pool.shuffle(rng);
    }

    /// Returns the first `n` questions of the current order.
    pub fn take(&self, n: usize) -> &[QuestionAnswer] {
        &self.pool[..n.min(self.pool.len())]
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

const SEED_QUESTIONS: &[(&str, &str)] = &[
    ("The capital of India is New Delhi.", "True"),
    ("The official language of Karnataka is Kannada.", "True"),
    ("Taj Mahal is located in Mumbai.", "False"),
    ("The national animal of India is the Tiger.", "True"),
    ("Karnataka is known as the Garden City of India.", "False"),
    ("The Indian Ocean lies to the east of India.", "False"),
    ("Bangalore is the capital city of Karnataka.", "True"),
    ("The national flower of India is the Lotus.", "True"),
    ("Karnataka shares its border with Maharashtra.", "True"),
    ("The Red Fort is located in Mumbai.", "False"),
    ("The national bird of India is the Peacock.", "True"),
    ("Karnataka is the largest state in India by area.", "False"),
    ("The Ganges River originates in Karnataka.", "False"),
    ("The Indian flag has three horizontal stripes.", "True"),
    ("Karnataka has a coastline along the Arabian Sea.", "False"),
    ("The Qutub Minar is located in Bangalore.", "False"),
    ("Hindi is the most widely spoken language in Karnataka.", "False"),
    ("The national emblem of India is the Ashoka Chakra.", "False"),
    ("Mysore Palace is located in Mysore, Karnataka.", "True"),
    ("The Indian rupee is the currency of India.", "True"),
    ("The Western Ghats run through Karnataka.", "True"),
    ("The Indian national anthem is \"Jana Gana Mana\".", "True"),
    (
        "The Vidhana Soudha is the legislative assembly building of Karnataka.",
        "True",
    ),
    ("The Indian flag has a blue wheel in the center.", "True"),
    ("Karnataka is known for its silk production.", "True"),
    ("Mahatma Gandhi was born in Karnataka.", "False"),
    ("The India Gate is located in Bangalore.", "False"),
    ("Karnataka is home to the Bandipur National Park.", "True"),
    ("The official sport of India is cricket.", "False"),
    (
        "Karnataka is known for its IT industry, particularly in Bangalore.",
        "True",
    ),
    ("The Indian parliament is called the Lok Sabha.", "False"),
    ("The Mysore Dasara festival is celebrated in Karnataka.", "True"),
    (
        "The highest mountain peak in Karnataka is Tadiandamol.",
        "True",
    ),
    ("The national tree of India is the Banyan tree.", "True"),
    (
        "Karnataka has the highest literacy rate among Indian states.",
        "False",
    ),
    ("The India-Pakistan border is called the Radcliffe Line.", "False"),
    ("The Karnataka High Court is located in Mysore.", "False"),
    ("The Lotus Temple is located in Bangalore.", "False"),
    ("Karnataka is known for its coffee production.", "True"),
    ("The Indian national motto is \"Satyameva Jayate\".", "True"),
    ("Karnataka was formed on November 1st, 1956.", "True"),
    (
        "The Rashtrapati Bhavan is the official residence of the Prime Minister of India.",
        "False",
    ),
    (
        "Karnataka has the highest number of tiger reserves in India.",
        "True",
    ),
    ("The Indian national song is \"Vande Mataram\".", "True"),
    ("The state bird of Karnataka is the Indian Roller.", "True"),
    ("The Indian national currency symbol is ₹.", "True"),
    (
        "Karnataka has the highest number of UNESCO World Heritage Sites in India.",
        "True",
    ),
    (
        "The national aquatic animal of India is the Ganges River Dolphin.",
        "True",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_bank_has_full_pool() {
        let bank = QuestionBank::seeded();
        assert_eq!(bank.len(), 48);
        assert!(!bank.is_empty());
    }

    #[test]
    fn take_returns_prefix_of_current_order() {
        let bank = QuestionBank::seeded();
        let paper = bank.take(10);
        assert_eq!(paper.len(), 10);
        assert_eq!(paper[0].question, "The capital of India is New Delhi.");
        assert_eq!(paper[0].answer, "True");
    }

    #[test]
    fn take_is_capped_at_pool_size() {
        let bank = QuestionBank::seeded();
        assert_eq!(bank.take(1000).len(), 48);
    }

    #[test]
    fn shuffle_permutes_but_keeps_membership() {
        let mut bank = QuestionBank::seeded();
        let mut rng = StdRng::seed_from_u64(7);
        let before: Vec<QuestionAnswer> = bank.take(48).to_vec();

        bank.shuffle(&mut rng);

        let mut after: Vec<QuestionAnswer> = bank.take(48).to_vec();
        assert_eq!(after.len(), before.len());

        let mut sorted_before = before.clone();
        sorted_before.sort_by(|a, b| a.question.cmp(&b.question));
        after.sort_by(|a, b| a.question.cmp(&b.question));
        assert_eq!(after, sorted_before);
    }

    #[test]
    fn answers_are_literal_true_false_strings() {
        let bank = QuestionBank::seeded();
        assert!(
            bank.take(48)
                .iter()
                .all(|qa| qa.answer == "True" || qa.answer == "False")
        );
    }
}
