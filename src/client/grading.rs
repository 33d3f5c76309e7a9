use serde::{Deserialize, Serialize};

use crate::data::models::Test;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_index: usize,
    pub selected: Option<usize>,
    pub correct_answer: usize,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub test_id: String,
    pub results: Vec<QuestionResult>,
    pub correct: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
}

/// Scores a submission locally. `answers[i]` is the option picked for
/// question `i`; missing or `None` entries count as wrong.
pub fn grade(test: &Test, answers: &[Option<usize>]) -> TestResult {
    let results: Vec<QuestionResult> = test
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = answers.get(index).copied().flatten();
            QuestionResult {
                question_index: index,
                selected,
                correct_answer: question.correct_answer,
                is_correct: selected == Some(question.correct_answer),
            }
        })
        .collect();

    let correct = results.iter().filter(|r| r.is_correct).count();
    let total = results.len();
    let percentage = if total == 0 {
        0
    } else {
        ((correct as f64 / total as f64) * 100.0).round() as u32
    };

    TestResult {
        test_id: test.id.clone(),
        results,
        correct,
        total,
        percentage,
    }
}
