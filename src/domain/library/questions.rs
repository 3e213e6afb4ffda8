//! Question library with category and subcategory filters.

use serde::Serialize;
use std::collections::BTreeSet;

use super::records::Question;
use super::ALL_OPTION;

pub const NO_QUESTIONS_NOTICE: &str = "No questions found with the selected filters.";

/// Selected filter values. `None` and `"All"` both mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl QuestionFilter {
    fn concrete(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| *v != ALL_OPTION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionLibrary {
    pub category_options: Vec<String>,
    /// Only `"All"` until a concrete category is chosen.
    pub subcategory_options: Vec<String>,
    pub questions: Vec<Question>,
    pub notice: Option<&'static str>,
}

fn options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique: BTreeSet<&str> = values.collect();
    std::iter::once(ALL_OPTION)
        .chain(unique)
        .map(String::from)
        .collect()
}

/// Filters `questions`. The subcategory filter only applies under a
/// concrete category.
pub fn question_library(questions: Vec<Question>, filter: &QuestionFilter) -> QuestionLibrary {
    let category_options = options(questions.iter().map(|q| q.category.as_str()));

    let (questions, subcategory_options) = match QuestionFilter::concrete(&filter.category) {
        None => (questions, vec![ALL_OPTION.to_string()]),
        Some(category) => {
            let in_category: Vec<Question> = questions
                .into_iter()
                .filter(|q| q.category == category)
                .collect();
            let subcategory_options =
                options(in_category.iter().map(|q| q.subcategory.as_str()));
            let filtered = match QuestionFilter::concrete(&filter.subcategory) {
                Some(sub) => in_category.into_iter().filter(|q| q.subcategory == sub).collect(),
                None => in_category,
            };
            (filtered, subcategory_options)
        }
    };

    QuestionLibrary {
        category_options,
        subcategory_options,
        notice: questions.is_empty().then_some(NO_QUESTIONS_NOTICE),
        questions,
    }
}
