//! Persona directory: quick stats, origin filter and per-persona cards.

use serde::Serialize;
use std::collections::BTreeSet;

use super::records::{question_text, LlmResponse, Persona, Question};
use super::ALL_OPTION;
use crate::domain::charts::{render_bar_chart, BarChart};

pub const NO_PERSONAS_NOTICE: &str = "No personas found.";
pub const NO_ASSOCIATED_QUESTIONS_NOTICE: &str = "No questions associated with this persona.";
pub const QUESTION_NOT_FOUND: &str = "Question not found";

/// Metric excluded from the bias chart.
const EXCLUDED_BIAS_METRIC: &str = "other_bias";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaStats {
    pub total: usize,
    pub female: usize,
    pub male: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseExcerpt {
    pub response_text: String,
    pub risk_flags: Vec<String>,
    pub suggested_fix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociatedQuestion {
    pub question_id: String,
    pub question_text: String,
    pub response: Option<ResponseExcerpt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaCard {
    pub id: String,
    pub name: String,
    pub title: String,
    pub gender: String,
    pub origin: String,
    pub education: String,
    pub experience: String,
    pub profile_image: String,
    pub bias_chart: Option<BarChart>,
    pub control_comparison: String,
    pub associated_questions: Vec<AssociatedQuestion>,
    pub associated_notice: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaDirectory {
    /// Counted over every persona, before filtering.
    pub stats: PersonaStats,
    pub origin_options: Vec<String>,
    pub personas: Vec<PersonaCard>,
    pub notice: Option<&'static str>,
}

/// "Master of Science from ETH" -> "Master of Science".
pub fn short_education(education: &str) -> &str {
    education.split(" from ").next().unwrap_or(education)
}

/// First sentence fragment, up to the first '.'.
pub fn short_experience(experience: &str) -> &str {
    experience.split('.').next().unwrap_or(experience)
}

/// "gender_bias" -> "Gender Bias".
pub fn bias_label(metric: &str) -> String {
    let spaced = metric.replace('_', " ");
    let mut label = String::with_capacity(spaced.len());
    let mut prev_alpha = false;
    for c in spaced.chars() {
        if prev_alpha {
            label.extend(c.to_lowercase());
        } else {
            label.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    label
}

fn bias_chart(persona: &Persona) -> Option<BarChart> {
    let entries: Vec<(String, f64)> = persona
        .bias_metrics
        .iter()
        .filter(|(name, _)| *name != EXCLUDED_BIAS_METRIC)
        .map(|(name, value)| (bias_label(name), *value))
        .collect();
    (!entries.is_empty()).then(|| render_bar_chart(entries))
}

fn associated_questions(
    persona: &Persona,
    questions: &[Question],
    responses: &[LlmResponse],
) -> Vec<AssociatedQuestion> {
    persona
        .questions_associated
        .iter()
        .map(|id| AssociatedQuestion {
            question_id: id.clone(),
            question_text: question_text(questions, id)
                .unwrap_or(QUESTION_NOT_FOUND)
                .to_string(),
            response: responses
                .iter()
                .find(|r| &r.question_id == id)
                .map(|r| ResponseExcerpt {
                    response_text: r.response_text.clone(),
                    risk_flags: r.risk_flags.clone(),
                    suggested_fix: r.suggested_fix.clone(),
                }),
        })
        .collect()
}

fn card(persona: &Persona, questions: &[Question], responses: &[LlmResponse]) -> PersonaCard {
    let associated = associated_questions(persona, questions, responses);
    PersonaCard {
        id: persona.id.clone(),
        name: persona.name.clone(),
        title: persona.title.clone(),
        gender: persona.gender.clone(),
        origin: persona.origin.clone(),
        education: short_education(&persona.education).to_string(),
        experience: short_experience(&persona.experience).to_string(),
        profile_image: persona.profile_image.clone(),
        bias_chart: bias_chart(persona),
        control_comparison: persona.control_comparison.clone(),
        associated_notice: associated
            .is_empty()
            .then_some(NO_ASSOCIATED_QUESTIONS_NOTICE),
        associated_questions: associated,
    }
}

/// Builds the directory; `origin` of `None` or `"All"` shows everyone.
pub fn persona_directory(
    personas: &[Persona],
    questions: &[Question],
    responses: &[LlmResponse],
    origin: Option<&str>,
) -> PersonaDirectory {
    let stats = PersonaStats {
        total: personas.len(),
        female: personas.iter().filter(|p| p.gender == "Female").count(),
        male: personas.iter().filter(|p| p.gender == "Male").count(),
    };

    let origins: BTreeSet<&str> = personas.iter().map(|p| p.origin.as_str()).collect();
    let origin_options = std::iter::once(ALL_OPTION)
        .chain(origins)
        .map(String::from)
        .collect();

    let origin = origin.filter(|o| *o != ALL_OPTION);
    let cards: Vec<PersonaCard> = personas
        .iter()
        .filter(|p| origin.map_or(true, |o| p.origin == o))
        .map(|p| card(p, questions, responses))
        .collect();

    PersonaDirectory {
        stats,
        origin_options,
        notice: cards.is_empty().then_some(NO_PERSONAS_NOTICE),
        personas: cards,
    }
}
