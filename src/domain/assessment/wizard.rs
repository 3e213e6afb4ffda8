//! WizardSession aggregate - one in-progress compliance assessment.
//!
//! All mutation goes through the operations below; they either apply fully
//! or return an error and leave the session unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::answers::{AnswerUpdate, AssessmentAnswers, FieldId};
use super::errors::WizardError;
use super::schema::visible_fields;
use super::step::{WizardState, WizardStep};
use crate::domain::foundation::{
    AssessmentId, Percentage, StateMachine, Timestamp, ValidationError,
};

const NO_ROLE_SELECTED: &str = "select at least one role";

/// A guided compliance questionnaire owned by a single user session.
///
/// # Invariants
///
/// - `answers.completion_timestamp()` is `Some` iff `state` is `Completed`
/// - `Completed` is only reachable with a non-empty role set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSession {
    id: AssessmentId,
    state: WizardState,
    answers: AssessmentAnswers,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl WizardSession {
    /// Starts a fresh assessment at step 1 with no answers.
    pub fn new(id: AssessmentId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: WizardState::Step1,
            answers: AssessmentAnswers::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The section currently shown.
    pub fn current_step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_completed()
    }

    pub fn answers(&self) -> &AssessmentAnswers {
        &self.answers
    }

    /// Read-only copy of the answers for rendering or export.
    pub fn snapshot(&self) -> AssessmentAnswers {
        self.answers.clone()
    }

    pub fn progress(&self) -> Percentage {
        self.state.progress()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Fields the current step shows and accepts.
    pub fn visible_fields(&self) -> BTreeSet<FieldId> {
        visible_fields(self.state, &self.answers)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Guards
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks the guard on the current state's forward transition.
    ///
    /// Step 1 and step 3 require a role; step 2 is unguarded.
    pub fn check_advance_guard(&self) -> Result<(), WizardError> {
        match self.state {
            WizardState::Step1 | WizardState::Step3 if self.answers.roles.is_empty() => {
                Err(WizardError::GuardNotSatisfied {
                    state: self.state,
                    reason: NO_ROLE_SELECTED,
                })
            }
            _ => Ok(()),
        }
    }

    /// True when `advance` would succeed; used to enable the action.
    pub fn can_advance(&self) -> bool {
        self.state.next().is_some() && self.check_advance_guard().is_ok()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Writes one answer.
    ///
    /// # Errors
    ///
    /// - `InvalidFieldForStep` if the field is not visible in the current state
    pub fn update_answer(&mut self, update: AnswerUpdate) -> Result<(), WizardError> {
        let field = update.field();
        if !self.visible_fields().contains(&field) {
            return Err(WizardError::InvalidFieldForStep {
                field,
                state: self.state,
            });
        }
        self.answers.apply(update);
        self.touch();
        Ok(())
    }

    /// Moves forward one step, completing the assessment from step 3.
    ///
    /// # Errors
    ///
    /// - `GuardNotSatisfied` if no role is selected at step 1 or step 3
    /// - `InvalidTransition` if already completed
    pub fn advance(&mut self) -> Result<WizardState, WizardError> {
        self.advance_at(Timestamp::now())
    }

    /// `advance` with an explicit clock, stamped on completion.
    pub fn advance_at(&mut self, now: Timestamp) -> Result<WizardState, WizardError> {
        let target = self.state.next().ok_or_else(|| {
            ValidationError::invalid_format(
                "state_transition",
                format!("{} has no next step", self.state),
            )
        })?;
        self.check_advance_guard()?;
        self.state = self.state.transition_to(target)?;
        if self.state.is_completed() {
            self.answers.stamp_completion(now);
        }
        self.touch();
        Ok(self.state)
    }

    /// Moves back one step. At step 1 this is a no-op.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if completed; only `reset` leaves that state
    pub fn retreat(&mut self) -> Result<WizardState, WizardError> {
        if self.state == WizardState::Step1 {
            return Ok(self.state);
        }
        let target = self.state.previous().ok_or_else(|| {
            ValidationError::invalid_format(
                "state_transition",
                format!("{} cannot go back; start a new assessment instead", self.state),
            )
        })?;
        self.state = self.state.transition_to(target)?;
        self.touch();
        Ok(self.state)
    }

    /// Starts over: step 1, no answers. Valid from any state.
    pub fn reset(&mut self) {
        self.state = WizardState::Step1;
        self.answers = AssessmentAnswers::new();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::options::{HighRiskCategory, RoleKind};
    use proptest::prelude::*;

    fn session() -> WizardSession {
        WizardSession::new(AssessmentId::new())
    }

    fn provider() -> AnswerUpdate {
        AnswerUpdate::Roles([RoleKind::Provider].into_iter().collect())
    }

    fn completed_session() -> WizardSession {
        let mut s = session();
        s.update_answer(AnswerUpdate::IsEu(true)).unwrap();
        s.update_answer(provider()).unwrap();
        s.advance().unwrap();
        s.update_answer(AnswerUpdate::PrimaryFunction("matching CVs".into()))
            .unwrap();
        s.advance().unwrap();
        s.update_answer(AnswerUpdate::Environment("HR back office".into()))
            .unwrap();
        s.advance().unwrap();
        s
    }

    #[test]
    fn new_session_starts_at_step1_with_empty_answers() {
        let s = session();
        assert_eq!(s.state(), WizardState::Step1);
        assert_eq!(s.current_step(), WizardStep::Jurisdiction);
        assert!(s.answers().is_empty());
        assert!(!s.is_complete());
    }

    #[test]
    fn advance_from_step1_without_role_fails_and_keeps_state() {
        let mut s = session();
        let err = s.advance().unwrap_err();
        assert!(matches!(err, WizardError::GuardNotSatisfied { state: WizardState::Step1, .. }));
        assert_eq!(s.state(), WizardState::Step1);
        assert!(!s.can_advance());
    }

    #[test]
    fn advance_from_step1_with_role_moves_to_step2() {
        let mut s = session();
        s.update_answer(provider()).unwrap();
        assert!(s.can_advance());
        assert_eq!(s.advance().unwrap(), WizardState::Step2);
    }

    #[test]
    fn step2_advances_without_any_answers() {
        let mut s = session();
        s.update_answer(provider()).unwrap();
        s.advance().unwrap();
        assert_eq!(s.answers().primary_function, "");
        assert_eq!(s.advance().unwrap(), WizardState::Step3);
    }

    #[test]
    fn completing_stamps_timestamp() {
        let s = completed_session();
        assert!(s.is_complete());
        assert!(s.answers().completion_timestamp().is_some());
        assert_eq!(s.progress(), Percentage::HUNDRED);
    }

    #[test]
    fn advance_at_uses_given_clock() {
        let mut s = session();
        s.update_answer(provider()).unwrap();
        s.advance().unwrap();
        s.advance().unwrap();
        let at = Timestamp::now();
        s.advance_at(at).unwrap();
        assert_eq!(s.answers().completion_timestamp(), Some(&at));
    }

    #[test]
    fn clearing_roles_after_going_back_blocks_advance_again() {
        let mut s = session();
        s.update_answer(provider()).unwrap();
        s.advance().unwrap();
        s.retreat().unwrap();
        s.update_answer(AnswerUpdate::Roles(BTreeSet::new())).unwrap();

        assert!(s.advance().is_err());
        assert_eq!(s.state(), WizardState::Step1);
        assert!(s.answers().completion_timestamp().is_none());
    }

    #[test]
    fn advance_after_completion_is_invalid_transition() {
        let mut s = completed_session();
        let stamp = s.answers().completion_timestamp().copied();
        assert!(matches!(s.advance(), Err(WizardError::InvalidTransition(_))));
        assert_eq!(s.answers().completion_timestamp().copied(), stamp);
    }

    #[test]
    fn retreat_at_step1_is_noop() {
        let mut s = session();
        assert_eq!(s.retreat().unwrap(), WizardState::Step1);
    }

    #[test]
    fn retreat_moves_back_one_step() {
        let mut s = session();
        s.update_answer(provider()).unwrap();
        s.advance().unwrap();
        s.advance().unwrap();
        assert_eq!(s.retreat().unwrap(), WizardState::Step2);
        assert_eq!(s.retreat().unwrap(), WizardState::Step1);
    }

    #[test]
    fn retreat_from_completed_is_rejected() {
        let mut s = completed_session();
        assert!(matches!(s.retreat(), Err(WizardError::InvalidTransition(_))));
        assert!(s.is_complete());
    }

    #[test]
    fn update_rejects_field_from_other_step() {
        let mut s = session();
        let err = s
            .update_answer(AnswerUpdate::Environment("factory".into()))
            .unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidFieldForStep {
                field: FieldId::Environment,
                state: WizardState::Step1
            }
        );
        assert!(s.answers().is_empty());
    }

    #[test]
    fn update_rejects_hidden_conditional_field() {
        let mut s = session();
        s.update_answer(AnswerUpdate::Roles([RoleKind::Deployer].into_iter().collect()))
            .unwrap();
        s.advance().unwrap();
        let err = s
            .update_answer(AnswerUpdate::AlgorithmicTransparency("model cards".into()))
            .unwrap_err();
        assert!(matches!(err, WizardError::InvalidFieldForStep { .. }));
    }

    #[test]
    fn conditional_answer_survives_later_role_change() {
        let mut s = session();
        s.update_answer(AnswerUpdate::IsEu(true)).unwrap();
        s.update_answer(provider()).unwrap();
        s.advance().unwrap();
        s.update_answer(AnswerUpdate::HighRiskCategories(
            [HighRiskCategory::Employment].into_iter().collect(),
        ))
        .unwrap();
        s.update_answer(AnswerUpdate::RiskManagement("ISO 23894 process".into()))
            .unwrap();
        s.update_answer(AnswerUpdate::AlgorithmicTransparency("model cards".into()))
            .unwrap();
        s.retreat().unwrap();
        s.update_answer(AnswerUpdate::IsEu(false)).unwrap();
        s.update_answer(AnswerUpdate::Roles([RoleKind::Importer].into_iter().collect()))
            .unwrap();

        assert_eq!(s.answers().risk_management.as_deref(), Some("ISO 23894 process"));
        assert_eq!(s.answers().algorithmic_transparency.as_deref(), Some("model cards"));
    }

    #[test]
    fn completed_session_rejects_updates() {
        let mut s = completed_session();
        assert!(s.update_answer(AnswerUpdate::IsEu(false)).is_err());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut s = completed_session();
        s.reset();
        assert_eq!(s.state(), WizardState::Step1);
        assert!(s.answers().is_empty());
        assert!(!s.is_complete());
        assert!(s.answers().completion_timestamp().is_none());
    }

    #[test]
    fn snapshot_is_detached_copy() {
        let mut s = session();
        s.update_answer(AnswerUpdate::IsEu(true)).unwrap();
        let snap = s.snapshot();
        s.reset();
        assert!(snap.is_eu);
    }

    fn step1_update() -> impl Strategy<Value = AnswerUpdate> {
        prop_oneof![
            any::<bool>().prop_map(AnswerUpdate::IsEu),
            proptest::sample::subsequence(RoleKind::ALL.to_vec(), 0..=4)
                .prop_map(|roles| AnswerUpdate::Roles(roles.into_iter().collect())),
        ]
    }

    proptest! {
        #[test]
        fn last_write_wins_per_field(updates in proptest::collection::vec(step1_update(), 1..20)) {
            let mut s = session();
            for update in &updates {
                s.update_answer(update.clone()).unwrap();
            }
            let last_is_eu = updates.iter().rev().find_map(|u| match u {
                AnswerUpdate::IsEu(v) => Some(*v),
                _ => None,
            });
            let last_roles = updates.iter().rev().find_map(|u| match u {
                AnswerUpdate::Roles(v) => Some(v.clone()),
                _ => None,
            });
            prop_assert_eq!(s.answers().is_eu, last_is_eu.unwrap_or(false));
            prop_assert_eq!(s.answers().roles.clone(), last_roles.unwrap_or_default());
        }

        #[test]
        fn advance_from_step1_fails_iff_roles_empty(
            roles in proptest::sample::subsequence(RoleKind::ALL.to_vec(), 0..=4)
        ) {
            let mut s = session();
            let empty = roles.is_empty();
            s.update_answer(AnswerUpdate::Roles(roles.into_iter().collect())).unwrap();
            let result = s.advance();
            prop_assert_eq!(result.is_err(), empty);
            let expected = if empty { WizardState::Step1 } else { WizardState::Step2 };
            prop_assert_eq!(s.state(), expected);
        }

        #[test]
        fn reset_is_idempotent(times in 1usize..5) {
            let mut s = completed_session();
            for _ in 0..times {
                s.reset();
                prop_assert_eq!(s.state(), WizardState::Step1);
                prop_assert!(s.answers().is_empty());
                prop_assert!(!s.is_complete());
            }
        }
    }
}
