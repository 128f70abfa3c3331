//! The riddle turn state machine
//!
//! One combat turn, end to end: resolve difficulty, select a riddle,
//! collect an answer (or the AI's verdict), evaluate it, and convert the
//! outcome into damage. The machine holds no rendering or input code; the
//! host supplies answers through [`AnswerSource`] and applies the returned
//! [`TurnResult`] to its own health model.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai;
use crate::answer::evaluate;
use crate::catalog::{Catalog, Category, Difficulty, RiddleRecord};
use crate::combatant::CombatantProfile;
use crate::damage::{Damage, DamageCurve};
use crate::resolver::resolve;
use crate::rng::BattleRng;
use crate::selector::{FallbackPolicy, SelectError, select_with_fallback};

/// Phases of one riddle turn
///
/// A battle rests in `Idle` between turns; constructing a [`RiddleTurn`]
/// moves straight to `RiddleSelected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    RiddleSelected,
    AwaitingAnswer,
    Evaluating,
    Resolved,
    Cancelled,
}

/// How the turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnOutcome {
    Correct,
    Incorrect,
    /// Backed out mid-riddle; damage-equivalent to a wrong answer
    Cancelled,
}

impl TurnOutcome {
    pub const fn is_correct(self) -> bool {
        matches!(self, TurnOutcome::Correct)
    }
}

/// Everything the enclosing battle loop supplies for one turn
#[derive(Debug, Clone, Copy)]
pub struct TurnRequest<'a> {
    pub profile: &'a CombatantProfile,
    /// Riddle ids already used this battle; owned by the battle session
    pub used_riddles: &'a HashSet<String>,
}

/// Selection failed even after every enabled fallback
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSetupError {
    #[error("no riddle available: {0}")]
    NoRiddleAvailable(#[from] SelectError),
}

/// The outcome of one resolved riddle turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResult {
    pub riddle_id: String,
    pub outcome: TurnOutcome,
    pub damage: Damage,
    /// Zero unless the answer was correct
    pub experience: u32,
}

/// Inputs a human actor can produce during a riddle turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerEvent {
    Submit(String),
    RequestHint,
    Cancel,
}

/// What the actor is allowed to see while answering
#[derive(Debug, Clone, Copy)]
pub struct RiddleView<'a> {
    pub prompt: &'a str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub hint_available: bool,
    /// Populated only after the hint has been requested
    pub hint: Option<&'a str>,
}

/// Host-side input boundary for the human path
///
/// A deadline lives here too: an implementation may return
/// [`AnswerEvent::Cancel`] when its clock runs out.
pub trait AnswerSource {
    fn next_event(&mut self, view: &RiddleView<'_>) -> AnswerEvent;
}

/// One combat turn in progress
#[derive(Debug)]
pub struct RiddleTurn<'a> {
    profile: &'a CombatantProfile,
    riddle: &'a RiddleRecord,
    curve: &'a DamageCurve,
    phase: TurnPhase,
    hint_requested: bool,
}

impl<'a> RiddleTurn<'a> {
    /// Start a turn: resolve the profile and select a riddle
    pub fn begin(
        catalog: &'a Catalog,
        curve: &'a DamageCurve,
        policy: FallbackPolicy,
        request: TurnRequest<'a>,
        rng: &mut BattleRng,
    ) -> Result<Self, TurnSetupError> {
        let (difficulty, weights) = resolve(request.profile);
        let riddle = select_with_fallback(
            catalog,
            difficulty,
            &weights,
            request.used_riddles,
            policy,
            rng,
        )?;

        Ok(Self {
            profile: request.profile,
            riddle,
            curve,
            phase: TurnPhase::RiddleSelected,
            hint_requested: false,
        })
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn riddle(&self) -> &RiddleRecord {
        self.riddle
    }

    /// The actor-facing view of the current riddle
    pub fn view(&self) -> RiddleView<'_> {
        RiddleView {
            prompt: &self.riddle.prompt,
            category: self.riddle.category,
            difficulty: self.riddle.difficulty,
            hint_available: self.riddle.has_hint(),
            hint: if self.hint_requested {
                self.riddle.hint.as_deref()
            } else {
                None
            },
        }
    }

    /// Drive the human path to completion
    ///
    /// Blocks on the answer source until it submits or cancels. Hint
    /// requests update the view and keep waiting.
    pub fn drive(&mut self, source: &mut dyn AnswerSource) -> TurnResult {
        self.phase = TurnPhase::AwaitingAnswer;
        loop {
            let event = source.next_event(&self.view());
            match event {
                AnswerEvent::Submit(text) => {
                    self.phase = TurnPhase::Evaluating;
                    let outcome = if evaluate(self.riddle, &text) {
                        TurnOutcome::Correct
                    } else {
                        TurnOutcome::Incorrect
                    };
                    self.phase = TurnPhase::Resolved;
                    return self.finish(outcome);
                }
                AnswerEvent::RequestHint => {
                    self.hint_requested = true;
                }
                AnswerEvent::Cancel => {
                    self.phase = TurnPhase::Cancelled;
                    return self.finish(TurnOutcome::Cancelled);
                }
            }
        }
    }

    /// Drive the AI path: resolves synchronously with a single simulated
    /// verdict, never waiting on input
    pub fn run_ai(&mut self, rng: &mut BattleRng) -> TurnResult {
        self.phase = TurnPhase::Evaluating;
        let outcome = if ai::simulate(self.profile, self.riddle, rng) {
            TurnOutcome::Correct
        } else {
            TurnOutcome::Incorrect
        };
        self.phase = TurnPhase::Resolved;
        self.finish(outcome)
    }

    fn finish(&self, outcome: TurnOutcome) -> TurnResult {
        let mut damage = self.curve.compute(self.riddle.difficulty, outcome.is_correct());
        if outcome.is_correct() {
            damage.amount =
                (damage.amount as f32 * self.riddle.damage_multiplier).round() as u32;
        }

        TurnResult {
            riddle_id: self.riddle.id.clone(),
            outcome,
            damage,
            experience: if outcome.is_correct() {
                self.riddle.experience_reward
            } else {
                0
            },
        }
    }
}
