//! rb-core: Riddle combat resolution core
//!
//! Replaces the pick-a-technique combat turn with a riddle-answering turn:
//! a riddle is selected to match the acting combatant's level and type
//! affinity, answered by a human or "solved" probabilistically by an AI,
//! and the outcome becomes damage to one side or the other.
//!
//! The crate contains no rendering or input handling. Hosts feed answers
//! in through [`turn::AnswerSource`] and apply [`turn::TurnResult`]s to
//! their own battle model; [`battle::BattleSession`] is a ready-made
//! enclosing loop for two-combatant fights.

pub mod ai;
pub mod answer;
pub mod battle;
pub mod catalog;
pub mod combatant;
pub mod damage;
pub mod resolver;
pub mod selector;
pub mod turn;

mod rng;

pub use battle::{
    BattleCommand, BattleEvent, BattleLoopResult, BattleSession, BattleTurnReport, Combatant,
    Unattended,
};
pub use catalog::{
    Catalog, CatalogIncompleteError, CatalogLoadError, Category, Difficulty, RiddleRecord,
};
pub use combatant::{CombatantProfile, TypeAffinity};
pub use damage::{Damage, DamageCurve, DamageSide};
pub use resolver::{CategoryWeights, difficulty_for_level, resolve};
pub use rng::BattleRng;
pub use selector::{FallbackPolicy, SelectError};
pub use turn::{
    AnswerEvent, AnswerSource, RiddleTurn, RiddleView, TurnOutcome, TurnPhase, TurnRequest,
    TurnResult, TurnSetupError,
};
