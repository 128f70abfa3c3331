//! Battle sessions
//!
//! The reference enclosing loop for riddle turns: two combatants, strict
//! alternation, victory on knockout. Each session exclusively owns its
//! riddle history and RNG, so independent battles can run concurrently
//! without sharing anything but the catalog.

use hashbrown::HashSet;

use crate::catalog::Catalog;
use crate::combatant::CombatantProfile;
use crate::damage::{DamageCurve, DamageSide};
use crate::rng::BattleRng;
use crate::selector::FallbackPolicy;
use crate::turn::{
    AnswerEvent, AnswerSource, RiddleTurn, RiddleView, TurnRequest, TurnResult, TurnSetupError,
};

/// One side of a battle
#[derive(Debug, Clone)]
pub struct Combatant {
    pub name: String,
    pub profile: CombatantProfile,
    pub hp: i32,
    pub max_hp: i32,
    /// Experience accumulated from correct answers this battle
    pub experience: u32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, profile: CombatantProfile, max_hp: i32) -> Self {
        Self {
            name: name.into(),
            profile,
            hp: max_hp,
            max_hp,
            experience: 0,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// The battle menu surface
///
/// `Fight` and `Forfeit` resolve here; `Item` and `Swap` exist in the
/// interface but are handed back to the host unprocessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleCommand {
    Fight,
    Item,
    Swap,
    Forfeit,
}

/// What happened during one command
#[derive(Debug)]
pub enum BattleEvent {
    /// A riddle turn ran to completion
    Resolved(TurnResult),
    /// No riddle could be selected; the actor loses the turn
    Skipped(TurnSetupError),
    /// Command left for the host to implement
    Deferred(BattleCommand),
    Forfeited,
}

/// Battle status after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleLoopResult {
    Continue,
    Defeated { loser: usize },
    Forfeited { by: usize },
}

/// One command's worth of reporting back to the host
#[derive(Debug)]
pub struct BattleTurnReport {
    pub actor: usize,
    pub event: BattleEvent,
    pub status: BattleLoopResult,
}

/// Answer source for battles with no human actor; never consulted on the
/// AI path, and concedes immediately if it ever is
pub struct Unattended;

impl AnswerSource for Unattended {
    fn next_event(&mut self, _view: &RiddleView<'_>) -> AnswerEvent {
        AnswerEvent::Cancel
    }
}

/// A two-combatant riddle battle
#[derive(Debug)]
pub struct BattleSession<'a> {
    catalog: &'a Catalog,
    curve: DamageCurve,
    policy: FallbackPolicy,
    combatants: [Combatant; 2],
    history: HashSet<String>,
    rng: BattleRng,
    active: usize,
}

impl<'a> BattleSession<'a> {
    pub fn new(catalog: &'a Catalog, combatants: [Combatant; 2], seed: u64) -> Self {
        Self {
            catalog,
            curve: DamageCurve::default(),
            policy: FallbackPolicy::default(),
            combatants,
            history: HashSet::new(),
            rng: BattleRng::new(seed),
            active: 0,
        }
    }

    pub fn with_curve(mut self, curve: DamageCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn combatant(&self, index: usize) -> &Combatant {
        &self.combatants[index]
    }

    /// Index of the combatant acting next
    pub fn active(&self) -> usize {
        self.active
    }

    /// Riddle ids used so far this battle
    pub fn history(&self) -> &HashSet<String> {
        &self.history
    }

    pub fn status(&self) -> BattleLoopResult {
        for (index, combatant) in self.combatants.iter().enumerate() {
            if combatant.is_defeated() {
                return BattleLoopResult::Defeated { loser: index };
            }
        }
        BattleLoopResult::Continue
    }

    /// Hand the turn to the other side without acting
    ///
    /// Used by the host after it implements a deferred `Item` or `Swap`.
    pub fn pass_turn(&mut self) {
        self.active = 1 - self.active;
    }

    /// Execute one battle command for the active combatant
    ///
    /// `source` is consulted only when the active combatant is
    /// human-controlled and the command is `Fight`.
    pub fn run_command(
        &mut self,
        command: BattleCommand,
        source: &mut dyn AnswerSource,
    ) -> BattleTurnReport {
        let actor = self.active;
        match command {
            BattleCommand::Fight => self.run_riddle_turn(source),
            BattleCommand::Item | BattleCommand::Swap => BattleTurnReport {
                actor,
                event: BattleEvent::Deferred(command),
                status: BattleLoopResult::Continue,
            },
            BattleCommand::Forfeit => {
                tracing::debug!(actor = %self.combatants[actor].name, "battle forfeited");
                BattleTurnReport {
                    actor,
                    event: BattleEvent::Forfeited,
                    status: BattleLoopResult::Forfeited { by: actor },
                }
            }
        }
    }

    fn run_riddle_turn(&mut self, source: &mut dyn AnswerSource) -> BattleTurnReport {
        let actor = self.active;
        let request = TurnRequest {
            profile: &self.combatants[actor].profile,
            used_riddles: &self.history,
        };

        let mut turn =
            match RiddleTurn::begin(self.catalog, &self.curve, self.policy, request, &mut self.rng)
            {
                Ok(turn) => turn,
                Err(err) => {
                    // The actor cannot act this turn; the battle goes on.
                    tracing::debug!(
                        actor = %self.combatants[actor].name,
                        error = %err,
                        "riddle turn skipped"
                    );
                    self.active = 1 - self.active;
                    return BattleTurnReport {
                        actor,
                        event: BattleEvent::Skipped(err),
                        status: self.status(),
                    };
                }
            };

        let result = if self.combatants[actor].profile.is_ai_controlled {
            turn.run_ai(&mut self.rng)
        } else {
            turn.drive(source)
        };

        self.apply_result(actor, &result);
        BattleTurnReport {
            actor,
            event: BattleEvent::Resolved(result),
            status: self.status(),
        }
    }

    /// Commit a turn result: history, damage, experience, turn order.
    /// All or nothing; a dropped result leaves the session untouched.
    fn apply_result(&mut self, actor: usize, result: &TurnResult) {
        self.history.insert(result.riddle_id.clone());

        let target = match result.damage.side {
            DamageSide::Opponent => 1 - actor,
            DamageSide::Actor => actor,
        };
        let hit = &mut self.combatants[target];
        hit.hp = (hit.hp - result.damage.amount as i32).max(0);

        self.combatants[actor].experience += result.experience;
        self.active = 1 - self.active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Difficulty, RiddleRecord};

    fn record(id: &str, difficulty: Difficulty) -> RiddleRecord {
        RiddleRecord {
            id: id.into(),
            prompt: "?".into(),
            canonical_answer: "x".into(),
            alternate_answers: vec![],
            category: Category::Logic,
            difficulty,
            hint: None,
            damage_multiplier: 1.0,
            experience_reward: 10,
        }
    }

    fn catalog(count: usize) -> Catalog {
        let records = (0..count)
            .map(|i| record(&format!("r{i}"), Difficulty::Easy))
            .collect();
        Catalog::from_records(records).unwrap()
    }

    fn ai_pair() -> [Combatant; 2] {
        [
            Combatant::new("Rustle", CombatantProfile::ai(5), 40),
            Combatant::new("Puzzlor", CombatantProfile::ai(5), 40),
        ]
    }

    #[test]
    fn test_turns_alternate() {
        let catalog = catalog(10);
        let mut session = BattleSession::new(&catalog, ai_pair(), 42);

        assert_eq!(session.active(), 0);
        session.run_command(BattleCommand::Fight, &mut Unattended);
        assert_eq!(session.active(), 1);
        session.run_command(BattleCommand::Fight, &mut Unattended);
        assert_eq!(session.active(), 0);
    }

    #[test]
    fn test_no_repeats_until_exhaustion() {
        let catalog = catalog(6);
        let mut session = BattleSession::new(&catalog, ai_pair(), 7)
            .with_curve(DamageCurve::training());

        for round in 1..=6 {
            let report = session.run_command(BattleCommand::Fight, &mut Unattended);
            assert!(matches!(report.event, BattleEvent::Resolved(_)));
            assert_eq!(session.history().len(), round);
        }
    }

    #[test]
    fn test_exhaustion_skips_turn_with_strict_policy() {
        let catalog = catalog(1);
        let mut session = BattleSession::new(&catalog, ai_pair(), 7)
            .with_policy(FallbackPolicy::strict())
            .with_curve(DamageCurve::training());

        let first = session.run_command(BattleCommand::Fight, &mut Unattended);
        assert!(matches!(first.event, BattleEvent::Resolved(_)));

        let second = session.run_command(BattleCommand::Fight, &mut Unattended);
        assert!(matches!(second.event, BattleEvent::Skipped(_)));
        assert_eq!(second.status, BattleLoopResult::Continue);
        // The skip consumed the turn; play moves back to the first side.
        assert_eq!(session.active(), 0);
    }

    #[test]
    fn test_battle_reaches_knockout() {
        let catalog = catalog(30);
        let mut session = BattleSession::new(&catalog, ai_pair(), 99);

        let mut rounds = 0;
        loop {
            let report = session.run_command(BattleCommand::Fight, &mut Unattended);
            rounds += 1;
            assert!(rounds < 500, "battle failed to terminate");
            if let BattleLoopResult::Defeated { loser } = report.status {
                assert!(session.combatant(loser).is_defeated());
                break;
            }
        }
    }

    #[test]
    fn test_forfeit_ends_battle() {
        let catalog = catalog(4);
        let mut session = BattleSession::new(&catalog, ai_pair(), 3);
        let report = session.run_command(BattleCommand::Forfeit, &mut Unattended);
        assert!(matches!(report.event, BattleEvent::Forfeited));
        assert_eq!(report.status, BattleLoopResult::Forfeited { by: 0 });
    }

    #[test]
    fn test_item_and_swap_are_deferred() {
        let catalog = catalog(4);
        let mut session = BattleSession::new(&catalog, ai_pair(), 3);

        let report = session.run_command(BattleCommand::Item, &mut Unattended);
        assert!(matches!(report.event, BattleEvent::Deferred(BattleCommand::Item)));
        // The actor keeps the turn until the host finishes the action.
        assert_eq!(session.active(), 0);
        session.pass_turn();
        assert_eq!(session.active(), 1);
    }

    #[test]
    fn test_experience_accrues_on_correct_answers() {
        let catalog = catalog(30);
        let mut session = BattleSession::new(&catalog, ai_pair(), 5);

        for _ in 0..20 {
            session.run_command(BattleCommand::Fight, &mut Unattended);
            if session.status() != BattleLoopResult::Continue {
                break;
            }
        }
        let total: u32 = (0..2).map(|i| session.combatant(i).experience).sum();
        assert!(total > 0, "nobody answered anything correctly in 20 rounds");
    }
}
