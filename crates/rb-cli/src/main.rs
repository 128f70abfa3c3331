//! Riddle battles on the terminal
//!
//! Line-based interface: riddles print to stdout, answers come from stdin.
//! `hint` asks for a hint, `quit` abandons the current riddle (and takes
//! the failure damage, like a wrong answer).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rb_core::{
    AnswerEvent, AnswerSource, BattleCommand, BattleEvent, BattleLoopResult, BattleRng,
    BattleSession, Catalog, Combatant, CombatantProfile, DamageCurve, DamageSide, RiddleView,
    TurnOutcome, TurnResult, TypeAffinity, Unattended,
};

#[derive(Parser, Debug)]
#[command(name = "riddlebound", version, about = "Riddle battles on the terminal")]
struct Args {
    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON riddle catalog; the built-in set when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Your combatant's level
    #[arg(long, default_value_t = 5)]
    level: u32,

    /// The opponent's level
    #[arg(long, default_value_t = 5)]
    enemy_level: u32,

    /// Your elemental affinities (metal, earth, aether, wood, water, fire)
    #[arg(long = "affinity", value_name = "AFFINITY")]
    affinities: Vec<String>,

    /// Zero-damage practice battle
    #[arg(long)]
    training: bool,

    /// Watch two AI combatants battle each other
    #[arg(long)]
    watch: bool,
}

/// Reads answers from stdin, one line at a time
struct StdinSource {
    shown_prompt: String,
}

impl StdinSource {
    fn new() -> Self {
        Self {
            shown_prompt: String::new(),
        }
    }
}

impl AnswerSource for StdinSource {
    fn next_event(&mut self, view: &RiddleView<'_>) -> AnswerEvent {
        if self.shown_prompt != view.prompt {
            self.shown_prompt = view.prompt.to_string();
            println!();
            println!("You face a {} riddle ({}):", view.difficulty, view.category);
            println!("  {}", view.prompt);
            if view.hint_available {
                println!("  (type 'hint' for a hint, 'quit' to give up)");
            } else {
                println!("  (type 'quit' to give up)");
            }
        }
        if let Some(hint) = view.hint {
            println!("  Hint: {hint}");
        }

        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => return AnswerEvent::Cancel,
                Ok(_) => {}
            }
            let input = line.trim();

            match input {
                "hint" | "?" => {
                    if view.hint_available {
                        return AnswerEvent::RequestHint;
                    }
                    println!("No hint for this one.");
                }
                "quit" => return AnswerEvent::Cancel,
                _ => return AnswerEvent::Submit(input.to_string()),
            }
        }
    }
}

fn describe_result(catalog: &Catalog, session: &BattleSession<'_>, actor: usize, result: &TurnResult) {
    let actor_name = &session.combatant(actor).name;
    let target = match result.damage.side {
        DamageSide::Opponent => 1 - actor,
        DamageSide::Actor => actor,
    };
    let target_name = &session.combatant(target).name;

    match result.outcome {
        TurnOutcome::Correct => {
            println!(
                "{actor_name} answers correctly! {target_name} takes {} damage.",
                result.damage.amount
            );
            if result.experience > 0 {
                println!("{actor_name} gains {} experience.", result.experience);
            }
        }
        TurnOutcome::Incorrect => {
            if let Some(record) = catalog.get(&result.riddle_id) {
                println!("Wrong! The answer was '{}'.", record.canonical_answer);
            }
            println!(
                "{actor_name} fumbles the riddle and takes {} damage.",
                result.damage.amount
            );
        }
        TurnOutcome::Cancelled => {
            println!(
                "{actor_name} gives up on the riddle and takes {} damage.",
                result.damage.amount
            );
        }
    }
}

fn print_hp(session: &BattleSession<'_>) {
    let a = session.combatant(0);
    let b = session.combatant(1);
    println!(
        "[{} {}/{} HP | {} {}/{} HP]",
        a.name, a.hp, a.max_hp, b.name, b.hp, b.max_hp
    );
}

/// Ask the player which battle command to take
fn read_command() -> BattleCommand {
    loop {
        print!("[f]ight, [i]tem, [s]wap, [r]un? ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => return BattleCommand::Forfeit,
            Ok(_) => {}
        }
        match line.trim() {
            "f" | "fight" | "" => return BattleCommand::Fight,
            "i" | "item" => return BattleCommand::Item,
            "s" | "swap" => return BattleCommand::Swap,
            "r" | "run" | "forfeit" => return BattleCommand::Forfeit,
            other => println!("Unknown command '{other}'."),
        }
    }
}

fn run_battle(catalog: &Catalog, args: &Args, seed: u64) -> Result<()> {
    let mut player_profile = CombatantProfile::human(args.level);
    for raw in &args.affinities {
        let affinity: TypeAffinity = raw
            .parse()
            .ok()
            .with_context(|| format!("unknown affinity '{raw}'"))?;
        player_profile = player_profile.with_affinity(affinity);
    }
    let enemy_profile = CombatantProfile::ai(args.enemy_level);

    let player_hp = 30 + 2 * args.level as i32;
    let enemy_hp = 30 + 2 * args.enemy_level as i32;
    let combatants = [
        Combatant::new("You", player_profile, player_hp),
        Combatant::new("Puzzlor", enemy_profile, enemy_hp),
    ];

    let curve = if args.training {
        DamageCurve::training()
    } else {
        DamageCurve::default()
    };
    let mut session = BattleSession::new(catalog, combatants, seed).with_curve(curve);

    println!("A wild Puzzlor appears! (seed {seed})");
    print_hp(&session);

    let mut source = StdinSource::new();
    loop {
        let actor = session.active();
        let is_human = !session.combatant(actor).profile.is_ai_controlled;

        let command = if is_human {
            read_command()
        } else {
            BattleCommand::Fight
        };

        let report = session.run_command(command, &mut source);
        match &report.event {
            BattleEvent::Resolved(result) => {
                describe_result(catalog, &session, report.actor, result);
                print_hp(&session);
            }
            BattleEvent::Skipped(err) => {
                println!(
                    "{} finds no riddle to face ({err}); the turn passes.",
                    session.combatant(report.actor).name
                );
            }
            BattleEvent::Deferred(command) => {
                // Items and party swaps live in the full game, not here.
                println!("{command:?} is not carried in this demo; the turn passes.");
                session.pass_turn();
            }
            BattleEvent::Forfeited => {}
        }

        match report.status {
            BattleLoopResult::Continue => {}
            BattleLoopResult::Defeated { loser } => {
                let winner = 1 - loser;
                println!(
                    "{} is defeated. {} wins!",
                    session.combatant(loser).name,
                    session.combatant(winner).name
                );
                return Ok(());
            }
            BattleLoopResult::Forfeited { by } => {
                println!("{} flees the battle.", session.combatant(by).name);
                return Ok(());
            }
        }
    }
}

fn run_watch(catalog: &Catalog, args: &Args, seed: u64) -> Result<()> {
    let combatants = [
        Combatant::new("Rustle", CombatantProfile::ai(args.level), 30 + 2 * args.level as i32),
        Combatant::new(
            "Puzzlor",
            CombatantProfile::ai(args.enemy_level),
            30 + 2 * args.enemy_level as i32,
        ),
    ];
    let mut session = BattleSession::new(catalog, combatants, seed);

    println!("Rustle and Puzzlor square off. (seed {seed})");
    print_hp(&session);

    loop {
        let report = session.run_command(BattleCommand::Fight, &mut Unattended);
        match &report.event {
            BattleEvent::Resolved(result) => {
                if let Some(record) = catalog.get(&result.riddle_id) {
                    println!(
                        "{} faces: {}",
                        session.combatant(report.actor).name,
                        record.prompt
                    );
                }
                describe_result(catalog, &session, report.actor, result);
                print_hp(&session);
            }
            BattleEvent::Skipped(err) => {
                println!("No riddle available ({err}); the turn passes.");
            }
            BattleEvent::Deferred(_) | BattleEvent::Forfeited => {}
        }

        if let BattleLoopResult::Defeated { loser } = report.status {
            println!(
                "{} is defeated. {} wins!",
                session.combatant(loser).name,
                session.combatant(1 - loser).name
            );
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => rb_data::builtin_catalog().context("building the built-in catalog")?,
    };
    catalog.ensure_complete()?;
    tracing::info!(riddles = catalog.len(), "catalog ready");

    let seed = args.seed.unwrap_or_else(|| BattleRng::from_entropy().seed());

    if args.watch {
        run_watch(&catalog, &args, seed)
    } else {
        run_battle(&catalog, &args, seed)
    }
}
