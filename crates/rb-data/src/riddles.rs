//! Built-in riddle definitions
//!
//! Ids follow `<category>_<difficulty>_<nn>`. Answers are written in their
//! natural form; the catalog normalizes them at load time.

use rb_core::catalog::{Catalog, CatalogLoadError, Category, Difficulty, RiddleRecord};

fn riddle(
    id: &str,
    category: Category,
    difficulty: Difficulty,
    prompt: &str,
    answer: &str,
    alternates: &[&str],
    hint: Option<&str>,
) -> RiddleRecord {
    let experience_reward = match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 15,
        Difficulty::Hard => 25,
    };
    RiddleRecord {
        id: id.into(),
        prompt: prompt.into(),
        canonical_answer: answer.into(),
        alternate_answers: alternates.iter().map(|a| (*a).into()).collect(),
        category,
        difficulty,
        hint: hint.map(Into::into),
        damage_multiplier: 1.0,
        experience_reward,
    }
}

/// Every built-in riddle, in catalog order
pub fn builtin_records() -> Vec<RiddleRecord> {
    use Category::*;
    use Difficulty::*;

    vec![
        // --- easy ---
        riddle(
            "math_easy_01",
            Math,
            Easy,
            "What is 7 + 5?",
            "12",
            &["twelve"],
            Some("Seven, then count five more."),
        ),
        riddle(
            "math_easy_02",
            Math,
            Easy,
            "What is 2 + 2?",
            "4",
            &["four"],
            Some("Count on your fingers!"),
        ),
        riddle(
            "math_easy_03",
            Math,
            Easy,
            "How many sides does a triangle have?",
            "3",
            &["three"],
            None,
        ),
        riddle(
            "logic_easy_01",
            Logic,
            Easy,
            "Tom's father has three sons: Snap, Crackle, and who?",
            "Tom",
            &[],
            Some("Read the first three words again."),
        ),
        riddle(
            "wordplay_easy_01",
            Wordplay,
            Easy,
            "What has to be broken before you can use it?",
            "an egg",
            &["egg", "eggs"],
            Some("Breakfast."),
        ),
        riddle(
            "wordplay_easy_02",
            Wordplay,
            Easy,
            "I speak without a mouth and hear without ears. What am I?",
            "an echo",
            &["echo"],
            Some("You hear it in the mountains."),
        ),
        riddle(
            "pattern_easy_01",
            Pattern,
            Easy,
            "What number comes next: 2, 4, 6, 8, ...?",
            "10",
            &["ten"],
            None,
        ),
        riddle(
            "mystery_easy_01",
            Mystery,
            Easy,
            "What gets wetter the more it dries?",
            "a towel",
            &["towel"],
            Some("You use one after a bath."),
        ),
        riddle(
            "deduction_easy_01",
            Deduction,
            Easy,
            "If all bloops are razzies and all razzies are lazzies, are all bloops lazzies?",
            "yes",
            &[],
            None,
        ),
        riddle(
            "chess_easy_01",
            Chess,
            Easy,
            "In chess, which piece can only ever move diagonally?",
            "the bishop",
            &["bishop"],
            Some("It starts next to the king and queen."),
        ),
        // --- medium ---
        riddle(
            "math_medium_01",
            Math,
            Medium,
            "What is 12 times 12?",
            "144",
            &["one hundred forty four", "one hundred and forty four"],
            None,
        ),
        riddle(
            "math_medium_02",
            Math,
            Medium,
            "A farmer has 17 sheep and all but 9 run away. How many are left?",
            "9",
            &["nine"],
            Some("Read it carefully: all but nine."),
        ),
        riddle(
            "logic_medium_01",
            Logic,
            Medium,
            "I am an odd number. Take away a letter and I become even. What number am I?",
            "seven",
            &["7"],
            Some("Remove the s."),
        ),
        riddle(
            "wordplay_medium_01",
            Wordplay,
            Medium,
            "What five-letter word becomes shorter when you add two letters to it?",
            "short",
            &[],
            None,
        ),
        riddle(
            "pattern_medium_01",
            Pattern,
            Medium,
            "What number comes next: 1, 1, 2, 3, 5, 8, ...?",
            "13",
            &["thirteen"],
            Some("Each number is the sum of the previous two."),
        ),
        riddle(
            "paradox_medium_01",
            Paradox,
            Medium,
            "The more you take, the more you leave behind. What am I?",
            "footsteps",
            &["steps", "footprints"],
            None,
        ),
        riddle(
            "mystery_medium_01",
            Mystery,
            Medium,
            "What can travel around the world while staying in a corner?",
            "a stamp",
            &["stamp", "a postage stamp"],
            Some("Look at an envelope."),
        ),
        riddle(
            "chess_medium_01",
            Chess,
            Medium,
            "In chess, which is the only piece that can jump over others?",
            "the knight",
            &["knight", "a knight"],
            None,
        ),
        // --- hard ---
        riddle(
            "math_hard_01",
            Math,
            Hard,
            "I am a three-digit number. My tens digit is five more than my ones \
             digit, and my hundreds digit is eight less than my tens digit. \
             What number am I?",
            "194",
            &["one hundred ninety four"],
            Some("Start from the tens digit."),
        ),
        riddle(
            "logic_hard_01",
            Logic,
            Hard,
            "A man looks at a portrait and says: 'Brothers and sisters I have \
             none, but that man's father is my father's son.' Who is in the \
             portrait?",
            "his son",
            &["son", "the man's son"],
            Some("Who is 'my father's son' to a man with no brothers?"),
        ),
        riddle(
            "wordplay_hard_01",
            Wordplay,
            Hard,
            "Which English word keeps its pronunciation after you remove four \
             of its five letters?",
            "queue",
            &[],
            Some("You stand in one."),
        ),
        riddle(
            "paradox_hard_01",
            Paradox,
            Hard,
            "I am always coming but never arrive. What am I?",
            "tomorrow",
            &[],
            None,
        ),
        riddle(
            "deduction_hard_01",
            Deduction,
            Hard,
            "Five apples sit in a basket. You take away three. How many apples \
             do you have?",
            "3",
            &["three"],
            Some("You, not the basket."),
        ),
        riddle(
            "pattern_hard_01",
            Pattern,
            Hard,
            "What letter comes next: O, T, T, F, F, S, S, ...?",
            "e",
            &["eight"],
            Some("Count upwards and take initials."),
        ),
        riddle(
            "chess_hard_01",
            Chess,
            Hard,
            "What is the minimum number of moves in which a player can be \
             checkmated in chess?",
            "2",
            &["two"],
            Some("It is called the fool's mate."),
        ),
        riddle(
            "mystery_hard_01",
            Mystery,
            Hard,
            "The one who makes it sells it. The one who buys it never uses it. \
             The one who uses it never knows. What is it?",
            "a coffin",
            &["coffin"],
            None,
        ),
    ]
}

/// Assemble and validate the built-in catalog
pub fn builtin_catalog() -> Result<Catalog, CatalogLoadError> {
    Catalog::from_records(builtin_records())
}
