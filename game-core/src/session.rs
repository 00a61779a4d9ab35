use chrono::Utc;
use game_types::{Country, Game, GameError, GameStatus, Guess, MAX_GUESSES};
use tracing::debug;
use uuid::Uuid;

/// Record a guess against an in-progress game and advance its status.
///
/// `answer` must be the resolved country for `game.answer_country_id`; a
/// mismatch means the caller handed us a bad resolution and we fail fast
/// rather than score against the wrong point. The caller is responsible for
/// serializing concurrent submissions to the same game.
pub fn submit_guess(
    game: &mut Game,
    guessed: &Country,
    answer: &Country,
) -> Result<Guess, GameError> {
    match game.status {
        GameStatus::InProgress => {}
        GameStatus::Won | GameStatus::Lost | GameStatus::Abandoned => {
            return Err(GameError::GameNotActive {
                game_id: game.id,
                status: game.status,
            });
        }
    }

    if game.guesses.len() >= MAX_GUESSES {
        return Err(GameError::GuessLimitReached {
            game_id: game.id,
            max: MAX_GUESSES as u32,
        });
    }

    if answer.id != game.answer_country_id {
        return Err(GameError::InvalidCountryReference { country_id: answer.id });
    }

    let index = game.guesses.len() as u32;
    let is_correct = guessed.id == answer.id;

    let guess = Guess {
        id: Uuid::new_v4(),
        game_id: game.id,
        guessed_country_id: guessed.id,
        index,
        created_at: Utc::now(),
    };
    game.guesses.push(guess.clone());

    if is_correct {
        game.status = GameStatus::Won;
    } else if index as usize == MAX_GUESSES - 1 {
        game.status = GameStatus::Lost;
    }

    debug!(
        game_id = %game.id,
        index,
        is_correct,
        status = ?game.status,
        "guess recorded"
    );

    Ok(guess)
}

/// Abandon an in-progress game. Terminal games stay as they are; asking to
/// abandon one is an error, matching the transition-once rule.
pub fn abandon(game: &mut Game) -> Result<(), GameError> {
    match game.status {
        GameStatus::InProgress => {
            game.status = GameStatus::Abandoned;
            debug!(game_id = %game.id, "game abandoned");
            Ok(())
        }
        GameStatus::Won | GameStatus::Lost | GameStatus::Abandoned => {
            Err(GameError::GameNotActive {
                game_id: game.id,
                status: game.status,
            })
        }
    }
}
