use game_types::{Game, GameStatus, MAX_GUESSES, StatsSummary};

/// Aggregate one client's game history into lifetime statistics.
///
/// Games with no guesses are ignored entirely: a game the client never
/// started playing counts for nothing. Ordering of the input does not
/// matter; games are walked newest-first internally.
pub fn compute_stats(games: &[Game]) -> StatsSummary {
    let mut played: Vec<&Game> = games.iter().filter(|g| !g.guesses.is_empty()).collect();
    played.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut summary = StatsSummary::empty();

    summary.num_played = played
        .iter()
        .filter(|g| g.status.is_terminal())
        .count() as u32;
    summary.num_won = played
        .iter()
        .filter(|g| g.status == GameStatus::Won)
        .count() as u32;

    // One newest-first walk with a single running counter: the counter
    // resets on any non-won game (an in-progress game breaks a streak too).
    // current_streak is the trailing run; max_streak the best run anywhere.
    let mut run = 0;
    let mut trailing = true;
    for game in &played {
        if game.status == GameStatus::Won {
            run += 1;
            summary.max_streak = summary.max_streak.max(run);
            if trailing {
                summary.current_streak = run;
            }
        } else {
            run = 0;
            trailing = false;
        }
    }

    for game in &played {
        if game.status == GameStatus::Won {
            let guess_count = game.guesses.len() as u32;
            if (1..=MAX_GUESSES as u32).contains(&guess_count) {
                *summary.guess_distribution.entry(guess_count).or_insert(0) += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use game_types::{Game, Guess};
    use uuid::Uuid;

    /// Build a terminal game with `guesses` dummy guesses, created `age`
    /// steps ago so creation order is controllable.
    fn game_with(status: GameStatus, guesses: usize, age: i64) -> Game {
        let mut game = Game::new(Uuid::new_v4(), 1);
        game.status = status;
        game.created_at = Utc::now() - Duration::minutes(age);
        for index in 0..guesses {
            game.guesses.push(Guess {
                id: Uuid::new_v4(),
                game_id: game.id,
                guessed_country_id: 2,
                index: index as u32,
                created_at: game.created_at,
            });
        }
        game
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, StatsSummary::empty());
        assert!(stats.win_rate().is_err());
    }

    #[test]
    fn test_games_without_guesses_are_ignored() {
        let untouched = game_with(GameStatus::InProgress, 0, 0);
        let stats = compute_stats(&[untouched]);
        assert_eq!(stats.num_played, 0);
        assert!(stats.win_rate().is_err());
    }

    #[test]
    fn test_counts_and_win_rate() {
        let games = vec![
            game_with(GameStatus::Won, 3, 0),
            game_with(GameStatus::Lost, 6, 1),
            game_with(GameStatus::Abandoned, 2, 2),
            game_with(GameStatus::Won, 1, 3),
            game_with(GameStatus::InProgress, 1, 4),
        ];
        let stats = compute_stats(&games);

        assert_eq!(stats.num_played, 4);
        assert_eq!(stats.num_won, 2);
        assert_eq!(stats.win_rate().unwrap(), 0.5);
    }

    #[test]
    fn test_trailing_streak() {
        // Newest to oldest: WON, WON, LOST.
        let games = vec![
            game_with(GameStatus::Won, 2, 0),
            game_with(GameStatus::Won, 3, 1),
            game_with(GameStatus::Lost, 6, 2),
        ];
        let stats = compute_stats(&games);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn test_broken_trailing_streak_still_counts_toward_max() {
        // Newest to oldest: LOST, WON, WON.
        let games = vec![
            game_with(GameStatus::Lost, 6, 0),
            game_with(GameStatus::Won, 2, 1),
            game_with(GameStatus::Won, 3, 2),
        ];
        let stats = compute_stats(&games);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn test_active_game_breaks_streak() {
        // An in-progress game with a guess sits newest; it neither extends
        // nor counts toward the current streak.
        let games = vec![
            game_with(GameStatus::InProgress, 1, 0),
            game_with(GameStatus::Won, 2, 1),
            game_with(GameStatus::Won, 4, 2),
        ];
        let stats = compute_stats(&games);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn test_max_streak_from_middle_of_history() {
        // Newest to oldest: WON, LOST, WON, WON, WON, LOST.
        let games = vec![
            game_with(GameStatus::Won, 1, 0),
            game_with(GameStatus::Lost, 6, 1),
            game_with(GameStatus::Won, 2, 2),
            game_with(GameStatus::Won, 3, 3),
            game_with(GameStatus::Won, 4, 4),
            game_with(GameStatus::Lost, 6, 5),
        ];
        let stats = compute_stats(&games);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn test_guess_distribution_counts_wins_only() {
        let games = vec![
            game_with(GameStatus::Won, 2, 0),
            game_with(GameStatus::Won, 2, 1),
            game_with(GameStatus::Won, 5, 2),
            game_with(GameStatus::Lost, 6, 3),
            game_with(GameStatus::Abandoned, 3, 4),
        ];
        let stats = compute_stats(&games);

        assert_eq!(stats.guess_distribution.get(&2), Some(&2));
        assert_eq!(stats.guess_distribution.get(&5), Some(&1));
        // Dense mapping: untouched counts are present as zero.
        assert_eq!(stats.guess_distribution.get(&1), Some(&0));
        assert_eq!(stats.guess_distribution.get(&3), Some(&0));
        assert_eq!(stats.guess_distribution.get(&4), Some(&0));
        assert_eq!(stats.guess_distribution.get(&6), Some(&0));
        assert_eq!(stats.guess_distribution.len(), MAX_GUESSES);
    }
}
