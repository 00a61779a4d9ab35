mod common;

use common::*;
use game_core::{compute_stats, render_guess, session};
use game_types::{GameError, GameStatus, MAX_GUESSES};

#[test]
fn test_wrong_then_exact_guess() {
    // Answer at the origin; first guess far away, second dead on.
    let answer = make_country(1, "Country A", 0.0, 0.0);
    let wrong = make_country(2, "Country B", 50.0, 50.0);
    let exact = make_country(3, "Country C", 0.0, 0.0);

    let client = make_client_id();
    let mut game = make_game(client, &answer);

    let first = session::submit_guess(&mut game, &wrong, &answer).unwrap();
    let first_view = render_guess(&first, &wrong, &answer);
    assert!(!first_view.is_correct);
    assert!(first_view.distance_to_answer_miles > 0.0);
    assert!(first_view.proximity_prop < 1.0);
    assert_eq!(game.status, GameStatus::InProgress);

    // Country C sits on the answer's point but has a different id, so it
    // scores a perfect distance without being correct.
    let same_point = session::submit_guess(&mut game, &exact, &answer).unwrap();
    let same_point_view = render_guess(&same_point, &exact, &answer);
    assert!(!same_point_view.is_correct);
    assert_eq!(same_point_view.distance_to_answer_miles, 0.0);
    assert_eq!(same_point_view.proximity_prop, 1.0);
    assert_eq!(game.status, GameStatus::InProgress);

    // The real answer on the third attempt wins the game.
    let winning = session::submit_guess(&mut game, &answer, &answer).unwrap();
    let winning_view = render_guess(&winning, &answer, &answer);
    assert!(winning_view.is_correct);
    assert_eq!(winning_view.distance_to_answer_miles, 0.0);
    assert_eq!(winning_view.proximity_prop, 1.0);
    assert_eq!(game.status, GameStatus::Won);

    let stats = compute_stats(std::slice::from_ref(&game));
    assert_eq!(stats.num_played, 1);
    assert_eq!(stats.num_won, 1);
    assert_eq!(stats.guess_distribution.get(&3), Some(&1));
}

#[test]
fn test_win_on_each_attempt_fills_distribution() {
    let answer = make_country(1, "Answerland", 10.0, 20.0);
    let wrong = make_country(2, "Decoy", -30.0, 100.0);
    let client = make_client_id();

    let mut games = Vec::new();
    for winning_attempt in 1..=MAX_GUESSES {
        let mut game = make_game(client, &answer);
        for _ in 0..winning_attempt - 1 {
            session::submit_guess(&mut game, &wrong, &answer).unwrap();
        }
        session::submit_guess(&mut game, &answer, &answer).unwrap();
        assert_eq!(game.status, GameStatus::Won);
        games.push(game);
    }

    let stats = compute_stats(&games);
    assert_eq!(stats.num_played, MAX_GUESSES as u32);
    assert_eq!(stats.num_won, MAX_GUESSES as u32);
    for n in 1..=MAX_GUESSES as u32 {
        assert_eq!(stats.guess_distribution.get(&n), Some(&1));
    }
}

#[test]
fn test_losing_run_then_rejection() {
    let answer = make_country(1, "Answerland", 10.0, 20.0);
    let wrong = make_country(2, "Decoy", -30.0, 100.0);
    let mut game = make_game(make_client_id(), &answer);

    for _ in 0..MAX_GUESSES {
        session::submit_guess(&mut game, &wrong, &answer).unwrap();
    }
    assert_eq!(game.status, GameStatus::Lost);

    let err = session::submit_guess(&mut game, &wrong, &answer).unwrap_err();
    assert!(matches!(err, GameError::GameNotActive { .. }));

    let stats = compute_stats(std::slice::from_ref(&game));
    assert_eq!(stats.num_played, 1);
    assert_eq!(stats.num_won, 0);
    assert_eq!(stats.win_rate().unwrap(), 0.0);
    // Lost games never touch the distribution.
    assert!(stats.guess_distribution.values().all(|&count| count == 0));
}

#[test]
fn test_abandoned_game_counts_as_played_not_won() {
    let answer = make_country(1, "Answerland", 10.0, 20.0);
    let wrong = make_country(2, "Decoy", -30.0, 100.0);
    let mut game = make_game(make_client_id(), &answer);

    session::submit_guess(&mut game, &wrong, &answer).unwrap();
    session::abandon(&mut game).unwrap();

    let stats = compute_stats(std::slice::from_ref(&game));
    assert_eq!(stats.num_played, 1);
    assert_eq!(stats.num_won, 0);
    assert_eq!(stats.current_streak, 0);
}
