use click_games::rps::{evaluate, Choice, RoundResult, RpsGame, Scoreboard};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn choice() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Rock), Just(Choice::Paper), Just(Choice::Scissors)]
}

#[test]
fn paper_covers_rock() {
    let mut board = Scoreboard::default();
    let result = evaluate(Choice::Paper, Choice::Rock);
    assert_eq!(result, RoundResult::PlayerWins);
    board.record(result);
    assert_eq!(board.player, 1);
    assert_eq!(board.computer, 0);
}

#[test]
fn game_rounds_add_up() {
    let mut game = RpsGame::default();
    let mut rng = StdRng::seed_from_u64(2024);
    for i in 0..60 {
        game.play(Choice::ALL[i % 3], &mut rng);
    }
    assert_eq!(game.scoreboard.rounds(), 60);
}

proptest! {
    #[test]
    fn counters_step_by_at_most_one(rounds in prop::collection::vec((choice(), choice()), 0..64)) {
        let mut board = Scoreboard::default();
        for (i, (a, b)) in rounds.iter().enumerate() {
            let before = board;
            board.record(evaluate(*a, *b));
            let dp = board.player - before.player;
            let dc = board.computer - before.computer;
            let dd = board.draws - before.draws;
            prop_assert_eq!(dp + dc + dd, 1);
            prop_assert_eq!(board.rounds() as usize, i + 1);
        }
        prop_assert_eq!(board.player + board.computer + board.draws, rounds.len() as u32);
    }

    #[test]
    fn swapping_sides_swaps_winner(a in choice(), b in choice()) {
        let forward = evaluate(a, b);
        let back = evaluate(b, a);
        let expected = match forward {
            RoundResult::Draw => RoundResult::Draw,
            RoundResult::PlayerWins => RoundResult::ComputerWins,
            RoundResult::ComputerWins => RoundResult::PlayerWins,
        };
        prop_assert_eq!(back, expected);
    }
}
