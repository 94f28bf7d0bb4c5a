use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::layout;
use super::round::{Choice, Round, Scoreboard};

#[derive(Resource, Clone, Default)]
pub struct RpsSettings {
    /// Fixed seed for the computer's picks; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

#[derive(Resource)]
pub struct ComputerRng(pub StdRng);

impl ComputerRng {
    pub fn from_settings(settings: &RpsSettings) -> Self {
        match settings.seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[derive(Resource, Default, Debug)]
pub struct RpsGame {
    pub scoreboard: Scoreboard,
    pub last_round: Option<Round>,
}

impl RpsGame {
    pub fn play<R: Rng + ?Sized>(&mut self, player: Choice, rng: &mut R) -> Round {
        let round = Round {
            player,
            computer: Choice::random(rng),
        };
        let result = round.result();
        self.scoreboard.record(result);
        self.last_round = Some(round);
        info!(
            "Player chose {:?}, computer chose {:?}: {}",
            round.player,
            round.computer,
            result.banner()
        );
        round
    }

    /// Clicks that miss every choice button leave the game untouched.
    pub fn handle_click<R: Rng + ?Sized>(&mut self, p: Vec2, rng: &mut R) -> Option<Round> {
        let choice = layout::choice_at(p)?;
        Some(self.play(choice, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rps::round::RoundResult;

    #[test]
    fn play_records_the_derived_result() {
        let mut game = RpsGame::default();
        let mut rng = StdRng::seed_from_u64(3);
        let round = game.play(Choice::Rock, &mut rng);
        assert_eq!(game.last_round, Some(round));
        let board = game.scoreboard;
        match round.result() {
            RoundResult::Draw => assert_eq!(board.draws, 1),
            RoundResult::PlayerWins => assert_eq!(board.player, 1),
            RoundResult::ComputerWins => assert_eq!(board.computer, 1),
        }
        assert_eq!(board.rounds(), 1);
    }

    #[test]
    fn missed_click_is_a_no_op() {
        let mut game = RpsGame::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(game.handle_click(Vec2::new(5.0, 5.0), &mut rng).is_none());
        assert_eq!(game.scoreboard, Scoreboard::default());
        assert!(game.last_round.is_none());
    }

    #[test]
    fn click_on_paper_plays_paper() {
        let mut game = RpsGame::default();
        let mut rng = StdRng::seed_from_u64(11);
        let round = game
            .handle_click(layout::PAPER_BUTTON.center(), &mut rng)
            .expect("paper button hit");
        assert_eq!(round.player, Choice::Paper);
    }

    #[test]
    fn seeded_settings_reproduce_rounds() {
        let settings = RpsSettings { seed: Some(42) };
        let mut a = ComputerRng::from_settings(&settings);
        let mut b = ComputerRng::from_settings(&settings);
        let mut ga = RpsGame::default();
        let mut gb = RpsGame::default();
        for _ in 0..10 {
            assert_eq!(
                ga.play(Choice::Scissors, &mut a.0),
                gb.play(Choice::Scissors, &mut b.0)
            );
        }
    }
}
