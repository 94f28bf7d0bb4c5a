use bevy::prelude::*;

use super::round::Choice;
use crate::hit::Region;

pub const WINDOW_SIZE: Vec2 = Vec2::new(960.0, 640.0);

pub const ROCK_BUTTON: Region = Region::new(20.0, 500.0, 280.0, 110.0);
pub const PAPER_BUTTON: Region = Region::new(330.0, 500.0, 280.0, 110.0);
pub const SCISSORS_BUTTON: Region = Region::new(640.0, 500.0, 280.0, 110.0);

pub const PLAYER_CARD: Region = Region::new(120.0, 200.0, 240.0, 160.0);
pub const COMPUTER_CARD: Region = Region::new(600.0, 200.0, 240.0, 160.0);

pub const PLAYER_SCORE_POS: Vec2 = Vec2::new(50.0, 50.0);
pub const COMPUTER_SCORE_POS: Vec2 = Vec2::new(650.0, 50.0);
pub const RESULT_POS: Vec2 = Vec2::new(480.0, 420.0);

pub fn button_for(choice: Choice) -> Region {
    match choice {
        Choice::Rock => ROCK_BUTTON,
        Choice::Paper => PAPER_BUTTON,
        Choice::Scissors => SCISSORS_BUTTON,
    }
}

/// First choice button under `p`, if any.
pub fn choice_at(p: Vec2) -> Option<Choice> {
    Choice::ALL.into_iter().find(|c| button_for(*c).contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_centers_map_to_their_choice() {
        for c in Choice::ALL {
            assert_eq!(choice_at(button_for(c).center()), Some(c));
        }
    }

    #[test]
    fn gap_between_buttons_hits_nothing() {
        assert_eq!(choice_at(Vec2::new(315.0, 550.0)), None);
        assert_eq!(choice_at(Vec2::new(480.0, 100.0)), None);
    }
}
