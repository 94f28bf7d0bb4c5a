use bevy::prelude::*;

use crate::hit::Region;

pub const WINDOW_SIZE: Vec2 = Vec2::new(960.0, 640.0);

pub const API_BUTTON: Region = Region::new(260.0, 260.0, 180.0, 60.0);
pub const LOCAL_BUTTON: Region = Region::new(520.0, 260.0, 180.0, 60.0);
pub const NEXT_BUTTON: Region = Region::new(380.0, 560.0, 200.0, 50.0);

const OPTION_ORIGIN: Vec2 = Vec2::new(100.0, 200.0);
const OPTION_SIZE: Vec2 = Vec2::new(760.0, 50.0);
const OPTION_GAP: f32 = 15.0;

pub const TITLE_POS: Vec2 = Vec2::new(480.0, 160.0);
pub const FETCH_ERROR_POS: Vec2 = Vec2::new(480.0, 360.0);
pub const HEADER_POS: Vec2 = Vec2::new(30.0, 20.0);
pub const SCORE_POS: Vec2 = Vec2::new(800.0, 30.0);
pub const PROMPT_POS: Vec2 = Vec2::new(80.0, 100.0);
pub const PROMPT_WIDTH: f32 = 800.0;
pub const FEEDBACK_POS: Vec2 = Vec2::new(480.0, 500.0);
pub const FINAL_SCORE_POS: Vec2 = Vec2::new(480.0, 260.0);
pub const FINAL_HINT_POS: Vec2 = Vec2::new(480.0, 320.0);

pub fn option_button(index: usize) -> Region {
    let y = OPTION_ORIGIN.y + index as f32 * (OPTION_SIZE.y + OPTION_GAP);
    Region::new(OPTION_ORIGIN.x, y, OPTION_SIZE.x, OPTION_SIZE.y)
}

/// Index of the option button under `p` among the first `count` buttons.
pub fn option_at(p: Vec2, count: usize) -> Option<usize> {
    (0..count).find(|i| option_button(*i).contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_buttons_stack_without_overlap() {
        for i in 0..3 {
            let a = option_button(i);
            let b = option_button(i + 1);
            assert!(a.min.y + a.size.y < b.min.y);
        }
        let last = option_button(3);
        assert!(last.min.y + last.size.y < NEXT_BUTTON.min.y);
    }

    #[test]
    fn option_at_respects_count() {
        let p = option_button(3).center();
        assert_eq!(option_at(p, 4), Some(3));
        assert_eq!(option_at(p, 3), None);
        assert_eq!(option_at(Vec2::new(10.0, 10.0), 4), None);
    }
}
