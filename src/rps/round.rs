use rand::Rng;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundResult {
    Draw,
    PlayerWins,
    ComputerWins,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }

    /// Uniform draw over the three symbols.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl RoundResult {
    pub fn banner(&self) -> &'static str {
        match *self {
            RoundResult::Draw => "Draw",
            RoundResult::PlayerWins => "Player Wins!",
            RoundResult::ComputerWins => "Computer Wins!",
        }
    }
}

pub fn evaluate(player: Choice, computer: Choice) -> RoundResult {
    if player == computer {
        RoundResult::Draw
    } else if player.beats(computer) {
        RoundResult::PlayerWins
    } else {
        RoundResult::ComputerWins
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Round {
    pub player: Choice,
    pub computer: Choice,
}

impl Round {
    pub fn result(&self) -> RoundResult {
        evaluate(self.player, self.computer)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Scoreboard {
    pub player: u32,
    pub computer: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Draw => self.draws += 1,
            RoundResult::PlayerWins => self.player += 1,
            RoundResult::ComputerWins => self.computer += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.player + self.computer + self.draws
    }
}
