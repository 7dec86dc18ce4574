use clap::ValueEnum;
use rand::{thread_rng, Rng};

/// Fingers shown this round, uniform over 1..=5.
pub fn make_throw() -> i64 {
    thread_rng().gen_range(1..=5)
}

/// How this player guesses the round total. The coordinator treats the call
/// as an opaque integer; everything here is local policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Own throw plus one simulated 1-5 throw per opponent
    Random,
    /// Own throw plus the player count
    Lowball,
}

impl Strategy {
    pub fn make_call(self, throw: i64, player_count: u32) -> i64 {
        match self {
            Strategy::Random => {
                let mut rng = thread_rng();
                throw + (1..player_count).map(|_| rng.gen_range(1..=5)).sum::<i64>()
            }
            Strategy::Lowball => throw + i64::from(player_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{make_throw, Strategy};

    #[test]
    fn throws_stay_in_range() {
        for _ in 0..1000 {
            let throw = make_throw();
            assert!((1..=5).contains(&throw));
        }
    }

    #[test]
    fn random_calls_stay_within_possible_totals() {
        // With 3 opponents the total can only land between throw+3 and throw+15
        for _ in 0..1000 {
            let call = Strategy::Random.make_call(2, 4);
            assert!((5..=17).contains(&call));
        }
    }

    #[test]
    fn random_call_for_a_solo_game_is_the_throw_itself() {
        assert_eq!(Strategy::Random.make_call(4, 1), 4);
    }

    #[test]
    fn lowball_is_deterministic() {
        assert_eq!(Strategy::Lowball.make_call(3, 2), 5);
        assert_eq!(Strategy::Lowball.make_call(1, 5), 6);
    }
}
