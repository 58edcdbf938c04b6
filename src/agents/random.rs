//! Uniform random play, the baseline opponent.

use tracing::debug;

use crate::core::{Action, GameRng, IsolaError, IsolaResult, State};

use super::Agent;

/// An agent that selects uniformly at random from the legal actions.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }
}

impl Agent for RandomAgent {
    fn choose(&mut self, state: &State) -> IsolaResult<Action> {
        let actions = state.legal_actions();
        let action = self
            .rng
            .choose(&actions)
            .copied()
            .ok_or(IsolaError::NoLegalActions)?;

        debug!(player = %state.current_player(), %action, "random agent chose");
        Ok(action)
    }

    fn name(&self) -> String {
        "Random Agent".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new(5);
        let state = State::initial(false);

        for _ in 0..100 {
            let action = agent.choose(&state).unwrap();
            assert!(state.is_legal(&action), "{} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_varies() {
        let mut agent = RandomAgent::new(5);
        let state = State::initial(false);

        let first = agent.choose(&state).unwrap();
        assert!((0..50).any(|_| agent.choose(&state).unwrap() != first));
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let state = State::initial(false);
        let mut a = RandomAgent::new(99);
        let mut b = RandomAgent::new(99);

        for _ in 0..10 {
            assert_eq!(a.choose(&state).unwrap(), b.choose(&state).unwrap());
        }
    }

    #[test]
    fn test_random_agent_on_terminal_state() {
        let trapped = State::parse(
            "12#.....
             ###.....
             ........
             ........
             ........
             ........",
            Player::One,
        )
        .unwrap();

        assert_eq!(RandomAgent::new(0).choose(&trapped), Err(IsolaError::NoLegalActions));
    }
}
