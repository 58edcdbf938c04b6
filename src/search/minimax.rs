//! Depth-limited minimax with alpha-beta pruning.
//!
//! The root is always a maximizing node for the side to move. Children are
//! searched as alternating minimizing/maximizing plies until either side is
//! trapped or the depth limit is reached, where the leaf is scored with the
//! configured [`Heuristic`].
//!
//! ## Leaf scoring
//!
//! A leaf is scored by the best heuristic value among the actions available
//! to *its* side to move, from that side's own point of view, negated when
//! that side is not the root player. This treats the opponent's best
//! heuristic move as the one most damaging to the root player; it is an
//! approximation, not a negamax.
//!
//! ## Root tie-breaking
//!
//! With `random_tie_break`, a root candidate scoring exactly the incumbent's
//! score replaces it on a fair coin flip. Later ties are therefore favored;
//! the choice is not uniform over tied candidates.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Action, GameRng, GameRngState, IsolaError, IsolaResult, Player, State};
use crate::heuristics::Heuristic;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Utility of a decided game, positive when the root player wins.
pub const WIN_UTILITY: f64 = 1e9;

/// Result of a root search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    pub action: Action,
    pub score: f64,
}

/// Minimax search context.
///
/// Owns the heuristic, configuration and its own RNG, which is used for
/// move-order shuffling and root tie-breaks and persists across calls.
pub struct MinimaxSearch<H: Heuristic> {
    heuristic: H,
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl<H: Heuristic> MinimaxSearch<H> {
    /// Create a search seeded from `config.seed`.
    pub fn new(heuristic: H, config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            heuristic,
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Replace the RNG, e.g. with a fork handed out by a factory.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Snapshot of the RNG, for checkpointing.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Pick the best action for the side to move.
    ///
    /// Fails with [`IsolaError::NoLegalActions`] if `state` is terminal.
    pub fn choose(&mut self, state: &State) -> IsolaResult<Action> {
        self.search(state).map(|outcome| outcome.action)
    }

    /// Pick the best action and report its minimax score.
    pub fn search(&mut self, state: &State) -> IsolaResult<SearchOutcome> {
        let start = Instant::now();
        self.stats.reset();

        let maximizer = state.current_player();
        let root_actions = self.ordered_actions(state);
        let Some(&first) = root_actions.first() else {
            return Err(IsolaError::NoLegalActions);
        };

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best = SearchOutcome {
            action: first,
            score: f64::NEG_INFINITY,
        };

        for candidate in root_actions {
            let next = state.apply(&candidate);
            let score = self.minimize(&next, 1, alpha, beta, maximizer);
            self.stats.root_candidates += 1;
            trace!(action = %candidate, score, "root candidate");

            if score > best.score
                || (score == best.score && self.config.random_tie_break && self.rng.coin_flip())
            {
                best = SearchOutcome {
                    action: candidate,
                    score,
                };
            }

            if self.config.alpha_beta {
                alpha = alpha.max(best.score);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        self.stats.best_score = best.score;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            player = %maximizer,
            depth = self.config.effective_depth(),
            heuristic = self.heuristic.name(),
            action = %best.action,
            score = best.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            nps = self.stats.nodes_per_second(),
            "search complete"
        );

        Ok(best)
    }

    /// Legal actions, shuffled when configured.
    fn ordered_actions(&mut self, state: &State) -> Vec<Action> {
        let mut actions = state.legal_actions();
        if self.config.randomize_order {
            self.rng.shuffle(&mut actions);
        }
        actions
    }

    /// Shared prologue of both ply functions: terminal or depth-limit value.
    fn settled_value(&mut self, state: &State, depth: u32, maximizer: Player) -> Option<f64> {
        self.stats.nodes += 1;

        if let Some(winner) = state.winner_if_terminal() {
            self.stats.terminal_nodes += 1;
            return Some(terminal_utility(winner, maximizer));
        }
        if depth >= self.config.effective_depth() {
            return Some(self.evaluate_leaf(state, maximizer));
        }
        None
    }

    fn minimize(&mut self, state: &State, depth: u32, alpha: f64, mut beta: f64, maximizer: Player) -> f64 {
        if let Some(value) = self.settled_value(state, depth, maximizer) {
            return value;
        }

        let mut best = f64::INFINITY;
        for action in self.ordered_actions(state) {
            let next = state.apply(&action);
            let score = self.maximize(&next, depth + 1, alpha, beta, maximizer);
            best = best.min(score);

            if self.config.alpha_beta {
                beta = beta.min(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }
        best
    }

    fn maximize(&mut self, state: &State, depth: u32, mut alpha: f64, beta: f64, maximizer: Player) -> f64 {
        if let Some(value) = self.settled_value(state, depth, maximizer) {
            return value;
        }

        let mut best = f64::NEG_INFINITY;
        for action in self.ordered_actions(state) {
            let next = state.apply(&action);
            let score = self.minimize(&next, depth + 1, alpha, beta, maximizer);
            best = best.max(score);

            if self.config.alpha_beta {
                alpha = alpha.max(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }
        best
    }

    /// Score a depth-limit node; see the module docs for the perspective rule.
    fn evaluate_leaf(&mut self, state: &State, maximizer: Player) -> f64 {
        self.stats.leaf_evaluations += 1;

        let to_move = state.current_player();
        let actions = state.legal_actions();
        self.stats.heuristic_calls += actions.len() as u64;

        let best = actions
            .iter()
            .map(|action| self.heuristic.evaluate(state, action, to_move))
            .max();

        match best {
            None => terminal_utility(to_move.opponent(), maximizer),
            Some(best) if to_move == maximizer => f64::from(best),
            Some(best) => -f64::from(best),
        }
    }
}

/// `+WIN_UTILITY` when `winner` is the root player, else `-WIN_UTILITY`.
#[must_use]
pub fn terminal_utility(winner: Player, maximizer: Player) -> f64 {
    if winner == maximizer {
        WIN_UTILITY
    } else {
        -WIN_UTILITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::heuristics::{HeuristicKind, MobilityHeuristic};

    struct Flat;

    impl Heuristic for Flat {
        fn evaluate(&self, _: &State, _: &Action, _: Player) -> i32 {
            0
        }

        fn name(&self) -> &'static str {
            "Flat"
        }
    }

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    /// Player one at (0,0) can trap player two, who has a single exit at (4,7).
    fn trap_in_one() -> State {
        State::parse(
            "1.......
             ........
             ........
             ........
             ......#.
             ......#2",
            Player::One,
        )
        .unwrap()
    }

    #[test]
    fn test_terminal_utility() {
        assert_eq!(terminal_utility(Player::One, Player::One), WIN_UTILITY);
        assert_eq!(terminal_utility(Player::Two, Player::One), -WIN_UTILITY);
    }

    #[test]
    fn test_flat_depth_one_returns_legal_action() {
        let state = State::initial(false);
        let mut search = MinimaxSearch::new(Flat, SearchConfig::default().with_depth(1));

        for _ in 0..3 {
            let action = search.choose(&state).unwrap();
            assert!(state.legal_actions().contains(&action));
        }
    }

    #[test]
    fn test_terminal_root_is_an_error() {
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
        let mut search = MinimaxSearch::new(MobilityHeuristic, SearchConfig::default());

        assert_eq!(search.choose(&trapped), Err(IsolaError::NoLegalActions));
    }

    #[test]
    fn test_finds_immediate_trap() {
        let state = trap_in_one();
        let mut search = MinimaxSearch::new(HeuristicKind::Mobility, SearchConfig::deterministic(1));

        let outcome = search.search(&state).unwrap();

        // Every destination works; the first one scanned (east) is kept.
        assert_eq!(outcome.action, Action::new(c(0, 1), c(4, 7)));
        assert_eq!(outcome.score, WIN_UTILITY);
    }

    #[test]
    fn test_depth_zero_behaves_as_depth_one() {
        let state = trap_in_one();
        let mut shallow = MinimaxSearch::new(MobilityHeuristic, SearchConfig::deterministic(0));
        let mut one = MinimaxSearch::new(MobilityHeuristic, SearchConfig::deterministic(1));

        assert_eq!(shallow.search(&state).unwrap(), one.search(&state).unwrap());
    }

    #[test]
    fn test_deterministic_config_keeps_first_best() {
        let state = State::initial(false);
        let mut search = MinimaxSearch::new(Flat, SearchConfig::deterministic(1));

        // Every candidate ties at 0, so the first legal action wins.
        let outcome = search.search(&state).unwrap();
        assert_eq!(outcome.action, state.legal_actions()[0]);
        assert_eq!(outcome.score, 0.0);
    }

    #[test]
    fn test_random_tie_break_favors_later_ties() {
        let state = State::initial(false);
        let actions = state.legal_actions();
        let last = actions[actions.len() - 1];

        let picks: Vec<Action> = (0..20)
            .map(|seed| {
                let config = SearchConfig::deterministic(1)
                    .with_random_tie_break(true)
                    .with_seed(seed);
                MinimaxSearch::new(Flat, config).choose(&state).unwrap()
            })
            .collect();

        // Keeping the first of 230 ties needs 229 losing flips in a row;
        // the last candidate wins its single flip half the time.
        assert!(picks.iter().all(|a| *a != actions[0]));
        assert!(picks.contains(&last));
        assert!(picks.iter().any(|a| *a != last));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let state = State::initial(false);
        let config = SearchConfig::default().with_depth(1).with_seed(9);

        let mut a = MinimaxSearch::new(MobilityHeuristic, config.clone());
        let mut b = MinimaxSearch::new(MobilityHeuristic, config);

        assert_eq!(a.choose(&state).unwrap(), b.choose(&state).unwrap());
        assert_eq!(a.rng_state(), b.rng_state());
    }

    #[test]
    fn test_stats_are_collected() {
        let state = trap_in_one();
        let mut search = MinimaxSearch::new(MobilityHeuristic, SearchConfig::deterministic(1));

        let outcome = search.search(&state).unwrap();
        let stats = search.stats();

        assert!(stats.root_candidates > 0);
        assert!(stats.nodes >= u64::from(stats.root_candidates));
        assert!(stats.terminal_nodes > 0);
        assert_eq!(stats.best_score, outcome.score);
    }
}
