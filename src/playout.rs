//! Random playouts: fill a session with uniformly random placements.
//!
//! Useful for exercising the engine on realistic, crowded positions and for
//! timing it. Moves are not chosen for strength.

use crate::session::{GameSession, MoveRecord};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Play up to `max_moves` random moves for whichever side is to move.
///
/// Stops early when the board has no empty point left.
pub fn random_playout<R: Rng>(
    session: &mut GameSession,
    max_moves: usize,
    rng: &mut R,
) -> Vec<MoveRecord> {
    let mut records = Vec::new();
    for _ in 0..max_moves {
        let empty = session.board.empty_points();
        let Some(&(x, y)) = empty.choose(rng) else {
            break;
        };
        match session.play(x, y) {
            Ok(record) => records.push(record),
            Err(e) => {
                // The point was just read as empty and in bounds.
                warn!(x, y, error = %e, "playout move rejected");
                break;
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_playout_is_deterministic_for_seed() {
        let config = EngineConfig::small(9);
        let mut a = GameSession::new(&config).unwrap();
        let mut b = GameSession::new(&config).unwrap();
        let ra = random_playout(&mut a, 60, &mut ChaCha8Rng::seed_from_u64(7));
        let rb = random_playout(&mut b, 60, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_playout_stops_on_full_board() {
        let mut game = GameSession::new(&EngineConfig::small(1)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let records = random_playout(&mut game, 10, &mut rng);
        // A 1x1 board takes exactly one stone and nothing can capture it.
        assert_eq!(records.len(), 1);
        assert_eq!(game.move_number, 1);
    }

    #[test]
    fn test_unbounded_move_count_stops_when_board_fills() {
        let mut game = GameSession::new(&EngineConfig::small(1)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let records = random_playout(&mut game, usize::MAX, &mut rng);
        assert_eq!(records.len(), 1);
        assert!(game.board.empty_points().is_empty());
    }

    #[test]
    fn test_playout_records_every_accepted_move() {
        let mut game = GameSession::new(&EngineConfig::small(9)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let records = random_playout(&mut game, 40, &mut rng);
        // No move on a freshly read empty point is rejected, so the
        // playout runs its full budget on a roomy board.
        assert_eq!(records.len(), 40);
        assert_eq!(game.move_number, 40);
    }

    #[test]
    fn test_move_numbers_are_sequential() {
        let mut game = GameSession::new(&EngineConfig::small(5)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let records = random_playout(&mut game, 30, &mut rng);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.move_number, i as u32 + 1);
        }
    }
}
