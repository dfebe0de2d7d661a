use glam::DVec2;

use crate::core::ball::{Ball, BallId};

/// Balls on the table, one entry per identity.
/// A flat Vec kept sorted by id: there are never more than sixteen balls,
/// and sorted order makes every scan deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallSet {
    balls: Vec<Ball>,
}

impl BallSet {
    pub fn new() -> Self {
        Self {
            balls: Vec::with_capacity(16),
        }
    }

    /// Put a ball on the table, moving it if it is already there.
    /// Returns the previous position when the ball moved.
    pub fn insert(&mut self, ball: Ball) -> Option<DVec2> {
        match self.balls.binary_search_by_key(&ball.id, |b| b.id) {
            Ok(idx) => Some(std::mem::replace(&mut self.balls[idx], ball).pos),
            Err(idx) => {
                self.balls.insert(idx, ball);
                None
            }
        }
    }

    /// Take a ball off the table. Returns the removed ball if present.
    pub fn remove(&mut self, id: BallId) -> Option<Ball> {
        self.balls
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|idx| self.balls.remove(idx))
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|idx| &self.balls[idx])
    }

    pub fn position(&self, id: BallId) -> Option<DVec2> {
        self.get(id).map(|b| b.pos)
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.get(id).is_some()
    }

    pub fn cue(&self) -> Option<&Ball> {
        self.get(BallId::Cue)
    }

    /// Iterate over all balls in id order (cue first).
    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    /// First ball (in id order) that a ball at `pos` would intersect,
    /// ignoring `except`.
    pub fn overlapping(&self, pos: DVec2, radius: f64, except: BallId) -> Option<&Ball> {
        self.balls
            .iter()
            .filter(|b| b.id != except)
            .find(|b| b.overlaps(pos, radius))
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn clear(&mut self) {
        self.balls.clear();
    }
}

impl FromIterator<Ball> for BallSet {
    fn from_iter<I: IntoIterator<Item = Ball>>(iter: I) -> Self {
        let mut set = BallSet::new();
        for ball in iter {
            set.insert(ball);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut set = BallSet::new();
        assert_eq!(set.insert(Ball::at(BallId::Object(3), 10.0, 20.0)), None);
        assert_eq!(set.position(BallId::Object(3)), Some(DVec2::new(10.0, 20.0)));
        assert!(set.cue().is_none());
    }

    #[test]
    fn insert_moves_existing_ball() {
        let mut set = BallSet::new();
        set.insert(Ball::at(BallId::Cue, 10.0, 10.0));
        let prev = set.insert(Ball::at(BallId::Cue, 30.0, 12.0));
        assert_eq!(prev, Some(DVec2::new(10.0, 10.0)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.cue().unwrap().pos, DVec2::new(30.0, 12.0));
    }

    #[test]
    fn iteration_is_sorted_by_id() {
        let set: BallSet = [
            Ball::at(BallId::Object(9), 1.0, 1.0),
            Ball::at(BallId::Cue, 2.0, 2.0),
            Ball::at(BallId::Object(2), 3.0, 3.0),
        ]
        .into_iter()
        .collect();
        let ids: Vec<_> = set.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BallId::Cue, BallId::Object(2), BallId::Object(9)]);
    }

    #[test]
    fn remove_returns_ball() {
        let mut set = BallSet::new();
        set.insert(Ball::at(BallId::Object(5), 40.0, 20.0));
        let removed = set.remove(BallId::Object(5)).unwrap();
        assert_eq!(removed.pos, DVec2::new(40.0, 20.0));
        assert!(set.is_empty());
        assert!(set.remove(BallId::Object(5)).is_none());
    }

    #[test]
    fn overlapping_skips_the_moving_ball() {
        let mut set = BallSet::new();
        set.insert(Ball::at(BallId::Cue, 20.0, 20.0));
        set.insert(Ball::at(BallId::Object(1), 24.0, 20.0));
        let r = 1.125;
        assert!(set.overlapping(DVec2::new(21.0, 20.0), r, BallId::Cue).is_none());
        let hit = set.overlapping(DVec2::new(23.0, 20.0), r, BallId::Cue).unwrap();
        assert_eq!(hit.id, BallId::Object(1));
    }
}
