//! Pure circle selection for the matching endpoint.
//!
//! The handler fetches the course's active circles with their member counts
//! and the caller's memberships, then asks this module which circle to join.
//! Keeping the decision pure makes the branch rules testable without a
//! database.

/// What the matcher knows about one active circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleCandidate {
    pub member_count: u64,
    pub max_members: i32,
    pub already_member: bool,
}

impl CircleCandidate {
    fn has_room(self) -> bool {
        self.member_count < self.max_members.max(0) as u64
    }
}

/// Outcome of a match request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDecision {
    /// Join the candidate at this index.
    Join(usize),
    /// No circle has room, or the caller is in all of them; found a new
    /// circle with the caller as leader.
    Found,
}

impl MatchDecision {
    /// Joining an existing circle earns points; founding one does not.
    pub fn awards_points(self) -> bool {
        matches!(self, MatchDecision::Join(_))
    }
}

/// Picks the first circle with room that the caller is not already in.
/// Candidates must be ordered oldest first so earlier circles fill up
/// before newer ones spill over.
pub fn select_circle(candidates: &[CircleCandidate]) -> MatchDecision {
    for (idx, candidate) in candidates.iter().enumerate() {
        if candidate.already_member || !candidate.has_room() {
            continue;
        }
        return MatchDecision::Join(idx);
    }
    MatchDecision::Found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> CircleCandidate {
        CircleCandidate {
            member_count: 2,
            max_members: 5,
            already_member: false,
        }
    }

    fn full() -> CircleCandidate {
        CircleCandidate {
            member_count: 5,
            max_members: 5,
            already_member: false,
        }
    }

    fn joined() -> CircleCandidate {
        CircleCandidate {
            member_count: 3,
            max_members: 5,
            already_member: true,
        }
    }

    #[test]
    fn joins_the_first_open_circle() {
        assert_eq!(select_circle(&[open(), open()]), MatchDecision::Join(0));
    }

    #[test]
    fn skips_full_circles() {
        assert_eq!(select_circle(&[full(), open()]), MatchDecision::Join(1));
    }

    #[test]
    fn skips_circles_the_caller_is_already_in() {
        assert_eq!(select_circle(&[joined(), open()]), MatchDecision::Join(1));
    }

    #[test]
    fn founds_a_new_circle_when_none_is_joinable() {
        assert_eq!(select_circle(&[full(), joined()]), MatchDecision::Found);
    }

    #[test]
    fn founds_a_new_circle_for_an_empty_course() {
        assert_eq!(select_circle(&[]), MatchDecision::Found);
    }

    #[test]
    fn over_capacity_counts_as_full() {
        let overfull = CircleCandidate {
            member_count: 6,
            max_members: 5,
            already_member: false,
        };
        assert_eq!(select_circle(&[overfull]), MatchDecision::Found);
    }

    #[test]
    fn only_joining_earns_points() {
        assert!(MatchDecision::Join(0).awards_points());
        assert!(!MatchDecision::Found.awards_points());
    }
}
