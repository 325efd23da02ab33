use crate::bucket_queue::BucketQueue;
use crate::line::Line;
use crate::state::{Action, NodeKey, StateTable};

/// Find a minimum-cost edit script between two line sequences.
///
/// Uniform-cost shortest-path search from `(0, 0)` to `(|left|, |right|)`:
/// removing or adding a line costs 1, a matching pair costs 0. Runs of
/// matching lines are followed eagerly ("snakes"), so a whole diagonal run
/// collapses into a single queue entry.
///
/// When `agg` is set, frontier nodes lagging more than `agg` behind the
/// furthest-reached node (measured in `left + right`) are pruned. This
/// bounds exploration on pathological inputs at the price of the minimality
/// guarantee; with `agg` unset the script is exact.
pub fn find_edit_script(left: &[Line<'_>], right: &[Line<'_>], agg: Option<usize>) -> Vec<Action> {
    Search::new(left, right, agg).run()
}

struct Search<'a> {
    left: &'a [Line<'a>],
    right: &'a [Line<'a>],
    agg: Option<usize>,
    states: StateTable,
    queue: BucketQueue,
    /// Largest `left + right` over all enqueued keys.
    furthest: usize,
}

impl<'a> Search<'a> {
    fn new(left: &'a [Line<'a>], right: &'a [Line<'a>], agg: Option<usize>) -> Self {
        Self {
            left,
            right,
            agg,
            states: StateTable::new(),
            queue: BucketQueue::new(),
            furthest: 0,
        }
    }

    fn run(mut self) -> Vec<Action> {
        let goal = NodeKey::new(self.left.len(), self.right.len());
        self.maybe_enqueue(NodeKey::new(0, 0), Action::Undefined, 0);

        let distance = loop {
            let Some((key, dist)) = self.queue.pop() else {
                unreachable!("search queue drained before reaching the goal");
            };
            if key == goal {
                break dist;
            }
            if key.left < self.left.len() {
                self.maybe_enqueue(key.walk(Action::RemoveLeft), Action::RemoveLeft, dist + 1);
            }
            if key.right < self.right.len() {
                self.maybe_enqueue(key.walk(Action::AddRight), Action::AddRight, dist + 1);
            }
        };

        tracing::debug!(
            size_left = self.left.len(),
            size_right = self.right.len(),
            distance,
            "edit script found"
        );

        self.recover_path(goal)
    }

    fn lines_equal(&self, key: NodeKey) -> bool {
        key.left < self.left.len()
            && key.right < self.right.len()
            && self.left[key.left] == self.right[key.right]
    }

    /// Record and enqueue `key` if it has not been reached yet.
    ///
    /// The recorded action is what path recovery walks back over, so each
    /// node is written exactly once, at its first (lowest-cost) visit.
    fn maybe_enqueue(&mut self, mut key: NodeKey, action: Action, dist: usize) {
        if self.states.get(key) != Action::Undefined {
            return;
        }
        self.states.set(key, action);

        // Matching pairs cost nothing, so follow the whole run now rather
        // than paying one queue round-trip per line.
        while self.lines_equal(key) {
            key = key.walk(Action::Equal);
            if self.states.get(key) != Action::Undefined {
                return;
            }
            self.states.set(key, Action::Equal);
        }

        let progress = key.left + key.right;
        if let Some(agg) = self.agg {
            if self.furthest.saturating_sub(progress) > agg {
                return;
            }
        }
        self.furthest = self.furthest.max(progress);
        self.queue.push(dist, key);
    }

    fn recover_path(&self, goal: NodeKey) -> Vec<Action> {
        let origin = NodeKey::new(0, 0);
        let mut path = Vec::new();
        let mut key = goal;
        while key != origin {
            let action = self.states.get(key);
            assert!(
                action != Action::Undefined,
                "state table has no action for ({}, {})",
                key.left,
                key.right
            );
            path.push(action);
            key = key.backout(action);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::split_lines;

    fn doc(lines: &[&str]) -> String {
        let mut out = String::new();
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn solve(left: &[&str], right: &[&str], agg: Option<usize>) -> Vec<Action> {
        let doc_left = doc(left);
        let doc_right = doc(right);
        let left = split_lines(&doc_left);
        let right = split_lines(&doc_right);
        find_edit_script(&left, &right, agg)
    }

    fn cost(path: &[Action]) -> usize {
        path.iter().filter(|a| **a != Action::Equal).count()
    }

    fn walk_closure(path: &[Action]) -> (usize, usize) {
        let mut left = 0;
        let mut right = 0;
        for action in path {
            match action {
                Action::Equal => {
                    left += 1;
                    right += 1;
                }
                Action::RemoveLeft => left += 1,
                Action::AddRight => right += 1,
                Action::Undefined => panic!("undefined action in script"),
            }
        }
        (left, right)
    }

    #[test]
    fn identical_sequences_are_all_equal() {
        let path = solve(&["a", "b", "c"], &["a", "b", "c"], None);
        assert_eq!(path, vec![Action::Equal; 3]);
    }

    #[test]
    fn both_empty_is_an_empty_script() {
        let path = solve(&[], &[], None);
        assert!(path.is_empty());
    }

    #[test]
    fn left_empty_is_all_additions() {
        let path = solve(&[], &["x", "y"], None);
        assert_eq!(path, vec![Action::AddRight; 2]);
    }

    #[test]
    fn right_empty_is_all_removals() {
        let path = solve(&["x", "y"], &[], None);
        assert_eq!(path, vec![Action::RemoveLeft; 2]);
    }

    #[test]
    fn canonical_script_prefers_remove_first() {
        // Minimum cost is 3; the tie-break puts the removal of "foo" before
        // anything else and the trailing add last.
        let path = solve(&["foo", "bar", "foobar"], &["bar", "barfoo"], None);
        assert_eq!(
            path,
            vec![
                Action::RemoveLeft,
                Action::Equal,
                Action::RemoveLeft,
                Action::AddRight,
            ]
        );
    }

    #[test]
    fn single_line_replacement() {
        let path = solve(&["a", "b", "c"], &["a", "x", "c"], None);
        assert_eq!(cost(path.as_slice()), 2);
        assert_eq!(walk_closure(&path), (3, 3));
    }

    #[test]
    fn walk_closure_reaches_goal() {
        let path = solve(&["a", "b", "c", "d"], &["b", "c", "e", "f"], None);
        assert_eq!(walk_closure(&path), (4, 4));
    }

    #[test]
    fn disjoint_documents_cost_everything() {
        let path = solve(&["a", "b"], &["c", "d"], None);
        assert_eq!(cost(&path), 4);
    }

    #[test]
    fn aggressive_mode_still_reaches_goal() {
        let left: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let left: Vec<&str> = left.iter().map(|s| s.as_str()).collect();
        let right: Vec<&str> = left[50..].to_vec();
        let path = solve(&left, &right, Some(2));
        assert_eq!(walk_closure(&path), (100, 50));
    }

    #[test]
    fn aggressive_mode_matches_exact_on_easy_input() {
        let exact = solve(&["a", "b", "c"], &["a", "x", "c"], None);
        let pruned = solve(&["a", "b", "c"], &["a", "x", "c"], Some(1000));
        assert_eq!(exact, pruned);
    }
}
