// The trail itself: a bounded, ordered history of recent tip positions.
// Visual expectation: the trail grows behind the moving tip, holds a fixed
// maximum length, and drains from its oldest end once the tip leaves frame.

use std::collections::VecDeque;

use crate::types::{Detection, Pos};

/// Bounded FIFO of tip positions, oldest at the front.
///
/// Invariants: length never exceeds the capacity; positions leave only from
/// the front; a position already in the buffer is never appended again.
/// There is no reset operation, the buffer only ever empties by draining.
pub struct TraceBuffer {
    points: VecDeque<Pos>,
    capacity: usize,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Apply one tick's detection result.
    ///
    /// Present: append the position unless it is already in the buffer,
    /// then slide the window forward if the append filled it to capacity.
    /// Absent: drain one position from the front, so a trail that took N
    /// ticks to build fades out over N ticks of the tip being gone.
    pub fn update(&mut self, detection: Detection) {
        match detection {
            Detection::Present(p) => {
                if !self.points.contains(&p) {
                    self.points.push_back(p);
                }
                if self.points.len() == self.capacity {
                    self.points.pop_front();
                }
            }
            // pop_front on an empty deque is the required no-op.
            Detection::Absent => {
                self.points.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, p: Pos) -> bool {
        self.points.contains(&p)
    }

    /// Oldest-first iteration, the order the trail was drawn in.
    pub fn iter(&self) -> impl Iterator<Item = &Pos> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(row: u32, col: u32) -> Detection {
        Detection::Present(Pos::new(row, col))
    }

    fn positions(buf: &TraceBuffer) -> Vec<Pos> {
        buf.iter().copied().collect()
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut buf = TraceBuffer::new(100);
        for i in 0..500u32 {
            buf.update(present(i / 512, i % 512));
            assert!(buf.len() <= 100);
        }
        // Steady state after the at-capacity slide.
        assert_eq!(buf.len(), 99);
    }

    #[test]
    fn duplicate_append_changes_nothing() {
        let mut buf = TraceBuffer::new(100);
        buf.update(present(1, 1));
        buf.update(present(2, 2));
        let before = positions(&buf);

        buf.update(present(1, 1));
        assert_eq!(positions(&buf), before);
    }

    #[test]
    fn absent_drains_oldest_first() {
        let mut buf = TraceBuffer::new(100);
        for i in 0..4 {
            buf.update(present(i, i));
        }
        buf.update(Detection::Absent);
        assert_eq!(
            positions(&buf),
            vec![Pos::new(1, 1), Pos::new(2, 2), Pos::new(3, 3)]
        );
    }

    #[test]
    fn fade_takes_as_many_ticks_as_the_buildup() {
        let mut buf = TraceBuffer::new(100);
        let built = 7;
        for i in 0..built {
            buf.update(present(i, 0));
        }
        for n in 1..=built as usize + 3 {
            buf.update(Detection::Absent);
            assert_eq!(buf.len(), (built as usize).saturating_sub(n));
        }
        assert!(buf.is_empty());
    }

    #[test]
    fn absent_on_empty_buffer_is_a_no_op() {
        let mut buf = TraceBuffer::new(100);
        buf.update(Detection::Absent);
        assert!(buf.is_empty());
    }

    #[test]
    fn at_capacity_the_window_slides_forward() {
        let mut buf = TraceBuffer::new(3);
        buf.update(present(0, 0));
        buf.update(present(1, 0));
        // Third append hits capacity and evicts the oldest immediately.
        buf.update(present(2, 0));
        assert_eq!(positions(&buf), vec![Pos::new(1, 0), Pos::new(2, 0)]);
    }

    #[test]
    fn present_absent_scenario() {
        // 5 distinct presents, 3 absents, then a duplicate present.
        let mut buf = TraceBuffer::new(100);
        let ps: Vec<Pos> = (1..=5).map(|i| Pos::new(i, i * 2)).collect();
        for &p in &ps {
            buf.update(Detection::Present(p));
        }
        assert_eq!(positions(&buf), ps);

        for _ in 0..3 {
            buf.update(Detection::Absent);
        }
        assert_eq!(positions(&buf), vec![ps[3], ps[4]]);

        buf.update(Detection::Present(ps[4]));
        assert_eq!(positions(&buf), vec![ps[3], ps[4]]);
    }
}
