//! Scheduler for polling blocks and publishing the status line
//!
//! Every block has its own cadence. The scheduler keeps one next-due time per
//! block, runs the blocks that are due in table order, caches their rendered
//! fragments, and republishes the concatenated line whenever something ran.
//! Between passes it sleeps until the earliest next-due time.

use super::formatter::{format_fragment, Markup};
use super::publisher::Publisher;
use super::registry::BlockRegistry;
use log::{debug, trace};
use rg_status_types::Color;
use std::time::Duration;

/// Wall-clock time in whole seconds since the Unix epoch
pub type Timestamp = i64;

/// Current wall-clock time
pub fn now() -> Timestamp {
    chrono::Utc::now().timestamp()
}

/// Tracks when a block runs next and what it last rendered
#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockState {
    next_due: Timestamp,
    /// Run on the next pass regardless of `next_due`
    run_immediately: bool,
    /// Last rendered fragment, `None` until the block first runs
    fragment: Option<String>,
}

impl BlockState {
    fn is_due(&self, now: Timestamp) -> bool {
        self.next_due <= now || self.run_immediately
    }
}

/// First due time of a block started at `now`.
///
/// Aligned blocks land on the grid `align + k * interval`: the first slot at
/// or after `now`, shifted by `delay`. A delay of `-1` on an aligned block
/// also requests an immediate run and pushes the first slot back by one
/// second so that run is not repeated.
///
/// Arithmetic saturates, so an extreme schedule parks the block far in the
/// future instead of wrapping around.
fn initial_state(interval: i64, align: Option<i64>, delay: i64, now: Timestamp) -> BlockState {
    match align {
        None => BlockState {
            next_due: now.saturating_add(delay),
            run_immediately: false,
            fragment: None,
        },
        Some(align) => {
            let delta = now.saturating_sub(align);
            let mut periods = delta.div_euclid(interval);
            if delta.rem_euclid(interval) != 0 {
                periods = periods.saturating_add(1);
            }
            let mut next_due = align
                .saturating_add(periods.saturating_mul(interval))
                .saturating_add(delay);
            let run_immediately = delay == -1;
            if run_immediately {
                next_due = next_due.saturating_add(1);
            }
            BlockState {
                next_due,
                run_immediately,
                fragment: None,
            }
        }
    }
}

/// Drives the polling passes for a fixed set of blocks
pub struct Scheduler {
    registry: BlockRegistry,
    states: Vec<BlockState>,
    background: Color,
    markup: Markup,
}

impl Scheduler {
    /// Create a scheduler whose blocks are timed relative to `now`
    pub fn new(registry: BlockRegistry, background: Color, markup: Markup, now: Timestamp) -> Self {
        let states = registry
            .iter()
            .map(|block| initial_state(block.interval, block.align, block.delay, now))
            .collect();

        Self {
            registry,
            states,
            background,
            markup,
        }
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Next due time of block `index`
    pub fn next_due(&self, index: usize) -> Option<Timestamp> {
        self.states.get(index).map(|state| state.next_due)
    }

    /// Last fragment rendered by block `index`
    pub fn fragment(&self, index: usize) -> Option<&str> {
        self.states.get(index).and_then(|state| state.fragment.as_deref())
    }

    /// Whether block `index` would run in a pass at `now`
    pub fn is_due(&self, index: usize, now: Timestamp) -> bool {
        self.states
            .get(index)
            .is_some_and(|state| state.is_due(now))
    }

    /// Indices of the blocks that would run in a pass at `now`
    pub fn due_blocks(&self, now: Timestamp) -> Vec<usize> {
        (0..self.states.len()).filter(|&i| self.is_due(i, now)).collect()
    }

    /// Run one polling pass at `now`.
    ///
    /// Due blocks run sequentially in table order. A block that is behind by
    /// several periods only advances by one interval per pass. Returns the new
    /// status line if at least one block ran, `None` otherwise.
    pub fn poll(&mut self, now: Timestamp) -> Option<String> {
        let background = self.background;
        let markup = self.markup;
        let mut ran = 0usize;

        for (block, state) in self.registry.blocks_mut().iter_mut().zip(self.states.iter_mut()) {
            if !state.is_due(now) {
                continue;
            }

            let sample = block.reader.read();
            trace!("{} -> {:?}", block.reader.metadata().id, sample);
            state.fragment = Some(format_fragment(&sample, background, markup));

            if state.next_due <= now {
                state.next_due = state.next_due.saturating_add(block.interval);
            }
            state.run_immediately = false;
            ran += 1;
        }

        if ran == 0 {
            return None;
        }

        debug!("Pass at {}: {} of {} blocks ran", now, ran, self.states.len());
        Some(self.status_line())
    }

    /// Concatenation of all rendered fragments in table order
    pub fn status_line(&self) -> String {
        self.states
            .iter()
            .filter_map(|state| state.fragment.as_deref())
            .collect()
    }

    /// Earliest next-due time over all blocks
    pub fn next_wake(&self) -> Timestamp {
        self.states
            .iter()
            .map(|state| state.next_due)
            .min()
            .unwrap_or(Timestamp::MAX)
    }

    /// How long to sleep from `now_ms` (milliseconds since the epoch) until
    /// the start of the earliest next-due second. Never negative: if a block
    /// is already overdue the result is zero.
    pub fn sleep_duration(&self, now_ms: i64) -> Duration {
        let wake_ms = self.next_wake().saturating_mul(1000);
        Duration::from_millis(wake_ms.saturating_sub(now_ms).max(0) as u64)
    }

    /// Run passes forever against the wall clock, publishing every new
    /// status line.
    pub async fn run(&mut self, publisher: &mut dyn Publisher) {
        self.run_with_clock(publisher, || chrono::Utc::now().timestamp_millis())
            .await
    }

    /// Run passes forever, reading the time in milliseconds from `clock_ms`.
    ///
    /// Each pass happens at the whole second the clock reports. Waking early
    /// is harmless: the pass finds nothing due and the loop sleeps again.
    pub async fn run_with_clock<C>(&mut self, publisher: &mut dyn Publisher, mut clock_ms: C)
    where
        C: FnMut() -> i64,
    {
        loop {
            if let Some(status) = self.poll(clock_ms().div_euclid(1000)) {
                publisher.publish(&status);
            }

            let remaining = self.sleep_duration(clock_ms());
            trace!("Sleeping {}ms until {}", remaining.as_millis(), self.next_wake());
            tokio::time::sleep(remaining).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::publisher::RecordingPublisher;
    use crate::core::{BlockDescriptor, BoxedSampleReader, ReaderMetadata, SampleReader};
    use rg_status_types::Sample;
    use std::cell::RefCell;
    use std::rc::Rc;

    const BG: Color = Color::from_hex_const("#000000");
    const FG: Color = Color::from_hex_const("#ffffff");

    /// Counts its invocations and shows the count as text
    struct Counter {
        metadata: ReaderMetadata,
        calls: Rc<RefCell<Vec<&'static str>>>,
        count: u32,
    }

    impl SampleReader for Counter {
        fn metadata(&self) -> &ReaderMetadata {
            &self.metadata
        }

        fn read(&mut self) -> Sample {
            self.count += 1;
            self.calls.borrow_mut().push(self.metadata.id);
            Sample::new("", format!("{}{}", self.metadata.id, self.count), FG)
        }
    }

    fn counter(id: &'static str, calls: &Rc<RefCell<Vec<&'static str>>>) -> BoxedSampleReader {
        Box::new(Counter {
            metadata: ReaderMetadata {
                id,
                name: id,
                description: "test counter",
            },
            calls: Rc::clone(calls),
            count: 0,
        })
    }

    fn scheduler(blocks: &[(&'static str, i64, Option<i64>, i64)], now: Timestamp) -> (Scheduler, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let descriptors = blocks
            .iter()
            .map(|&(id, interval, align, delay)| BlockDescriptor::new(counter(id, &calls), interval, align, delay))
            .collect();
        let registry = BlockRegistry::new(descriptors).unwrap();
        (Scheduler::new(registry, BG, Markup::Plain, now), calls)
    }

    #[test]
    fn test_unaligned_initial_due_time() {
        let (sched, _) = scheduler(&[("a", 10, None, 0), ("b", 10, None, 5)], 1000);
        assert_eq!(sched.next_due(0), Some(1000));
        assert_eq!(sched.next_due(1), Some(1005));
    }

    #[test]
    fn test_aligned_rounds_up_to_grid() {
        // grid: 100, 160, 220, ...
        let (sched, _) = scheduler(&[("a", 60, Some(100), 0)], 170);
        assert_eq!(sched.next_due(0), Some(220));

        let (sched, _) = scheduler(&[("a", 60, Some(100), 0)], 220);
        assert_eq!(sched.next_due(0), Some(220));

        let (sched, _) = scheduler(&[("a", 60, Some(100), 3)], 221);
        assert_eq!(sched.next_due(0), Some(283));
    }

    #[test]
    fn test_aligned_epoch_in_future() {
        let (sched, _) = scheduler(&[("a", 60, Some(1000), 0)], 900);
        assert_eq!(sched.next_due(0), Some(940));
    }

    #[test]
    fn test_aligned_immediate_start() {
        let (mut sched, calls) = scheduler(&[("clock", 60, Some(100), -1)], 170);
        // slot 220, shifted by -1 then +1
        assert_eq!(sched.next_due(0), Some(220));
        assert!(sched.is_due(0, 170));

        assert!(sched.poll(170).is_some());
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(sched.next_due(0), Some(220));
        assert!(!sched.is_due(0, 171));
    }

    #[test]
    fn test_aligned_progression() {
        let align = 1_592_384_460;
        let (mut sched, _) = scheduler(&[("clock", 60, Some(align), -1)], align + 7);
        sched.poll(align + 7);

        let mut now = sched.next_wake();
        for _ in 0..5 {
            let due = sched.next_due(0).unwrap();
            assert_eq!((due - align).rem_euclid(60), 0);
            sched.poll(now);
            assert_eq!(sched.next_due(0), Some(due + 60));
            now = sched.next_wake();
        }
    }

    #[test]
    fn test_advances_one_interval_per_pass() {
        let (mut sched, calls) = scheduler(&[("a", 10, None, 0)], 0);
        sched.poll(0);
        assert_eq!(sched.next_due(0), Some(10));

        // stalled for many periods
        sched.poll(100);
        assert_eq!(sched.next_due(0), Some(20));
        sched.poll(100);
        assert_eq!(sched.next_due(0), Some(30));
        assert_eq!(calls.borrow().len(), 3);
        assert_eq!(sched.sleep_duration(100_000), Duration::ZERO);
    }

    #[test]
    fn test_idle_pass_is_noop() {
        let (mut sched, calls) = scheduler(&[("a", 10, None, 0), ("b", 20, None, 0)], 0);
        assert!(sched.poll(0).is_some());
        let before = calls.borrow().len();

        assert!(sched.due_blocks(5).is_empty());
        assert!(sched.poll(5).is_none());
        assert_eq!(calls.borrow().len(), before);
    }

    #[test]
    fn test_three_blocks_end_to_end() {
        let t0 = 1_000_000;
        let (mut sched, calls) = scheduler(&[("a", 1, None, 0), ("b", 20, None, 0), ("c", 60, None, 0)], t0);

        assert_eq!(sched.due_blocks(t0), vec![0, 1, 2]);
        let mut publisher = RecordingPublisher::default();
        if let Some(status) = sched.poll(t0) {
            publisher.publish(&status);
        }
        assert_eq!(sched.sleep_duration(t0 * 1000), Duration::from_secs(1));

        assert_eq!(sched.due_blocks(t0 + 1), vec![0]);
        for t in t0 + 1..t0 + 20 {
            sched.poll(t);
        }
        assert_eq!(sched.due_blocks(t0 + 20), vec![0, 1]);

        calls.borrow_mut().clear();
        if let Some(status) = sched.poll(t0 + 20) {
            publisher.publish(&status);
        }
        assert_eq!(*calls.borrow(), vec!["a", "b"]);
        assert_eq!(publisher.published.len(), 2);
        assert_eq!(publisher.published[0], " a1  b1  c1 ");
        assert_eq!(publisher.published[1], " a21  b2  c1 ");
    }

    #[test]
    fn test_status_skips_blocks_that_never_ran() {
        let (mut sched, _) = scheduler(&[("a", 10, None, 0), ("b", 10, None, 30)], 0);
        assert_eq!(sched.poll(0).as_deref(), Some(" a1 "));
        assert_eq!(sched.fragment(1), None);
    }

    #[test]
    fn test_sleep_until_earliest_block() {
        let (mut sched, _) = scheduler(&[("a", 7, None, 0), ("b", 3, None, 0)], 50);
        sched.poll(50);
        assert_eq!(sched.next_wake(), 53);
        assert_eq!(sched.sleep_duration(50_000), Duration::from_secs(3));
        assert_eq!(sched.sleep_duration(50_250), Duration::from_millis(2750));
        assert_eq!(sched.sleep_duration(53_000), Duration::ZERO);
        // woke late: never a negative sleep
        assert_eq!(sched.sleep_duration(60_400), Duration::ZERO);
    }

    #[test]
    fn test_huge_interval_does_not_wrap() {
        let (mut sched, calls) = scheduler(&[("a", i64::MAX, None, 0)], 1000);
        assert!(sched.poll(1000).is_some());
        assert_eq!(sched.next_due(0), Some(i64::MAX));
        assert!(sched.poll(1001).is_none());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_huge_delay_does_not_wrap() {
        let (mut sched, _) = scheduler(&[("a", 5, None, i64::MAX)], 1000);
        assert_eq!(sched.next_due(0), Some(i64::MAX));
        assert!(sched.poll(1000).is_none());

        let (sched, _) = scheduler(&[("a", 5, Some(i64::MIN), i64::MAX)], 1000);
        assert!(sched.next_due(0).unwrap() > 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_publishes_each_pass() {
        let t0 = 1_000_000;
        let (mut sched, calls) = scheduler(&[("a", 1, None, 0), ("b", 20, None, 0)], t0);
        let mut publisher = RecordingPublisher::default();

        let start = tokio::time::Instant::now();
        let clock = move || t0 * 1000 + start.elapsed().as_millis() as i64;
        let result = tokio::time::timeout(
            Duration::from_millis(20_500),
            sched.run_with_clock(&mut publisher, clock),
        )
        .await;
        assert!(result.is_err());

        // one pass per second from t0 to t0 + 20
        assert_eq!(publisher.published.len(), 21);
        assert_eq!(publisher.published[0], " a1  b1 ");
        assert_eq!(publisher.published[1], " a2  b1 ");
        assert_eq!(publisher.published[20], " a21  b2 ");
        assert_eq!(calls.borrow().len(), 23);
    }
}
