//! Fire-once delayed effects. Every scheduled timer runs to completion;
//! nothing cancels an entry, so overlapping triggers against the same
//! element resolve last-write-wins when their effects land, matching the
//! site's historical behavior.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Clear the contact form's status banner.
    HideStatus,
    /// Restore the submit button's label and enablement.
    RestoreSubmit,
    /// Second phase of a filter match: bring the item to full opacity/scale.
    ShowItem(usize),
    /// Second phase of a filter miss: remove the item from display.
    HideItem(usize),
}

#[derive(Debug)]
struct Timer {
    due_ms: u64,
    effect: Effect,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, effect: Effect) {
        self.pending.push(Timer {
            due_ms: now_ms + delay_ms,
            effect,
        });
    }

    /// Removes and returns every effect whose deadline has passed, ordered by
    /// deadline (insertion order breaks ties).
    pub fn fire_due(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut due = Vec::new();
        self.pending.retain(|timer| {
            if timer.due_ms <= now_ms {
                due.push((timer.due_ms, timer.effect));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, effect)| effect).collect()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Effect, TimerQueue};

    #[test]
    fn effects_fire_in_deadline_order() {
        let mut timers = TimerQueue::default();
        timers.schedule(0, 300, Effect::HideItem(0));
        timers.schedule(0, 100, Effect::ShowItem(1));

        assert_eq!(timers.fire_due(50), vec![]);
        assert_eq!(
            timers.fire_due(400),
            vec![Effect::ShowItem(1), Effect::HideItem(0)]
        );
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn overlapping_timers_both_run() {
        // re-triggering before the first deadline does not cancel anything
        let mut timers = TimerQueue::default();
        timers.schedule(0, 5000, Effect::HideStatus);
        timers.schedule(1000, 5000, Effect::HideStatus);

        assert_eq!(timers.fire_due(5000), vec![Effect::HideStatus]);
        assert_eq!(timers.fire_due(6000), vec![Effect::HideStatus]);
    }
}
