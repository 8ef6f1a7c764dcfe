use crate::save::SaveData;

pub const END_COUNTDOWN: f32 = 1.1;

/// Fresh save for the next prestige level: everything zeroed except the
/// incremented prestige counter.
pub fn rollover(previous: &SaveData) -> SaveData {
    SaveData {
        prestige: previous.prestige + 1,
        ..SaveData::default()
    }
}

/// The first rollover is the one that reveals the gated store items.
pub fn unlocks_new_content(save: &SaveData) -> bool {
    save.prestige == 1
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndSequence {
    remaining: f32,
}

impl EndSequence {
    pub fn new() -> Self {
        Self {
            remaining: END_COUNTDOWN,
        }
    }

    /// Returns true once the countdown has elapsed.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.remaining -= delta;
        self.finished()
    }

    pub fn finished(&self) -> bool {
        self.remaining <= 0.0
    }
}

impl Default for EndSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rollover_increments_prestige_and_zeroes_the_rest() {
        let mut previous = SaveData::default();
        previous.score = 412;
        previous.lube_tier = 3;
        previous.gravity_tier = 2;
        previous.oxy_tier = 1;
        previous.prestige = 0;

        let fresh = rollover(&previous);

        assert_eq!(fresh.prestige, 1);
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.lube_tier, 0);
        assert_eq!(fresh.gravity_tier, 0);
        assert_eq!(fresh.oxy_tier, 0);
    }

    #[test]
    fn only_the_first_prestige_unlocks_new_content() {
        let first = rollover(&SaveData::default());
        assert!(unlocks_new_content(&first));

        let second = rollover(&first);
        assert_eq!(second.prestige, 2);
        assert!(!unlocks_new_content(&second));
    }

    #[test]
    fn countdown_finishes_after_its_duration() {
        let mut sequence = EndSequence::new();
        assert!(!sequence.tick(END_COUNTDOWN / 2.0));
        assert!(!sequence.finished());
        assert!(sequence.tick(END_COUNTDOWN));
        assert!(sequence.finished());
    }
}
