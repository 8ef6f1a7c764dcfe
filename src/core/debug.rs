use crate::data::{Config, ItemKind};
use crate::save::{SaveData, Savefile};

/// Out-of-band tweaks to the persisted state for development builds. Never
/// invoked from the frame loop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCommand {
    SetScore(i64),
    SetLubeTier(i16),
    SetGravityTier(i16),
    SetOxyTier(i16),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugError {
    NegativeScore(i64),
    TierOutOfRange { requested: i16, max: i16 },
}

pub fn apply(
    command: DebugCommand,
    config: &Config,
    save: &mut Savefile,
) -> Result<(), DebugError> {
    match command {
        DebugCommand::SetScore(score) => {
            if score < 0 {
                return Err(DebugError::NegativeScore(score));
            }
            save.data.score = score;
        }
        DebugCommand::SetLubeTier(tier) => {
            save.data.lube_tier = checked_tier(tier, config.lube.max_tier)?;
        }
        DebugCommand::SetGravityTier(tier) => {
            save.data.gravity_tier = checked_tier(tier, config.gravity.max_tier)?;
        }
        DebugCommand::SetOxyTier(tier) => {
            save.data.oxy_tier = checked_tier(tier, max_oxy_tier(config))?;
        }
        DebugCommand::Reset => {
            save.data = SaveData::default();
        }
    }
    save.dirty = true;
    Ok(())
}

fn checked_tier(requested: i16, max: i16) -> Result<i16, DebugError> {
    if requested < 0 || requested > max {
        return Err(DebugError::TierOutOfRange { requested, max });
    }
    Ok(requested)
}

// Oxy has no maxTier tunable; the catalog is the authority.
fn max_oxy_tier(config: &Config) -> i16 {
    config
        .store
        .iter()
        .filter_map(|item| match item.kind {
            ItemKind::Oxy { tier } => Some(tier),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::minimal_config;

    #[test]
    fn valid_commands_mutate_and_mark_dirty() {
        let config = minimal_config();
        let mut save = Savefile::default();

        apply(DebugCommand::SetScore(99), &config, &mut save).expect("score should apply");
        assert_eq!(save.data.score, 99);
        assert!(save.dirty);

        save.dirty = false;
        apply(
            DebugCommand::SetLubeTier(config.lube.max_tier),
            &config,
            &mut save,
        )
        .expect("max tier should apply");
        assert_eq!(save.data.lube_tier, config.lube.max_tier);
        assert!(save.dirty);
    }

    #[test]
    fn oxy_tier_is_bounded_by_the_catalog() {
        let config = minimal_config();
        let mut save = Savefile::default();

        apply(DebugCommand::SetOxyTier(1), &config, &mut save).expect("catalog tier should apply");
        assert_eq!(save.data.oxy_tier, 1);

        let err = apply(DebugCommand::SetOxyTier(2), &config, &mut save).unwrap_err();
        assert_eq!(
            err,
            DebugError::TierOutOfRange {
                requested: 2,
                max: 1,
            }
        );
        assert_eq!(save.data.oxy_tier, 1);
    }

    #[test]
    fn rejected_commands_leave_the_save_untouched() {
        let config = minimal_config();
        let mut save = Savefile::default();
        save.data.score = 5;

        let err = apply(DebugCommand::SetScore(-1), &config, &mut save).unwrap_err();
        assert_eq!(err, DebugError::NegativeScore(-1));
        assert_eq!(save.data.score, 5);
        assert!(!save.dirty);

        let over = config.gravity.max_tier + 1;
        let err = apply(DebugCommand::SetGravityTier(over), &config, &mut save).unwrap_err();
        assert_eq!(
            err,
            DebugError::TierOutOfRange {
                requested: over,
                max: config.gravity.max_tier,
            }
        );
        assert_eq!(save.data.gravity_tier, 0);
    }

    #[test]
    fn reset_restores_the_default_save() {
        let config = minimal_config();
        let mut save = Savefile::default();
        save.data.score = 40;
        save.data.lube_tier = 2;
        save.data.prestige = 1;

        apply(DebugCommand::Reset, &config, &mut save).expect("reset should apply");

        assert_eq!(save.data, SaveData::default());
        assert!(save.dirty);
    }
}
