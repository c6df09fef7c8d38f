use bevy::{platform::collections::HashSet, prelude::*};

/// Catalog ids for the built-in spells.
pub mod spell_ids {
    pub const PROJECTILE: &str = "projectile";
    pub const PROJECTILE_UPGRADE: &str = "projectile_upgrade";
    pub const PROJECTILE_TRAIL: &str = "projectile_trail";
    pub const SUMMON_ALLY: &str = "summon_ally";
}

/// Marker: entity can cast spells.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Caster;

/// Per-caster set of unlocked spell ids. Created empty and mutated only
/// through [`SpellBook::try_unlock`].
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct SpellBook {
    unlocked: HashSet<String>,
}

impl SpellBook {
    pub fn is_unlocked(&self, spell_id: &str) -> bool {
        self.unlocked.contains(spell_id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Attempts to add a spell to the unlocked set.
    ///
    /// `requires` is the spell's prerequisite from the catalog, if any. A
    /// spell whose prerequisite is not yet unlocked is refused without
    /// mutation. Unlocking an already-unlocked spell is a no-op that still
    /// counts as success.
    pub fn try_unlock(&mut self, spell_id: &str, requires: Option<&str>) -> UnlockOutcome {
        if let Some(prerequisite) = requires
            && !self.is_unlocked(prerequisite)
        {
            return UnlockOutcome::MissingPrerequisite;
        }

        if self.unlocked.insert(spell_id.to_string()) {
            UnlockOutcome::Unlocked
        } else {
            UnlockOutcome::AlreadyUnlocked
        }
    }
}

/// Result of an unlock attempt. Only [`UnlockOutcome::Unlocked`] warrants a
/// `SpellUnlocked` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Newly added to the set.
    Unlocked,
    /// Already present; success without mutation.
    AlreadyUnlocked,
    /// Prerequisite not yet unlocked; no mutation.
    MissingPrerequisite,
}

impl UnlockOutcome {
    pub fn is_success(self) -> bool {
        !matches!(self, UnlockOutcome::MissingPrerequisite)
    }
}

/// Projectile tuning the caster currently fires with. Updated by spell
/// unlock grants (base spell and its upgrade carry different speeds).
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct ProjectileLoadout {
    pub speed: f32,
}
