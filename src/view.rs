//! Read-only snapshot of a session for display.
//!
//! `SessionView` is a pure function of session state. Its `Display` impl is
//! the plain-text screen the terminal front-end prints.

use serde::Serialize;
use std::fmt;

use crate::core::{BattleLog, House, Phase};
use crate::session::Session;

const BAR_WIDTH: usize = 20;

/// Everything a screen needs to draw one frame.
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub name: String,
    pub house: Option<House>,
    pub hp: u32,
    pub max_hp: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub score: u32,
    pub round: u32,
    pub enemy: Option<EnemyView>,
    pub log: BattleLog,
    pub spells: Vec<SpellView>,
    pub restore_amount: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct EnemyView {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct SpellView {
    pub name: String,
    pub damage: Option<u32>,
    pub heal: Option<u32>,
    pub mana_cost: u32,
    /// Whether the player can pay for it right now.
    pub castable: bool,
}

impl SessionView {
    /// Snapshot the session.
    #[must_use]
    pub fn capture(session: &Session) -> Self {
        let player = session.player();
        let spells = session
            .grimoire()
            .iter()
            .map(|s| SpellView {
                name: s.name.clone(),
                damage: s.damage,
                heal: s.heal,
                mana_cost: s.mana_cost,
                castable: player.can_afford(s.mana_cost),
            })
            .collect();

        Self {
            phase: session.phase(),
            name: player.name.clone(),
            house: player.house,
            hp: player.hp(),
            max_hp: player.max_hp(),
            mana: player.mana(),
            max_mana: player.max_mana(),
            score: player.score,
            round: player.round,
            enemy: session.enemy().map(|e| EnemyView {
                name: e.name().to_string(),
                hp: e.current_hp(),
                max_hp: e.max_hp(),
            }),
            log: session.battle_log().clone(),
            spells,
            restore_amount: session.config().restore_mana_amount,
        }
    }
}

/// `[#####-----]` style gauge.
fn bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) as usize * width) / max as usize
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.phase.is_over() {
            return self.write_summary(f);
        }
        match self.phase {
            Phase::Start => {
                writeln!(f, "=== Wizard Duel ===")?;
                writeln!(f, "Choose your house:")?;
                for house in House::ALL {
                    writeln!(f, "  {}", house)?;
                }
                writeln!(f, "Type: start <name> <house>")
            }
            Phase::Playing => {
                let house = self.house.map(House::name).unwrap_or("");
                writeln!(f, "{} of {}", self.name, house)?;
                writeln!(f, "  HP   {} {}", bar(self.hp, self.max_hp, BAR_WIDTH), self.hp)?;
                writeln!(f, "  Mana {} {}", bar(self.mana, self.max_mana, BAR_WIDTH), self.mana)?;
                writeln!(f, "  Score: {} | Round: {}", self.score, self.round)?;

                match &self.enemy {
                    Some(enemy) => writeln!(
                        f,
                        "{}  HP {} {}/{}",
                        enemy.name,
                        bar(enemy.hp, enemy.max_hp, BAR_WIDTH),
                        enemy.hp,
                        enemy.max_hp
                    )?,
                    None => writeln!(f, "(no enemy in sight)")?,
                }

                writeln!(f, "---")?;
                for line in self.log.iter() {
                    writeln!(f, "  {}", line)?;
                }
                writeln!(f, "---")?;

                for (i, spell) in self.spells.iter().enumerate() {
                    let effect = match (spell.damage, spell.heal) {
                        (Some(d), Some(h)) => format!("dmg {} heal {}", d, h),
                        (Some(d), None) => format!("dmg {}", d),
                        (None, Some(h)) => format!("heal {}", h),
                        (None, None) => String::new(),
                    };
                    let marker = if spell.castable { " " } else { "x" };
                    writeln!(
                        f,
                        " {}{}. {} ({} | mana {})",
                        marker,
                        i + 1,
                        spell.name,
                        effect,
                        spell.mana_cost
                    )?;
                }
                writeln!(f, "   r. Restore Mana (+{} mana)", self.restore_amount)
            }
            Phase::Victory | Phase::Defeat => self.write_summary(f),
        }
    }
}

impl SessionView {
    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = if self.phase == Phase::Victory { "Victory" } else { "Defeated" };
        writeln!(f, "=== {} ===", banner)?;
        let house = self.house.map(House::name).unwrap_or("");
        writeln!(f, "You fought bravely, {} of {}!", self.name, house)?;
        writeln!(f, "Final Score: {}", self.score)?;
        writeln!(f, "Rounds Survived: {}", self.round)?;
        writeln!(f, "Type: reset")
    }
}
