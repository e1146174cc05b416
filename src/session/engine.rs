//! The duel session.

use im::Vector;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::{Bestiary, Enemy, Grimoire, SpellDefinition};
use crate::core::{Action, ActionRecord, BattleLog, DuelConfig, GameRng, GameRngState, House, Phase, Player};
use crate::error::{DuelError, DuelResult};
use crate::schedule::{Continuation, Scheduled, SessionEpoch, Timeline};

use super::outcome::{CastOutcome, DuelEvent, DuelEvents};

/// One player's duel against an endless line of enemies.
///
/// Player actions resolve immediately and schedule the enemy's answer on
/// the session's timeline. Nothing on the timeline runs until the session
/// is driven with [`Session::advance`] or [`Session::settle`].
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use wizard_duel::core::{House, Phase};
/// use wizard_duel::session::{CastOutcome, Session};
///
/// let mut session = Session::with_seed(7);
/// session.start_game("Harry", Some(House::Gryffindor)).unwrap();
/// assert_eq!(session.phase(), Phase::Playing);
///
/// let outcome = session.cast_spell("Expelliarmus").unwrap();
/// assert!(outcome.was_cast());
/// assert_eq!(session.player().mana(), 85);
///
/// // The enemy answers a second later.
/// session.advance(Duration::from_millis(1000));
/// assert!(session.player().hp() < 100);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: DuelConfig,
    grimoire: Grimoire,
    bestiary: Bestiary,
    rng: GameRng,

    phase: Phase,
    player: Player,
    enemy: Option<Enemy>,
    log: BattleLog,
    history: Vector<ActionRecord>,

    timeline: Timeline<Continuation>,
    epoch: SessionEpoch,
    /// Number of enemies spawned this epoch; identifies the current enemy.
    spawns: u32,
    sequence: u32,
}

impl Session {
    /// Create a session from a config.
    ///
    /// Fails if the config is invalid or a catalog has duplicate names.
    pub fn new(config: DuelConfig) -> DuelResult<Self> {
        config.validate()?;
        let grimoire = Grimoire::from_entries(config.spells.iter().cloned())?;
        let bestiary = Bestiary::from_entries(config.enemies.iter().cloned())?;
        Ok(Self::assemble(config, grimoire, bestiary))
    }

    /// Create a standard session with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::assemble(
            DuelConfig::default().with_seed(seed),
            Grimoire::standard(),
            Bestiary::standard(),
        )
    }

    fn assemble(config: DuelConfig, grimoire: Grimoire, bestiary: Bestiary) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            player: Player::new(config.max_hp, config.max_mana),
            log: BattleLog::new(config.log_capacity),
            phase: Phase::Start,
            enemy: None,
            history: Vector::new(),
            timeline: Timeline::new(),
            epoch: SessionEpoch::default(),
            spawns: 0,
            sequence: 0,
            config,
            grimoire,
            bestiary,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The enemy on the field, if any.
    ///
    /// `None` before the game starts, between a defeat reward and the next
    /// spawn, and after the player falls.
    #[must_use]
    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    #[must_use]
    pub fn battle_log(&self) -> &BattleLog {
        &self.log
    }

    /// Accepted actions since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    #[must_use]
    pub fn grimoire(&self) -> &Grimoire {
        &self.grimoire
    }

    #[must_use]
    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    /// Spells the player can currently pay for, in display order.
    pub fn castable_spells(&self) -> impl Iterator<Item = &SpellDefinition> {
        self.grimoire.castable(self.player.mana())
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.timeline.now()
    }

    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    /// Continuations still waiting that belong to the current game.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timeline.iter().filter(|t| t.epoch == self.epoch).count()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending() > 0
    }

    /// Time until the next continuation comes due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.timeline.next_due_in()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Player actions ===

    /// Begin the duel as `name` of `house`.
    ///
    /// A blank name or missing house leaves the session untouched.
    pub fn start_game(&mut self, name: &str, house: Option<House>) -> DuelResult<()> {
        self.ensure_phase(Phase::Start, "start a duel")?;

        let name = name.trim();
        let house = match house {
            Some(house) if !name.is_empty() => house,
            _ => return Err(DuelError::IncompleteProfile),
        };

        self.player.name = name.to_string();
        self.player.house = Some(house);
        self.phase = Phase::Playing;
        self.log.clear();
        info!(wizard = %name, %house, "duel started");

        self.record(Action::Start {
            name: name.to_string(),
            house,
        });
        self.spawn_enemy();
        Ok(())
    }

    /// Put a fresh enemy, chosen uniformly from the bestiary, on the field.
    ///
    /// Only reached from `start_game` and the respawn continuation, so a
    /// pending defeat reward always pays out before its enemy is replaced.
    fn spawn_enemy(&mut self) {
        let Some(species) = self.rng.choose(self.bestiary.as_slice()) else {
            return;
        };
        let enemy = Enemy::spawn(species);
        self.spawns += 1;

        debug!(enemy = enemy.name(), spawn = self.spawns, "enemy spawned");
        self.log.push(format!("A wild {} appears!", enemy.name()));
        self.enemy = Some(enemy);
    }

    /// Cast a spell by name.
    ///
    /// Short mana is a soft failure: it logs and reports
    /// [`CastOutcome::NotEnoughMana`] without touching anything else.
    pub fn cast_spell(&mut self, spell_name: &str) -> DuelResult<CastOutcome> {
        self.ensure_phase(Phase::Playing, "cast a spell")?;
        let spell = self
            .grimoire
            .get(spell_name)
            .cloned()
            .ok_or_else(|| DuelError::UnknownSpell(spell_name.to_string()))?;
        self.ensure_active_enemy()?;

        if !self.player.spend_mana(spell.mana_cost) {
            debug!(spell = %spell.name, mana = self.player.mana(), "not enough mana");
            self.log.push("Not enough mana!");
            return Ok(CastOutcome::NotEnoughMana {
                have: self.player.mana(),
                need: spell.mana_cost,
            });
        }
        self.record(Action::Cast {
            spell: spell.name.clone(),
        });

        let mut enemy_hp = self.enemy.as_ref().map_or(0, Enemy::current_hp);
        if let Some(damage) = spell.damage {
            if let Some(enemy) = self.enemy.as_mut() {
                enemy_hp = enemy.take_damage(damage);
            }
            self.log
                .push(format!("You cast {}! {} damage dealt.", spell.name, damage));

            if enemy_hp == 0 {
                debug!(spell = %spell.name, spawn = self.spawns, "killing blow");
                self.schedule(
                    self.config.defeat_reward_delay(),
                    Continuation::EnemyDefeated { spawn: self.spawns },
                );
                return Ok(CastOutcome::EnemyDefeated { damage });
            }
        }

        let healed = spell.heal.map(|heal| {
            let gained = self.player.heal(heal);
            self.log
                .push(format!("You cast {}! Restored {} HP.", spell.name, heal));
            gained
        });

        self.schedule_enemy_attack();
        Ok(CastOutcome::Resolved {
            damage: spell.damage,
            enemy_hp,
            healed,
        })
    }

    /// Channel mana instead of casting. The enemy still answers.
    ///
    /// Returns the mana actually gained.
    pub fn restore_mana(&mut self) -> DuelResult<u32> {
        self.ensure_phase(Phase::Playing, "restore mana")?;
        self.ensure_active_enemy()?;

        let amount = self.config.restore_mana_amount;
        let gained = self.player.restore_mana(amount);
        self.log
            .push(format!("You focus your magic... +{} mana restored.", amount));
        self.record(Action::RestoreMana);

        self.schedule_enemy_attack();
        Ok(gained)
    }

    /// Return to the start screen with fresh stats.
    ///
    /// Continuations from the old game are removed from the timeline.
    pub fn reset_game(&mut self) {
        self.epoch = self.epoch.next();
        let epoch = self.epoch;
        self.timeline.retain(|t| t.epoch == epoch);
        self.player = Player::new(self.config.max_hp, self.config.max_mana);
        self.enemy = None;
        self.log.clear();
        self.history.clear();
        self.phase = Phase::Start;
        self.spawns = 0;
        self.sequence = 0;
        info!(epoch = %self.epoch, "session reset");
    }

    // === Driving time ===

    /// Move virtual time forward and run every continuation that comes due.
    pub fn advance(&mut self, elapsed: Duration) -> DuelEvents {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let target = self.timeline.now().saturating_add(elapsed_ms);

        let mut events = DuelEvents::new();
        while let Some(task) = self.timeline.pop_due(target) {
            self.run(task, &mut events);
        }
        self.timeline.advance_to(target);
        events
    }

    /// Run every pending continuation, jumping the clock to each due time.
    pub fn settle(&mut self) -> DuelEvents {
        let mut events = DuelEvents::new();
        while let Some(due) = self.timeline.next_due() {
            if let Some(task) = self.timeline.pop_due(due) {
                self.run(task, &mut events);
            }
        }
        events
    }

    fn run(&mut self, task: Scheduled<Continuation>, events: &mut DuelEvents) {
        if task.epoch != self.epoch {
            debug!(task = %task.payload, stale = %task.epoch, current = %self.epoch, "dropping continuation from before reset");
            return;
        }
        if self.phase != Phase::Playing {
            debug!(task = %task.payload, phase = %self.phase, "dropping continuation, duel is over");
            return;
        }

        match task.payload {
            Continuation::EnemyAttack { spawn } => self.enemy_attack(spawn, events),
            Continuation::EnemyDefeated { spawn } => self.enemy_defeated(spawn, events),
            Continuation::SpawnEnemy => {
                self.spawn_enemy();
                if let Some(enemy) = &self.enemy {
                    events.push(DuelEvent::EnemySpawned {
                        enemy: enemy.name().to_string(),
                        max_hp: enemy.max_hp(),
                    });
                }
            }
        }
    }

    fn enemy_attack(&mut self, spawn: u32, events: &mut DuelEvents) {
        let Some(enemy) = self.enemy.as_ref().filter(|e| !e.is_defeated()) else {
            debug!(spawn, "attacker already gone");
            return;
        };
        if spawn != self.spawns {
            debug!(spawn, current = self.spawns, "attacker already replaced");
            return;
        }

        let name = enemy.name().to_string();
        let damage = enemy.damage();
        let player_hp = self.player.take_damage(damage);
        self.log
            .push(format!("{} attacks! {} damage taken.", name, damage));
        events.push(DuelEvent::EnemyAttacked {
            enemy: name,
            damage,
            player_hp,
        });

        if player_hp == 0 {
            self.phase = Phase::Defeat;
            self.enemy = None;
            info!(score = self.player.score, round = self.player.round, "player defeated");
            events.push(DuelEvent::PlayerDefeated {
                score: self.player.score,
                round: self.player.round,
            });
        }
    }

    fn enemy_defeated(&mut self, spawn: u32, events: &mut DuelEvents) {
        if spawn != self.spawns {
            return;
        }
        let Some(enemy) = self.enemy.take() else {
            return;
        };

        self.player.score += self.config.defeat_score;
        self.log.push(format!(
            "{} defeated! +{} points",
            enemy.name(),
            self.config.defeat_score
        ));
        self.player.round += 1;
        self.player.restore_mana(self.config.defeat_mana_bonus);
        debug!(enemy = enemy.name(), score = self.player.score, round = self.player.round, "enemy defeated");
        events.push(DuelEvent::EnemyDefeated {
            enemy: enemy.name().to_string(),
            score: self.player.score,
            round: self.player.round,
        });

        let cleared = self.player.round - 1;
        if let Some(max_rounds) = self.config.max_rounds.filter(|&max| cleared >= max) {
            self.phase = Phase::Victory;
            self.log
                .push(format!("Victory! {} rounds cleared.", max_rounds));
            info!(score = self.player.score, rounds = cleared, "victory");
            events.push(DuelEvent::Victory {
                score: self.player.score,
                rounds: cleared,
            });
            return;
        }

        self.schedule(self.config.respawn_delay(), Continuation::SpawnEnemy);
    }

    // === Helpers ===

    fn ensure_phase(&self, wanted: Phase, action: &'static str) -> DuelResult<()> {
        if self.phase != wanted {
            return Err(DuelError::WrongPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn ensure_active_enemy(&self) -> DuelResult<()> {
        match &self.enemy {
            Some(enemy) if !enemy.is_defeated() => Ok(()),
            _ => Err(DuelError::NoActiveEnemy),
        }
    }

    fn schedule(&mut self, delay: Duration, continuation: Continuation) {
        self.timeline.schedule(delay, self.epoch, continuation);
    }

    fn schedule_enemy_attack(&mut self) {
        self.schedule(
            self.config.enemy_attack_delay(),
            Continuation::EnemyAttack { spawn: self.spawns },
        );
    }

    fn record(&mut self, action: Action) {
        let record = ActionRecord::new(action, self.player.round, self.sequence, self.timeline.now());
        self.sequence += 1;
        self.history.push_back(record);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_seed(DuelConfig::default().seed)
    }
}
