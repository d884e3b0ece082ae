//! Adventure session management.
//!
//! `AdventureSession` owns the character state, the message log, and the
//! random source. Every line of player input is classified, refused if the
//! character is defeated and the action would change anything, dispatched
//! to its resolver, and followed by a level-up check.

use rand::SeedableRng;
use rand::rngs::StdRng;

use ht_core::{MessageLog, RandomSource, Reply, SessionMode};

use crate::activity::{self, Activity};
use crate::classify::{Action, OPENING_CHOICES, classify};
use crate::combat;
use crate::config::AdventureConfig;
use crate::error::{AdventureError, AdventureResult};
use crate::explore;
use crate::inventory::{describe_inventory, use_item};
use crate::narrative::{general_reply, opening_scene, status_sheet};
use crate::progression::apply_level_ups;
use crate::snapshot::Snapshot;
use crate::state::AdventureState;

/// Suggestions offered once the adventure has ended.
pub const DEFEAT_CHOICES: &[&str] = &["Check status", "Check inventory"];

/// An interactive adventure session.
pub struct AdventureSession<R = StdRng> {
    config: AdventureConfig,
    state: AdventureState,
    log: MessageLog,
    rng: R,
}

impl AdventureSession<StdRng> {
    /// Create a session with a seeded (or OS-seeded) `StdRng`.
    pub fn new(config: AdventureConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> AdventureSession<R> {
    /// Create a session drawing from the given random source.
    pub fn with_rng(config: AdventureConfig, rng: R) -> Self {
        let mut state = AdventureState::new(&config.player_name, config.genre);
        state.required_activities_for_readiness = config.required_activities;

        let mut log = MessageLog::new();
        log.narrator(opening_scene(&state.player_name, state.genre));

        tracing::info!(
            session = %state.session_id,
            player = %state.player_name,
            genre = %state.genre,
            "adventure started"
        );

        Self {
            config,
            state,
            log,
            rng,
        }
    }

    /// The character state.
    pub fn state(&self) -> &AdventureState {
        &self.state
    }

    /// The message log.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The configuration this session was started with.
    pub fn config(&self) -> &AdventureConfig {
        &self.config
    }

    /// The opening scene with its suggestions.
    pub fn opening(&self) -> Reply {
        Reply::line(opening_scene(&self.state.player_name, self.state.genre))
            .with_choices(OPENING_CHOICES)
    }

    /// A display snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Link that starts a fresh adventure with the same name and genre.
    pub fn new_session_link(&self) -> String {
        self.config
            .launch_params()
            .setup_link(SessionMode::Adventure)
    }

    /// Process a line of player input.
    ///
    /// Blank input is ignored and yields an empty reply.
    pub fn process(&mut self, input: &str) -> AdventureResult<Reply> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Reply::default());
        }

        let action = classify(trimmed);
        self.guard(action.allowed_after_defeat(), action.verb())?;
        self.log.player(trimmed);
        tracing::debug!(%action, "dispatching");

        let content = self.state.content();
        let state = &mut self.state;
        let rng = &mut self.rng;
        let mut lines = match action {
            Action::Attack => combat::attack(state, content, rng),
            Action::Flee => combat::flee(state),
            Action::Explore => explore::explore(state, content, rng),
            Action::Rest => explore::rest(state, content, rng),
            Action::Move => explore::travel(state, content, rng),
            Action::Inventory => vec![describe_inventory(state)],
            Action::UseItem => vec![use_item(state, trimmed)],
            Action::Status => vec![status_sheet(state)],
            Action::General => vec![general_reply(state, content, rng)],
        };
        lines.extend(apply_level_ups(state, rng));

        let choices = if self.state.game_over {
            DEFEAT_CHOICES
        } else {
            action.choices()
        };
        Ok(self.respond(lines).with_choices(choices))
    }

    /// Run a side activity.
    pub fn perform(&mut self, activity: Activity) -> AdventureResult<Reply> {
        self.guard(false, activity.verb())?;
        self.log.player(activity.to_string());
        let lines = activity::perform(&mut self.state, activity, &mut self.rng);
        Ok(self.respond(lines))
    }

    fn guard(&self, allowed_after_defeat: bool, verb: &'static str) -> AdventureResult<()> {
        if self.state.game_over && !allowed_after_defeat {
            return Err(AdventureError::Defeated { action: verb });
        }
        Ok(())
    }

    fn respond(&mut self, lines: Vec<String>) -> Reply {
        for line in &lines {
            self.log.narrator(line.as_str());
        }
        Reply::new(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Enemy;
    use ht_core::{Genre, ScriptedSource, Sender};

    fn scripted(values: &[f64]) -> AdventureSession<ScriptedSource> {
        AdventureSession::with_rng(
            AdventureConfig::default().with_name("Ari"),
            ScriptedSource::new(values.iter().copied()),
        )
    }

    #[test]
    fn create_session() {
        let s = AdventureSession::new(AdventureConfig::default().with_seed(1));
        assert_eq!(s.state().level, 1);
        assert_eq!(s.state().hp, 100);
        assert_eq!(s.log().len(), 1);
        assert!(s.opening().text().starts_with("Welcome, Adventurer!"));
        assert_eq!(s.opening().choices.len(), 3);
    }

    #[test]
    fn seeded_sessions_agree() {
        let cfg = AdventureConfig::default().with_seed(42);
        let mut a = AdventureSession::new(cfg.clone());
        let mut b = AdventureSession::new(cfg);
        for input in ["explore", "attack", "attack", "move on", "rest"] {
            assert_eq!(a.process(input).unwrap(), b.process(input).unwrap());
        }
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = scripted(&[0.0]);
        assert!(s.process("   ").unwrap().is_empty());
        assert_eq!(s.log().len(), 1);
    }

    #[test]
    fn process_logs_both_sides() {
        let mut s = scripted(&[0.0]);
        let reply = s.process("check status").unwrap();
        assert!(reply.text().starts_with("Character Status:"));
        let transcript = s.log().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].sender, Sender::Player);
        assert_eq!(transcript[1].text, "check status");
        assert_eq!(transcript[2].sender, Sender::Narrator);
    }

    #[test]
    fn choices_follow_action() {
        let mut s = scripted(&[0.0]);
        let reply = s.process("attack").unwrap();
        assert_eq!(reply.choices[0], "Attack again");
        let reply = s.process("flee").unwrap();
        assert!(reply.text().contains("slip away"));
    }

    #[test]
    fn defeat_blocks_mutating_actions() {
        let mut s = scripted(&[0.0]);
        s.state.hp = 1;
        s.state.enemy = Some(Enemy::from_template(&s.state.content().regular_enemies[0]));
        s.state.enemy.as_mut().unwrap().hp = 500;
        let reply = s.process("attack").unwrap();
        assert!(s.state().game_over);
        assert_eq!(reply.choices, DEFEAT_CHOICES);

        let err = s.process("explore").unwrap_err();
        assert_eq!(err, AdventureError::Defeated { action: "explore" });
        assert_eq!(err.to_string(), "You cannot explore while defeated.");
        assert!(s.process("hello").is_err());
        assert_eq!(
            s.perform(Activity::Job).unwrap_err().to_string(),
            "You cannot do jobs while defeated."
        );

        assert!(s.process("inventory").is_ok());
        assert!(s.process("status").is_ok());
    }

    #[test]
    fn activities_run_through_session() {
        let mut s = AdventureSession::with_rng(
            AdventureConfig::default().with_required_activities(1),
            ScriptedSource::constant(0.9),
        );
        let reply = s.perform(Activity::Hunt).unwrap();
        assert!(reply.text().contains("Activity progress: 1/1"));
        assert!(s.state().ready_for_battle);
    }

    #[test]
    fn use_item_reads_full_input() {
        let mut s = scripted(&[0.0]);
        let reply = s.process("use the torch").unwrap();
        assert_eq!(reply.text(), "You use the Torch. It serves its purpose well.");
    }

    #[test]
    fn new_session_link_carries_name_and_genre() {
        let s = AdventureSession::new(
            AdventureConfig::default()
                .with_seed(3)
                .with_name("Ari Vale")
                .with_genre(Genre::SciFi),
        );
        assert_eq!(s.new_session_link(), "/game-setup?name=Ari+Vale&genre=sci-fi");
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut s = scripted(&[0.0]);
        s.process("attack").unwrap();
        assert_eq!(s.snapshot().enemy, "Goblin (Level 1)");
    }
}
