//! Match state: the turn loop, damage, and termination
//!
//! A `Match` exclusively owns both combatants and is the only thing that
//! mutates them. Positions never change after `Match::new`.

use std::io::Write;

use crate::ballistics::{BallisticsModel, ShotOutcome};
use crate::core::config::MatchConfig;
use crate::core::error::{BallerburgError, Result};
use crate::core::types::{Heading, Side};
use crate::game::combatant::Combatant;
use crate::game::input::TurnSource;
use crate::game::render::{format_coordinate, render_battlefield};
use crate::game::report::{
    EndReason, FinalHealth, MatchOutcome, MatchReport, TurnAction, TurnRecord,
};

pub const WELCOME_BANNER: &str = "Welcome to Ballerburg!";

/// A two-sided artillery duel
#[derive(Debug, Clone)]
pub struct Match {
    combatants: [Combatant; 2],
    /// Firing heading per side, fixed from the starting positions
    headings: [Heading; 2],
    model: BallisticsModel,
    hit_damage: i32,
    round: u32,
    turns: Vec<TurnRecord>,
}

impl Match {
    /// Set up both castles from a validated config
    pub fn new(config: &MatchConfig) -> Result<Self> {
        config.validate()?;

        let a = Combatant::new(
            config.player_a.clone(),
            config.position_a,
            config.initial_health,
        );
        let b = Combatant::new(
            config.player_b.clone(),
            config.position_b,
            config.initial_health,
        );
        let headings = [
            Heading::between(a.position, b.position),
            Heading::between(b.position, a.position),
        ];

        Ok(Self {
            combatants: [a, b],
            headings,
            model: BallisticsModel::new(config.gravity, config.hit_tolerance),
            hit_damage: config.hit_damage,
            round: 0,
            turns: Vec::new(),
        })
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    pub fn heading(&self, side: Side) -> Heading {
        self.headings[side.index()]
    }

    pub fn model(&self) -> &BallisticsModel {
        &self.model
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Write the battlefield to `out`
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let field = render_battlefield(self.combatant(Side::A), self.combatant(Side::B));
        out.write_all(field.as_bytes())?;
        Ok(())
    }

    /// Play rounds until a side falls or input runs out, then announce the winner
    ///
    /// A fires first each round. If A's shot brings B to zero, B does not
    /// fire. After the loop, A loses only if A's health is at or below zero;
    /// in every other case (including exhausted input) A is the winner.
    pub fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<MatchOutcome>
    where
        S: TurnSource + ?Sized,
        W: Write,
    {
        tracing::info!(
            a = %self.combatant(Side::A).name,
            b = %self.combatant(Side::B).name,
            "Match starting"
        );

        writeln!(out, "{}", WELCOME_BANNER)?;
        self.draw(out)?;

        let mut reason = EndReason::Defeat;
        while !self.combatant(Side::A).is_defeated() && !self.combatant(Side::B).is_defeated() {
            self.round += 1;

            if !self.take_turn(Side::A, source, out)? {
                reason = EndReason::InputExhausted;
                break;
            }
            self.draw(out)?;
            if self.combatant(Side::B).is_defeated() {
                break;
            }

            if !self.take_turn(Side::B, source, out)? {
                reason = EndReason::InputExhausted;
                break;
            }
            self.draw(out)?;
        }

        let winner = if self.combatant(Side::A).is_defeated() {
            Side::B
        } else {
            Side::A
        };
        writeln!(out, "{} wins!", self.combatant(winner).name)?;
        out.flush()?;

        tracing::info!(
            winner = %self.combatant(winner).name,
            ?reason,
            rounds = self.round,
            "Match over"
        );

        Ok(MatchOutcome { winner, reason })
    }

    /// Ask `shooter` for one shot and resolve it against the other side
    ///
    /// Returns `false` only when the input is exhausted. Malformed input
    /// forfeits the turn and returns `true` without touching either castle.
    pub fn take_turn<S, W>(&mut self, shooter: Side, source: &mut S, out: &mut W) -> Result<bool>
    where
        S: TurnSource + ?Sized,
        W: Write,
    {
        write!(
            out,
            "{}'s turn. Enter angle (degrees) and velocity: ",
            self.combatant(shooter).name
        )?;
        out.flush()?;

        let shot = match source.next_shot() {
            Ok(shot) => shot,
            Err(BallerburgError::InputExhausted) => {
                tracing::warn!(shooter = ?shooter, "Input exhausted, ending match");
                writeln!(out, "\nInput ended. Exiting game.")?;
                return Ok(false);
            }
            Err(BallerburgError::MalformedTurnInput(reason)) => {
                tracing::warn!(shooter = ?shooter, %reason, "Malformed turn input, turn forfeited");
                writeln!(out, "Invalid input. Skipping turn.")?;
                self.record(shooter, TurnAction::Forfeited);
                return Ok(true);
            }
            Err(e) => return Err(e),
        };

        let target = shooter.opponent();
        let heading = self.heading(shooter);
        let target_position = self.combatant(target).position;
        let impact = self.model.compute_impact(
            self.combatant(shooter).position,
            heading,
            shot.angle_deg,
            shot.velocity,
        );
        let outcome = self.model.classify_shot(impact, target_position, heading);

        tracing::debug!(
            shooter = ?shooter,
            angle = shot.angle_deg,
            velocity = shot.velocity,
            impact,
            ?outcome,
            "Shot resolved"
        );

        match outcome {
            ShotOutcome::Hit => {
                let damage = self.hit_damage;
                let castle = self.combatant_mut(target);
                castle.take_damage(damage);
                writeln!(out, "Hit! {} health: {}", castle.name, castle.health)?;
            }
            ShotOutcome::Short => {
                writeln!(out, "Shot fell short at x={}", format_coordinate(impact))?
            }
            ShotOutcome::Overshot => {
                writeln!(out, "Shot overshot to x={}", format_coordinate(impact))?
            }
        }

        let target_health = self.combatant(target).health;
        self.record(
            shooter,
            TurnAction::Fired {
                shot,
                impact,
                outcome,
                target_health,
            },
        );
        Ok(true)
    }

    fn record(&mut self, shooter: Side, action: TurnAction) {
        self.turns.push(TurnRecord {
            round: self.round,
            shooter,
            action,
        });
    }

    /// Summarize the match after `run`
    pub fn report(&self, outcome: &MatchOutcome) -> MatchReport {
        MatchReport {
            winner: self.combatant(outcome.winner).name.clone(),
            winner_side: outcome.winner,
            reason: outcome.reason,
            rounds: self.round,
            final_health: FinalHealth {
                a: self.combatant(Side::A).health,
                b: self.combatant(Side::B).health,
            },
            turns: self.turns.clone(),
        }
    }
}
