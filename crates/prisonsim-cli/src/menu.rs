//! Text menu over any line reader and writer.

use std::io::{BufRead, Write};

use anyhow::Context;
use prisonsim_logic::intake::{AssignOutcome, IntakeReport, PlacementOutcome};
use prisonsim_logic::prison::Prison;
use prisonsim_logic::random::RandomSource;
use tracing::warn;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Choice(u32),
    Invalid,
    Eof,
}

/// Whether the caller should keep looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

struct Session<'a, G, R, W> {
    prison: &'a mut Prison,
    rng: &'a mut G,
    input: R,
    out: W,
}

/// Drive the main menu until the user exits or input ends.
pub fn run<G, R, W>(prison: &mut Prison, rng: &mut G, input: R, out: W) -> anyhow::Result<()>
where
    G: RandomSource,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        prison,
        rng,
        input,
        out,
    };
    while session.main_menu()? == Flow::Continue {}
    session.out.flush().context("failed to flush output")?;
    Ok(())
}

impl<G, R, W> Session<'_, G, R, W>
where
    G: RandomSource,
    R: BufRead,
    W: Write,
{
    fn read_input(&mut self) -> anyhow::Result<Input> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read menu input")?;
        if read == 0 {
            return Ok(Input::Eof);
        }
        Ok(line
            .trim()
            .parse::<u32>()
            .map_or(Input::Invalid, Input::Choice))
    }

    fn main_menu(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Prison Simulator ---")?;
        writeln!(self.out, "1. How many prisoners can we contain?")?;
        writeln!(self.out, "2. How many prisoners do we have?")?;
        writeln!(self.out, "3. How many prisoners are in each prison block?")?;
        writeln!(self.out, "4. How many incoming prisoners do we have?")?;
        writeln!(self.out, "5. Place the incoming prisoners")?;
        writeln!(self.out, "6. Riot Options")?;
        writeln!(self.out, "7. Exit")?;

        match self.read_input()? {
            Input::Choice(1) => {
                writeln!(self.out, "Maximum capacity: {}", self.prison.max_capacity())?;
            }
            Input::Choice(2) => {
                writeln!(self.out, "Total prisoners: {}", self.prison.total_population())?;
            }
            Input::Choice(3) => self.show_blocks()?,
            Input::Choice(4) => {
                if self.prison.is_intake_assigned() {
                    writeln!(self.out, "All incoming prisoners have been assigned.")?;
                } else {
                    let incoming = self.prison.incoming_count(self.rng);
                    writeln!(self.out, "Incoming prisoners: {incoming}")?;
                }
            }
            Input::Choice(5) => self.place_incoming()?,
            Input::Choice(6) => return self.riot_menu(),
            Input::Choice(7) => {
                writeln!(self.out, "Exiting...")?;
                return Ok(Flow::Exit);
            }
            Input::Eof => return Ok(Flow::Exit),
            Input::Choice(_) | Input::Invalid => {
                writeln!(self.out, "Invalid choice. Try again.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_blocks(&mut self) -> anyhow::Result<()> {
        let report = self.prison.block_counts();
        for unknown in &report.unknown_blocks {
            writeln!(
                self.out,
                "Unknown block for prisoner {}: {:?}",
                unknown.prisoner, unknown.block_name
            )?;
        }
        for (block, count) in report.occupancy.iter() {
            writeln!(self.out, "Block {block}: {count} prisoners")?;
        }
        Ok(())
    }

    fn place_incoming(&mut self) -> anyhow::Result<()> {
        let incoming = self.prison.incoming_count(self.rng);
        if !self.prison.is_intake_assigned() {
            writeln!(self.out, "Assigning {incoming} new prisoners...")?;
        }
        match self
            .prison
            .place_incoming(self.rng)
            .context("intake placement hit an invalid risk level")?
        {
            AssignOutcome::Completed(report) => {
                self.print_intake(&report)?;
                writeln!(self.out)?;
                writeln!(self.out, "Total prisoners: {}", report.population_after)?;
                writeln!(self.out)?;
                self.show_blocks()?;
            }
            AssignOutcome::AlreadyAssigned => {
                writeln!(self.out, "All incoming prisoners have already been assigned.")?;
            }
        }
        Ok(())
    }

    fn print_intake(&mut self, report: &IntakeReport) -> anyhow::Result<()> {
        for arrival in &report.arrivals {
            match arrival.outcome {
                PlacementOutcome::Placed { block, cell, .. }
                | PlacementOutcome::RiskMismatch { block, cell, .. } => {
                    writeln!(
                        self.out,
                        "{} assigned to Block {}, Cell {} - (Risk Level: {} for crime of: {})",
                        arrival.name, block, cell, arrival.risk_level, arrival.crime
                    )?;
                    if matches!(arrival.outcome, PlacementOutcome::RiskMismatch { .. }) {
                        writeln!(
                            self.out,
                            "WARNING: {} reassigned to Block {} (does not match risk level)",
                            arrival.name, block
                        )?;
                    }
                }
                PlacementOutcome::PlacementFailure => {
                    writeln!(
                        self.out,
                        "ERROR: No available cells for {}. Risk level ({}) too low for available blocks, find local prison for transfer.",
                        arrival.name, arrival.risk_level
                    )?;
                }
            }
        }
        Ok(())
    }

    fn riot_menu(&mut self) -> anyhow::Result<Flow> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "--- Riot Options ---")?;
            writeln!(self.out, "1. How many days has it been since the last riot?")?;
            writeln!(
                self.out,
                "2. What was the combined prisoner risk level of the last riot?"
            )?;
            writeln!(self.out, "3. How many guards were needed for the last riot?")?;
            writeln!(self.out, "4. Is a riot in progress?")?;
            writeln!(self.out, "5. Back")?;

            let last = self.prison.last_riot();
            match self.read_input()? {
                Input::Choice(1) => {
                    writeln!(self.out, "Days since last riot: {}", last.days_since)?;
                }
                Input::Choice(2) => {
                    writeln!(self.out, "Combined risk level of last riot: {}", last.risk_level)?;
                }
                Input::Choice(3) => {
                    writeln!(
                        self.out,
                        "Guards needed for last riot: {}",
                        self.prison.guards_needed(last.risk_level)
                    )?;
                }
                Input::Choice(4) => {
                    if self.riot_in_progress()? == Flow::Exit {
                        return Ok(Flow::Exit);
                    }
                }
                Input::Choice(5) => return Ok(Flow::Continue),
                Input::Eof => return Ok(Flow::Exit),
                Input::Choice(_) | Input::Invalid => {
                    writeln!(self.out, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn riot_in_progress(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.out, "Is a riot in progress?")?;
        writeln!(self.out, "1. Yes")?;
        writeln!(self.out, "2. No")?;
        match self.read_input()? {
            Input::Choice(1) => {
                let current = self.prison.current_riot();
                warn!(
                    risk_level = current.risk_level,
                    guards = current.guards_needed,
                    "riot reported in progress"
                );
                writeln!(self.out, "Current prison risk level: {}", current.risk_level)?;
                writeln!(
                    self.out,
                    "Guards needed to control the riot: {}",
                    current.guards_needed
                )?;
            }
            Input::Choice(2) => writeln!(self.out, "No riot is currently in progress.")?,
            Input::Eof => return Ok(Flow::Exit),
            Input::Choice(_) | Input::Invalid => {
                writeln!(self.out, "Invalid choice. Try again.")?;
            }
        }
        Ok(Flow::Continue)
    }
}
