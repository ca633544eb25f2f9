//! The interactive command session.
//!
//! A line-oriented loop over stdin: each command runs to completion before
//! the next is read, whether the input is a terminal or a piped script.
//! All state lives in the form plus the last displayed report; rendering is
//! a pure projection of that state.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use caltrack::{BalanceLabel, CalorieForm, Category, Report};

const HELP: &str = "\
Commands:
  add <category> <name> <calories>   add an entry (breakfast, lunch, dinner, snacks, exercise)
  budget <value>                     set the calorie budget
  show                               print the current form
  calc                               compute the surplus/deficit report (aliases: total, submit)
  clear                              reset the form and drop the report
  help                               show this help
  quit                               end the session (alias: exit)";

/// One interactive tracking session.
pub struct Session {
    form: CalorieForm,
    last_report: Option<Report>,
    json: bool,
}

impl Session {
    pub fn new(form: CalorieForm, json: bool) -> Self {
        Self {
            form,
            last_report: None,
            json,
        }
    }

    /// Run the session until the input ends or a quit command.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if !self.handle(line.trim(), &mut out)? {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line. Returns false when the session should end.
    fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = words.first() else {
            return Ok(true);
        };

        match command.to_lowercase().as_str() {
            "add" => self.cmd_add(&words[1..], out)?,
            "budget" => self.cmd_budget(&words[1..], out)?,
            "show" => self.cmd_show(out)?,
            "calc" | "total" | "submit" => self.cmd_calc(out)?,
            "clear" => self.cmd_clear(out)?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(false),
            other => eprintln!("Unknown command: {other} (try 'help')"),
        }
        Ok(true)
    }

    fn cmd_add(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        if args.len() < 3 {
            eprintln!("Usage: add <category> <name> <calories>");
            return Ok(());
        }

        let Some(category) = Category::parse(args[0]) else {
            eprintln!(
                "Unknown category: {} (expected breakfast, lunch, dinner, snacks, or exercise)",
                args[0]
            );
            return Ok(());
        };

        // The last word is the calorie value; everything between is the name.
        let calories = args[args.len() - 1];
        let name = args[1..args.len() - 1].join(" ");

        let position = self.form.add_entry(category, name.clone(), calories);
        writeln!(out, "Added {category} entry {position}: {name} ({calories})")?;
        Ok(())
    }

    fn cmd_budget(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let Some(&value) = args.first() else {
            eprintln!("Usage: budget <value>");
            return Ok(());
        };
        self.form.set_budget(value);
        writeln!(out, "Budget set to {value}")?;
        Ok(())
    }

    fn cmd_show(&self, out: &mut impl Write) -> Result<()> {
        match self.form.budget_raw() {
            Some(budget) => writeln!(out, "Budget: {budget}")?,
            None => writeln!(out, "Budget: (unset)")?,
        }
        for category in Category::ALL {
            let entries = self.form.entries(category);
            if entries.is_empty() {
                continue;
            }
            writeln!(out, "{category}:")?;
            for (i, entry) in entries.iter().enumerate() {
                writeln!(out, "  {}. {} ({})", i + 1, entry.name, entry.calories)?;
            }
        }
        Ok(())
    }

    fn cmd_calc(&mut self, out: &mut impl Write) -> Result<()> {
        match Report::from_form(&self.form) {
            Ok(report) => {
                if self.json {
                    writeln!(out, "{}", report.to_json())?;
                } else {
                    self.render(&report, out)?;
                }
                self.last_report = Some(report);
            }
            // The previously displayed report stays untouched.
            Err(err) => eprintln!("{err}"),
        }
        Ok(())
    }

    fn render(&self, report: &Report, out: &mut impl Write) -> Result<()> {
        let headline = format!("{} Calorie {}", report.displayed(), report.label());
        let headline = match report.label() {
            BalanceLabel::Surplus => headline.red(),
            BalanceLabel::Deficit => headline.green(),
        };
        writeln!(out, "{headline}")?;
        writeln!(out)?;
        writeln!(out, "{} Calories Budgeted", report.budget)?;
        writeln!(out, "{} Calories Consumed", report.consumed)?;
        writeln!(out, "{} Calories Burned", report.burned)?;
        Ok(())
    }

    fn cmd_clear(&mut self, out: &mut impl Write) -> Result<()> {
        self.form.clear();
        self.last_report = None;
        writeln!(out, "Cleared.")?;
        Ok(())
    }
}
