use super::query::Query;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::evaluation::classify;
use crate::evaluation::level::Level;
use crate::evaluation::validate;
use crate::evaluation::verdict;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

/// Interactive console over the engine.
///
/// The console plays orchestrator: it owns the current level and passes it
/// into every engine call. Cards inside one argument are separated by
/// commas, e.g. `validate 9d,9c --table 6s,6h --hand 9d,9c,3s`.
pub struct CLI {
    level: Level,
}

impl Default for CLI {
    fn default() -> Self {
        Self::new()
    }
}

impl CLI {
    pub fn new() -> Self {
        Self {
            level: crate::level(),
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("launching console at level {}", self.level);
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "quit" => break,
                "exit" => break,
                "" => continue,
                line => match self.handle(line) {
                    Err(e) => eprintln!("handle error: {}", e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    fn handle(&mut self, input: &str) -> anyhow::Result<()> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Classify { cards, json } => {
                let hand = Self::parse(&cards.join(" "))?;
                let combo = classify(hand, self.level);
                if json {
                    println!("{}", serde_json::to_string(&combo)?);
                } else {
                    match combo {
                        Some(combo) => println!("{:<32} {}", hand.to_string(), combo),
                        None => println!("{:<32} {}", hand.to_string(), "invalid".red()),
                    }
                }
                Ok(())
            }
            Query::Compare {
                challenger,
                incumbent,
            } => {
                let ours = classify(Self::parse(&challenger)?, self.level)
                    .ok_or_else(|| anyhow::anyhow!("challenger is not a combination"))?;
                let theirs = classify(Self::parse(&incumbent)?, self.level)
                    .ok_or_else(|| anyhow::anyhow!("incumbent is not a combination"))?;
                match verdict(&ours, &theirs) {
                    Ok(()) => println!("{} {} beats {}", "YES".green(), ours, theirs),
                    Err(reason) => println!("{} {}", "NO ".red(), reason),
                }
                Ok(())
            }
            Query::Validate { play, table, hand } => {
                let play = Self::parse(&play)?;
                let table = table.as_deref().map(Self::parse).transpose()?;
                let hand = hand.as_deref().map(Self::parse).transpose()?.unwrap_or(play);
                if !hand.covers(&play) {
                    anyhow::bail!("{} is not held in {}", play, hand);
                }
                match validate(play, table, hand, self.level) {
                    Ok(combo) => println!("{} {}", "ACCEPT".green(), combo),
                    Err(rejection) => println!("{} {}", "REJECT".red(), rejection),
                }
                Ok(())
            }
            Query::Deal => {
                for (seat, hand) in Deck::new().deal().iter().enumerate() {
                    println!("{:>2}. {}", seat + 1, hand);
                }
                Ok(())
            }
            Query::Level { rank } => {
                if let Some(rank) = rank {
                    self.level = Level::try_from(rank.as_str()).map_err(anyhow::Error::msg)?;
                    log::info!("level set to {}", self.level);
                }
                println!("level {}", self.level);
                Ok(())
            }
        }
    }

    fn parse(cards: &str) -> anyhow::Result<Hand> {
        Hand::try_from(cards.replace(',', " ").as_str()).map_err(anyhow::Error::msg)
    }
}
