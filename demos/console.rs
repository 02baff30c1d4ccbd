//! Console blackjack demo.
//!
//! Set `RUST_LOG=bjsolo=debug` to watch the engine's decisions.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{DecisionSource, Hand, Move, Outcome, RoundError, Table, TableOptions, parse_yes_no};
use tracing_subscriber::EnvFilter;

/// Reads decisions from stdin, showing the table before each prompt.
struct Console<R> {
    input: R,
    quit: bool,
}

impl<R: BufRead> Console<R> {
    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.quit = true;
                None
            }
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }

    fn prompt_bet(&mut self, max: usize) -> Option<usize> {
        loop {
            let input = self.prompt_line(&format!("Bet amount (1-{max}, 0 to quit): "))?;
            match input.parse::<usize>() {
                Ok(value) if value <= max => return Some(value),
                _ => println!("Please enter a number between 0 and {max}."),
            }
        }
    }
}

impl<R: BufRead> DecisionSource for Console<R> {
    fn next_move(&mut self, hand: &Hand, dealer: &Hand) -> Option<Move> {
        if self.quit {
            // Input is gone; stand so the round can finish.
            return Some(Move::Stand);
        }
        println!("Dealer: {}", dealer.with_hole_hidden());
        println!("You:    {hand}");
        let input = self.prompt_line("[h]it or [s]tand? ")?;
        Move::parse(&input)
    }

    fn take_insurance(&mut self, hand: &Hand, dealer: &Hand) -> Option<bool> {
        if self.quit {
            return Some(false);
        }
        println!("Dealer: {}", dealer.with_hole_hidden());
        println!("You:    {hand}");
        let input = self.prompt_line("Dealer shows an Ace. Take insurance? (y/n): ")?;
        parse_yes_no(&input)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack console demo");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);
    let mut console = Console {
        input: io::stdin().lock(),
        quit: false,
    };

    while !table.is_broke() {
        println!("\nPot: {}", table.pot());

        let Some(bet) = console.prompt_bet(table.max_bet()) else {
            break;
        };
        if bet == 0 {
            break;
        }

        let result = match table.play_round(bet, &mut console) {
            Ok(result) => result,
            Err(RoundError::Bet(err)) => {
                println!("Bet error: {err}");
                continue;
            }
            Err(RoundError::Deck(err)) => {
                // A single round never runs the deck dry.
                panic!("deck invariant violated: {err}");
            }
        };

        let report = &result.report;
        if report.ended_early {
            println!("Dealer has blackjack.");
        }
        println!("Dealer: {}", report.dealer);
        println!("You:    {}", report.player);
        if result.insurance_bet > 0 {
            println!(
                "Insurance bet {} paid {}",
                result.insurance_bet, result.insurance_payout
            );
        }
        match report.outcome {
            Outcome::PlayerWins if report.player.is_blackjack() => {
                println!("Blackjack! You win {}.", result.payout - result.bet);
            }
            Outcome::PlayerWins => println!("You win {}.", result.payout - result.bet),
            Outcome::DealerWins => println!("You lose {}.", result.bet),
            Outcome::Push => println!("Push."),
        }
    }

    println!("\nFinal pot: {}", table.pot());
}
