use core::fmt;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Move, Player};

struct CardList<'a>(&'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// A terminal player that prompts on `output` and reads answers from `input`.
///
/// Moves are typed as `h` (hit), `s` (stand), `d` (double) or `p` (split).
/// Invalid answers are asked again. When `input` is exhausted the player
/// stands on every hand and bets 0, which ends the session at the next bet.
#[derive(Debug)]
pub struct Human<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Human<R, W> {
    /// Creates a human player over the given input and output streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the player and returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self
            .output
            .write_fmt(args)
            .and_then(|()| self.output.flush())
        {
            warn!(%err, "failed to write to player output");
        }
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_owned()),
            Err(err) => {
                warn!(%err, "failed to read player input");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for Human<R, W> {
    fn bet(&mut self, shuffled: bool) -> usize {
        if shuffled {
            self.say(format_args!("The deck was shuffled just now\n"));
        }

        loop {
            self.say(format_args!("How much would you like to bet?\n"));
            let Some(line) = self.read_line() else {
                return 0;
            };
            match line.parse() {
                Ok(bet) => return bet,
                Err(_) => self.say(format_args!("Invalid bet: {line}\n")),
            }
        }
    }

    fn play(&mut self, hand: &[Card], dealer_up: Card) -> Move {
        loop {
            self.say(format_args!("Player: {}\n", CardList(hand)));
            self.say(format_args!("Dealer: {dealer_up}\n"));
            self.say(format_args!(
                "What would you like to do? (h)it, (s)tand, (d)ouble, s(p)lit\n"
            ));

            let Some(line) = self.read_line() else {
                return Move::Stand;
            };
            match line.as_str() {
                "h" => return Move::Hit,
                "s" => return Move::Stand,
                "d" => return Move::Double,
                "p" => return Move::Split,
                other => self.say(format_args!("Invalid option: {other}\n")),
            }
        }
    }

    fn results(&mut self, hands: &[Hand], dealer: &[Card]) {
        self.say(format_args!("\n==== FINAL HAND ====\nPlayer:\n"));
        for hand in hands {
            self.say(format_args!(
                "  {} (score {}, bet {})\n",
                CardList(hand.cards()),
                hand.score(),
                hand.bet()
            ));
        }
        self.say(format_args!("Dealer: {}\n\n", CardList(dealer)));
    }

    fn rejected(&mut self, error: ActionError) {
        self.say(format_args!("{error}\n"));
    }
}
