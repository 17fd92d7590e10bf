//! CLI Briscola example: you play seat 0 against random opponents.
//!
//! Run with `cargo run --example cli_briscola [players]`. Set
//! `RUST_LOG=briscola=debug` to see engine events.

use std::io::{self, Write};

use briscola::encoding::encode_card;
use briscola::{BriscolaEnv, Card, EnvOptions};
use rand::seq::IndexedRandom;
use tracing_subscriber::EnvFilter;

const HUMAN: usize = 0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let players = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2);

    let mut env = match BriscolaEnv::new(EnvOptions::default().with_players(players), None) {
        Ok(env) => env,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };
    let mut rng = rand::rng();

    println!("Briscola CLI example (type 'q' to quit)");
    println!("Briscola: {}", env.game().briscola());

    loop {
        let seat = env.agent_selection();
        let action = if seat == HUMAN {
            print_table(&env);
            let Some(card) = prompt_card(&env) else {
                println!("Goodbye.");
                return;
            };
            encode_card(card)
        } else {
            let Ok(view) = env.observe(seat) else {
                return;
            };
            let legal: Vec<u8> = (0..view.action_mask.len() as u8)
                .filter(|&action| view.action_mask[usize::from(action)] == 1)
                .collect();
            let Some(&action) = legal.choose(&mut rng) else {
                return;
            };
            action
        };

        let played = briscola::encoding::decode_card(action);
        let outcome = match env.step(action) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("Step error: {err}");
                continue;
            }
        };

        if let Ok(card) = played {
            println!("Player {} plays {card}", outcome.actor);
        }
        if let Some(winner) = outcome.trick_winner {
            println!(
                "Player {winner} takes the trick (+{})",
                outcome.rewards[winner]
            );
        }

        if outcome.done {
            println!("\nGame over.");
            for (place, standing) in env.game().leaders().iter().enumerate() {
                println!(
                    "{}. Player {} - {} points",
                    place + 1,
                    standing.seat,
                    standing.score
                );
            }
            return;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_card(env: &BriscolaEnv) -> Option<Card> {
    let hand = env.game().players()[HUMAN].hand();
    loop {
        let input = prompt_line(&format!("Select a card (1-{}): ", hand.len()));
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(choice) if (1..=hand.len()).contains(&choice) => return Some(hand[choice - 1]),
            _ => println!("Please enter a number between 1 and {}.", hand.len()),
        }
    }
}

fn print_table(env: &BriscolaEnv) {
    let game = env.game();
    println!("\nStock: {} cards remaining", game.stock_len());
    println!("Briscola: {}", game.briscola());

    if game.trick().is_empty() {
        println!("Trick: (you lead)");
    } else {
        let trick: Vec<String> = game.trick().iter().map(Card::to_string).collect();
        println!("Trick: {}", trick.join(", "));
    }

    let scores: Vec<String> = game
        .players()
        .iter()
        .enumerate()
        .map(|(seat, player)| format!("P{seat} {}", player.score()))
        .collect();
    println!("Scores: {}", scores.join(" | "));

    for (index, card) in game.players()[HUMAN].hand().iter().enumerate() {
        println!("  [{}] {}", index + 1, colorize(&card.to_string(), card));
    }
}

fn colorize(text: &str, card: &Card) -> String {
    let code = match card.score() {
        0 => "90",
        _ => "32",
    };
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
