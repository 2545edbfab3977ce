//! Prints the lists and cards of a board.
//!
//! ```sh
//! TRELLO_KEY=... TRELLO_SECRET=... TRELLO_TOKEN=... TRELLO_TOKEN_SECRET=... \
//! 	cargo run --example board_summary -- <board-id>
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use trello_client::{client::Client, resource::Board};

fn main() -> Result<()> {
	color_eyre::install()?;

	let board_id = env::args().nth(1).ok_or_else(|| eyre!("Usage: board_summary <board-id>"))?;
	let mut attributes = Vec::new();

	for (attribute, var) in [
		("consumer_key", "TRELLO_KEY"),
		("consumer_secret", "TRELLO_SECRET"),
		("oauth_token", "TRELLO_TOKEN"),
		("oauth_token_secret", "TRELLO_TOKEN_SECRET"),
	] {
		if let Ok(value) = env::var(var) {
			attributes.push((attribute, value));
		}
	}

	let client = Client::with_attributes(attributes)?;
	let board = client.find::<Board>(&board_id)?;

	println!("{} ({})", board.name, board.id);

	let cards = board.cards()?;

	for list in board.lists()? {
		println!("  {}", list.name);

		for card in cards.iter().filter(|card| card.id_list == list.id) {
			match card.due {
				Some(due) => println!("    - {} (due {due})", card.name),
				None => println!("    - {}", card.name),
			}
		}
	}

	Ok(())
}
