//! Lists (board columns).

// self
use crate::{
	_prelude::*,
	client::Client,
	http::Params,
	resource::{Board, Card, Resource},
};

/// A Trello list.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
	/// List identifier.
	pub id: String,
	/// Column title.
	pub name: String,
	/// Whether the list is archived.
	#[serde(default)]
	pub closed: bool,
	/// Board holding the list.
	pub id_board: String,
	/// Position on the board.
	#[serde(default)]
	pub pos: Option<f64>,
	#[serde(skip)]
	client: Option<Client>,
}
impl List {
	/// Board holding the list.
	pub fn board(&self) -> Result<Board> {
		self.attached_client()?.find::<Board>(&self.id_board)
	}

	/// Cards in the list.
	pub fn cards(&self) -> Result<Vec<Card>> {
		let path = format!("{}/cards", Self::KIND.member_path(&self.id));

		self.attached_client()?.find_many::<Card>(&path, &Params::new())
	}
}
impl_resource!(List, [
	("board_id", "idBoard"),
	("position", "pos"),
	("source_list_id", "idListSource"),
]);
