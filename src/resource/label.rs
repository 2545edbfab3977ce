//! Board labels.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{Board, Resource},
};

/// A Trello label.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
	/// Label identifier.
	pub id: String,
	/// Board defining the label.
	pub id_board: String,
	/// Label text; may be empty.
	#[serde(default)]
	pub name: String,
	/// Color name, `None` for colorless labels.
	#[serde(default)]
	pub color: Option<String>,
	#[serde(skip)]
	client: Option<Client>,
}
impl Label {
	/// Board defining the label.
	pub fn board(&self) -> Result<Board> {
		self.attached_client()?.find::<Board>(&self.id_board)
	}
}
impl_resource!(Label, [("board_id", "idBoard")]);
