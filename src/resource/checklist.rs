//! Card checklists.

// self
use crate::{
	_prelude::*,
	client::Client,
	resource::{Board, Card, Resource},
};

/// Completion state of a checklist item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemState {
	/// Item is ticked.
	Complete,
	/// Item is open.
	Incomplete,
}

/// A single checklist entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
	/// Item identifier.
	pub id: String,
	/// Item text.
	pub name: String,
	/// Completion state.
	pub state: CheckItemState,
	/// Position within the checklist.
	#[serde(default)]
	pub pos: Option<f64>,
}

/// A Trello checklist.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
	/// Checklist identifier.
	pub id: String,
	/// Checklist title.
	pub name: String,
	/// Board holding the card.
	pub id_board: String,
	/// Card the checklist belongs to.
	pub id_card: String,
	/// Items in display order.
	#[serde(default)]
	pub check_items: Vec<CheckItem>,
	#[serde(skip)]
	client: Option<Client>,
}
impl Checklist {
	/// Returns `true` when every item is complete.
	pub fn is_complete(&self) -> bool {
		self.check_items.iter().all(|item| item.state == CheckItemState::Complete)
	}

	/// Board holding the checklist's card.
	pub fn board(&self) -> Result<Board> {
		self.attached_client()?.find::<Board>(&self.id_board)
	}

	/// Card the checklist belongs to.
	pub fn card(&self) -> Result<Card> {
		self.attached_client()?.find::<Card>(&self.id_card)
	}
}
impl_resource!(Checklist, [
	("card_id", "idCard"),
	("position", "pos"),
	("source_checklist_id", "idChecklistSource"),
]);
