//! Cards and their relationships.

// self
use crate::{
	_prelude::*,
	client::Client,
	http::Params,
	resource::{Board, Checklist, List, Member, Resource},
};

/// A Trello card.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
	/// Card identifier.
	pub id: String,
	/// Card title.
	pub name: String,
	/// Markdown description.
	#[serde(default)]
	pub desc: String,
	/// Whether the card is archived.
	#[serde(default)]
	pub closed: bool,
	/// Board holding the card.
	pub id_board: String,
	/// List holding the card.
	pub id_list: String,
	/// Assigned members.
	#[serde(default)]
	pub id_members: Vec<String>,
	/// Applied labels.
	#[serde(default)]
	pub id_labels: Vec<String>,
	/// Due date.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub due: Option<OffsetDateTime>,
	/// Position within the list.
	#[serde(default)]
	pub pos: Option<f64>,
	/// Canonical web URL.
	#[serde(default)]
	pub url: Option<String>,
	/// Last time the card changed.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub date_last_activity: Option<OffsetDateTime>,
	#[serde(skip)]
	client: Option<Client>,
}
impl Card {
	/// Board holding the card.
	pub fn board(&self) -> Result<Board> {
		self.attached_client()?.find::<Board>(&self.id_board)
	}

	/// List holding the card.
	pub fn list(&self) -> Result<List> {
		self.attached_client()?.find::<List>(&self.id_list)
	}

	/// Members assigned to the card.
	pub fn members(&self) -> Result<Vec<Member>> {
		let path = format!("{}/members", Self::KIND.member_path(&self.id));

		self.attached_client()?.find_many::<Member>(&path, &Params::new())
	}

	/// Checklists attached to the card.
	pub fn checklists(&self) -> Result<Vec<Checklist>> {
		let path = format!("{}/checklists", Self::KIND.member_path(&self.id));

		self.attached_client()?.find_many::<Checklist>(&path, &Params::new())
	}

	/// Posts a comment on the card and returns the raw action payload.
	pub fn add_comment(&self, text: impl Into<String>) -> Result<String> {
		let path = format!("{}/actions/comments", Self::KIND.member_path(&self.id));

		self.attached_client()?.post(&path, Params::from([("text".to_owned(), text.into())]))
	}

	/// Moves the card to another list and refreshes the local copy from the response.
	pub fn move_to_list(&mut self, list_id: &str) -> Result<()> {
		let client = self.attached_client()?.clone();
		let raw = client.put(
			&Self::KIND.member_path(&self.id),
			Params::from([("idList".to_owned(), list_id.to_owned())]),
		)?;

		*self = Self::parse_one(&raw, |card| card.set_client(client.clone()))?;

		Ok(())
	}
}
impl_resource!(Card, [
	("description", "desc"),
	("list_id", "idList"),
	("member_ids", "idMembers"),
	("label_ids", "idLabels"),
	("position", "pos"),
	("source_card_id", "idCardSource"),
]);
