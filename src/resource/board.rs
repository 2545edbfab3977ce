//! Boards and their collections.

// self
use crate::{
	_prelude::*,
	client::Client,
	http::Params,
	resource::{Card, Label, List, Member, Organization, Resource},
};

/// A Trello board.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
	/// Board identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Markdown description.
	#[serde(default)]
	pub desc: String,
	/// Whether the board is archived.
	#[serde(default)]
	pub closed: bool,
	/// Owning organization, if any.
	#[serde(default)]
	pub id_organization: Option<String>,
	/// Canonical web URL.
	#[serde(default)]
	pub url: Option<String>,
	/// Last time anything happened on the board.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub date_last_activity: Option<OffsetDateTime>,
	#[serde(skip)]
	client: Option<Client>,
}
impl Board {
	/// Lists on the board.
	pub fn lists(&self) -> Result<Vec<List>> {
		self.collection("lists")
	}

	/// Cards on the board.
	pub fn cards(&self) -> Result<Vec<Card>> {
		self.collection("cards")
	}

	/// Members of the board.
	pub fn members(&self) -> Result<Vec<Member>> {
		self.collection("members")
	}

	/// Labels defined on the board.
	pub fn labels(&self) -> Result<Vec<Label>> {
		self.collection("labels")
	}

	/// Organization owning the board, when it has one.
	pub fn organization(&self) -> Result<Option<Organization>> {
		let client = self.attached_client()?;

		match self.id_organization.as_deref() {
			Some(id) if !id.is_empty() => client.find::<Organization>(id).map(Some),
			_ => Ok(None),
		}
	}

	fn collection<T>(&self, segment: &str) -> Result<Vec<T>>
	where
		T: Resource,
	{
		let path = format!("{}/{segment}", Self::KIND.member_path(&self.id));

		self.attached_client()?.find_many::<T>(&path, &Params::new())
	}
}
impl_resource!(Board, [
	("description", "desc"),
	("organization_id", "idOrganization"),
	("source_board_id", "idBoardSource"),
	("permission_level", "prefs_permissionLevel"),
	("default_lists", "defaultLists"),
]);
