//! Members (user accounts).

// self
use crate::{
	_prelude::*,
	client::Client,
	http::Params,
	resource::{Board, Card, Organization, Resource},
};

/// A Trello member.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
	/// Member identifier.
	pub id: String,
	/// Login name.
	pub username: String,
	/// Display name.
	#[serde(default)]
	pub full_name: String,
	/// Avatar initials.
	#[serde(default)]
	pub initials: Option<String>,
	/// Profile biography.
	#[serde(default)]
	pub bio: String,
	/// Profile URL.
	#[serde(default)]
	pub url: Option<String>,
	#[serde(skip)]
	client: Option<Client>,
}
impl Member {
	/// Boards the member belongs to.
	pub fn boards(&self) -> Result<Vec<Board>> {
		self.collection("boards")
	}

	/// Cards assigned to the member.
	pub fn cards(&self) -> Result<Vec<Card>> {
		self.collection("cards")
	}

	/// Organizations the member belongs to.
	pub fn organizations(&self) -> Result<Vec<Organization>> {
		self.collection("organizations")
	}

	fn collection<T>(&self, segment: &str) -> Result<Vec<T>>
	where
		T: Resource,
	{
		let path = format!("{}/{segment}", Self::KIND.member_path(&self.id));

		self.attached_client()?.find_many::<T>(&path, &Params::new())
	}
}
impl_resource!(Member, [("full_name", "fullName")]);
