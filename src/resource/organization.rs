//! Organizations (workspaces).

// self
use crate::{
	_prelude::*,
	client::Client,
	http::Params,
	resource::{Board, Member, Resource},
};

/// A Trello organization.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
	/// Organization identifier.
	pub id: String,
	/// Short URL-safe name.
	pub name: String,
	/// Display name.
	#[serde(default)]
	pub display_name: String,
	/// Description.
	#[serde(default)]
	pub desc: String,
	/// Website, if set.
	#[serde(default)]
	pub website: Option<String>,
	/// Canonical web URL.
	#[serde(default)]
	pub url: Option<String>,
	#[serde(skip)]
	client: Option<Client>,
}
impl Organization {
	/// Boards owned by the organization.
	pub fn boards(&self) -> Result<Vec<Board>> {
		let path = format!("{}/boards", Self::KIND.member_path(&self.id));

		self.attached_client()?.find_many::<Board>(&path, &Params::new())
	}

	/// Members of the organization.
	pub fn members(&self) -> Result<Vec<Member>> {
		let path = format!("{}/members", Self::KIND.member_path(&self.id));

		self.attached_client()?.find_many::<Member>(&path, &Params::new())
	}
}
impl_resource!(Organization, [("display_name", "displayName"), ("description", "desc")]);
