//! Resource helpers that turn raw responses into records bound to the calling client.
//!
//! Typed helpers (`find::<Board>`) resolve the record type at compile time. Tag helpers
//! (`find_by_tag("board", ..)`) look the tag up in the static [`ResourceKind`] registry and
//! return an [`AnyResource`]. Every produced record carries a clone of the client as its
//! back-reference.

// self
use crate::{
	_prelude::*,
	client::Client,
	http::Params,
	resource::{AnyResource, Attributes, Resource, ResourceKind},
};

impl Client {
	/// Fetches `GET /{plural}/{id}` and parses it as `T`.
	pub fn find<T>(&self, id: &str) -> Result<T>
	where
		T: Resource,
	{
		let raw = self.get(&T::KIND.member_path(id), &Params::new())?;

		T::parse_one(&raw, |record| record.set_client(self.clone()))
	}

	/// Fetches a record of the given kind.
	pub fn find_kind(&self, kind: ResourceKind, id: &str) -> Result<AnyResource> {
		kind.find(self, id)
	}

	/// Fetches a record by tag (`"board"`, `"member"`, ...).
	pub fn find_by_tag(&self, tag: &str, id: &str) -> Result<AnyResource> {
		self.find_kind(ResourceKind::from_tag(tag)?, id)
	}

	/// Fetches `GET {path}` with `params` and parses the body as a list of `T`.
	pub fn find_many<T>(&self, path: &str, params: &Params) -> Result<Vec<T>>
	where
		T: Resource,
	{
		let raw = self.get(path, params)?;

		T::parse_many(&raw, |record| record.set_client(self.clone()))
	}

	/// Creates a `T` from snake_case attributes.
	pub fn create<T>(&self, attributes: &Attributes) -> Result<T>
	where
		T: Resource,
	{
		T::save_new(self, attributes, |record| record.set_client(self.clone()))
	}

	/// Creates a record of the given kind.
	pub fn create_kind(&self, kind: ResourceKind, attributes: &Attributes) -> Result<AnyResource> {
		kind.create(self, attributes)
	}

	/// Creates a record by tag.
	pub fn create_by_tag(&self, tag: &str, attributes: &Attributes) -> Result<AnyResource> {
		self.create_kind(ResourceKind::from_tag(tag)?, attributes)
	}
}
