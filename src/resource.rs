//! Trello resource records and the static registry that maps tags to them.
//!
//! Every record implements [`Resource`]: it knows its [`ResourceKind`], how to parse one or many
//! records out of a raw response body, and how to create itself through a [`Client`]. Parsing
//! entry points accept a hook that runs once per produced record; the client uses it to attach a
//! back-reference to itself.

// crates.io
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, client::Client, http::Params};

/// Attribute map accepted by [`Resource::save_new`], keyed by snake_case attribute names.
pub type Attributes = BTreeMap<String, String>;

// An id must stay one path segment: no separators, no query or fragment.
const ID_SEGMENT: &AsciiSet =
	&CONTROLS.add(b' ').add(b'"').add(b'#').add(b'%').add(b'/').add(b'<').add(b'>').add(b'?');

macro_rules! impl_resource {
	($ty:ident, [$(($attr:literal, $field:literal)),* $(,)?]) => {
		impl $crate::resource::Resource for $ty {
			const CREATE_FIELDS: &'static [(&'static str, &'static str)] = &[$(($attr, $field)),*];
			const KIND: $crate::resource::ResourceKind = $crate::resource::ResourceKind::$ty;

			fn id(&self) -> &str {
				&self.id
			}

			fn client(&self) -> Option<&$crate::client::Client> {
				self.client.as_ref()
			}

			fn set_client(&mut self, client: $crate::client::Client) {
				self.client = Some(client);
			}
		}
	};
}

macro_rules! def_resources {
	($($variant:ident => $tag:literal, $plural:literal;)*) => {
		/// Resource types known to the client.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum ResourceKind {
			$(
				#[doc = concat!("`", $tag, "` records under `/", $plural, "`.")]
				$variant,
			)*
		}
		impl ResourceKind {
			/// Every registered kind.
			pub const ALL: &'static [Self] = &[$(Self::$variant),*];

			/// Singular lowercase tag (`"board"`).
			pub const fn tag(self) -> &'static str {
				match self {
					$(Self::$variant => $tag,)*
				}
			}

			/// Plural path segment (`"boards"`).
			pub const fn plural(self) -> &'static str {
				match self {
					$(Self::$variant => $plural,)*
				}
			}

			pub(crate) fn find(self, client: &Client, id: &str) -> Result<AnyResource> {
				match self {
					$(Self::$variant => client.find::<$variant>(id).map(AnyResource::$variant),)*
				}
			}

			pub(crate) fn create(
				self,
				client: &Client,
				attributes: &Attributes,
			) -> Result<AnyResource> {
				match self {
					$(
						Self::$variant =>
							client.create::<$variant>(attributes).map(AnyResource::$variant),
					)*
				}
			}
		}

		/// A record of any registered kind, returned by tag-based lookups.
		#[derive(Clone, Debug)]
		pub enum AnyResource {
			$(
				#[doc = concat!("A `", $tag, "` record.")]
				$variant($variant),
			)*
		}
		impl AnyResource {
			/// Kind of the wrapped record.
			pub fn kind(&self) -> ResourceKind {
				match self {
					$(Self::$variant(_) => ResourceKind::$variant,)*
				}
			}

			/// Identifier of the wrapped record.
			pub fn id(&self) -> &str {
				match self {
					$(Self::$variant(inner) => inner.id(),)*
				}
			}

			/// Back-reference of the wrapped record.
			pub fn client(&self) -> Option<&Client> {
				match self {
					$(Self::$variant(inner) => inner.client(),)*
				}
			}
		}
		$(
			impl From<$variant> for AnyResource {
				fn from(value: $variant) -> Self {
					Self::$variant(value)
				}
			}
			impl TryFrom<AnyResource> for $variant {
				type Error = AnyResource;

				fn try_from(value: AnyResource) -> Result<Self, Self::Error> {
					match value {
						AnyResource::$variant(inner) => Ok(inner),
						other => Err(other),
					}
				}
			}
		)*
	};
}

pub mod board;
pub mod card;
pub mod checklist;
pub mod label;
pub mod list;
pub mod member;
pub mod organization;

pub use board::*;
pub use card::*;
pub use checklist::*;
pub use label::*;
pub use list::*;
pub use member::*;
pub use organization::*;

def_resources! {
	Board => "board", "boards";
	Card => "card", "cards";
	Checklist => "checklist", "checklists";
	Label => "label", "labels";
	List => "list", "lists";
	Member => "member", "members";
	Organization => "organization", "organizations";
}
impl ResourceKind {
	/// Resolves a singular tag or plural segment (`"board"`, `"boards"`).
	pub fn from_tag(tag: &str) -> Result<Self> {
		Self::ALL
			.iter()
			.copied()
			.find(|kind| kind.tag() == tag || kind.plural() == tag)
			.ok_or_else(|| Error::NameResolution { tag: tag.to_owned() })
	}

	/// Collection path (`"/boards"`).
	pub fn collection_path(self) -> String {
		format!("/{}", self.plural())
	}

	/// Member path (`"/boards/{id}"`), with `id` percent-encoded as a single segment.
	pub fn member_path(self, id: &str) -> String {
		format!("/{}/{}", self.plural(), utf8_percent_encode(id, ID_SEGMENT))
	}
}
impl Display for ResourceKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.tag())
	}
}
impl FromStr for ResourceKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_tag(s)
	}
}

/// Contract between the client and a Trello record type.
pub trait Resource
where
	Self: Sized + DeserializeOwned + Send + Sync,
{
	/// Registry entry for the type.
	const KIND: ResourceKind;
	/// Maps snake_case creation attributes to Trello field names; unlisted keys pass through.
	const CREATE_FIELDS: &'static [(&'static str, &'static str)] = &[];

	/// Trello identifier.
	fn id(&self) -> &str;

	/// Client that fetched or created the record.
	fn client(&self) -> Option<&Client>;

	/// Stores the client back-reference.
	fn set_client(&mut self, client: Client);

	/// Returns the back-reference or [`Error::Detached`].
	fn attached_client(&self) -> Result<&Client> {
		self.client().ok_or(Error::Detached { kind: Self::KIND })
	}

	/// Parses a single record and runs `hook` on it.
	fn parse_one<F>(raw: &str, hook: F) -> Result<Self>
	where
		F: FnOnce(&mut Self),
	{
		let mut record = parse::<Self>(Self::KIND, raw)?;

		hook(&mut record);

		Ok(record)
	}

	/// Parses a JSON array of records and runs `hook` on each.
	fn parse_many<F>(raw: &str, mut hook: F) -> Result<Vec<Self>>
	where
		F: FnMut(&mut Self),
	{
		let mut records = parse::<Vec<Self>>(Self::KIND, raw)?;

		records.iter_mut().for_each(&mut hook);

		Ok(records)
	}

	/// Translates creation attributes into the form body Trello expects.
	fn creation_params(attributes: &Attributes) -> Params {
		attributes
			.iter()
			.map(|(attr, value)| {
				let field = Self::CREATE_FIELDS
					.iter()
					.find(|(known, _)| known == attr)
					.map_or(attr.as_str(), |(_, field)| *field);

				(field.to_owned(), value.clone())
			})
			.collect()
	}

	/// Creates a record with `POST /{plural}` and runs `hook` on the parsed result.
	fn save_new<F>(client: &Client, attributes: &Attributes, hook: F) -> Result<Self>
	where
		F: FnOnce(&mut Self),
	{
		let raw = client.post(&Self::KIND.collection_path(), Self::creation_params(attributes))?;

		Self::parse_one(&raw, hook)
	}
}

fn parse<T>(kind: ResourceKind, raw: &str) -> Result<T>
where
	T: DeserializeOwned,
{
	let de = &mut serde_json::Deserializer::from_str(raw);

	serde_path_to_error::deserialize(de).map_err(|source| Error::Parse { kind, source })
}
