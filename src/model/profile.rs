//! Member profile assembled from the `/me` and `/emailAddress` lookups.

// self
use crate::_prelude::*;

/// Projection requested from `/me`.
pub const PROFILE_PROJECTION: &str =
	"(id,localizedFirstName,localizedLastName,profilePicture(displayImage~:playableStreams))";
/// Projection requested from `/emailAddress`.
pub const EMAIL_PROJECTION: &str = "(elements*(handle~))";

/// Merged member profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	/// LinkedIn member identifier.
	pub id: String,
	/// Localized first name.
	pub first_name: String,
	/// Localized last name.
	pub last_name: String,
	/// First display image identifier, when the member has a picture.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub picture_url: Option<String>,
	/// Primary email address; serialized as `null` when unknown.
	#[serde(default)]
	pub email: Option<String>,
}
impl Profile {
	/// Merges the two upstream payloads.
	pub fn from_parts(me: MeResponse, email: EmailAddressResponse) -> Self {
		let picture_url = me
			.profile_picture
			.and_then(|picture| picture.display_image)
			.and_then(|image| image.elements.into_iter().next())
			.and_then(|element| element.identifiers.into_iter().next())
			.map(|identifier| identifier.identifier);
		let email = email
			.elements
			.into_iter()
			.next()
			.and_then(|element| element.handle)
			.and_then(|handle| handle.email_address);

		Self {
			id: me.id,
			first_name: me.localized_first_name,
			last_name: me.localized_last_name,
			picture_url,
			email,
		}
	}
}

/// `/me` payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
	/// Member identifier.
	pub id: String,
	/// Localized first name.
	#[serde(default)]
	pub localized_first_name: String,
	/// Localized last name.
	#[serde(default)]
	pub localized_last_name: String,
	/// Picture container, absent for members without one.
	#[serde(default)]
	pub profile_picture: Option<ProfilePicture>,
}

/// `profilePicture` container.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfilePicture {
	/// Decorated display image.
	#[serde(default, rename = "displayImage~")]
	pub display_image: Option<DisplayImage>,
}

/// `displayImage~` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct DisplayImage {
	/// Rendition list.
	#[serde(default)]
	pub elements: Vec<DisplayImageElement>,
}

/// Single picture rendition.
#[derive(Clone, Debug, Deserialize)]
pub struct DisplayImageElement {
	/// Artifact identifiers.
	#[serde(default)]
	pub identifiers: Vec<ImageIdentifier>,
}

/// Artifact identifier holding the picture URL.
#[derive(Clone, Debug, Deserialize)]
pub struct ImageIdentifier {
	/// Picture URL.
	pub identifier: String,
}

/// `/emailAddress` payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmailAddressResponse {
	/// Handle list.
	#[serde(default)]
	pub elements: Vec<EmailElement>,
}

/// Single email handle entry.
#[derive(Clone, Debug, Deserialize)]
pub struct EmailElement {
	/// Decorated handle.
	#[serde(default, rename = "handle~")]
	pub handle: Option<EmailHandle>,
}

/// `handle~` payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailHandle {
	/// Email address.
	#[serde(default)]
	pub email_address: Option<String>,
}
