//! Job search parameters and the posting shape used by the fixture routes.

// crates.io
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Radius applied when the caller leaves `distance` unset.
pub const DEFAULT_DISTANCE: u32 = 25;
/// Offset applied when the caller leaves `start` unset.
pub const DEFAULT_START: u32 = 0;
/// Page size applied when the caller leaves `count` unset.
pub const DEFAULT_COUNT: u32 = 10;

/// Query parameter rejected before any upstream call.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ParamError {
	/// Neither `keywords` nor `location` were supplied.
	#[error("At least one search parameter (keywords or location) is required.")]
	MissingSearchTerms,
	/// A numeric parameter could not be parsed.
	#[error("Query parameter `{name}` must be a non-negative integer.")]
	NotANumber {
		/// Parameter name.
		name: &'static str,
	},
	/// An enumerated parameter holds an unknown value.
	#[error("Query parameter `{name}` has unsupported value `{value}`.")]
	Unsupported {
		/// Parameter name.
		name: &'static str,
		/// Offending value.
		value: String,
	},
}

/// Result ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
	/// Best match first.
	#[default]
	Relevance,
	/// Posting date.
	Date,
}
impl SortBy {
	/// Wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			SortBy::Relevance => "relevance",
			SortBy::Date => "date",
		}
	}
}
impl FromStr for SortBy {
	type Err = ParamError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"relevance" => Ok(Self::Relevance),
			"date" => Ok(Self::Date),
			other => Err(ParamError::Unsupported { name: "sortBy", value: other.into() }),
		}
	}
}

/// Direction applied to [`SortBy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
	/// Smallest first.
	Ascending,
	/// Largest first.
	#[default]
	Descending,
}
impl SortDirection {
	/// Wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			SortDirection::Ascending => "ASCENDING",
			SortDirection::Descending => "DESCENDING",
		}
	}
}
impl FromStr for SortDirection {
	type Err = ParamError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ASCENDING" => Ok(Self::Ascending),
			"DESCENDING" => Ok(Self::Descending),
			other => Err(ParamError::Unsupported { name: "sortDirection", value: other.into() }),
		}
	}
}

/// Raw `/api/jobs` query string; every value arrives as text.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchQuery {
	/// Free-text keywords.
	pub keywords: Option<String>,
	/// Free-text location.
	pub location: Option<String>,
	/// LinkedIn location identifier.
	pub location_id: Option<String>,
	/// Search radius.
	pub distance: Option<String>,
	/// Comma-separated job functions.
	pub job_function: Option<String>,
	/// Comma-separated industries.
	pub industries: Option<String>,
	/// Comma-separated experience levels.
	pub experience_level: Option<String>,
	/// Comma-separated job types.
	pub job_type: Option<String>,
	/// Page offset.
	pub start: Option<String>,
	/// Page size.
	pub count: Option<String>,
	/// Ordering.
	pub sort_by: Option<String>,
	/// Ordering direction.
	pub sort_direction: Option<String>,
	/// Posting-age filter.
	pub time_filter: Option<String>,
	/// Title filter.
	pub title: Option<String>,
}
impl JobSearchQuery {
	/// `true` when `keywords` or `location` is non-empty.
	pub fn has_search_terms(&self) -> bool {
		non_empty(&self.keywords).is_some() || non_empty(&self.location).is_some()
	}

	/// Validates the query and converts it into typed parameters.
	pub fn into_params(self) -> Result<JobSearchParams, ParamError> {
		if !self.has_search_terms() {
			return Err(ParamError::MissingSearchTerms);
		}

		Ok(JobSearchParams {
			distance: parse_number("distance", &self.distance)?,
			start: parse_number("start", &self.start)?,
			count: parse_number("count", &self.count)?,
			sort_by: non_empty(&self.sort_by).map(str::parse::<SortBy>).transpose()?,
			sort_direction: non_empty(&self.sort_direction)
				.map(str::parse::<SortDirection>)
				.transpose()?,
			job_function: split_list(&self.job_function),
			industries: split_list(&self.industries),
			experience_level: split_list(&self.experience_level),
			job_type: split_list(&self.job_type),
			keywords: owned(&self.keywords),
			location: owned(&self.location),
			location_id: owned(&self.location_id),
			time_filter: owned(&self.time_filter),
			title: owned(&self.title),
		})
	}
}

/// Typed job search parameters. Unset fields fall back to the defaults in [`Self::to_query`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobSearchParams {
	/// Free-text keywords.
	pub keywords: Option<String>,
	/// Free-text location.
	pub location: Option<String>,
	/// LinkedIn location identifier.
	pub location_id: Option<String>,
	/// Search radius; defaults to [`DEFAULT_DISTANCE`].
	pub distance: Option<u32>,
	/// Job function filters.
	pub job_function: Option<Vec<String>>,
	/// Industry filters.
	pub industries: Option<Vec<String>>,
	/// Experience level filters.
	pub experience_level: Option<Vec<String>>,
	/// Job type filters.
	pub job_type: Option<Vec<String>>,
	/// Page offset; defaults to [`DEFAULT_START`].
	pub start: Option<u32>,
	/// Page size; defaults to [`DEFAULT_COUNT`].
	pub count: Option<u32>,
	/// Ordering; defaults to relevance.
	pub sort_by: Option<SortBy>,
	/// Ordering direction; defaults to descending.
	pub sort_direction: Option<SortDirection>,
	/// Posting-age filter.
	pub time_filter: Option<String>,
	/// Title filter.
	pub title: Option<String>,
}
impl JobSearchParams {
	/// Upstream query pairs with defaults applied; unset optional fields are omitted.
	pub fn to_query(&self) -> Vec<(&'static str, String)> {
		let mut query = Vec::with_capacity(14);

		push_text(&mut query, "keywords", &self.keywords);
		push_text(&mut query, "location", &self.location);
		push_text(&mut query, "locationId", &self.location_id);
		query.push(("distance", self.distance.unwrap_or(DEFAULT_DISTANCE).to_string()));

		for (name, list) in [
			("jobFunction", &self.job_function),
			("industries", &self.industries),
			("experienceLevel", &self.experience_level),
			("jobType", &self.job_type),
		] {
			if let Some(list) = list.as_ref().filter(|list| !list.is_empty()) {
				query.push((name, list.join(",")));
			}
		}

		query.push(("start", self.start.unwrap_or(DEFAULT_START).to_string()));
		query.push(("count", self.count.unwrap_or(DEFAULT_COUNT).to_string()));
		query.push(("sortBy", self.sort_by.unwrap_or_default().as_str().to_owned()));
		query.push(("sortDirection", self.sort_direction.unwrap_or_default().as_str().to_owned()));
		push_text(&mut query, "timeFilter", &self.time_filter);
		push_text(&mut query, "title", &self.title);

		query
	}
}

/// Job search page in LinkedIn's shape, as served by the fixture routes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResponse {
	/// Paging metadata.
	pub paging: Paging,
	/// Result page.
	#[serde(default)]
	pub elements: Vec<Job>,
	/// Fields not modeled above, preserved verbatim.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Paging metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
	/// Number of elements in this page.
	pub count: u64,
	/// Offset of this page.
	pub start: u64,
	/// Total matches.
	#[serde(default)]
	pub total: u64,
	/// Neighbor page links.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub links: Option<PagingLinks>,
}

/// Neighbor page links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingLinks {
	/// Next page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next: Option<String>,
	/// Previous page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub previous: Option<String>,
}

/// Job posting in LinkedIn's shape, as served by the fixture routes. The live proxy relays
/// LinkedIn's JSON untouched instead of decoding into this type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
	/// `urn:li:job:<id>`.
	pub entity_urn: String,
	/// Posting title.
	pub title: String,
	/// Posting body.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<JobDescription>,
	/// Human-readable location.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub formatted_location: Option<String>,
	/// Hiring company.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub company: Option<Company>,
	/// Listing instant in epoch milliseconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub listed_at: Option<i64>,
	/// Application channel.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub apply_method: Option<ApplyMethod>,
	/// Compensation range.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub compensation_details: Option<CompensationDetails>,
	/// Job functions.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub job_functions: Option<Vec<String>>,
	/// Industries.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub industries: Option<Vec<String>>,
	/// Seniority.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub experience_level: Option<String>,
	/// Employment type.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub work_type: Option<String>,
	/// Fields not modeled above, preserved verbatim.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Posting body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
	/// Plain-text body.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
}

/// Hiring company.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
	/// Company name.
	pub name: String,
	/// Logo URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub logo_url: Option<String>,
	/// `urn:li:company:<id>`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub company_urn: Option<String>,
}

/// Application channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyMethod {
	/// Off-site application URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub company_apply_url: Option<String>,
}

/// Compensation range container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompensationDetails {
	/// Salary range.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub salary: Option<Salary>,
}

/// Salary range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Salary {
	/// Lower bound.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	/// Upper bound.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
	/// ISO currency code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
}

fn push_text(query: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<String>) {
	if let Some(value) = value {
		query.push((name, value.clone()));
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn owned(value: &Option<String>) -> Option<String> {
	non_empty(value).map(str::to_owned)
}

fn parse_number(name: &'static str, value: &Option<String>) -> Result<Option<u32>, ParamError> {
	non_empty(value).map(|raw| raw.parse().map_err(|_| ParamError::NotANumber { name })).transpose()
}

fn split_list(value: &Option<String>) -> Option<Vec<String>> {
	non_empty(value).map(|raw| {
		raw.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_owned).collect()
	})
}
