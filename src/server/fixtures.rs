//! Canned job data served under `/test` so the frontend can be exercised without LinkedIn
//! credentials. Mounted only when fixture routes are enabled.

// crates.io
use axum::{
	Json, Router,
	extract::{Path, Query},
	routing::get,
};
// self
use crate::{
	_prelude::*,
	model::{Company, Job, JobDescription, JobSearchResponse, Paging},
	server::{ApiError, ApiResult, handlers::health},
};

/// Filters accepted by `/test/jobs`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FixtureQuery {
	/// Case-insensitive substring of the title.
	pub title: Option<String>,
	/// Case-insensitive substring of the title, description, or company name.
	pub keywords: Option<String>,
}

/// Routes serving the fixture data.
pub fn router<S>() -> Router<S>
where
	S: 'static + Clone + Send + Sync,
{
	Router::new()
		.route("/test/jobs", get(search))
		.route("/test/jobs/:id", get(detail))
		.route("/test/health", get(health::health))
}

/// The four fixture postings, listed relative to `now`.
pub fn fixture_jobs(now: OffsetDateTime) -> Vec<Job> {
	let listed = |days: i64| ((now - Duration::days(days)).unix_timestamp_nanos() / 1_000_000) as i64;
	let job = |id: u32, title: &str, text: &str, location: &str, company: &str, logo: &str| Job {
		entity_urn: format!("urn:li:job:{id}"),
		title: title.into(),
		description: Some(JobDescription { text: Some(text.into()) }),
		formatted_location: Some(location.into()),
		company: Some(Company {
			name: company.into(),
			logo_url: Some(logo.into()),
			company_urn: None,
		}),
		work_type: Some("FULL_TIME".into()),
		..Default::default()
	};

	vec![
		Job {
			listed_at: Some(listed(2)),
			experience_level: Some("Senior".into()),
			..job(
				1,
				"Desenvolvedor Node.js Senior",
				"Estamos procurando um desenvolvedor Node.js experiente para se juntar à nossa equipe.",
				"São Paulo, Brasil",
				"Tech Solutions",
				"https://example.com/logo.png",
			)
		},
		Job {
			listed_at: Some(listed(5)),
			experience_level: Some("Pleno".into()),
			..job(
				2,
				"Desenvolvedor React Frontend",
				"Procuramos um desenvolvedor React para trabalhar em projetos de UI/UX.",
				"Rio de Janeiro, Brasil",
				"Creative Web",
				"https://example.com/logo2.png",
			)
		},
		Job {
			listed_at: Some(listed(1)),
			experience_level: Some("Pleno".into()),
			..job(
				3,
				"Engenheiro DevOps",
				"Venha trabalhar com infraestrutura e automação em nossa empresa.",
				"Remoto",
				"Cloud Solutions",
				"https://example.com/logo3.png",
			)
		},
		Job {
			listed_at: Some(listed(3)),
			experience_level: Some("Pleno/Senior".into()),
			..job(
				4,
				"Desenvolvedor TypeScript Full Stack",
				"Desenvolvedor com conhecimento em Node.js, React e bancos de dados.",
				"Belo Horizonte, Brasil",
				"Startup Inovadora",
				"https://example.com/logo4.png",
			)
		},
	]
}

/// Applies the title and keyword filters to `jobs`.
pub fn filter_jobs(jobs: Vec<Job>, query: &FixtureQuery) -> JobSearchResponse {
	let needle = |value: &Option<String>| {
		value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_lowercase)
	};
	let title = needle(&query.title);
	let keywords = needle(&query.keywords);
	let elements = jobs
		.into_iter()
		.filter(|job| title.as_ref().is_none_or(|title| job.title.to_lowercase().contains(title)))
		.filter(|job| {
			keywords.as_ref().is_none_or(|keywords| {
				job.title.to_lowercase().contains(keywords)
					|| job
						.description
						.as_ref()
						.and_then(|description| description.text.as_ref())
						.is_some_and(|text| text.to_lowercase().contains(keywords))
					|| job
						.company
						.as_ref()
						.is_some_and(|company| company.name.to_lowercase().contains(keywords))
			})
		})
		.collect::<Vec<_>>();
	let count = elements.len() as u64;

	JobSearchResponse {
		paging: Paging { count, start: 0, total: count, links: None },
		elements,
		extra: Default::default(),
	}
}

async fn search(Query(query): Query<FixtureQuery>) -> Json<JobSearchResponse> {
	Json(filter_jobs(fixture_jobs(OffsetDateTime::now_utc()), &query))
}

async fn detail(Path(id): Path<String>) -> ApiResult<Json<Job>> {
	let urn = format!("urn:li:job:{id}");

	fixture_jobs(OffsetDateTime::now_utc())
		.into_iter()
		.find(|job| job.entity_urn == urn || job.entity_urn == id)
		.map(Json)
		.ok_or_else(|| ApiError::not_found("Job not found"))
}
