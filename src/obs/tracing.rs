// crates.io
use tracing::{Instrument, Span, instrument::Instrumented};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
// self
use crate::{_prelude::*, config::LogFormat, obs::UpstreamCall};

const DEFAULT_FILTER: &str = "info,linkedin_job_proxy=debug,tower_http=info";

/// A span builder used around LinkedIn calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	span: Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call + stage.
	pub fn new(call: UpstreamCall, stage: &'static str) -> Self {
		Self { span: tracing::info_span!("linkedin_job_proxy.call", call = call.as_str(), stage) }
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> Instrumented<Fut>
	where
		Fut: Future,
	{
		fut.instrument(self.span.clone())
	}
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn install_subscriber(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let registry = tracing_subscriber::registry().with(filter);

	match format {
		LogFormat::Json => registry
			.with(tracing_subscriber::fmt::layer().json().with_current_span(true).with_target(true))
			.try_init(),
		LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init(),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::{CallSpan, UpstreamCall};

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(UpstreamCall::JobSearch, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
