// self
use crate::obs::{CallOutcome, UpstreamCall};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(call: UpstreamCall, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"linkedin_job_proxy_call_total",
			"call" => call.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (call, outcome);
	}
}
