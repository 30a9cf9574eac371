//! Optional observability helpers for API operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit one structured span named `idm_admin.op` per operation, with
//!   the `resource` (Api family) and `operation` (method name) fields. Without the feature
//!   every helper here compiles down to a no-op.

// self
use crate::_prelude::*;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOp<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOp<F> = F;

/// A span builder covering one API operation from validation through response decoding.
#[derive(Clone, Debug)]
pub struct OpSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OpSpan {
	/// Creates a new span tagged with the resource family and operation name.
	pub fn new(resource: &'static str, operation: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("idm_admin.op", resource, operation);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (resource, operation);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOp<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
