//! Abstractive text summarization behind a pluggable model backend.
//!
//! [`Summarizer`] is the seam for model backends; the candle-based
//! [`T5Summarizer`] requires the `summarize-candle` feature. Model loading
//! is a one-time cost: wrap the backend in a [`LazyModel`] so it is
//! initialized on first use, reused afterwards, and torn down explicitly.
//!
//! # Examples
//!
//! ```
//! use lexis::error::Result;
//! use lexis::summarize::{LazyModel, Summarizer};
//!
//! struct LeadSentence;
//!
//! impl Summarizer for LeadSentence {
//!     fn summarize(&self, text: &str) -> Result<String> {
//!         Ok(text.split('.').next().unwrap_or("").trim().to_string())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "lead_sentence"
//!     }
//! }
//!
//! let model = LazyModel::new(|| Ok(LeadSentence));
//! assert!(!model.is_initialized());
//!
//! let summarizer = model.get().unwrap();
//! let summary = summarizer.summarize("First point. Second point.").unwrap();
//! assert_eq!(summary, "First point");
//! assert!(model.is_initialized());
//! ```

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;

#[cfg(feature = "summarize-candle")]
pub mod t5;

#[cfg(feature = "summarize-candle")]
pub use t5::T5Summarizer;

/// Trait for summarization model backends.
pub trait Summarizer: Send + Sync {
    /// Produce a summary of the given text.
    ///
    /// Backend failures (model unavailable, tokenization errors) propagate
    /// unhandled.
    fn summarize(&self, text: &str) -> Result<String>;

    /// Get the name of this summarizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Configuration for summarization backends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Model identifier (a Hugging Face Hub repo for the candle backend).
    pub model: String,
    /// Minimum summary length in output tokens.
    pub min_length: usize,
    /// Maximum summary length in output tokens.
    pub max_length: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: "t5-small".to_string(),
            min_length: 30,
            max_length: 100,
        }
    }
}

/// Lazily-initialized, explicitly-torn-down model slot.
///
/// The factory runs at most once per initialization: the first `get()`
/// builds the model, later calls reuse it, and `teardown()` drops it so the
/// next `get()` rebuilds. Lock-protected, safe to share across threads.
pub struct LazyModel<T> {
    factory: Box<dyn Fn() -> Result<T> + Send + Sync>,
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> LazyModel<T> {
    /// Create a lazy slot around a model factory.
    ///
    /// The factory is not invoked until the first [`LazyModel::get`].
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        LazyModel {
            factory: Box::new(factory),
            slot: RwLock::new(None),
        }
    }

    /// Get the model, initializing it on first use.
    pub fn get(&self) -> Result<Arc<T>> {
        if let Some(model) = &*self.slot.read() {
            return Ok(Arc::clone(model));
        }

        let mut slot = self.slot.write();
        // Another caller may have initialized while we waited for the lock
        if let Some(model) = &*slot {
            return Ok(Arc::clone(model));
        }

        tracing::info!("initializing model");
        let model = Arc::new((self.factory)()?);
        *slot = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Check whether the model has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Drop the model. Returns `true` if a model was held.
    ///
    /// Callers still holding an `Arc` from [`LazyModel::get`] keep their
    /// instance alive; the slot itself is emptied either way.
    pub fn teardown(&self) -> bool {
        let released = self.slot.write().take().is_some();
        if released {
            tracing::info!("model torn down");
        }
        released
    }
}
