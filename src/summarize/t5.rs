//! Candle-based T5 summarizer.
//!
//! Runs a T5-family model locally with the Candle framework. Weights,
//! config, and tokenizer are downloaded from the Hugging Face Hub on first
//! load (cached afterwards). Decoding is greedy, so output is deterministic;
//! the end-of-sequence token is suppressed until `min_length` tokens have
//! been produced and generation hard-stops at `max_length`.
//!
//! Requires the `summarize-candle` feature.
//!
//! # Examples
//!
//! ```no_run
//! use lexis::summarize::{Summarizer, SummarizerConfig, T5Summarizer};
//!
//! # fn example() -> lexis::error::Result<()> {
//! let summarizer = T5Summarizer::from_pretrained(SummarizerConfig::default())?;
//! let summary = summarizer.summarize("A long article body ...")?;
//! # Ok(())
//! # }
//! ```

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5;
use hf_hub::api::sync::Api;
use parking_lot::Mutex;
use tokenizers::Tokenizer;

use crate::error::{LexisError, Result};
use crate::summarize::{Summarizer, SummarizerConfig};

/// T5 summarization backend.
///
/// The decoder's key/value cache makes generation stateful, so the model is
/// held behind a mutex and `summarize` serializes concurrent callers.
pub struct T5Summarizer {
    model: Mutex<t5::T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    device: Device,
    config: SummarizerConfig,
    eos_token_id: u32,
    decoder_start_token_id: u32,
}

impl T5Summarizer {
    /// Load a T5 model from the Hugging Face Hub.
    ///
    /// `config.model` names the repo (e.g. `"t5-small"`). The model is
    /// downloaded if not already cached.
    pub fn from_pretrained(config: SummarizerConfig) -> Result<Self> {
        let device = Device::Cpu;

        let api =
            Api::new().map_err(|e| LexisError::model(format!("hub api init failed: {e}")))?;
        let repo = api.model(config.model.clone());

        let config_path = repo
            .get("config.json")
            .map_err(|e| LexisError::model(format!("failed to fetch model config: {e}")))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| LexisError::model(format!("failed to fetch tokenizer: {e}")))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| LexisError::model(format!("failed to fetch model weights: {e}")))?;

        let model_config: t5::Config =
            serde_json::from_str(&std::fs::read_to_string(config_path)?)?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| LexisError::model(format!("failed to load tokenizer: {e}")))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device) }
                .map_err(|e| LexisError::model(format!("failed to map model weights: {e}")))?;
        let model = t5::T5ForConditionalGeneration::load(vb, &model_config)
            .map_err(|e| LexisError::model(format!("failed to load model: {e}")))?;

        tracing::info!(model = %config.model, "loaded summarization model");

        let eos_token_id = model_config.eos_token_id as u32;
        let decoder_start_token_id = model_config
            .decoder_start_token_id
            .unwrap_or(model_config.pad_token_id) as u32;

        Ok(T5Summarizer {
            model: Mutex::new(model),
            tokenizer,
            device,
            config,
            eos_token_id,
            decoder_start_token_id,
        })
    }

    fn generate(&self, text: &str) -> Result<String> {
        let prompt = format!("summarize: {text}");
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| LexisError::model(format!("tokenization failed: {e}")))?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| LexisError::model(format!("encoder input failed: {e}")))?;

        let mut model = self.model.lock();
        model.clear_kv_cache();
        let encoder_output = model
            .encode(&input_ids)
            .map_err(|e| LexisError::model(format!("encoding failed: {e}")))?;

        let mut output_ids: Vec<u32> = vec![self.decoder_start_token_id];
        for step in 0..self.config.max_length {
            let decoder_input = if step == 0 {
                Tensor::new(output_ids.as_slice(), &self.device)
            } else {
                let last = *output_ids.last().unwrap_or(&self.decoder_start_token_id);
                Tensor::new(&[last], &self.device)
            }
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| LexisError::model(format!("decoder input failed: {e}")))?;

            let logits = model
                .decode(&decoder_input, &encoder_output)
                .and_then(|t| t.squeeze(0))
                .map_err(|e| LexisError::model(format!("decoding failed: {e}")))?;

            let last_row = logits
                .dim(0)
                .and_then(|rows| logits.get(rows - 1))
                .and_then(|row| row.to_vec1::<f32>())
                .map_err(|e| LexisError::model(format!("logit extraction failed: {e}")))?;

            let next = self.pick_next(&last_row, output_ids.len() - 1);
            if next == self.eos_token_id {
                break;
            }
            output_ids.push(next);
        }

        let summary = self
            .tokenizer
            .decode(&output_ids[1..], true)
            .map_err(|e| LexisError::model(format!("detokenization failed: {e}")))?;
        Ok(summary.trim().to_string())
    }

    /// Greedy token choice, suppressing EOS below the minimum length.
    fn pick_next(&self, scores: &[f32], produced: usize) -> u32 {
        let mut next = self.eos_token_id;
        let mut best = f32::NEG_INFINITY;
        for (id, &score) in scores.iter().enumerate() {
            if produced < self.config.min_length && id as u32 == self.eos_token_id {
                continue;
            }
            if score > best {
                best = score;
                next = id as u32;
            }
        }
        next
    }

    /// Get the configuration this summarizer was built with.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }
}

impl Summarizer for T5Summarizer {
    fn summarize(&self, text: &str) -> Result<String> {
        self.generate(text)
    }

    fn name(&self) -> &'static str {
        "t5"
    }
}
