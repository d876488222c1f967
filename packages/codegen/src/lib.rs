//! Prompt-to-UI Code Generation Library
//!
//! Turns an LLM's free-form text response into an ordered list of labeled
//! code files plus a static preview page. The library owns the parsing
//! mechanics; the model call itself sits behind the [`CodeModel`] trait
//! and is awaited entirely outside the extraction core, which only ever
//! sees a completed string.
//!
//! # Usage
//!
//! ```rust,ignore
//! use codegen::{Generator, SkillLibrary};
//! use codegen::model::AnthropicModel;
//!
//! let model = AnthropicModel::from_env()?;
//! let skills = SkillLibrary::new("skill-data");
//! let generator = Generator::new(model, skills);
//!
//! let outcome = generator.generate("a login page with validation", None).await;
//! for file in &outcome.files {
//!     println!("{}", file.path);
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (CodeModel)
//! - [`types`] - Generation data types
//! - [`extract`] - Response extraction strategies
//! - [`preview`] - Static preview document
//! - [`skills`] - System prompt assembly from skill files
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod extract;
pub mod generator;
pub mod preview;
pub mod prompts;
pub mod skills;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "anthropic")]
pub mod model;

// Re-export core types at crate root
pub use error::{CodegenError, Result};
pub use extract::{extract_files, infer_filename};
pub use generator::Generator;
pub use preview::{build_preview, select_main_file};
pub use skills::SkillLibrary;
pub use traits::{CodeModel, ModelReply};
pub use types::{GeneratedFile, GenerationOutcome, PageType, TokenUsage};

// Re-export testing utilities
pub use testing::MockModel;
