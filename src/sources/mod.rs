//! Where a sample comes from: an explicit list, a text file or an
//! interactive prompt, tried in that order.

mod explicit_list;
mod file_source;
mod interactive_prompt;
mod resolve;
mod source;

pub use explicit_list::ExplicitList;
pub use file_source::FileSource;
pub use interactive_prompt::InteractivePrompt;
pub use resolve::{ResolvedSample, resolve_sample};
pub use source::{SampleSource, SourceError, SourceReport};
