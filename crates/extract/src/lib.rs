//! Turns untrusted generative-model text into canonical landing-page sections.
//!
//! The pipeline is split so each stage can be exercised on its own:
//!
//! ```text
//! raw text --slice--> JSON substring --parser--> Value --normalize--> Vec<Section>
//! ```
//!
//! Nothing in this crate performs I/O.

pub mod normalize;
pub mod parser;
pub mod section;
pub mod slice;

pub use normalize::normalize_sections;
pub use parser::{parse_response, parse_slice, MalformedResponse, ParseError};
pub use section::Section;
pub use slice::{extract_json_slice, SliceError};
