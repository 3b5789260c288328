pub mod autofill;
pub mod report;
pub mod resolver;
pub mod sections;
pub mod stage;
pub mod tables;

pub use autofill::{suggest_defaults, FieldSuggestions};
pub use report::assemble_report;
pub use resolver::resolve;
pub use sections::extract_sections;
pub use stage::estimate_stage;
