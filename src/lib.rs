pub mod cli;
pub mod load;
pub mod logging;
pub mod pipeline;
pub mod rank;
pub mod records;
pub mod render;

pub use load::{load_from_reader, load_records, LoadReport, SkippedRow};
pub use pipeline::{run, RunConfig, RunSummary};
pub use rank::top_records;
pub use records::Record;
pub use render::{render, OutputFormat};
