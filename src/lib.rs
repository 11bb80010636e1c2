//! pyrite: json validator that tells the real thing from fool's gold
//!
//! ```ignore
//! use pyrite_json::{validate_file, Strictness};
//!
//! let report = validate_file("config.json".as_ref(), Strictness::Lenient);
//! match report.verdict.is_valid() {
//!     true => println!("the real thing"),
//!     false => println!("fool's gold"),
//! }
//! ```

pub mod report;
pub mod scanner;
pub mod validator;

pub use scanner::{collect_json_files, validate_directory, DirectorySummary};
pub use validator::{
    classify_document, validate_file, FileReport, Strictness, ValidationError, Verdict,
};
