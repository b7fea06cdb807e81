//! Version record library for the engine version tools
//!
//! This crate holds the one piece of real logic the tools share: turning a
//! version record read from a source checkout into its canonical display
//! string, and comparing that string against a caller-supplied candidate.
//!
//! # Example
//!
//! ```
//! use record::{StaticSource, VersionRecord, VersionSource};
//!
//! let source = StaticSource(VersionRecord::new(4, 3).with_patch(0).with_status("stable"));
//! let record = source.load().unwrap();
//!
//! assert_eq!(record.format(), "4.3");
//! assert_eq!(record.status(), "stable");
//! assert!(record.matches("4.3"));
//! assert!(!record.matches("4.3.0"));
//! ```
//!
//! # Version modules
//!
//! Engine checkouts describe their version in a `version.py` file of plain
//! assignments. [`ModuleAssignments`] reads those without executing them:
//!
//! ```
//! use record::ModuleAssignments;
//!
//! let module = ModuleAssignments::parse("major = 4\nminor = 3\npatch = 1\nstatus = \"rc\"\n");
//! let record = module.to_record().unwrap();
//! assert_eq!(record.to_string(), "4.3.1");
//! ```

pub mod error;
pub mod module;
pub mod source;
pub mod version;

pub use error::{RecordError, Result};
pub use module::{ModuleAssignments, Value};
pub use source::{ModuleFileSource, StaticSource, TomlFileSource, VersionSource, source_for_path};
pub use version::{VersionRecord, format, matches, status_of};
