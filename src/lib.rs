//! # Sekkei - Workflow Scaffold Pipeline
//!
//! **Sekkei** classifies a free-text feature description into an
//! architecture pattern, deterministically generates a multi-file source
//! scaffold implementing that pattern, and validates the scaffold's
//! structural contract by parsing every generated module.
//!
//! ## Core Workflow
//!
//! The pipeline is three pure stages, each communicating through explicit
//! data objects:
//!
//! 1.  **Classify**: `classify` ranks the pattern catalog against a
//!     requirement text and suggests a node skeleton.
//! 2.  **Resolve + Generate**: `resolve` turns the chosen pattern into a
//!     declarative dependency bundle; `Generator::builder` turns a
//!     `WorkflowSpec` plus that bundle into an ordered set of in-memory
//!     file artifacts, every business-logic body reduced to a greppable
//!     `@@TODO@@` placeholder.
//! 3.  **Validate**: `validate` parses each artifact and reports
//!     structural findings per rule id; only then does the caller hand the
//!     artifacts to the filesystem sink.
//!
//! ## Quick Start
//!
//! ```rust
//! use sekkei::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let catalog = PatternCatalog::builtin();
//!
//!     // 1. Classify the requirement.
//!     let text = "build a pipeline that extracts, transforms, and loads daily sales records";
//!     let ranked = classify(text, &catalog);
//!     let top = &ranked[0];
//!     println!("recommended pattern: {} ({:.2})", top.pattern_id, top.confidence);
//!
//!     // 2. Refine the suggestion into a spec and generate.
//!     let spec = WorkflowSpec {
//!         project_name: "sales-etl".to_string(),
//!         pattern_id: top.pattern_id.clone(),
//!         nodes: top
//!             .suggested_nodes
//!             .iter()
//!             .map(|sketch| NodeSpec {
//!                 name: sketch.name.clone(),
//!                 kind: sketch.kind,
//!                 purpose: sketch.purpose.clone(),
//!             })
//!             .collect(),
//!         edges: vec![
//!             EdgeSpec {
//!                 source: "extract".to_string(),
//!                 target: "transform".to_string(),
//!                 action: "default".to_string(),
//!             },
//!             EdgeSpec {
//!                 source: "transform".to_string(),
//!                 target: "load".to_string(),
//!                 action: "default".to_string(),
//!             },
//!         ],
//!         shared_state: vec![],
//!     };
//!
//!     let deps = resolve(&spec.pattern_id, &spec.project_name)?;
//!     let artifacts = Generator::builder(spec, deps).build().generate()?;
//!
//!     // 3. Validate before anything touches the filesystem.
//!     let reports = validate(&artifacts, "mapreduce");
//!     assert!(all_pass(&reports));
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod generator;
pub mod prelude;
pub mod resolver;
pub mod validator;
pub mod workflow;
