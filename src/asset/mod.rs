//! Asset discovery, naming and exclusion.

mod declaration;
mod exclude;
pub mod naming;
mod scan;

// Types
pub use declaration::{AssetDeclaration, compare_ignore_case, sort_declarations};
pub use exclude::ExcludeRules;

// Scanning (pure functions)
pub use scan::{Discovery, NameMap, discover};
