mod definition;
mod patch;
mod types;

pub use definition::{GearDefinition, GearId};
pub use patch::{ParsePatchError, Patch};
pub use types::{GearColor, Job, JobCategory, Slot, Stat, StatMap};
