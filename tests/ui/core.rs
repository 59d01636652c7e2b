#[path = "core/support.rs"]
pub mod support;

#[path = "core/tree.rs"]
mod tree;

#[path = "core/lookup.rs"]
mod lookup;


#[path = "core/interaction.rs"]
mod interaction;
