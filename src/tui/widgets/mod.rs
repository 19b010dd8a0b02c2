pub mod help;
pub mod root;
pub mod source_input;
pub mod swatches;
