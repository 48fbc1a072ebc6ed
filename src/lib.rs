// Chapter Relation: classify the chapters of a book as war- or peace-related.
//
// This is the library root. Each module corresponds to one stage of the
// classification pipeline or to the I/O around it.

pub mod analysis;
pub mod config;
pub mod output;
pub mod sources;
pub mod text;
