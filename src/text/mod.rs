// Text handling — tokenization and chapter segmentation.

pub mod chapters;
pub mod tokenizer;
