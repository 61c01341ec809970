pub mod jsonl;
pub mod parse;
