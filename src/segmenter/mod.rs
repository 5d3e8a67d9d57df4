mod scanner;

#[cfg(test)]
mod tests;

pub use scanner::{clean_text, segment};
