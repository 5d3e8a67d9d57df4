mod tfidf;


pub use tfidf::{vectorize, SentenceVectors};
