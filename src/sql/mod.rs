pub mod ast;
pub mod buffer;
pub mod keywords;
pub mod parser;
pub mod scanner;
pub mod token;
