pub mod source;
pub mod url;
