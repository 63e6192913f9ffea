pub mod completion;
pub mod reply_parser;
