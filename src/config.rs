// ABOUTME: Constants for CLI messages and error-report prefixes

pub const VERSION: &str = "1.0.0";

pub const MISSING_FILE_MESSAGE: &str = "Please specify source file.";
pub const WRONG_EXTENSION_MESSAGE: &str = "Please provide a NaturalLanguage .nl file.";

pub const SYNTAX_ERROR_PREFIX: &str = "Syntax error on line";
pub const TYPE_ERROR_PREFIX: &str = "Type Error on line";
pub const RUNTIME_ERROR_PREFIX: &str = "Runtime error on line";
pub const UNKNOWN_ERROR_PREFIX: &str = "Unknown Error occured:";

pub const SOURCE_EXTENSION: &str = ".nl";
