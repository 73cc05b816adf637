//! Language Parser Module
//!
//! Tree-sitter based validity checking for Luau.
//!
//! ```rust,ignore
//! use luaudoc::analyzer::parser::SyntaxValidator;
//!
//! let mut validator = SyntaxValidator::new()?;
//! let broken = validator.has_errors("Foo.luau", source);
//! ```

pub mod luau;

pub use luau::SyntaxValidator;
