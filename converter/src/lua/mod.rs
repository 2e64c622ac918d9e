//! Lua table literal rendering.
//!
//! A small value tree ([`LuaValue`], [`LuaTable`]) and a serializer that
//! turns it into `return { ... }` source text. Nothing in here knows about
//! monsters.
//!
//! ```rust,ignore
//! use mobconv::lua::{format, FormatOptions, LuaTable};
//!
//! let mut table = LuaTable::new();
//! table.insert("name", "Bogy");
//! table.insert("level", 45);
//! let text = format(&table.into(), &FormatOptions::default());
//! assert_eq!(text, "return {\n  name = 'Bogy',\n  level = 45,\n}");
//! ```

pub mod format;
pub mod value;

pub use format::{format, format_key, format_string, FormatOptions, Indent, QuoteStyle};
pub use value::{LuaTable, LuaValue};
