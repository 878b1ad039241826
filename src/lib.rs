//! microxml - Streaming XML parsing with bounded memory
//!
//! The core is a byte-at-a-time tokenizer: feed it one byte per call and it
//! returns one lexical event per call, using nothing but a caller-provided
//! scratch region for the stack of open names and a fixed 8-byte window for
//! data chunks. Nesting depth is bounded by the scratch size, not by the
//! host call stack, and the event sequence is a pure function of the input
//! bytes and the scratch size.
//!
//! ```
//! use microxml::{Token, Tokenizer};
//!
//! let mut scratch = [0u8; 256];
//! let mut tok = Tokenizer::new(&mut scratch);
//! for &b in b"<greeting kind=\"warm\">hi</greeting>".as_ref() {
//!     match tok.push_byte(b).unwrap() {
//!         Token::ElemStart => println!("<{}>", String::from_utf8_lossy(tok.element_name())),
//!         Token::Content => print!("{}", String::from_utf8_lossy(tok.data())),
//!         _ => {}
//!     }
//! }
//! tok.finish().unwrap();
//! ```
//!
//! On top of that sits a thin DOM: [`XmlDocument`] records the event stream
//! into an arena tree with tag/attribute/text queries and unescaped
//! serialisation.
//!
//! ```
//! use microxml::XmlDocument;
//!
//! let doc = XmlDocument::from_bytes(b"<stuff major=\"lol\">hey</stuff>");
//! let root = doc.root().unwrap();
//! assert_eq!(root.tag_name(), "stuff");
//! assert_eq!(root.get_attribute("major"), Some("lol"));
//! assert_eq!(root.text_content(), "hey");
//! ```

pub mod core;
pub mod dom;
pub mod reader;

pub use crate::core::tokenizer::{ParseError, Token, Tokenizer};
pub use dom::{DocumentError, XmlAttr, XmlChild, XmlDocument, XmlElement};
pub use reader::{FeedError, TokenFeed};
