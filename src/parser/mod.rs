pub mod error;
pub mod explodes;
pub mod node_manip;
pub mod subparser;

pub use error::{ParseError, ParseResult};
pub use explodes::explode;
pub use node_manip::{dedupe_names, NameRegistry};
pub use subparser::{explode_links, split_links, ExplodeReport};
