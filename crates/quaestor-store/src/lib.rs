pub mod pg;

pub use pg::{connect, PgEntityStore};
