// Landing page composition

mod index;

pub use index::IndexPage;
