pub mod explore;

pub use explore::{App, ExplorePage, Route};
