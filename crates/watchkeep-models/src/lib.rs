pub mod completed;
pub mod movie;
pub mod watchlist;

pub use completed::CompletedEntry;
pub use movie::Movie;
pub use watchlist::WatchlistEntry;
