mod book;
mod level;
mod side;

pub use book::{BookState, create_book};
pub use level::Level;
pub use side::{BookSide, Side};
