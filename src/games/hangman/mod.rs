pub mod core;

mod error;
pub use error::Error;

pub mod game;
pub use game::Status;

pub mod options;
pub use options::Difficulty;

mod round;
pub use round::RoundController;

mod session;
pub use session::Session;

mod terminal;
pub use terminal::{Console, Terminal};

mod words_list;
pub use words_list::{WordProvider, WordsList};
