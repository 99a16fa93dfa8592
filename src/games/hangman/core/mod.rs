mod alphabet;
pub use alphabet::{Alphabet, Letter};

pub mod guess;
pub use guess::{Guess, InvalidGuess};

mod mask;
pub use mask::Mask;

mod phrase;
pub use phrase::Phrase;
