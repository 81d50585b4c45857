pub mod console;
pub mod style;

pub use console::Console;
pub use style::Style;
