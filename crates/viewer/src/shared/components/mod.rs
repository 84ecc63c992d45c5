pub mod checkbox;
pub mod date_input;
pub mod input;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use date_input::DateInput;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
