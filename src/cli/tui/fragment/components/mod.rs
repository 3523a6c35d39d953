/// Reusable widgets driven by the wizard
pub mod select_list;
pub mod text_entry;

pub use select_list::SelectList;
pub use text_entry::TextEntry;
