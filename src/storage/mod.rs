mod listing;
mod note;
mod vault;

pub use listing::NoteSummary;
pub use note::NoteHandle;
pub use vault::Vault;
