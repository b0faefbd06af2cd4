mod page;
mod question;
mod record;

pub use page::Page;
pub use question::Question;
pub use record::{PageRecord, QuestionRecord};
