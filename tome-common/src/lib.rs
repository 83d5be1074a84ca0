pub mod reading_list;

pub use reading_list::{ReadingList, ReadingListItem};
