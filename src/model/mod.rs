mod category;
mod lookup;
mod raw;
mod table;

pub use category::*;
pub use lookup::*;
pub use raw::*;
pub use table::*;

pub(crate) use table::team_id;
