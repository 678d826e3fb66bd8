mod body;
mod rank;

pub use self::body::Body;
pub use self::rank::{RankId, RankTable, RANK_COUNT};
