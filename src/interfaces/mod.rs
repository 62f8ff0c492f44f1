pub mod de;
pub mod leaderboard;
pub mod positions;
pub mod snapshot;

pub use leaderboard::*;
pub use positions::*;
pub use snapshot::*;
