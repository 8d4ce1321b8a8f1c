pub mod team;
pub mod tournament;

pub use team::{NewTeam, Team, TeamPatch};
pub use tournament::{NewTournament, Tournament};
