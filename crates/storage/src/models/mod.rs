mod athlete;
mod competition;
mod enrollment;
mod report;
mod team;
mod user;

pub use athlete::{Athlete, AthleteWithTeam};
pub use competition::{Competition, CompetitionWithCount};
pub use enrollment::{Enrollment, EnrollmentWithNames};
pub use report::{DashboardTotals, TeamAthleteCount};
pub use team::{Team, TeamWithCount};
pub use user::{ACCESS_LEVEL_ADMIN, ACCESS_LEVEL_USER, User};
