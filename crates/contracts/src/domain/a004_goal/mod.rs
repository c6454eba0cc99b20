pub mod aggregate;
pub mod seed;

pub use aggregate::{
    Goal, GoalCategory, GoalOwner, GoalPriority, GoalStatus, Milestone, KEY_PRIORITY,
};
