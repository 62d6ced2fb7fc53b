//! Domain models shared across the workspace

pub mod category;
pub mod contribution;
pub mod expense;
pub mod member;
pub mod user;

pub use category::CategoryCount;
pub use contribution::{Contribution, ContributionCreate, ContributionWithMember};
pub use expense::{Expense, ExpenseCreate};
pub use member::{Member, MemberInput};
pub use user::{User, UserSummary};
