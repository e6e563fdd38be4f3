pub mod activate;
pub mod create;
pub mod delete;
pub mod reject;
pub mod remove;
pub mod unlink;
pub mod update;

pub use activate::*;
pub use create::*;
pub use delete::*;
pub use reject::*;
pub use remove::*;
pub use unlink::*;
pub use update::*;
